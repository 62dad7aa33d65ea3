//! Recommended campaign tree: campaign root fanned out into its ad sets.

use leptos::prelude::*;

use crate::content::campaign::{AD_SET_PLANS, AdSetPlan, CAMPAIGN_NAME, CAMPAIGN_SUBTITLE};

/// Campaign structure diagram for the consolidated setup.
#[component]
pub fn StructurePanel() -> impl IntoView {
    view! {
        <div class="structure">
            <div class="structure__campaign">
                <div class="structure__campaign-icon">"🎯"</div>
                <div>
                    <div class="structure__campaign-name">{CAMPAIGN_NAME}</div>
                    <div class="structure__campaign-subtitle">{CAMPAIGN_SUBTITLE}</div>
                </div>
            </div>

            <div class="structure__connector"></div>

            <div class="structure__ad-sets">
                {AD_SET_PLANS.iter().map(render_ad_set).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn render_ad_set(plan: &'static AdSetPlan) -> impl IntoView {
    view! {
        <div class=format!("structure__ad-set structure__ad-set--{}", plan.accent)>
            <div class="structure__ad-set-head">
                <span class="structure__ad-set-emoji">{plan.emoji}</span>
                <div>
                    <div class="structure__ad-set-name">{format!("Ad Set: {}", plan.name)}</div>
                    <div class="structure__ad-set-meta">
                        {format!("{} ads • Audience large", plan.products.len())}
                    </div>
                </div>
            </div>
            <div class="structure__ads">
                {plan
                    .products
                    .iter()
                    .enumerate()
                    .map(|(idx, product)| {
                        view! {
                            <div class="structure__ad">
                                <span class="structure__ad-dot"></span>
                                <span class="structure__ad-label">
                                    {format!("Ad {}: {}", idx + 1, product)}
                                </span>
                                <span class="structure__ad-promo">"🎁 PROMO"</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
