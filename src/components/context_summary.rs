//! Advertiser context card: catalogue figures and category chips.

use leptos::prelude::*;

use crate::content::context::{CONTEXT_STATS, PRODUCT_CATEGORIES};

/// Always-visible summary of the catalogue the advice targets.
#[component]
pub fn ContextSummary() -> impl IntoView {
    view! {
        <section class="context-summary">
            <h2 class="context-summary__title">
                <svg class="context-summary__icon" viewBox="0 0 20 20" aria-hidden="true">
                    <circle cx="10" cy="10" r="7.5" />
                    <circle cx="10" cy="10" r="4" />
                    <circle cx="10" cy="10" r="0.8" />
                </svg>
                <span>"Votre Contexte"</span>
            </h2>

            <div class="context-summary__stats">
                {CONTEXT_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="context-summary__stat">
                                <div class=format!(
                                    "context-summary__stat-value context-summary__stat-value--{}",
                                    stat.accent,
                                )>{stat.value}</div>
                                <div class="context-summary__stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="context-summary__chips">
                {PRODUCT_CATEGORIES
                    .iter()
                    .map(|category| view! { <span class="context-summary__chip">{*category}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
