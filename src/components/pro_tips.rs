//! Seasonal pro tips grid.

use leptos::prelude::*;

use crate::content::tips::{PRO_TIPS, TipIcon};

/// Always-visible grid of the four campaign tips.
#[component]
pub fn ProTips() -> impl IntoView {
    view! {
        <section class="pro-tips">
            <h2 class="pro-tips__title">
                <svg class="pro-tips__title-icon" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 2 L11.5 8.5 L18 10 L11.5 11.5 L10 18 L8.5 11.5 L2 10 L8.5 8.5 Z" />
                </svg>
                <span>"💡 Conseils Pro pour Noël"</span>
            </h2>
            <div class="pro-tips__grid">
                {PRO_TIPS
                    .iter()
                    .map(|tip| {
                        view! {
                            <div class=format!("pro-tips__card pro-tips__card--{}", tip.accent)>
                                <h3 class="pro-tips__card-title">
                                    {tip_icon(tip.icon)}
                                    <span>{tip.title}</span>
                                </h3>
                                <p class="pro-tips__card-body">{tip.body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn tip_icon(icon: TipIcon) -> impl IntoView {
    match icon {
        TipIcon::Clock => view! {
            <svg class="pro-tips__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7.5" />
                <path d="M10 5.5 V10 L13 12" />
            </svg>
        }
        .into_any(),
        TipIcon::Trend => view! {
            <svg class="pro-tips__icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M2 15 L8 9 L11.5 12.5 L18 6" />
                <path d="M13.5 6 H18 V10.5" />
            </svg>
        }
        .into_any(),
        TipIcon::Audience => view! {
            <svg class="pro-tips__icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7" r="2.5" />
                <circle cx="13.5" cy="8" r="2" />
                <path d="M2.5 16 C3.5 12.8 5.5 11.5 7.5 11.5 C9.5 11.5 11.6 12.8 12.5 16" />
                <path d="M11 16 C11.7 13.8 13 12.8 14.5 12.8 C16 12.8 17.2 13.8 18 16" />
            </svg>
        }
        .into_any(),
        TipIcon::Gift => view! {
            <svg class="pro-tips__icon" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="8" width="14" height="10" rx="1" />
                <path d="M2 5.5 H18 V8 H2 Z" />
                <path d="M10 5.5 V18" />
            </svg>
        }
        .into_any(),
    }
}
