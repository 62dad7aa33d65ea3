//! Side-by-side comparison grid of both strategies.

use leptos::prelude::*;

use crate::components::strategy_card::StrategyCard;
use crate::content::strategies::STRATEGY_OPTIONS;

/// Two-column grid of selectable strategy cards.
#[component]
pub fn ComparisonPanel() -> impl IntoView {
    view! {
        <div class="comparison-grid">
            {STRATEGY_OPTIONS
                .iter()
                .map(|option| view! { <StrategyCard option=option/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
