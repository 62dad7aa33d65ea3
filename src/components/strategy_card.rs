//! Selectable strategy comparison card.
//!
//! DESIGN
//! ======
//! Unselected cards preview the strongest arguments (first three advantages,
//! first two disadvantages) with a "+ N autres..." hint. Clicking a card
//! selects it, revealing its full lists plus a structure footprint panel;
//! clicking again clears the selection. The hints are driven by whether ANY
//! card is selected, so while one card is open its rival shows trimmed lists
//! with no hint rather than advertising content a second click away.

#[cfg(test)]
#[path = "strategy_card_test.rs"]
mod strategy_card_test;

use leptos::prelude::*;

use crate::content::strategies::{ComplexityTier, StrategyOption};
use crate::state::view::ViewState;

/// Advantages shown while a card is unselected.
const ADVANTAGE_PREVIEW: usize = 3;
/// Disadvantages shown while a card is unselected.
const DISADVANTAGE_PREVIEW: usize = 2;

/// One card of the comparison grid.
#[component]
pub fn StrategyCard(option: &'static StrategyOption) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    let selected = move || view_state.get().is_selected(option.id);
    let any_selected = move || view_state.get().any_strategy_selected();

    let advantages = move || {
        visible_items(option.advantages, selected(), ADVANTAGE_PREVIEW)
            .iter()
            .map(|text| {
                view! {
                    <li class="strategy-card__item">
                        <span class="strategy-card__mark strategy-card__mark--plus">"+"</span>
                        <span>{*text}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };
    let advantage_hint = move || {
        overflow_hint(option.advantages.len(), ADVANTAGE_PREVIEW, any_selected())
            .map(|n| view! { <li class="strategy-card__more">{format!("+ {n} autres...")}</li> })
    };

    let disadvantages = move || {
        visible_items(option.disadvantages, selected(), DISADVANTAGE_PREVIEW)
            .iter()
            .map(|text| {
                view! {
                    <li class="strategy-card__item">
                        <span class="strategy-card__mark strategy-card__mark--minus">"−"</span>
                        <span>{*text}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };
    let disadvantage_hint = move || {
        overflow_hint(option.disadvantages.len(), DISADVANTAGE_PREVIEW, any_selected())
            .map(|n| view! { <li class="strategy-card__more">{format!("+ {n} autres...")}</li> })
    };

    view! {
        <div
            class="strategy-card"
            class:strategy-card--winner=move || option.recommended
            class:strategy-card--selected=selected
            attr:data-strategy=option.id.as_str()
            on:click=move |_| view_state.update(|v| v.toggle_strategy(option.id))
        >
            <Show when=move || option.recommended>
                <span class="strategy-card__badge winner-badge">
                    <svg class="strategy-card__badge-icon" viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="10" cy="7" r="4.5" />
                        <path d="M7 10.5 L5.5 17 L10 14.5 L14.5 17 L13 10.5" />
                    </svg>
                    "GAGNANT"
                </span>
            </Show>

            <h3 class="strategy-card__name">{option.name}</h3>
            <p class="strategy-card__description">{option.description}</p>

            <div class="strategy-card__score">
                <div class="strategy-card__score-row">
                    <span class="strategy-card__score-label">"Score Global"</span>
                    <span class=format!(
                        "strategy-card__score-value strategy-card__score-value--{}",
                        score_tone(option.score),
                    )>{format!("{}/100", option.score)}</span>
                </div>
                <div class="strategy-card__score-track">
                    <div
                        class=format!(
                            "strategy-card__score-bar strategy-card__score-bar--{}",
                            score_tone(option.score),
                        )
                        style=format!("width: {}%;", option.score)
                    ></div>
                </div>
            </div>

            <div class="strategy-card__stats">
                <div class="strategy-card__stat">
                    <div class=format!(
                        "strategy-card__stat-value strategy-card__stat-value--{}",
                        complexity_tone(option.complexity),
                    )>{option.complexity.label()}</div>
                    <div class="strategy-card__stat-label">"Complexité"</div>
                </div>
                <div class="strategy-card__stat">
                    <div class="strategy-card__stat-value strategy-card__stat-value--blue">
                        {option.learning_duration}
                    </div>
                    <div class="strategy-card__stat-label">"Apprentissage"</div>
                </div>
                <div class="strategy-card__stat">
                    <div class=format!(
                        "strategy-card__stat-value strategy-card__stat-value--{}",
                        efficiency_tone(option.budget_efficiency),
                    )>{option.budget_efficiency}</div>
                    <div class="strategy-card__stat-label">"Efficacité"</div>
                </div>
            </div>

            <div class="strategy-card__list">
                <h4 class="strategy-card__list-title strategy-card__list-title--pros">"Avantages"</h4>
                <ul>
                    {advantages}
                    {advantage_hint}
                </ul>
            </div>

            <div class="strategy-card__list">
                <h4 class="strategy-card__list-title strategy-card__list-title--cons">"Inconvénients"</h4>
                <ul>
                    {disadvantages}
                    {disadvantage_hint}
                </ul>
            </div>

            <Show when=selected>
                <div class="strategy-card__structure">
                    <h4 class="strategy-card__structure-title">"Structure"</h4>
                    <div class="strategy-card__structure-grid">
                        <div>
                            <span class="strategy-card__structure-label">"Ad Sets: "</span>
                            <span class="strategy-card__structure-value">{option.structure.ad_sets}</span>
                        </div>
                        <div>
                            <span class="strategy-card__structure-label">"Ads/Set: "</span>
                            <span class="strategy-card__structure-value">{option.structure.ads_per_set}</span>
                        </div>
                        <div>
                            <span class="strategy-card__structure-label">"Total Ads: "</span>
                            <span class="strategy-card__structure-value">{option.structure.total_ads}</span>
                        </div>
                        <div>
                            <span class="strategy-card__structure-label">"Optimisation: "</span>
                            <span class="strategy-card__structure-note">{option.structure.optimization}</span>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Slice of `items` visible for the current reveal state.
fn visible_items(
    items: &'static [&'static str],
    revealed: bool,
    limit: usize,
) -> &'static [&'static str] {
    if revealed {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}

/// Count for the "+ N autres..." hint, `None` when nothing is hidden or a
/// selection already reveals full lists.
fn overflow_hint(total: usize, limit: usize, suppress: bool) -> Option<usize> {
    if suppress || total <= limit {
        None
    } else {
        Some(total - limit)
    }
}

fn score_tone(score: u8) -> &'static str {
    if score >= 80 { "strong" } else { "caution" }
}

fn complexity_tone(tier: ComplexityTier) -> &'static str {
    match tier {
        ComplexityTier::Easy => "positive",
        ComplexityTier::Medium => "caution",
        ComplexityTier::Advanced => "negative",
    }
}

fn efficiency_tone(efficiency: &str) -> &'static str {
    if efficiency == "Excellente" {
        "positive"
    } else {
        "caution"
    }
}
