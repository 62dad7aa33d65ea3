//! Budget guide table with the learning-phase golden rule.

use leptos::prelude::*;

use crate::content::budget::{BUDGET_BANDS, ConfidenceTone, GOLDEN_RULE};

/// Budget band table plus the sizing rule note.
#[component]
pub fn BudgetTable() -> impl IntoView {
    view! {
        <div class="budget">
            <table class="budget__table">
                <thead>
                    <tr>
                        <th>"Budget/Jour"</th>
                        <th>"Ad Sets Recommandés"</th>
                        <th>"Niveau de Confiance"</th>
                    </tr>
                </thead>
                <tbody>
                    {BUDGET_BANDS
                        .iter()
                        .map(|band| {
                            view! {
                                <tr>
                                    <td class="budget__amount">{band.daily_budget}</td>
                                    <td>
                                        <span class="budget__sets-pill">{band.recommended_sets}</span>
                                    </td>
                                    <td class=format!(
                                        "budget__confidence budget__confidence--{}",
                                        tone_token(band.tone),
                                    )>{band.confidence}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>

            <div class="budget__rule">
                <svg class="budget__rule-icon" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 3 L18 17 H2 Z" />
                    <path d="M10 8 V12.5" />
                    <path d="M10 14.8 V15" />
                </svg>
                <p class="budget__rule-text">
                    <strong>"Règle d'or : "</strong>
                    {GOLDEN_RULE}
                </p>
            </div>
        </div>
    }
}

fn tone_token(tone: ConfidenceTone) -> &'static str {
    match tone {
        ConfidenceTone::Positive => "positive",
        ConfidenceTone::Caution => "caution",
        ConfidenceTone::Info => "info",
    }
}
