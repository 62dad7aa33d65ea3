//! Closing verdict banner.

use leptos::prelude::*;

const VERDICT_PILLS: &[&str] = &["Test rapide", "CBO optimisé", "Débutant-friendly"];

/// Final recommendation restated as a closing banner with takeaway pills.
#[component]
pub fn VerdictPanel() -> impl IntoView {
    view! {
        <section class="verdict">
            <div class="verdict__head">
                <div class="verdict__award-ring">
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="10" cy="7" r="4.5" />
                        <path d="M7 10.5 L5.5 17 L10 14.5 L14.5 17 L13 10.5" />
                    </svg>
                </div>
                <div>
                    <h2 class="verdict__title">"Verdict Final"</h2>
                    <p class="verdict__subtitle">"Notre recommandation pour votre campagne Noël"</p>
                </div>
            </div>

            <div class="verdict__statement">
                <p>
                    <strong>"✅ Gardez votre structure à 2 ad sets"</strong>
                    " (Luminaires & Tableaux). C'est la meilleure approche pour un débutant \
                    car elle permet à l'algorithme Meta de concentrer ses données et \
                    d'optimiser efficacement. Une fois que vous aurez identifié vos produits \
                    gagnants et accumulé des données, vous pourrez ensuite tester des \
                    segmentations plus fines dans une phase 2."
                </p>
            </div>

            <div class="verdict__pills">
                {VERDICT_PILLS
                    .iter()
                    .map(|pill| {
                        view! {
                            <span class="verdict__pill">
                                <svg class="verdict__pill-icon" viewBox="0 0 20 20" aria-hidden="true">
                                    <circle cx="10" cy="10" r="8" />
                                    <path d="M6 10.5 L9 13.5 L14.5 7" />
                                </svg>
                                {*pill}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
