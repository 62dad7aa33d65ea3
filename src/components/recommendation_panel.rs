//! Headline recommendation: the verdict up front, before the comparison.

use leptos::prelude::*;

struct QuickWin {
    headline: &'static str,
    detail: &'static str,
}

const QUICK_WINS: &[QuickWin] = &[
    QuickWin {
        headline: "✓ Test rapide",
        detail: "Sortie phase apprentissage accélérée",
    },
    QuickWin {
        headline: "✓ CBO efficace",
        detail: "Budget concentré = meilleure optimisation",
    },
    QuickWin {
        headline: "✓ Débutant-friendly",
        detail: "Moins de complexité, plus de résultats",
    },
];

/// Winner callout with quick wins, plus the case against segmenting.
#[component]
pub fn RecommendationPanel() -> impl IntoView {
    view! {
        <div class="recommendation">
            <div class="recommendation__winner">
                <div class="recommendation__check-ring">
                    <svg viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="10" cy="10" r="8" />
                        <path d="M6 10.5 L9 13.5 L14.5 7" />
                    </svg>
                </div>
                <div>
                    <div class="recommendation__title-row">
                        <h3 class="recommendation__title">"Stratégie 2 Ad Sets"</h3>
                        <span class="winner-badge">"RECOMMANDÉE"</span>
                    </div>
                    <p class="recommendation__pitch">
                        <strong>"OUI, votre approche actuelle est optimale"</strong>
                        " pour un débutant souhaitant tester rapidement ses produits avec CBO."
                    </p>
                    <div class="recommendation__wins">
                        {QUICK_WINS
                            .iter()
                            .map(|win| {
                                view! {
                                    <div class="recommendation__win">
                                        <div class="recommendation__win-headline">{win.headline}</div>
                                        <div class="recommendation__win-detail">{win.detail}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="recommendation__counterpoint">
                <svg class="recommendation__bulb" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 2 C6.7 2 4.5 4.4 4.5 7.3 C4.5 9.1 5.4 10.3 6.3 11.4 C7 12.3 7.5 13 7.5 14 H12.5 C12.5 13 13 12.3 13.7 11.4 C14.6 10.3 15.5 9.1 15.5 7.3 C15.5 4.4 13.3 2 10 2 Z" />
                    <path d="M8 16 H12" />
                    <path d="M8.8 18 H11.2" />
                </svg>
                <div>
                    <h4 class="recommendation__counterpoint-title">"Pourquoi pas 5 ad sets ?"</h4>
                    <p class="recommendation__counterpoint-body">
                        "Avec 5 ad sets segmentés, votre budget serait dilué. Meta recommande \
                        ~50 conversions/ad set/semaine pour sortir de la phase d'apprentissage. \
                        Avec un petit budget, 5 ad sets = apprentissage éternel et résultats \
                        inconsistants."
                    </p>
                </div>
            </div>
        </div>
    }
}
