//! Festive page header.

use leptos::prelude::*;

/// Hero banner with the advisor title and campaign tagline.
#[component]
pub fn AdvisorHeader() -> impl IntoView {
    view! {
        <header class="advisor-header">
            <div class="advisor-header__title-row">
                <svg class="advisor-header__icon advisor-header__icon--float" viewBox="0 0 20 20" aria-hidden="true">
                    <rect x="3" y="8" width="14" height="10" rx="1" />
                    <path d="M2 5.5 H18 V8 H2 Z" />
                    <path d="M10 5.5 V18" />
                    <path d="M10 5.5 C7 5.5 5.5 4 5.5 2.8 C5.5 1.8 6.5 1.5 7.3 2 C8.4 2.7 9.6 4.2 10 5.5" />
                    <path d="M10 5.5 C13 5.5 14.5 4 14.5 2.8 C14.5 1.8 13.5 1.5 12.7 2 C11.6 2.7 10.4 4.2 10 5.5" />
                </svg>
                <h1 class="advisor-header__title">"Meta Ads Strategy Advisor"</h1>
                <svg class="advisor-header__icon advisor-header__icon--pulse" viewBox="0 0 20 20" aria-hidden="true">
                    <path d="M10 2 L11.5 8.5 L18 10 L11.5 11.5 L10 18 L8.5 11.5 L2 10 L8.5 8.5 Z" />
                    <path d="M16 2 L16.6 4.4 L19 5 L16.6 5.6 L16 8 L15.4 5.6 L13 5 L15.4 4.4 Z" />
                </svg>
            </div>
            <p class="advisor-header__tagline">
                "🎄 Optimisez votre campagne de Noël • Promo Fin d'Année 🎄"
            </p>
        </header>
    }
}
