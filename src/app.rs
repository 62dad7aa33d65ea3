//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::advisor::AdvisorPage;
use crate::state::view::ViewState;

/// Root application component.
///
/// Provides the shared view state and mounts the single advisor route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view_state = RwSignal::new(ViewState::default());
    provide_context(view_state);

    view! {
        <Title text="Meta Ads Strategy Advisor | Campagne Noël"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("") view=AdvisorPage/>
            </Routes>
        </Router>
    }
}
