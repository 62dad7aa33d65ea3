//! Shared collapsible section shell.
//!
//! ARCHITECTURE
//! ============
//! Every collapsible section on the page goes through this one component so
//! the accordion behaviour lives in a single place: the header button toggles
//! the section's id in the shared view state, and since that state holds at
//! most one open section, expanding here collapses whichever other section
//! was open.

use leptos::prelude::*;

use crate::state::view::{SectionId, ViewState};

/// Card-style section whose body mounts only while expanded.
#[component]
pub fn CollapsibleSection(
    /// Identity of this section in the shared expansion state.
    id: SectionId,
    /// Header label, rendered next to the section icon.
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let view_state = expect_context::<RwSignal<ViewState>>();

    let expanded = move || view_state.get().is_expanded(id);

    view! {
        <section class="section-card">
            <button
                class="section-card__header"
                on:click=move |_| view_state.update(|v| v.toggle_section(id))
            >
                <h2 class="section-card__title">
                    {section_icon(id)}
                    <span>{title}</span>
                </h2>
                <span class="section-card__chevron">
                    {move || if expanded() { "▲" } else { "▼" }}
                </span>
            </button>

            <Show when=expanded>
                <div class="section-card__body">{children()}</div>
            </Show>
        </section>
    }
}

fn section_icon(id: SectionId) -> impl IntoView {
    match id {
        SectionId::Recommendation => view! {
            <svg class="section-card__icon section-card__icon--gold" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="7" r="4.5" />
                <path d="M7 10.5 L5.5 17 L10 14.5 L14.5 17 L13 10.5" />
            </svg>
        }
        .into_any(),
        SectionId::Comparison => view! {
            <svg class="section-card__icon section-card__icon--blue" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 16 V9" />
                <path d="M10 16 V4" />
                <path d="M16 16 V12" />
                <path d="M2 18 H18" />
            </svg>
        }
        .into_any(),
        SectionId::Structure => view! {
            <svg class="section-card__icon section-card__icon--violet" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2 L18 6 L10 10 L2 6 Z" />
                <path d="M2 10 L10 14 L18 10" />
                <path d="M2 14 L10 18 L18 14" />
            </svg>
        }
        .into_any(),
        SectionId::Budget => view! {
            <svg class="section-card__icon section-card__icon--green" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2 V18" />
                <path d="M14 5 C14 3.5 12 3 10 3 C8 3 6 3.8 6 5.5 C6 9.5 14 8.5 14 12.5 C14 14.5 12 15 10 15 C8 15 6 14.5 6 13" />
            </svg>
        }
        .into_any(),
        SectionId::Checklist => view! {
            <svg class="section-card__icon section-card__icon--gold" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M11 2 L4 11 L9 11 L8 18 L16 8 L11 8 Z" />
            </svg>
        }
        .into_any(),
    }
}
