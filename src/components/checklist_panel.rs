//! Numbered launch checklist.

use leptos::prelude::*;

use crate::content::checklist::LAUNCH_STEPS;

/// Ordered launch steps with their category tags.
#[component]
pub fn ChecklistPanel() -> impl IntoView {
    view! {
        <ol class="checklist">
            {LAUNCH_STEPS
                .iter()
                .enumerate()
                .map(|(idx, step)| {
                    view! {
                        <li class="checklist__step">
                            <span class="checklist__number">{idx + 1}</span>
                            <div class="checklist__body">
                                <div class="checklist__task">{step.task}</div>
                                <div class="checklist__category">{step.category}</div>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
