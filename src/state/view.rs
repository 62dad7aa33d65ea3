//! View state for section expansion and strategy selection.
//!
//! DESIGN
//! ======
//! One plain struct holds everything the page can change: which collapsible
//! section is open and which strategy card is selected. The app wraps a
//! single `ViewState` in an `RwSignal` provided via context; components call
//! the toggle methods inside `RwSignal::update`, so each click is one state
//! transition and every derived view reads through `RwSignal::get`.
//!
//! Both fields are `Option` over a closed enum. `None` is a real state
//! (everything collapsed, nothing selected), not a sentinel, and the
//! accordion invariant (at most one section open, at most one card selected)
//! falls out of the representation instead of being enforced by checks.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::content::strategies::StrategyId;

/// Collapsible page sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Recommendation,
    Comparison,
    Structure,
    Budget,
    Checklist,
}

/// Everything on the page a click can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    /// Currently open section, if any.
    pub expanded_section: Option<SectionId>,
    /// Currently selected strategy card, if any.
    pub selected_strategy: Option<StrategyId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            // The page opens on the headline recommendation.
            expanded_section: Some(SectionId::Recommendation),
            selected_strategy: None,
        }
    }
}

impl ViewState {
    /// Expand `id`, or collapse it when it is already open.
    ///
    /// Expanding one section collapses whichever other section was open.
    pub fn toggle_section(&mut self, id: SectionId) {
        self.expanded_section = if self.expanded_section == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Select `id`, or clear the selection when it is already selected.
    ///
    /// Selecting one card deselects the other; there is never more than one
    /// selected strategy.
    pub fn toggle_strategy(&mut self, id: StrategyId) {
        self.selected_strategy = if self.selected_strategy == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    #[must_use]
    pub fn is_expanded(self, id: SectionId) -> bool {
        self.expanded_section == Some(id)
    }

    #[must_use]
    pub fn is_selected(self, id: StrategyId) -> bool {
        self.selected_strategy == Some(id)
    }

    /// True while any strategy card is selected.
    ///
    /// Cards use this to drop their "+ N autres..." overflow hints once a
    /// selection reveals the full lists.
    #[must_use]
    pub fn any_strategy_selected(self) -> bool {
        self.selected_strategy.is_some()
    }
}
