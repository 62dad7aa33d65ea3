//! Leptos components for the advisor page.
//!
//! ARCHITECTURE
//! ============
//! One component per page region. Sections that expand and collapse render
//! inside the shared `CollapsibleSection` shell; the always-visible regions
//! (header, context, tips, verdict) are standalone. Components read authored
//! tables from `content` and the shared `RwSignal<ViewState>` from context;
//! none of them own state of their own.

pub mod advisor_header;
pub mod budget_table;
pub mod checklist_panel;
pub mod comparison_panel;
pub mod context_summary;
pub mod pro_tips;
pub mod recommendation_panel;
pub mod section;
pub mod snowfall;
pub mod strategy_card;
pub mod structure_panel;
pub mod verdict_panel;
