//! Authored advisor content.
//!
//! ARCHITECTURE
//! ============
//! Everything the page says is editorial and fixed at build time, so it lives
//! here as `const` tables over `&'static str`. Components render these tables;
//! nothing in this module is reactive or mutable. Keeping copy out of the
//! component tree means wording edits never touch rendering code.

pub mod budget;
pub mod campaign;
pub mod checklist;
pub mod context;
pub mod strategies;
pub mod tips;
