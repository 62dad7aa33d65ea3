//! # adwise
//!
//! Leptos + WASM single-page advisor for structuring a Meta Ads Christmas
//! campaign: two compared ad set strategies, a recommended campaign tree,
//! budget guidance and a launch checklist, under a decorative snowfall.
//!
//! Everything is client-side. Authored copy compiles in as static tables
//! (`content`), the only mutable state is the section/selection view state
//! (`state`), and components render one page region each (`components`,
//! composed by `pages`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
