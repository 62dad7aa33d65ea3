//! Client-side state.
//!
//! A single `RwSignal<ViewState>` is created in `app` and provided via
//! context; components reach it with `expect_context`. The struct itself is
//! plain data so its transitions are testable off the wasm target.

pub mod view;
