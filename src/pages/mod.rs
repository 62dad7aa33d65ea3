//! Route-level pages.

pub mod advisor;
