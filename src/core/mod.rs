//! Core processing building blocks: crop-region math and encode/save helpers.
//! These are internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
