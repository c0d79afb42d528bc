//! Checks over resources parsed from `manifest.json`.

pub mod exposures;
pub mod macros;
pub mod models;
pub mod project;
pub mod seeds;
pub mod semantic_models;
pub mod snapshots;
pub mod sources;
pub mod tests;
pub mod unit_tests;
