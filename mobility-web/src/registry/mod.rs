//! Registry module - exercise definitions and risk tiers
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod table;

pub use exercise::{ExerciseDefinition, RiskLevel, RiskRanges, MEDIUM_UPPER_SLACK};
pub use table::ExerciseRegistry;
