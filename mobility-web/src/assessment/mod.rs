//! Assessment module - body-part summaries over a user's best angles
//!
//! Re-exports only. All logic in submodules.

mod aggregator;
mod aliases;
mod template;

pub use aggregator::{
    assess, AssessmentSummary, ChartSummary, Color, Status, TableRow,
    FAIR_RATIO, GOOD_RATIO, UNMATCHED_NORMAL_RANGE,
};
pub use aliases::{apply_aliases, canonical_name, EXERCISE_ALIASES};
pub use template::{AssessmentTemplate, BodyPart, ChartSpec, NormalRange, TemplateCatalog};
