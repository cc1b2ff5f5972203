//! Scoring module - frame reduction, risk and skip evaluation
//!
//! Re-exports only. All logic in submodules.

mod reduce;
mod samples;
mod skip;
mod stats;

pub use reduce::{best_angle, reduce, ExerciseResult};
pub use samples::{collect_samples, collect_samples_with, top_samples, AngleSample, TOP_SAMPLE_COUNT};
pub use skip::{evaluate_skip, SKIP_FRACTION};
pub use stats::{mean, most_common};
