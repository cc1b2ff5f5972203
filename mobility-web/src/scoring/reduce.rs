//! Frame reduction: one submission's frames -> one `ExerciseResult`

use log::debug;
use serde::{Deserialize, Serialize};

use crate::pose::{Frame, FrameShape};
use crate::registry::{ExerciseDefinition, RiskLevel, RiskRanges};
use super::samples::{collect_samples, top_samples, AngleSample, TOP_SAMPLE_COUNT};
use super::stats::{mean, most_common};

/// Outcome of one exercise attempt, also the unit the store keeps
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResult {
    pub exercise: String,
    /// Mean of `top_angles`
    pub average_angle: f64,
    /// Whole-degree representative angle
    pub best_angle: f64,
    pub risk_label: RiskLevel,
    pub top_angles: Vec<AngleSample>,
    pub skip: bool,
}

impl ExerciseResult {
    /// Result for a submission in which no frame produced a usable angle
    pub fn degenerate(exercise: impl Into<String>) -> Self {
        Self {
            exercise: exercise.into(),
            average_angle: 0.0,
            best_angle: 0.0,
            risk_label: RiskLevel::High,
            top_angles: Vec::new(),
            skip: true,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.top_angles.is_empty()
    }

    pub fn message(&self) -> String {
        if self.is_degenerate() {
            "No valid angles found".to_string()
        } else {
            format!("{} valid angles", self.top_angles.len())
        }
    }
}

/// Most frequent whole-degree angle inside the most populated risk tier.
///
/// Ties between tiers go to the tier met first in `samples`; ties between
/// angles go to the angle met first. Callers pass samples largest first, so
/// both ties favour the larger reading.
pub fn best_angle(samples: &[AngleSample], ranges: &RiskRanges) -> f64 {
    let Some(tier) = most_common(samples.iter().map(|s| ranges.determine_risk(s.angle))) else {
        return 0.0;
    };

    let degrees = samples
        .iter()
        .filter(|s| ranges.determine_risk(s.angle) == tier)
        .map(|s| s.angle.trunc() as i64);

    most_common(degrees).map(|d| d as f64).unwrap_or(0.0)
}

/// Reduce one submission. `skip` is only set here for a degenerate result;
/// history-based skipping needs the store and happens in the service.
pub fn reduce(frames: &[Frame], shape: FrameShape, exercise: &ExerciseDefinition) -> ExerciseResult {
    let samples = collect_samples(frames, shape, exercise);
    let accepted = samples.len();

    let top = top_samples(samples, TOP_SAMPLE_COUNT);
    let Some(average_angle) = mean(top.iter().map(|s| s.angle)) else {
        debug!("{}: 0/{} frames accepted, degenerate result", exercise.id, frames.len());
        return ExerciseResult::degenerate(&exercise.id);
    };

    let risk_label = exercise.determine_risk(average_angle);
    let best_angle = best_angle(&top, &exercise.risk_ranges);

    debug!(
        "{}: {}/{} frames accepted, avg {:.1}, best {}, {}",
        exercise.id,
        accepted,
        frames.len(),
        average_angle,
        best_angle,
        risk_label
    );

    ExerciseResult {
        exercise: exercise.id.clone(),
        average_angle,
        best_angle,
        risk_label,
        top_angles: top,
        skip: false,
    }
}
