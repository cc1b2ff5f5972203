//! Per-frame angle sampling
//!
//! Frames that cannot yield a trustworthy angle (no keypoints, a required
//! keypoint missing, angle outside the open interval `(0, angle_max)`) are
//! dropped without failing the submission.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::angles::AngleFormula;
use crate::pose::{Frame, FrameShape, KeypointMap};
use crate::registry::ExerciseDefinition;

/// Number of samples kept per submission
pub const TOP_SAMPLE_COUNT: usize = 12;

/// One accepted measurement
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleSample {
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "Angle")]
    pub angle: f64,
}

impl AngleSample {
    pub fn new(time: f64, angle: f64) -> Self {
        Self { time, angle }
    }
}

/// Accepted samples for a registered exercise, in frame order
pub fn collect_samples(
    frames: &[Frame],
    shape: FrameShape,
    exercise: &ExerciseDefinition,
) -> Vec<AngleSample> {
    collect_samples_with(frames, shape, &exercise.keypoints, exercise.angle_max, &exercise.formula)
}

/// Accepted samples for any formula
pub fn collect_samples_with(
    frames: &[Frame],
    shape: FrameShape,
    required: &[u8],
    angle_max: f64,
    formula: &dyn AngleFormula,
) -> Vec<AngleSample> {
    let mut samples = Vec::new();

    for frame in frames {
        if frame.is_empty() {
            trace!("frame at {}: no keypoints", frame.time);
            continue;
        }

        let keypoints = KeypointMap::from_frame(frame);
        if !keypoints.contains_all(required) {
            trace!("frame at {}: missing required keypoints", frame.time);
            continue;
        }

        let angle = formula.angle(&keypoints, shape);
        if 0.0 < angle && angle < angle_max {
            samples.push(AngleSample::new(frame.time, angle));
        } else {
            trace!("frame at {}: angle {:.2} outside (0, {})", frame.time, angle, angle_max);
        }
    }

    samples
}

/// The `count` largest angles, largest first. Equal angles keep frame order.
pub fn top_samples(mut samples: Vec<AngleSample>, count: usize) -> Vec<AngleSample> {
    samples.sort_by(|a, b| b.angle.total_cmp(&a.angle));
    samples.truncate(count);
    samples
}
