//! Trunk angles: spine flexion/extension, lateral flexion, torso rotation
//!
//! All three use the shoulder and hip pairs (5, 6, 11, 12).

use serde::{Deserialize, Serialize};

use crate::pose::{FrameShape, KeypointMap, Side, Point};
use crate::pose::{LEFT_HIP, LEFT_SHOULDER, RIGHT_HIP, RIGHT_SHOULDER};
use super::geometry::{angle_between, down, heading, is_degenerate, midpoint, span};

/// Shoulder span / hip span for a subject squarely facing the camera
pub const NEUTRAL_SHOULDER_HIP_RATIO: f64 = 1.5;

/// Which trunk line is measured against vertical
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpineMode {
    Flexion,
    Extension,
    Lateral,
}

struct Trunk {
    left_shoulder: Point,
    right_shoulder: Point,
    left_hip: Point,
    right_hip: Point,
}

impl Trunk {
    fn locate(keypoints: &KeypointMap, shape: FrameShape) -> Option<Self> {
        Some(Self {
            left_shoulder: keypoints.pixel(LEFT_SHOULDER, shape)?,
            right_shoulder: keypoints.pixel(RIGHT_SHOULDER, shape)?,
            left_hip: keypoints.pixel(LEFT_HIP, shape)?,
            right_hip: keypoints.pixel(RIGHT_HIP, shape)?,
        })
    }

    fn shoulder_mid(&self) -> Point {
        midpoint(self.left_shoulder, self.right_shoulder)
    }

    fn hip_mid(&self) -> Point {
        midpoint(self.left_hip, self.right_hip)
    }
}

/// Trunk line against the downward vertical
///
/// - Flexion: shoulder midpoint -> hip midpoint. Upright = 0°.
/// - Extension: hip midpoint -> shoulder midpoint, reported as `180 - angle`.
///   Upright = 0°.
/// - Lateral: left shoulder -> right shoulder. Level shoulders = 90°.
pub fn spine_angle(keypoints: &KeypointMap, shape: FrameShape, mode: SpineMode) -> f64 {
    let Some(trunk) = Trunk::locate(keypoints, shape) else {
        return 0.0;
    };
    let line = match mode {
        SpineMode::Flexion => trunk.hip_mid() - trunk.shoulder_mid(),
        SpineMode::Extension => trunk.shoulder_mid() - trunk.hip_mid(),
        SpineMode::Lateral => trunk.right_shoulder - trunk.left_shoulder,
    };
    match angle_between(line, down()) {
        Some(angle) if mode == SpineMode::Extension => 180.0 - angle,
        Some(angle) => angle,
        None => 0.0,
    }
}

/// Side bend: each hip -> shoulder line measured away from vertical,
/// `90 - |heading|`; the larger side wins
pub fn lateral_flexion_angle(keypoints: &KeypointMap, shape: FrameShape) -> f64 {
    let Some(trunk) = Trunk::locate(keypoints, shape) else {
        return 0.0;
    };
    let bend = |shoulder: Point, hip: Point| heading(shoulder - hip).map(|h| 90.0 - h.abs());
    match (
        bend(trunk.left_shoulder, trunk.left_hip),
        bend(trunk.right_shoulder, trunk.right_hip),
    ) {
        (Some(left), Some(right)) => left.max(right),
        _ => 0.0,
    }
}

/// Trunk rotation about the vertical axis, from 2D foreshortening
///
/// A rotated trunk shows a narrower shoulder span relative to the hips:
/// `acos(shoulder_span / (hip_span × NEUTRAL_SHOULDER_HIP_RATIO))`. Rotation
/// toward the other side (shoulder midpoint displaced the wrong way from the
/// hip midpoint) reads as 0.
pub fn torso_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let Some(trunk) = Trunk::locate(keypoints, shape) else {
        return 0.0;
    };
    if is_degenerate(trunk.right_hip - trunk.left_hip) {
        return 0.0;
    }

    let offset = trunk.shoulder_mid().x - trunk.hip_mid().x;
    let wrong_way = match side {
        Side::Right => offset > 0.0,
        Side::Left => offset < 0.0,
    };
    if wrong_way {
        return 0.0;
    }

    let shoulder_span = span(trunk.left_shoulder, trunk.right_shoulder);
    let hip_span = span(trunk.left_hip, trunk.right_hip);
    let ratio = (shoulder_span / (hip_span * NEUTRAL_SHOULDER_HIP_RATIO)).clamp(0.0, 1.0);
    ratio.acos().to_degrees()
}
