//! Hip and knee angles: knee raise, hip internal/external rotation

use crate::pose::{FrameShape, KeypointMap, Point, Side};
use super::geometry::{angle_between, heading_from};

/// Distance (px) of the synthetic point placed straight below the hip
pub const KNEE_REFERENCE_OFFSET: f64 = 100.0;

/// Rotation angles are reported in 0-90°
const ROTATION_MAX: f64 = 90.0;

/// Thigh (hip -> knee) against a vertical line hanging from the hip.
/// Standing = 0°, thigh horizontal = 90°.
pub fn knee_raise_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let (Some(hip), Some(knee)) = (
        keypoints.pixel(side.hip(), shape),
        keypoints.pixel(side.knee(), shape),
    ) else {
        return 0.0;
    };
    let reference = Point::new(hip.x, hip.y + KNEE_REFERENCE_OFFSET);
    angle_between(knee - hip, reference - hip).unwrap_or(0.0)
}

/// Lower leg (knee -> ankle) heading from +x; negatives wrap by +180
pub fn hip_internal_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let (Some(knee), Some(ankle)) = (
        keypoints.pixel(side.knee(), shape),
        keypoints.pixel(side.ankle(), shape),
    ) else {
        return 0.0;
    };
    match heading_from(ankle - knee, Point::new(1.0, 0.0)) {
        Some(angle) => {
            let angle = if angle < 0.0 { angle + 180.0 } else { angle };
            angle.clamp(0.0, ROTATION_MAX)
        }
        None => 0.0,
    }
}

/// Thigh (hip -> knee) heading from straight down; negatives wrap by +360
/// and the left leg reads as `360 - angle`
pub fn hip_external_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let (Some(hip), Some(knee)) = (
        keypoints.pixel(side.hip(), shape),
        keypoints.pixel(side.knee(), shape),
    ) else {
        return 0.0;
    };
    let Some(mut angle) = heading_from(knee - hip, Point::new(0.0, 1.0)) else {
        return 0.0;
    };
    if angle < 0.0 {
        angle += 360.0;
    }
    if side == Side::Left {
        angle = 360.0 - angle;
    }
    angle.clamp(0.0, ROTATION_MAX)
}
