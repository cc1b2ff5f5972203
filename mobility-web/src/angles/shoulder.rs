//! Shoulder angles: vertical flexion, abduction, internal/external rotation
//!
//! Rotation is read from the forearm (elbow -> wrist) direction in the image
//! plane, measured from a horizontal reference and mirrored for the right arm
//! so both sides share one scale.

use crate::pose::{FrameShape, KeypointMap, Point, Side};
use super::geometry::{angle_between, down, heading_from, up};

/// Rotation angles are reported in 0-90°
const ROTATION_MAX: f64 = 90.0;

fn upper_arm(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> Option<Point> {
    let shoulder = keypoints.pixel(side.shoulder(), shape)?;
    let elbow = keypoints.pixel(side.elbow(), shape)?;
    Some(elbow - shoulder)
}

fn forearm(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> Option<Point> {
    let elbow = keypoints.pixel(side.elbow(), shape)?;
    let wrist = keypoints.pixel(side.wrist(), shape)?;
    Some(wrist - elbow)
}

/// Arm raised forward, seen from the side. Arm hanging down = 0°,
/// straight overhead = 180°.
pub fn vertical_flexion_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    upper_arm(keypoints, shape, side)
        .and_then(|arm| angle_between(arm, down()))
        .unwrap_or(0.0)
}

/// Arms raised sideways: `180 - angle(arm, up)` per arm, the lower arm wins
pub fn abduction_angle(keypoints: &KeypointMap, shape: FrameShape) -> f64 {
    let raise = |side| {
        upper_arm(keypoints, shape, side)
            .and_then(|arm| angle_between(arm, up()))
            .map(|angle| 180.0 - angle)
    };
    match (raise(Side::Left), raise(Side::Right)) {
        (Some(left), Some(right)) => left.min(right),
        _ => 0.0,
    }
}

/// Shared rotation normalization: wrap negatives by +180, mirror the right
/// arm, clamp to 0-90
fn normalize_rotation(angle: f64, side: Side) -> f64 {
    let mut angle = if angle < 0.0 { angle + 180.0 } else { angle };
    if side == Side::Right {
        angle = 180.0 - angle;
    }
    angle.clamp(0.0, ROTATION_MAX)
}

/// Forearm against the +x axis
pub fn internal_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    forearm(keypoints, shape, side)
        .and_then(|fa| heading_from(fa, Point::new(1.0, 0.0)))
        .map(|angle| normalize_rotation(angle, side))
        .unwrap_or(0.0)
}

/// Forearm against the -x axis (across the body)
pub fn external_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    forearm(keypoints, shape, side)
        .and_then(|fa| heading_from(fa, Point::new(-1.0, 0.0)))
        .map(|angle| normalize_rotation(angle, side))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{LEFT_ELBOW, LEFT_SHOULDER, RIGHT_ELBOW, RIGHT_SHOULDER};

    const EPS: f64 = 1e-6;
    const SHAPE: FrameShape = FrameShape { height: 600, width: 800 };

    fn arms(left_elbow: (f64, f64), right_elbow: (f64, f64)) -> KeypointMap {
        KeypointMap::from_pixels(
            SHAPE,
            &[
                (LEFT_SHOULDER, 450.0, 200.0),
                (RIGHT_SHOULDER, 350.0, 200.0),
                (LEFT_ELBOW, left_elbow.0, left_elbow.1),
                (RIGHT_ELBOW, right_elbow.0, right_elbow.1),
            ],
        )
    }

    fn forearm_map(side: Side, elbow: (f64, f64), wrist: (f64, f64)) -> KeypointMap {
        KeypointMap::from_pixels(
            SHAPE,
            &[
                (side.shoulder(), elbow.0, elbow.1 - 100.0),
                (side.elbow(), elbow.0, elbow.1),
                (side.wrist(), wrist.0, wrist.1),
            ],
        )
    }

    /// Reflect a pixel x across the frame's vertical midline
    fn mirror_x(x: f64) -> f64 {
        f64::from(SHAPE.width) - x
    }

    #[test]
    fn test_vertical_flexion() {
        // Hanging arm
        let kp = arms((450.0, 300.0), (350.0, 300.0));
        assert!(vertical_flexion_angle(&kp, SHAPE, Side::Left).abs() < EPS);
        // Arm forward, horizontal
        let kp = arms((550.0, 200.0), (350.0, 300.0));
        assert!((vertical_flexion_angle(&kp, SHAPE, Side::Left) - 90.0).abs() < EPS);
        // Overhead
        let kp = arms((450.0, 300.0), (350.0, 100.0));
        assert!((vertical_flexion_angle(&kp, SHAPE, Side::Right) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_abduction_takes_lower_arm() {
        // Left arm horizontal (90°), right arm overhead (180°)
        let kp = arms((550.0, 200.0), (350.0, 100.0));
        assert!((abduction_angle(&kp, SHAPE) - 90.0).abs() < EPS);
        // Both hanging
        let kp = arms((450.0, 300.0), (350.0, 300.0));
        assert!(abduction_angle(&kp, SHAPE).abs() < EPS);
    }

    #[test]
    fn test_abduction_degenerate_arm() {
        let kp = arms((450.0, 200.0), (350.0, 100.0));
        assert_eq!(abduction_angle(&kp, SHAPE), 0.0);
    }

    #[test]
    fn test_internal_rotation_branches() {
        // Forearm pointing down-right: heading 45 -> left 45, right 135 -> 90
        let kp = forearm_map(Side::Left, (400.0, 300.0), (450.0, 350.0));
        assert!((internal_rotation_angle(&kp, SHAPE, Side::Left) - 45.0).abs() < EPS);
        let kp = forearm_map(Side::Right, (400.0, 300.0), (450.0, 350.0));
        assert!((internal_rotation_angle(&kp, SHAPE, Side::Right) - 90.0).abs() < EPS);
        // Forearm pointing up-right: heading -30 -> +180 = 150 -> clamp 90
        let t = 30f64.to_radians();
        let kp = forearm_map(Side::Left, (400.0, 300.0), (400.0 + 100.0 * t.cos(), 300.0 - 100.0 * t.sin()));
        assert!((internal_rotation_angle(&kp, SHAPE, Side::Left) - 90.0).abs() < EPS);
    }

    #[test]
    fn test_external_rotation_branches() {
        // Forearm pointing down: heading 90 - 180 = -90 -> 90; right 180 - 90 = 90
        let kp = forearm_map(Side::Left, (400.0, 300.0), (400.0, 400.0));
        assert!((external_rotation_angle(&kp, SHAPE, Side::Left) - 90.0).abs() < EPS);
        // Forearm pointing up-left by 60°: heading -120 - 180 = -300 -> -120 -> clamp 0
        let t = 60f64.to_radians();
        let kp = forearm_map(Side::Left, (400.0, 300.0), (400.0 - 100.0 * t.cos(), 300.0 - 100.0 * t.sin()));
        assert_eq!(external_rotation_angle(&kp, SHAPE, Side::Left), 0.0);
        // Right arm, forearm pointing down-left by 20° below horizontal:
        // heading 160 - 180 = -20 -> 160 -> 180 - 160 = 20
        let t = 20f64.to_radians();
        let kp = forearm_map(Side::Right, (400.0, 300.0), (400.0 - 100.0 * t.cos(), 300.0 + 100.0 * t.sin()));
        assert!((external_rotation_angle(&kp, SHAPE, Side::Right) - 20.0).abs() < EPS);
    }

    #[test]
    fn test_mirrored_sides_agree() {
        // Forearm hanging below the elbow, as in the rotation exercises
        let elbow = (380.0, 310.0);
        let wrists = [(440.0, 360.0), (330.0, 380.0), (390.0, 400.0), (290.0, 315.0)];
        for wrist in wrists {
            let left = forearm_map(Side::Left, elbow, wrist);
            let right = forearm_map(
                Side::Right,
                (mirror_x(elbow.0), elbow.1),
                (mirror_x(wrist.0), wrist.1),
            );
            let l = internal_rotation_angle(&left, SHAPE, Side::Left);
            let r = internal_rotation_angle(&right, SHAPE, Side::Right);
            assert!((l - r).abs() < 1e-6, "internal {l} vs {r} for {wrist:?}");

            let l = external_rotation_angle(&left, SHAPE, Side::Left);
            let r = external_rotation_angle(&right, SHAPE, Side::Right);
            assert!((l - r).abs() < 1e-6, "external {l} vs {r} for {wrist:?}");
        }
    }

    #[test]
    fn test_zero_forearm() {
        let kp = forearm_map(Side::Right, (400.0, 300.0), (400.0, 300.0));
        assert_eq!(internal_rotation_angle(&kp, SHAPE, Side::Right), 0.0);
        assert_eq!(external_rotation_angle(&kp, SHAPE, Side::Right), 0.0);
    }
}
