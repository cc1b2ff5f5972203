//! Neck angles from the nose and the shoulder midpoint (0, 5, 6)

use crate::pose::{FrameShape, KeypointMap, Point, Side};
use crate::pose::{LEFT_SHOULDER, NOSE, RIGHT_SHOULDER};
use super::geometry::{angle_between, is_degenerate, midpoint, span, up};

struct Head {
    nose: Point,
    shoulder_mid: Point,
    shoulder_span: f64,
}

impl Head {
    fn locate(keypoints: &KeypointMap, shape: FrameShape) -> Option<Self> {
        let nose = keypoints.pixel(NOSE, shape)?;
        let left = keypoints.pixel(LEFT_SHOULDER, shape)?;
        let right = keypoints.pixel(RIGHT_SHOULDER, shape)?;
        Some(Self {
            nose,
            shoulder_mid: midpoint(left, right),
            shoulder_span: span(left, right),
        })
    }

    /// Shoulder midpoint -> nose
    fn neck_vector(&self) -> Point {
        self.nose - self.shoulder_mid
    }

    /// Nose on the opposite side of the midline from the requested side
    fn leans_away_from(&self, side: Side) -> bool {
        match side {
            Side::Right => self.nose.x > self.shoulder_mid.x,
            Side::Left => self.nose.x < self.shoulder_mid.x,
        }
    }
}

/// Neck line against straight up. Used for both flexion and extension.
pub fn neck_inclination_angle(keypoints: &KeypointMap, shape: FrameShape) -> f64 {
    Head::locate(keypoints, shape)
        .and_then(|head| angle_between(head.neck_vector(), up()))
        .unwrap_or(0.0)
}

/// Sideways head tilt for one side; 0 when tilting the other way
pub fn neck_tilt_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let Some(head) = Head::locate(keypoints, shape) else {
        return 0.0;
    };
    let Some(angle) = angle_between(head.neck_vector(), up() * 100.0) else {
        return 0.0;
    };
    if head.leans_away_from(side) {
        return 0.0;
    }
    angle
}

/// Head turn estimated from the nose's horizontal offset over half the
/// shoulder span: `asin(offset / (span / 2))`
pub fn neck_rotation_angle(keypoints: &KeypointMap, shape: FrameShape, side: Side) -> f64 {
    let Some(head) = Head::locate(keypoints, shape) else {
        return 0.0;
    };
    if head.shoulder_span <= 0.0 || is_degenerate(head.neck_vector()) {
        return 0.0;
    }
    if head.leans_away_from(side) {
        return 0.0;
    }
    let offset = (head.nose.x - head.shoulder_mid.x).abs();
    let ratio = (offset / (head.shoulder_span / 2.0)).clamp(0.0, 1.0);
    ratio.asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;
    const SHAPE: FrameShape = FrameShape { height: 500, width: 500 };

    fn head(nose: (f64, f64)) -> KeypointMap {
        KeypointMap::from_pixels(
            SHAPE,
            &[
                (NOSE, nose.0, nose.1),
                (LEFT_SHOULDER, 300.0, 300.0),
                (RIGHT_SHOULDER, 200.0, 300.0),
            ],
        )
    }

    #[test]
    fn test_neutral_head() {
        let kp = head((250.0, 200.0));
        assert!(neck_inclination_angle(&kp, SHAPE).abs() < EPS);
        assert!(neck_tilt_angle(&kp, SHAPE, Side::Left).abs() < EPS);
        assert!(neck_rotation_angle(&kp, SHAPE, Side::Right).abs() < EPS);
    }

    #[test]
    fn test_neck_inclination_45() {
        let kp = head((350.0, 200.0));
        assert!((neck_inclination_angle(&kp, SHAPE) - 45.0).abs() < EPS);
    }

    #[test]
    fn test_neck_inclination_nose_on_midpoint() {
        // Zero-length neck vector must not produce NaN
        let kp = head((250.0, 300.0));
        assert_eq!(neck_inclination_angle(&kp, SHAPE), 0.0);
    }

    #[test]
    fn test_tilt_zeroed_on_wrong_side() {
        // Nose displaced to image right (x greater than midpoint)
        let kp = head((300.0, 200.0));
        assert!((neck_tilt_angle(&kp, SHAPE, Side::Left) - 26.565051).abs() < 1e-5);
        assert_eq!(neck_tilt_angle(&kp, SHAPE, Side::Right), 0.0);

        let kp = head((200.0, 200.0));
        assert_eq!(neck_tilt_angle(&kp, SHAPE, Side::Left), 0.0);
        assert!(neck_tilt_angle(&kp, SHAPE, Side::Right) > 0.0);
    }

    #[test]
    fn test_rotation_from_nose_offset() {
        // Offset 25px over a 50px half-span -> asin(0.5) = 30°
        let kp = head((275.0, 220.0));
        assert!((neck_rotation_angle(&kp, SHAPE, Side::Left) - 30.0).abs() < EPS);
        assert_eq!(neck_rotation_angle(&kp, SHAPE, Side::Right), 0.0);
    }
}
