//! Vector helpers shared by every angle formula
//!
//! Image coordinates: x grows to the right, y grows downwards, so "up" is
//! `(0, -1)`.

use crate::pose::Point;

/// Vectors shorter than this (in pixels) are treated as degenerate
const MIN_LENGTH: f64 = 1e-9;

/// Unit vector pointing down the image
pub fn down() -> Point {
    Point::new(0.0, 1.0)
}

/// Unit vector pointing up the image
pub fn up() -> Point {
    Point::new(0.0, -1.0)
}

pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) / 2.0
}

/// Unsigned angle between two vectors in degrees (0-180)
///
/// Uses cos(θ) = (a · b) / (|a| × |b|). Returns `None` when either vector
/// has no length.
pub fn angle_between(a: Point, b: Point) -> Option<f64> {
    let magnitude = a.norm() * b.norm();
    if magnitude < MIN_LENGTH {
        return None;
    }
    let cos_angle = (a.dot(&b) / magnitude).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// Direction of a vector measured from the +x axis, in degrees (-180, 180]
///
/// Returns `None` for a zero vector.
pub fn heading(v: Point) -> Option<f64> {
    if v.norm() < MIN_LENGTH {
        return None;
    }
    Some(v.y.atan2(v.x).to_degrees())
}

/// Heading of `v` minus heading of `reference` (not wrapped)
pub fn heading_from(v: Point, reference: Point) -> Option<f64> {
    Some(heading(v)? - heading(reference)?)
}

/// Length of the segment between two points
pub fn span(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

pub fn is_degenerate(v: Point) -> bool {
    v.norm() < MIN_LENGTH
}
