//! Frames, frame shape and per-frame keypoint lookup
//!
//! A frame's keypoints arrive normalized; geometry is computed in pixel space
//! so that non-square frames keep their true proportions.

use std::collections::BTreeMap;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::keypoints::Keypoint;

/// Pixel-space position or direction
pub type Point = Vector2<f64>;

/// One time-stamped snapshot of keypoints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub time: f64,
    #[serde(default)]
    pub data: Vec<Keypoint>,
}

impl Frame {
    pub fn new(time: f64, data: Vec<Keypoint>) -> Self {
        Self { time, data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Frame size in pixels, constant for a whole sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameShape {
    #[serde(rename = "y")]
    pub height: u32,
    #[serde(rename = "x")]
    pub width: u32,
}

impl FrameShape {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Zero-sized frames collapse every vector to zero length
    pub fn is_valid(&self) -> bool {
        self.height > 0 && self.width > 0
    }

    /// Normalized coordinates to pixels
    pub fn denormalize(&self, keypoint: &Keypoint) -> Point {
        Point::new(
            keypoint.x * f64::from(self.width),
            keypoint.y * f64::from(self.height),
        )
    }
}

/// Keypoint id -> keypoint for a single frame
#[derive(Clone, Debug, Default)]
pub struct KeypointMap {
    points: BTreeMap<u8, Keypoint>,
}

impl KeypointMap {
    /// Index a frame's keypoints; a repeated id keeps the last occurrence
    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_keypoints(&frame.data)
    }

    pub fn from_keypoints(keypoints: &[Keypoint]) -> Self {
        let points = keypoints.iter().map(|kp| (kp.id, *kp)).collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: u8) -> Option<&Keypoint> {
        self.points.get(&id)
    }

    /// True when every id in `ids` is present
    pub fn contains_all(&self, ids: &[u8]) -> bool {
        ids.iter().all(|id| self.points.contains_key(id))
    }

    /// Pixel position of keypoint `id`
    pub fn pixel(&self, id: u8, shape: FrameShape) -> Option<Point> {
        self.points.get(&id).map(|kp| shape.denormalize(kp))
    }
}

#[cfg(test)]
impl KeypointMap {
    /// Build a map from pixel coordinates (test fixtures think in pixels)
    pub(crate) fn from_pixels(shape: FrameShape, points: &[(u8, f64, f64)]) -> Self {
        let keypoints: Vec<Keypoint> = points
            .iter()
            .map(|&(id, x, y)| {
                Keypoint::new(id, x / f64::from(shape.width), y / f64::from(shape.height))
            })
            .collect();
        Self::from_keypoints(&keypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denormalize() {
        let shape = FrameShape::new(480, 640);
        let p = shape.denormalize(&Keypoint::new(0, 0.5, 0.25));
        assert!((p.x - 320.0).abs() < 1e-9);
        assert!((p.y - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_shape_wire_names() {
        let shape: FrameShape = serde_json::from_str(r#"{"y": 720, "x": 1280}"#).unwrap();
        assert_eq!(shape, FrameShape::new(720, 1280));
        assert!(shape.is_valid());
        assert!(!FrameShape::new(0, 1280).is_valid());
    }

    #[test]
    fn test_keypoint_map_lookup() {
        let frame = Frame::new(
            0.0,
            vec![
                Keypoint::new(5, 0.1, 0.1),
                Keypoint::new(6, 0.2, 0.2),
                Keypoint::new(5, 0.3, 0.3),
            ],
        );
        let map = KeypointMap::from_frame(&frame);
        assert_eq!(map.len(), 2);
        assert!(map.contains_all(&[5, 6]));
        assert!(!map.contains_all(&[5, 6, 11]));
        // Last occurrence wins
        assert!((map.get(5).unwrap().x - 0.3).abs() < 1e-9);
        assert!(map.pixel(11, FrameShape::new(100, 100)).is_none());
    }

    #[test]
    fn test_frame_without_data_field() {
        let frame: Frame = serde_json::from_str(r#"{"time": 1.5}"#).unwrap();
        assert!(frame.is_empty());
    }
}
