//! Keypoint definitions
//!
//! Indices follow the 17-point COCO skeleton emitted by MoveNet-style
//! estimators. Coordinates are normalized to the frame (0-1).

use serde::{Deserialize, Serialize};

// ============================================================================
// KEYPOINT INDICES (COCO - 17 total)
// ============================================================================

pub const NOSE: u8 = 0;
pub const LEFT_EYE: u8 = 1;
pub const RIGHT_EYE: u8 = 2;
pub const LEFT_EAR: u8 = 3;
pub const RIGHT_EAR: u8 = 4;
pub const LEFT_SHOULDER: u8 = 5;
pub const RIGHT_SHOULDER: u8 = 6;
pub const LEFT_ELBOW: u8 = 7;
pub const RIGHT_ELBOW: u8 = 8;
pub const LEFT_WRIST: u8 = 9;
pub const RIGHT_WRIST: u8 = 10;
pub const LEFT_HIP: u8 = 11;
pub const RIGHT_HIP: u8 = 12;
pub const LEFT_KNEE: u8 = 13;
pub const RIGHT_KNEE: u8 = 14;
pub const LEFT_ANKLE: u8 = 15;
pub const RIGHT_ANKLE: u8 = 16;

/// Number of keypoints in the skeleton
pub const KEYPOINT_COUNT: u8 = 17;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 2D keypoint (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub id: u8,
    pub x: f64, // 0-1 normalized
    pub y: f64, // 0-1 normalized
}

impl Keypoint {
    pub fn new(id: u8, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Body side for bilateral joints (the subject's side, not the image's)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn shoulder(&self) -> u8 {
        match self {
            Side::Left => LEFT_SHOULDER,
            Side::Right => RIGHT_SHOULDER,
        }
    }

    pub fn elbow(&self) -> u8 {
        match self {
            Side::Left => LEFT_ELBOW,
            Side::Right => RIGHT_ELBOW,
        }
    }

    pub fn wrist(&self) -> u8 {
        match self {
            Side::Left => LEFT_WRIST,
            Side::Right => RIGHT_WRIST,
        }
    }

    pub fn hip(&self) -> u8 {
        match self {
            Side::Left => LEFT_HIP,
            Side::Right => RIGHT_HIP,
        }
    }

    pub fn knee(&self) -> u8 {
        match self {
            Side::Left => LEFT_KNEE,
            Side::Right => RIGHT_KNEE,
        }
    }

    pub fn ankle(&self) -> u8 {
        match self {
            Side::Left => LEFT_ANKLE,
            Side::Right => RIGHT_ANKLE,
        }
    }
}
