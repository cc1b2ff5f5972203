//! Pose module - keypoint data as produced by the external pose estimator
//!
//! Re-exports only. All logic in submodules.

mod keypoints;
mod frame;

pub use keypoints::{
    Keypoint, Side,
    // Constants
    NOSE, LEFT_EYE, RIGHT_EYE, LEFT_EAR, RIGHT_EAR,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    KEYPOINT_COUNT,
};
pub use frame::{Frame, FrameShape, KeypointMap, Point};
