//! Formula dispatch
//!
//! Every exercise in the registry names one `Formula`. The enum is closed;
//! hosts needing a formula the crate does not ship can implement
//! `AngleFormula` and score frames with it directly.

use serde::{Deserialize, Serialize};

use crate::pose::{FrameShape, KeypointMap, Side};
use crate::pose::{LEFT_HIP, LEFT_SHOULDER, NOSE, RIGHT_HIP, RIGHT_SHOULDER};
use super::{hip, neck, shoulder, spine};
use super::spine::SpineMode;

/// Single-frame angle computation
pub trait AngleFormula {
    /// Angle in degrees for one frame. Degenerate geometry yields 0.
    fn angle(&self, keypoints: &KeypointMap, shape: FrameShape) -> f64;

    /// Keypoint ids the formula reads
    fn required_keypoints(&self) -> Vec<u8>;
}

/// Built-in computation strategies
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formula {
    Spine { mode: SpineMode },
    LateralFlexion,
    TorsoRotation { side: Side },
    KneeRaise { side: Side },
    HipInternalRotation { side: Side },
    HipExternalRotation { side: Side },
    ShoulderVerticalFlexion { side: Side },
    ShoulderAbduction,
    ShoulderInternalRotation { side: Side },
    ShoulderExternalRotation { side: Side },
    NeckFlexion,
    NeckExtension,
    NeckTilt { side: Side },
    NeckRotation { side: Side },
}

const TRUNK: [u8; 4] = [LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP];
const HEAD: [u8; 3] = [NOSE, LEFT_SHOULDER, RIGHT_SHOULDER];

impl AngleFormula for Formula {
    fn angle(&self, keypoints: &KeypointMap, shape: FrameShape) -> f64 {
        match *self {
            Formula::Spine { mode } => spine::spine_angle(keypoints, shape, mode),
            Formula::LateralFlexion => spine::lateral_flexion_angle(keypoints, shape),
            Formula::TorsoRotation { side } => spine::torso_rotation_angle(keypoints, shape, side),
            Formula::KneeRaise { side } => hip::knee_raise_angle(keypoints, shape, side),
            Formula::HipInternalRotation { side } => {
                hip::hip_internal_rotation_angle(keypoints, shape, side)
            }
            Formula::HipExternalRotation { side } => {
                hip::hip_external_rotation_angle(keypoints, shape, side)
            }
            Formula::ShoulderVerticalFlexion { side } => {
                shoulder::vertical_flexion_angle(keypoints, shape, side)
            }
            Formula::ShoulderAbduction => shoulder::abduction_angle(keypoints, shape),
            Formula::ShoulderInternalRotation { side } => {
                shoulder::internal_rotation_angle(keypoints, shape, side)
            }
            Formula::ShoulderExternalRotation { side } => {
                shoulder::external_rotation_angle(keypoints, shape, side)
            }
            Formula::NeckFlexion | Formula::NeckExtension => {
                neck::neck_inclination_angle(keypoints, shape)
            }
            Formula::NeckTilt { side } => neck::neck_tilt_angle(keypoints, shape, side),
            Formula::NeckRotation { side } => neck::neck_rotation_angle(keypoints, shape, side),
        }
    }

    fn required_keypoints(&self) -> Vec<u8> {
        match *self {
            Formula::Spine { .. } | Formula::LateralFlexion | Formula::TorsoRotation { .. } => {
                TRUNK.to_vec()
            }
            Formula::KneeRaise { side } => vec![side.hip(), side.knee()],
            Formula::HipInternalRotation { side } => vec![side.knee(), side.ankle()],
            Formula::HipExternalRotation { side } => vec![side.hip(), side.knee()],
            Formula::ShoulderVerticalFlexion { side } => vec![side.shoulder(), side.elbow()],
            Formula::ShoulderAbduction => vec![
                Side::Left.shoulder(),
                Side::Right.shoulder(),
                Side::Left.elbow(),
                Side::Right.elbow(),
            ],
            Formula::ShoulderInternalRotation { side }
            | Formula::ShoulderExternalRotation { side } => vec![side.elbow(), side.wrist()],
            Formula::NeckFlexion
            | Formula::NeckExtension
            | Formula::NeckTilt { .. }
            | Formula::NeckRotation { .. } => HEAD.to_vec(),
        }
    }
}
