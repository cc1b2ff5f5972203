//! Angles module - geometric angle library, one file per body region
//!
//! Re-exports only. All logic in submodules.

mod geometry;
mod spine;
mod neck;
mod shoulder;
mod hip;
mod formula;

pub use geometry::{angle_between, heading, heading_from, midpoint};
pub use spine::{
    spine_angle, lateral_flexion_angle, torso_rotation_angle,
    SpineMode, NEUTRAL_SHOULDER_HIP_RATIO,
};
pub use neck::{neck_inclination_angle, neck_tilt_angle, neck_rotation_angle};
pub use shoulder::{
    vertical_flexion_angle, abduction_angle,
    internal_rotation_angle, external_rotation_angle,
};
pub use hip::{
    knee_raise_angle, hip_internal_rotation_angle, hip_external_rotation_angle,
    KNEE_REFERENCE_OFFSET,
};
pub use formula::{AngleFormula, Formula};
