//! Exercise definitions and risk classification

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angles::{AngleFormula, Formula};
use crate::error::{EngineError, EngineResult};
use crate::pose::{FrameShape, KeypointMap, KEYPOINT_COUNT};

/// Risk tier of an angle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Width of the last whole degree named by a medium band's upper bound
pub const MEDIUM_UPPER_SLACK: f64 = 1.0;

/// Per-exercise risk bands in degrees, `(lo, hi)` each
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskRanges {
    pub low: (f64, f64),
    pub medium: (f64, f64),
    pub high: (f64, f64),
}

impl RiskRanges {
    /// Low is checked first and is inclusive on both ends, so overlaps favour
    /// Low. Medium's upper bound names the last whole degree of the band:
    /// `(31, 59)` covers `31 <= angle < 60`. Anything else, including gaps
    /// between bands, is High.
    pub fn determine_risk(&self, angle: f64) -> RiskLevel {
        if self.low.0 <= angle && angle <= self.low.1 {
            RiskLevel::Low
        } else if self.medium.0 <= angle && angle < self.medium.1 + MEDIUM_UPPER_SLACK {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    fn validate(&self, id: &str) -> EngineResult<()> {
        for (name, (lo, hi)) in [("low", self.low), ("medium", self.medium), ("high", self.high)] {
            if !(lo.is_finite() && hi.is_finite()) || lo > hi {
                return Err(EngineError::config(format!(
                    "exercise '{id}': {name} risk range ({lo}, {hi}) is not ascending"
                )));
            }
        }
        Ok(())
    }
}

/// Registry entry for one exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    pub id: String,
    /// Human-readable exercise name
    pub display_name: String,
    /// "fb" (front/back, both sides), "left" or "right"
    pub mode: String,
    /// Keypoints a frame must carry before the formula runs
    pub keypoints: Vec<u8>,
    pub formula: Formula,
    /// Samples below this count toward the skip signal
    pub angle_min: f64,
    /// Accepted samples satisfy `0 < angle < angle_max`
    pub angle_max: f64,
    pub risk_ranges: RiskRanges,
}

impl ExerciseDefinition {
    pub fn accepts(&self, angle: f64) -> bool {
        0.0 < angle && angle < self.angle_max
    }

    pub fn determine_risk(&self, angle: f64) -> RiskLevel {
        self.risk_ranges.determine_risk(angle)
    }

    pub fn angle(&self, keypoints: &KeypointMap, shape: FrameShape) -> f64 {
        self.formula.angle(keypoints, shape)
    }

    pub(crate) fn validate(&self) -> EngineResult<()> {
        let id = self.id.as_str();
        if id.is_empty() {
            return Err(EngineError::config("exercise with empty id"));
        }
        if self.keypoints.is_empty() {
            return Err(EngineError::config(format!("exercise '{id}': no keypoints")));
        }
        if let Some(bad) = self.keypoints.iter().find(|&&kp| kp >= KEYPOINT_COUNT) {
            return Err(EngineError::config(format!(
                "exercise '{id}': keypoint {bad} outside the {KEYPOINT_COUNT}-point skeleton"
            )));
        }
        let missing: Vec<u8> = self
            .formula
            .required_keypoints()
            .into_iter()
            .filter(|kp| !self.keypoints.contains(kp))
            .collect();
        if !missing.is_empty() {
            return Err(EngineError::config(format!(
                "exercise '{id}': formula reads keypoints {missing:?} not listed as required"
            )));
        }
        if !(self.angle_max > 0.0) {
            return Err(EngineError::config(format!("exercise '{id}': angle_max must be positive")));
        }
        if !(self.angle_min < self.angle_max) {
            return Err(EngineError::config(format!(
                "exercise '{id}': angle_min {} not below angle_max {}",
                self.angle_min, self.angle_max
            )));
        }
        self.risk_ranges.validate(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::SpineMode;

    fn back_flexion_ranges() -> RiskRanges {
        RiskRanges { low: (60.0, 90.0), medium: (31.0, 59.0), high: (0.0, 30.0) }
    }

    fn definition() -> ExerciseDefinition {
        ExerciseDefinition {
            id: "back_flexion".into(),
            display_name: "Back Flexion".into(),
            mode: "fb".into(),
            keypoints: vec![5, 6, 11, 12],
            formula: Formula::Spine { mode: SpineMode::Flexion },
            angle_min: 20.0,
            angle_max: 90.0,
            risk_ranges: back_flexion_ranges(),
        }
    }

    #[test]
    fn test_boundaries() {
        let ranges = back_flexion_ranges();
        assert_eq!(ranges.determine_risk(59.5), RiskLevel::Medium);
        assert_eq!(ranges.determine_risk(60.0), RiskLevel::Low);
        assert_eq!(ranges.determine_risk(90.0), RiskLevel::Low);
        assert_eq!(ranges.determine_risk(31.0), RiskLevel::Medium);
        assert_eq!(ranges.determine_risk(30.5), RiskLevel::High);
        assert_eq!(ranges.determine_risk(0.0), RiskLevel::High);
    }

    #[test]
    fn test_upper_bound_stays_in_its_tier() {
        let ranges = back_flexion_ranges();
        assert_eq!(ranges.determine_risk(59.0), RiskLevel::Medium);
        assert_eq!(ranges.determine_risk(90.0), RiskLevel::Low);
    }

    #[test]
    fn test_gap_falls_back_to_high() {
        let ranges = RiskRanges { low: (60.0, 90.0), medium: (31.0, 55.0), high: (0.0, 30.0) };
        assert_eq!(ranges.determine_risk(55.5), RiskLevel::Medium);
        assert_eq!(ranges.determine_risk(57.0), RiskLevel::High);
        assert_eq!(ranges.determine_risk(95.0), RiskLevel::High);
    }

    #[test]
    fn test_medium_upper_slack() {
        let ranges = RiskRanges { low: (60.0, 90.0), medium: (31.0, 55.0), high: (0.0, 30.0) };
        let end = 55.0 + MEDIUM_UPPER_SLACK;
        assert_eq!(ranges.determine_risk(end - 0.01), RiskLevel::Medium);
        assert_eq!(ranges.determine_risk(end), RiskLevel::High);
    }

    #[test]
    fn test_overlap_favours_low() {
        let ranges = RiskRanges { low: (40.0, 90.0), medium: (20.0, 60.0), high: (0.0, 19.0) };
        assert_eq!(ranges.determine_risk(50.0), RiskLevel::Low);
    }

    #[test]
    fn test_risk_label_serde() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"Medium Risk\"");
        let level: RiskLevel = serde_json::from_str("\"High Risk\"").unwrap();
        assert_eq!(level, RiskLevel::High);
        assert_eq!(RiskLevel::Low.to_string(), "Low Risk");
    }

    #[test]
    fn test_accepts_open_interval() {
        let def = definition();
        assert!(!def.accepts(0.0));
        assert!(def.accepts(0.1));
        assert!(def.accepts(89.9));
        assert!(!def.accepts(90.0));
        assert!(!def.accepts(f64::NAN));
    }

    #[test]
    fn test_validation() {
        assert!(definition().validate().is_ok());

        let mut def = definition();
        def.keypoints = vec![5, 6, 11];
        assert!(matches!(def.validate(), Err(EngineError::Config { .. })));

        let mut def = definition();
        def.keypoints.push(17);
        assert!(def.validate().is_err());

        let mut def = definition();
        def.risk_ranges.medium = (59.0, 31.0);
        assert!(def.validate().is_err());

        let mut def = definition();
        def.angle_min = 95.0;
        assert!(def.validate().is_err());
    }
}
