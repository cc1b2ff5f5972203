//! JSON request and response bodies exchanged with JavaScript
//!
//! Field names follow the existing web client (`userUUID`, `frame_shape.y`,
//! `Time`/`Angle`, ...). Parsing failures are request errors.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::pose::{Frame, FrameShape};
use crate::registry::{ExerciseDefinition, RiskLevel};
use crate::scoring::{AngleSample, ExerciseResult};

/// Parse a request body; malformed or incomplete JSON is an invalid request
pub fn parse_request<T: DeserializeOwned>(body: &str) -> EngineResult<T> {
    serde_json::from_str(body).map_err(|e| EngineError::invalid_request(e.to_string()))
}

fn require_user(user: &str) -> EngineResult<()> {
    if user.trim().is_empty() {
        return Err(EngineError::invalid_request("userUUID is missing"));
    }
    Ok(())
}

// ============================================================================
// REQUESTS
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct SubmissionMeta {
    pub frame_shape: FrameShape,
    pub exercise_type: String,
}

/// Frames of one exercise attempt
#[derive(Clone, Debug, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
    pub meta: SubmissionMeta,
    pub content: Vec<Frame>,
}

impl SubmissionRequest {
    pub fn validate(&self) -> EngineResult<()> {
        require_user(&self.user_uuid)?;
        let shape = self.meta.frame_shape;
        if !shape.is_valid() {
            return Err(EngineError::invalid_request(format!(
                "frame_shape must be non-zero, got y={} x={}",
                shape.height, shape.width
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AssessmentRequest {
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
    pub assessment: String,
}

impl AssessmentRequest {
    pub fn validate(&self) -> EngineResult<()> {
        require_user(&self.user_uuid)
    }
}

/// Any request that only names a user
#[derive(Clone, Debug, Deserialize)]
pub struct UserRequest {
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
}

impl UserRequest {
    pub fn validate(&self) -> EngineResult<()> {
        require_user(&self.user_uuid)
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionResponse {
    pub average_angle: f64,
    pub best_angle: f64,
    pub risk_label: RiskLevel,
    pub top_angles: Vec<AngleSample>,
    pub skip: bool,
    pub message: String,
}

impl From<&ExerciseResult> for SubmissionResponse {
    fn from(result: &ExerciseResult) -> Self {
        Self {
            average_angle: result.average_angle,
            best_angle: result.best_angle,
            risk_label: result.risk_label,
            top_angles: result.top_angles.clone(),
            skip: result.skip,
            message: result.message(),
        }
    }
}

/// One stored result as listed by `getResults`
#[derive(Clone, Debug, Serialize)]
pub struct ExerciseSummary {
    pub exercise_key: String,
    pub average_angle: f64,
    pub best_angle: f64,
    pub risk_label: RiskLevel,
    /// Top sample angles without their timestamps
    pub angles: Vec<f64>,
    pub skip: bool,
}

impl From<&ExerciseResult> for ExerciseSummary {
    fn from(result: &ExerciseResult) -> Self {
        Self {
            exercise_key: result.exercise.clone(),
            average_angle: result.average_angle,
            best_angle: result.best_angle,
            risk_label: result.risk_label,
            angles: result.top_angles.iter().map(|s| s.angle).collect(),
            skip: result.skip,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ResultsResponse {
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
    pub exercises: Vec<ExerciseSummary>,
}

/// Outcome of a delete
#[derive(Clone, Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ExerciseListResponse<'a> {
    pub exercises: Vec<&'a ExerciseDefinition>,
}
