//! Error types for the scoring engine
//!
//! Only request and configuration problems surface as errors. Noisy or
//! incomplete frames are data-quality gaps and are skipped silently by the
//! scoring pipeline.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result alias used across the crate
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Request is missing a field or carries an unusable value
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Exercise id not present in the registry
    #[error("Unknown exercise type '{id}'")]
    UnknownExercise { id: String },

    /// Assessment template name not present in the catalog
    #[error("Unknown assessment '{name}'")]
    UnknownTemplate { name: String },

    /// Registry or template data failed validation
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Result store failure
    #[error("Store error: {message}")]
    Store { message: String },
}

impl EngineError {
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown_exercise(id: impl Into<String>) -> Self {
        Self::UnknownExercise { id: id.into() }
    }

    #[must_use]
    pub fn unknown_template(name: impl Into<String>) -> Self {
        Self::UnknownTemplate { name: name.into() }
    }

    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for errors caused by the caller's input rather than by
    /// configuration or the store
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. }
                | Self::UnknownExercise { .. }
                | Self::UnknownTemplate { .. }
                | Self::Json(_)
        )
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
