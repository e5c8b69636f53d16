//! Intent engine error types.

use thiserror::Error;

pub type IntentResult<T> = Result<T, IntentError>;

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Scene text is empty")]
    EmptyScene,

    #[error("Inference backend unavailable: {0}")]
    InferenceUnavailable(String),
}

impl IntentError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::InferenceUnavailable(msg.into())
    }

    /// True when the caller can fix the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, IntentError::EmptyScene)
    }
}
