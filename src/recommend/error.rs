use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("Model is not available.")]
    ModelUnavailable,

    #[error("A '{0}' parameter is required.")]
    MissingParameter(&'static str),

    #[error("Song containing '{0}' not found.")]
    NotFound(String),

    #[error("Invalid mood selected.")]
    InvalidMood(String),
}

impl RecommendError {
    /// Short label of the error kind, used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RecommendError::ModelUnavailable => "model_unavailable",
            RecommendError::MissingParameter(_) => "missing_parameter",
            RecommendError::NotFound(_) => "not_found",
            RecommendError::InvalidMood(_) => "invalid_mood",
        }
    }
}
