// Risk pipeline error types
use thiserror::Error;

use crate::error::AppError;

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("Invalid patient record: {}", reasons.join("; "))]
    InvalidRecord { reasons: Vec<String> },

    #[error("Probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("Model artifact unavailable: {message}")]
    ArtifactUnavailable { message: String },

    #[error("Model artifact invalid: {message}")]
    ArtifactInvalid { message: String },
}

impl From<RiskError> for AppError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::InvalidRecord { .. } | RiskError::InvalidProbability { .. } => {
                AppError::InvalidInput(err.to_string())
            }
            RiskError::ArtifactUnavailable { .. } | RiskError::ArtifactInvalid { .. } => {
                AppError::ResourceUnavailable(err.to_string())
            }
        }
    }
}
