//! Analysis error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failure of a scoring or sensitivity run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Malformed or inconsistent input. Never retried.
    #[error("Invalid analysis input: {0}")]
    Validation(#[from] ValidationError),

    /// Unexpected numeric or internal failure.
    #[error("Analysis computation failed: {0}")]
    Computation(String),
}

impl AnalysisError {
    pub fn computation(message: impl Into<String>) -> Self {
        AnalysisError::Computation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Validation(_) => ErrorCode::ValidationFailed,
            AnalysisError::Computation(_) => ErrorCode::ComputationFailed,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
