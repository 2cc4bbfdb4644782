//! Errors surfaced by the analysis handlers.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::ResultStoreError;

/// Errors that can occur while running an analysis use case.
#[derive(Debug, Error)]
pub enum AnalysisHandlerError {
    /// The data source could not supply a dataset.
    #[error("Data source error: {0}")]
    DataSource(#[from] DomainError),

    /// The request itself is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// Scoring or the sensitivity sweep failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Results could not be persisted.
    #[error("Result store error: {0}")]
    Storage(#[from] ResultStoreError),
}

impl AnalysisHandlerError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisHandlerError::DataSource(err) => err.code,
            AnalysisHandlerError::InvalidRequest(_) => ErrorCode::ValidationFailed,
            AnalysisHandlerError::Analysis(err) => err.code(),
            AnalysisHandlerError::Storage(ResultStoreError::NotFound(_)) => ErrorCode::AnalysisNotFound,
            AnalysisHandlerError::Storage(_) => ErrorCode::StorageError,
        }
    }
}
