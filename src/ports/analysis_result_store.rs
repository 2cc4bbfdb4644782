//! Analysis result store port.
//!
//! Persists ranking runs and sensitivity sweeps so they can be reloaded by id.

use async_trait::async_trait;

use crate::domain::analysis::{AnalysisRecord, SensitivityRecord};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode};

/// Errors that can occur during result storage operations
#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("No stored analysis with id: {0}")]
    NotFound(AnalysisId),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<ResultStoreError> for DomainError {
    fn from(err: ResultStoreError) -> Self {
        let code = match &err {
            ResultStoreError::NotFound(_) => ErrorCode::AnalysisNotFound,
            ResultStoreError::SerializationFailed(_) | ResultStoreError::DeserializationFailed(_) => {
                ErrorCode::SerializationError
            }
            ResultStoreError::IoError(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for persisting and loading analysis results
#[async_trait]
pub trait AnalysisResultStore: Send + Sync {
    /// Save a ranking run, replacing any record with the same id.
    async fn save_analysis(&self, record: &AnalysisRecord) -> Result<(), ResultStoreError>;

    /// Load a ranking run.
    ///
    /// # Errors
    /// Returns `ResultStoreError::NotFound` if no record exists
    async fn load_analysis(&self, id: AnalysisId) -> Result<AnalysisRecord, ResultStoreError>;

    /// Save a sensitivity sweep, replacing any record with the same id.
    async fn save_sensitivity(&self, record: &SensitivityRecord) -> Result<(), ResultStoreError>;

    /// Load a sensitivity sweep.
    ///
    /// # Errors
    /// Returns `ResultStoreError::NotFound` if no record exists
    async fn load_sensitivity(&self, id: AnalysisId) -> Result<SensitivityRecord, ResultStoreError>;

    /// Ids of all stored ranking runs.
    async fn list_analyses(&self) -> Result<Vec<AnalysisId>, ResultStoreError>;
}
