//! In-Memory Dataset Source
//!
//! Serves a dataset held in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::Dataset;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::AnalysisDataSource;

/// In-memory dataset source
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    dataset: Arc<RwLock<Option<Dataset>>>,
}

impl InMemoryDataSource {
    /// Create an empty source; loading fails until a dataset is set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source serving the given dataset
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(Some(dataset))),
        }
    }

    /// Replace the served dataset
    pub async fn set_dataset(&self, dataset: Dataset) {
        *self.dataset.write().await = Some(dataset);
    }
}

#[async_trait]
impl AnalysisDataSource for InMemoryDataSource {
    async fn load_dataset(&self) -> Result<Dataset, DomainError> {
        self.dataset
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::new(ErrorCode::DatasetNotFound, "No dataset loaded"))
    }
}
