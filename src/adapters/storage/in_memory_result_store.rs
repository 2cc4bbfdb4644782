//! In-Memory Result Store Adapter
//!
//! Stores analysis results in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::{AnalysisRecord, SensitivityRecord};
use crate::domain::foundation::AnalysisId;
use crate::ports::{AnalysisResultStore, ResultStoreError};

/// In-memory storage for analysis results
#[derive(Debug, Clone)]
pub struct InMemoryResultStore {
    analyses: Arc<RwLock<HashMap<AnalysisId, AnalysisRecord>>>,
    sensitivities: Arc<RwLock<HashMap<AnalysisId, SensitivityRecord>>>,
}

impl InMemoryResultStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            analyses: Arc::new(RwLock::new(HashMap::new())),
            sensitivities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.analyses.write().await.clear();
        self.sensitivities.write().await.clear();
    }

    /// Get the number of stored ranking runs
    pub async fn analysis_count(&self) -> usize {
        self.analyses.read().await.len()
    }

    /// Get the number of stored sensitivity sweeps
    pub async fn sensitivity_count(&self) -> usize {
        self.sensitivities.read().await.len()
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisResultStore for InMemoryResultStore {
    async fn save_analysis(&self, record: &AnalysisRecord) -> Result<(), ResultStoreError> {
        let mut analyses = self.analyses.write().await;
        analyses.insert(record.id, record.clone());
        Ok(())
    }

    async fn load_analysis(&self, id: AnalysisId) -> Result<AnalysisRecord, ResultStoreError> {
        let analyses = self.analyses.read().await;
        analyses.get(&id).cloned().ok_or(ResultStoreError::NotFound(id))
    }

    async fn save_sensitivity(&self, record: &SensitivityRecord) -> Result<(), ResultStoreError> {
        let mut sensitivities = self.sensitivities.write().await;
        sensitivities.insert(record.id, record.clone());
        Ok(())
    }

    async fn load_sensitivity(&self, id: AnalysisId) -> Result<SensitivityRecord, ResultStoreError> {
        let sensitivities = self.sensitivities.read().await;
        sensitivities
            .get(&id)
            .cloned()
            .ok_or(ResultStoreError::NotFound(id))
    }

    async fn list_analyses(&self) -> Result<Vec<AnalysisId>, ResultStoreError> {
        let analyses = self.analyses.read().await;
        let mut ids: Vec<AnalysisId> = analyses.keys().copied().collect();
        ids.sort_by_key(|id| id.to_string());
        Ok(ids)
    }
}
