//! File-based Result Store Adapter
//!
//! Stores ranking runs and sensitivity sweeps as YAML files on disk.
//! Organized by analysis id for easy navigation and debugging.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::analysis::{AnalysisRecord, SensitivityRecord};
use crate::domain::foundation::AnalysisId;
use crate::ports::{AnalysisResultStore, ResultStoreError};

const ANALYSIS_FILE: &str = "analysis.yaml";
const SENSITIVITY_FILE: &str = "sensitivity.yaml";

/// File-based storage for analysis results
#[derive(Debug, Clone)]
pub struct FileResultStore {
    base_path: PathBuf,
}

impl FileResultStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileResultStore::new("./data/results");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_dir(&self, id: AnalysisId) -> PathBuf {
        self.base_path.join(id.to_string())
    }

    async fn write_yaml<T: Serialize>(
        &self,
        id: AnalysisId,
        file_name: &str,
        record: &T,
    ) -> Result<(), ResultStoreError> {
        let dir = self.record_dir(id);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?;

        let yaml = serde_yaml::to_string(record)
            .map_err(|e| ResultStoreError::SerializationFailed(e.to_string()))?;

        let path = dir.join(file_name);
        fs::write(&path, yaml)
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?;

        debug!(path = %path.display(), "Stored analysis record");
        Ok(())
    }

    async fn read_yaml<T: DeserializeOwned>(
        &self,
        id: AnalysisId,
        file_name: &str,
    ) -> Result<T, ResultStoreError> {
        let path = self.record_dir(id).join(file_name);
        if !path.exists() {
            return Err(ResultStoreError::NotFound(id));
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| ResultStoreError::DeserializationFailed(e.to_string()))
    }
}

#[async_trait]
impl AnalysisResultStore for FileResultStore {
    async fn save_analysis(&self, record: &AnalysisRecord) -> Result<(), ResultStoreError> {
        self.write_yaml(record.id, ANALYSIS_FILE, record).await
    }

    async fn load_analysis(&self, id: AnalysisId) -> Result<AnalysisRecord, ResultStoreError> {
        self.read_yaml(id, ANALYSIS_FILE).await
    }

    async fn save_sensitivity(&self, record: &SensitivityRecord) -> Result<(), ResultStoreError> {
        self.write_yaml(record.id, SENSITIVITY_FILE, record).await
    }

    async fn load_sensitivity(&self, id: AnalysisId) -> Result<SensitivityRecord, ResultStoreError> {
        self.read_yaml(id, SENSITIVITY_FILE).await
    }

    async fn list_analyses(&self) -> Result<Vec<AnalysisId>, ResultStoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ResultStoreError::IoError(e.to_string()))?
        {
            // Directories not named by an id are not ours
            let Some(id) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<AnalysisId>().ok())
            else {
                continue;
            };
            if entry.path().join(ANALYSIS_FILE).exists() {
                ids.push(id);
            }
        }

        ids.sort_by_key(|id| id.to_string());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{
        Criteria, CriterionSeries, NormalizationMethod, SawScorer, SensitivityAnalyzer, WeightSet,
    };
    use tempfile::TempDir;

    fn inputs() -> (Criteria, WeightSet, Vec<String>) {
        let criteria = Criteria::new()
            .with(CriterionSeries::cost("cost_of_living", vec![70.0, 65.0, 80.0]))
            .with(CriterionSeries::benefit("safety_index", vec![8.5, 8.0, 9.0]));
        let weights = WeightSet::new()
            .with("cost_of_living_weight", 1.5)
            .with("safety_index_weight", 1.0);
        let names = vec!["Canada".to_string(), "Germany".to_string(), "Japan".to_string()];
        (criteria, weights, names)
    }

    fn analysis_record() -> AnalysisRecord {
        let (criteria, weights, names) = inputs();
        let results = SawScorer::default().score(&criteria, &weights, &names).unwrap();
        AnalysisRecord::new(Some("session-1".to_string()), weights, NormalizationMethod::MinMax, results)
    }

    #[tokio::test]
    async fn test_file_store_save_and_load_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path());
        let record = analysis_record();

        store.save_analysis(&record).await.unwrap();
        let loaded = store.load_analysis(record.id).await.unwrap();

        assert_eq!(loaded, record);
        assert!(temp_dir
            .path()
            .join(record.id.to_string())
            .join(ANALYSIS_FILE)
            .exists());
    }

    #[tokio::test]
    async fn test_file_store_load_nonexistent_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path());

        let result = store.load_analysis(AnalysisId::new()).await;

        assert!(matches!(result, Err(ResultStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_save_and_load_sensitivity() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path());
        let (criteria, weights, names) = inputs();
        let report = SensitivityAnalyzer::default()
            .analyze(&criteria, &weights, &names, &[-0.1, 0.1])
            .unwrap();
        let record = SensitivityRecord::new(None, report);

        store.save_sensitivity(&record).await.unwrap();
        let loaded = store.load_sensitivity(record.id).await.unwrap();

        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.report.baseline, record.report.baseline);
        assert_eq!(loaded.report.criteria.len(), 2);
        assert_eq!(loaded.report.recommendations, record.report.recommendations);
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_fails_to_deserialize() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path());
        let id = AnalysisId::new();
        let dir = temp_dir.path().join(id.to_string());
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(ANALYSIS_FILE), "results: [unterminated").unwrap();

        let result = store.load_analysis(id).await;

        assert!(matches!(result, Err(ResultStoreError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_file_store_lists_only_analysis_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path());
        let record = analysis_record();
        store.save_analysis(&record).await.unwrap();
        std::fs::create_dir_all(temp_dir.path().join("scratch")).unwrap();

        let ids = store.list_analyses().await.unwrap();

        assert_eq!(ids, vec![record.id]);
    }

    #[tokio::test]
    async fn test_file_store_list_missing_base_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResultStore::new(temp_dir.path().join("absent"));

        assert!(store.list_analyses().await.unwrap().is_empty());
    }
}
