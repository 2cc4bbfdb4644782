//! RunAnalysisHandler - Ranks the data source's alternatives with SAW.

use std::sync::Arc;

use tracing::{info, warn};

use super::{AnalysisHandlerConfig, AnalysisHandlerError};
use crate::domain::analysis::{
    AnalysisRecord, NormalizationMethod, SawScorer, WeightSet, WeightTotal,
};
use crate::ports::{AnalysisDataSource, AnalysisResultStore};

/// Command to rank alternatives.
#[derive(Debug, Clone, Default)]
pub struct RunAnalysisCommand {
    pub weights: WeightSet,
    /// Overrides the configured normalization method.
    pub method: Option<NormalizationMethod>,
    pub session: Option<String>,
    /// Store the record in the result store.
    pub persist: bool,
}

/// Result of a ranking run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub record: AnalysisRecord,
    pub weight_total: WeightTotal,
}

/// Handler for ranking runs.
pub struct RunAnalysisHandler {
    data_source: Arc<dyn AnalysisDataSource>,
    result_store: Arc<dyn AnalysisResultStore>,
    config: AnalysisHandlerConfig,
}

impl RunAnalysisHandler {
    pub fn new(
        data_source: Arc<dyn AnalysisDataSource>,
        result_store: Arc<dyn AnalysisResultStore>,
        config: AnalysisHandlerConfig,
    ) -> Self {
        Self {
            data_source,
            result_store,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: RunAnalysisCommand,
    ) -> Result<RunAnalysisResult, AnalysisHandlerError> {
        // 1. Load and tag the dataset
        let dataset = self.data_source.load_dataset().await?;
        let criteria = dataset.criteria(&self.config.catalog);

        // 2. Sanity-check the weights
        let weight_total = SawScorer::check_weight_total(&cmd.weights);
        if !weight_total.is_reasonable {
            warn!(total = weight_total.total, "Weight total is outside the reasonable range");
        }

        // 3. Score
        let method = cmd.method.unwrap_or(self.config.normalization);
        let results = SawScorer::with_method(method).score(&criteria, &cmd.weights, &dataset.alternatives)?;

        let record = AnalysisRecord::new(cmd.session, cmd.weights, method, results);

        // 4. Persist
        if cmd.persist {
            self.result_store.save_analysis(&record).await?;
        }

        info!(
            analysis_id = %record.id,
            method = %method,
            top = record.top().map(|r| r.alternative.as_str()).unwrap_or_default(),
            persisted = cmd.persist,
            "Ranking analysis completed"
        );

        Ok(RunAnalysisResult { record, weight_total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDataSource, InMemoryResultStore};
    use crate::domain::analysis::{AnalysisError, Dataset, SensitivityRecord, UserPreferences};
    use crate::domain::foundation::{AnalysisId, ErrorCode};
    use crate::ports::ResultStoreError;
    use async_trait::async_trait;

    struct FailingResultStore;

    #[async_trait]
    impl AnalysisResultStore for FailingResultStore {
        async fn save_analysis(&self, _record: &AnalysisRecord) -> Result<(), ResultStoreError> {
            Err(ResultStoreError::IoError("Simulated save failure".to_string()))
        }

        async fn load_analysis(&self, id: AnalysisId) -> Result<AnalysisRecord, ResultStoreError> {
            Err(ResultStoreError::NotFound(id))
        }

        async fn save_sensitivity(&self, _record: &SensitivityRecord) -> Result<(), ResultStoreError> {
            Err(ResultStoreError::IoError("Simulated save failure".to_string()))
        }

        async fn load_sensitivity(&self, id: AnalysisId) -> Result<SensitivityRecord, ResultStoreError> {
            Err(ResultStoreError::NotFound(id))
        }

        async fn list_analyses(&self) -> Result<Vec<AnalysisId>, ResultStoreError> {
            Ok(Vec::new())
        }
    }

    fn countries() -> Dataset {
        Dataset::new(vec!["Canada", "Germany", "Japan"])
            .with_column("cost_of_living", vec![7.0, 5.0, 8.0])
            .with_column("university_ranking", vec![8.0, 7.5, 8.5])
            .with_column("safety_index", vec![8.5, 8.0, 9.0])
    }

    fn handler(store: Arc<dyn AnalysisResultStore>) -> RunAnalysisHandler {
        RunAnalysisHandler::new(
            Arc::new(InMemoryDataSource::with_dataset(countries())),
            store,
            AnalysisHandlerConfig::default(),
        )
    }

    fn command(persist: bool) -> RunAnalysisCommand {
        RunAnalysisCommand {
            weights: UserPreferences::default().to_weight_set(),
            persist,
            ..RunAnalysisCommand::default()
        }
    }

    #[tokio::test]
    async fn ranks_every_alternative() {
        let store = Arc::new(InMemoryResultStore::new());
        let result = handler(store.clone()).handle(command(false)).await.unwrap();

        let ranks: Vec<usize> = result.record.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(result.record.results[0].percentage.value(), 100.0);
        assert_eq!(result.record.method, NormalizationMethod::MinMax);
        assert!(result.weight_total.is_reasonable);
        assert_eq!(store.analysis_count().await, 0);
    }

    #[tokio::test]
    async fn persists_when_requested() {
        let store = Arc::new(InMemoryResultStore::new());
        let result = handler(store.clone()).handle(command(true)).await.unwrap();

        let stored = store.load_analysis(result.record.id).await.unwrap();
        assert_eq!(stored, result.record);
    }

    #[tokio::test]
    async fn method_override_is_recorded() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunAnalysisCommand {
            method: Some(NormalizationMethod::Vector),
            ..command(false)
        };

        let result = handler(store).handle(cmd).await.unwrap();

        assert_eq!(result.record.method, NormalizationMethod::Vector);
    }

    #[tokio::test]
    async fn empty_weights_fail_validation() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunAnalysisCommand::default();

        let err = handler(store).handle(cmd).await.unwrap_err();

        assert!(matches!(err, AnalysisHandlerError::Analysis(AnalysisError::Validation(_))));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn missing_dataset_is_reported() {
        let handler = RunAnalysisHandler::new(
            Arc::new(InMemoryDataSource::new()),
            Arc::new(InMemoryResultStore::new()),
            AnalysisHandlerConfig::default(),
        );

        let err = handler.handle(command(false)).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::DatasetNotFound);
    }

    #[tokio::test]
    async fn store_failure_is_surfaced() {
        let err = handler(Arc::new(FailingResultStore)).handle(command(true)).await.unwrap_err();

        assert!(matches!(err, AnalysisHandlerError::Storage(ResultStoreError::IoError(_))));
    }
}
