//! RunSensitivityHandler - Weight perturbation sweep over the data source.

use std::sync::Arc;

use tracing::info;

use super::{AnalysisHandlerConfig, AnalysisHandlerError};
use crate::domain::analysis::{
    NormalizationMethod, SawScorer, SensitivityAnalyzer, SensitivityOptions, SensitivityRecord,
    WeightSet,
};
use crate::ports::{AnalysisDataSource, AnalysisResultStore};

/// Command to run a sensitivity sweep.
#[derive(Debug, Clone, Default)]
pub struct RunSensitivityCommand {
    pub weights: WeightSet,
    /// Overrides the configured variations.
    pub variations: Option<Vec<f64>>,
    /// Restricts the sweep to these weight keys.
    pub focus: Option<Vec<String>>,
    /// Overrides the configured normalization method.
    pub method: Option<NormalizationMethod>,
    pub session: Option<String>,
    pub persist: bool,
}

/// Handler for sensitivity sweeps.
pub struct RunSensitivityHandler {
    data_source: Arc<dyn AnalysisDataSource>,
    result_store: Arc<dyn AnalysisResultStore>,
    config: AnalysisHandlerConfig,
}

impl RunSensitivityHandler {
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
        cmd: RunSensitivityCommand,
    ) -> Result<SensitivityRecord, AnalysisHandlerError> {
        let dataset = self.data_source.load_dataset().await?;
        let criteria = dataset.criteria(&self.config.catalog);

        let options = SensitivityOptions {
            variations: cmd.variations.unwrap_or_else(|| self.config.variations.clone()),
            focus: cmd.focus,
        };
        let method = cmd.method.unwrap_or(self.config.normalization);
        let analyzer = SensitivityAnalyzer::new(SawScorer::with_method(method));

        let report = analyzer.analyze_with(&criteria, &cmd.weights, &dataset.alternatives, &options)?;
        let record = SensitivityRecord::new(cmd.session, report);

        if cmd.persist {
            self.result_store.save_sensitivity(&record).await?;
        }

        info!(
            analysis_id = %record.id,
            stability = record.report.overall.overall_stability_score,
            most_sensitive = record.report.overall.most_sensitive_criterion.as_deref().unwrap_or_default(),
            persisted = cmd.persist,
            "Sensitivity analysis completed"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryDataSource, InMemoryResultStore};
    use crate::domain::analysis::{Dataset, UserPreferences, DEFAULT_VARIATIONS};
    use crate::domain::foundation::ErrorCode;

    fn countries() -> Dataset {
        Dataset::new(vec!["Canada", "Germany", "Japan", "Australia"])
            .with_column("cost_of_living", vec![7.0, 5.0, 8.0, 7.5])
            .with_column("job_prospects", vec![8.0, 7.5, 6.5, 7.0])
            .with_column("safety_index", vec![8.5, 8.0, 9.0, 8.0])
    }

    fn handler(store: Arc<InMemoryResultStore>, config: AnalysisHandlerConfig) -> RunSensitivityHandler {
        RunSensitivityHandler::new(
            Arc::new(InMemoryDataSource::with_dataset(countries())),
            store,
            config,
        )
    }

    fn weights() -> WeightSet {
        WeightSet::new()
            .with("cost_of_living_weight", 1.5)
            .with("job_prospects_weight", 1.0)
            .with("safety_index_weight", 1.0)
    }

    #[tokio::test]
    async fn uses_configured_variations_by_default() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunSensitivityCommand {
            weights: weights(),
            ..RunSensitivityCommand::default()
        };

        let record = handler(store, AnalysisHandlerConfig::default()).handle(cmd).await.unwrap();

        assert_eq!(record.report.methodology.variations, DEFAULT_VARIATIONS.to_vec());
        assert_eq!(record.report.criteria.len(), 3);
        for sweep in &record.report.criteria {
            assert_eq!(sweep.variations.len(), DEFAULT_VARIATIONS.len());
        }
    }

    #[tokio::test]
    async fn command_overrides_variations_and_focus() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunSensitivityCommand {
            weights: weights(),
            variations: Some(vec![-0.5, 0.5]),
            focus: Some(vec!["safety_index_weight".to_string(), "visa_difficulty_weight".to_string()]),
            ..RunSensitivityCommand::default()
        };

        let record = handler(store, AnalysisHandlerConfig::default()).handle(cmd).await.unwrap();

        assert_eq!(record.report.criteria.len(), 1);
        assert_eq!(record.report.criteria[0].criterion, "safety_index");
        assert_eq!(record.report.criteria[0].variations.len(), 2);
    }

    #[tokio::test]
    async fn config_method_reaches_methodology() {
        let store = Arc::new(InMemoryResultStore::new());
        let config = AnalysisHandlerConfig {
            normalization: NormalizationMethod::ZScore,
            ..AnalysisHandlerConfig::default()
        };
        let cmd = RunSensitivityCommand {
            weights: weights(),
            variations: Some(vec![0.0]),
            ..RunSensitivityCommand::default()
        };

        let record = handler(store, config).handle(cmd).await.unwrap();

        assert_eq!(record.report.methodology.normalization, NormalizationMethod::ZScore);
        assert_eq!(record.report.overall.overall_stability_score, 100.0);
    }

    #[tokio::test]
    async fn persists_when_requested() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunSensitivityCommand {
            weights: UserPreferences::default().to_weight_set(),
            variations: Some(vec![0.1]),
            session: Some("s-42".to_string()),
            persist: true,
            ..RunSensitivityCommand::default()
        };

        let record = handler(store.clone(), AnalysisHandlerConfig::default())
            .handle(cmd)
            .await
            .unwrap();

        let stored = store.load_sensitivity(record.id).await.unwrap();
        assert_eq!(stored.session.as_deref(), Some("s-42"));
        assert_eq!(store.sensitivity_count().await, 1);
    }

    #[tokio::test]
    async fn negative_base_weight_fails_before_sweep() {
        let store = Arc::new(InMemoryResultStore::new());
        let cmd = RunSensitivityCommand {
            weights: weights().with("job_prospects_weight", -1.0),
            ..RunSensitivityCommand::default()
        };

        let err = handler(store, AnalysisHandlerConfig::default()).handle(cmd).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
