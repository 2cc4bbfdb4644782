//! CompareAlternativesHandler - Side-by-side view of selected alternatives.

use std::sync::Arc;

use tracing::debug;

use super::{AnalysisHandlerConfig, AnalysisHandlerError};
use crate::domain::analysis::{AlternativeComparator, AlternativeComparison};
use crate::domain::foundation::ValidationError;
use crate::ports::AnalysisDataSource;

/// Query comparing named alternatives.
#[derive(Debug, Clone, Default)]
pub struct CompareAlternativesQuery {
    pub alternatives: Vec<String>,
    /// Criteria to compare; every dataset column when absent.
    pub criteria: Option<Vec<String>>,
}

/// Handler for alternative comparisons.
pub struct CompareAlternativesHandler {
    data_source: Arc<dyn AnalysisDataSource>,
    config: AnalysisHandlerConfig,
}

impl CompareAlternativesHandler {
    pub fn new(data_source: Arc<dyn AnalysisDataSource>, config: AnalysisHandlerConfig) -> Self {
        Self { data_source, config }
    }

    pub async fn handle(
        &self,
        query: CompareAlternativesQuery,
    ) -> Result<AlternativeComparison, AnalysisHandlerError> {
        if query.alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives").into());
        }

        let dataset = self.data_source.load_dataset().await?;
        let comparison = AlternativeComparator::compare(
            &dataset,
            &self.config.catalog,
            &query.alternatives,
            query.criteria.as_deref(),
        )?;

        debug!(
            compared = comparison.alternatives.len(),
            missing = comparison.missing.len(),
            criteria = comparison.criteria.len(),
            "Compared alternatives"
        );

        Ok(comparison)
    }
}
