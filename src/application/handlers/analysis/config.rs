//! Settings shared by the analysis handlers.

use crate::domain::analysis::{CriterionCatalog, NormalizationMethod, DEFAULT_VARIATIONS};

/// Settings applied when a command does not override them.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisHandlerConfig {
    pub normalization: NormalizationMethod,
    pub variations: Vec<f64>,
    pub catalog: CriterionCatalog,
}

impl Default for AnalysisHandlerConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationMethod::default(),
            variations: DEFAULT_VARIATIONS.to_vec(),
            catalog: CriterionCatalog::default(),
        }
    }
}
