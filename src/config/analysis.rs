//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{CriterionCatalog, CriterionType, NormalizationMethod, DEFAULT_VARIATIONS};

/// Scoring and sensitivity configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Normalization method (`min_max`, `z_score` or `vector`)
    #[serde(default)]
    pub normalization_method: NormalizationMethod,

    /// Sensitivity variations (comma-separated fractions, e.g. `-0.2,0.2`)
    pub variations: Option<String>,

    /// Extra cost criteria (comma-separated), added to the built-in catalog
    pub cost_criteria: Option<String>,

    /// Extra benefit criteria (comma-separated), added to the built-in catalog
    pub benefit_criteria: Option<String>,
}

fn split_list(value: &Option<String>) -> Vec<String> {
    value
        .as_ref()
        .map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl AnalysisConfig {
    /// Get the sensitivity variations, falling back to the defaults
    pub fn variations_list(&self) -> Result<Vec<f64>, ValidationError> {
        let entries = split_list(&self.variations);
        if entries.is_empty() {
            return Ok(DEFAULT_VARIATIONS.to_vec());
        }

        entries
            .iter()
            .map(|entry| {
                entry
                    .parse::<f64>()
                    .map_err(|_| ValidationError::InvalidVariation(entry.clone()))
            })
            .collect()
    }

    /// Get the criterion catalog with configured overrides applied
    pub fn catalog(&self) -> CriterionCatalog {
        let with_costs = split_list(&self.cost_criteria)
            .into_iter()
            .fold(CriterionCatalog::study_destinations(), |catalog, criterion| {
                catalog.with(criterion, CriterionType::Cost)
            });

        split_list(&self.benefit_criteria)
            .into_iter()
            .fold(with_costs, |catalog, criterion| catalog.with(criterion, CriterionType::Benefit))
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for variation in self.variations_list()? {
            if !variation.is_finite() || variation <= -1.0 {
                return Err(ValidationError::VariationOutOfRange(variation));
            }
        }

        let benefits = split_list(&self.benefit_criteria);
        if let Some(conflict) = split_list(&self.cost_criteria)
            .into_iter()
            .find(|criterion| benefits.contains(criterion))
        {
            return Err(ValidationError::ConflictingCriterionType(conflict));
        }

        Ok(())
    }
}
