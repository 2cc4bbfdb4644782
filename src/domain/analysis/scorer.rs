//! SAW Scorer - Simple Additive Weighting over normalized criteria.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, error, info, warn};

use super::{
    AnalysisError, Criteria, CriterionCatalog, CriterionType, InputValidator,
    NormalizationMethod, Normalizer, OutlierCapper, WeightSet,
};
use crate::domain::foundation::{round_to, Percentage};

/// Decimal places kept on scores and contributions.
pub const SCORE_DECIMALS: i32 = 4;

/// Lowest weight total considered reasonable.
pub const MIN_REASONABLE_WEIGHT_TOTAL: f64 = 0.1;

/// Highest weight total considered reasonable.
pub const MAX_REASONABLE_WEIGHT_TOTAL: f64 = 100.0;

/// One alternative's outcome of a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub alternative: String,
    /// Weighted sum, rounded to 4 decimal places.
    pub score: f64,
    /// 1-based position after sorting by score.
    pub rank: usize,
    /// Score relative to the top score.
    pub percentage: Percentage,
    /// Weighted contribution of each criterion.
    pub criteria_scores: BTreeMap<String, f64>,
}

/// Scorer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    pub method: NormalizationMethod,
}

/// Whether the weights add up to a sensible total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTotal {
    pub total: f64,
    pub is_reasonable: bool,
}

/// Static description of the scoring method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: Vec<&'static str>,
    pub limitations: Vec<&'static str>,
    pub criteria_types: BTreeMap<String, CriterionType>,
}

struct WeightedRow {
    alternative: String,
    score: f64,
    criteria_scores: BTreeMap<String, f64>,
}

/// Simple Additive Weighting scorer.
///
/// Stateless apart from its configuration; `score` allocates everything it
/// needs, so one scorer can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SawScorer {
    config: NormalizationConfig,
}

impl SawScorer {
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }

    pub fn with_method(method: NormalizationMethod) -> Self {
        Self::new(NormalizationConfig { method })
    }

    pub fn method(&self) -> NormalizationMethod {
        self.config.method
    }

    /// Scores and ranks the alternatives.
    ///
    /// Pipeline: validate, cap outliers, normalize, weight, rank.
    ///
    /// # Errors
    /// - `AnalysisError::Validation` for malformed input
    /// - `AnalysisError::Computation` when normalization or weighting produces a
    ///   non-finite number
    pub fn score(
        &self,
        criteria: &Criteria,
        weights: &WeightSet,
        alternatives: &[String],
    ) -> Result<Vec<ScoredResult>, AnalysisError> {
        if let Err(err) = InputValidator::validate(criteria, weights, alternatives) {
            debug!(error = %err, "SAW input rejected");
            return Err(err.into());
        }

        let capped: Criteria = criteria
            .iter()
            .map(|series| series.with_values(OutlierCapper::cap(&series.values)))
            .collect();

        let normalized = Normalizer::normalize_criteria(&capped, self.config.method);
        if let Some((criterion, _)) = normalized
            .iter()
            .find(|(_, values)| values.iter().any(|v| !v.is_finite()))
        {
            let err = AnalysisError::computation(format!(
                "normalization of '{}' produced a non-finite value",
                criterion
            ));
            error!(error = %err, method = %self.config.method, "SAW analysis failed");
            return Err(err);
        }

        let rows = Self::weighted_scores(&normalized, weights, alternatives);
        if let Some(row) = rows.iter().find(|row| !row.score.is_finite()) {
            let err = AnalysisError::computation(format!(
                "weighted score of '{}' is not finite",
                row.alternative
            ));
            error!(error = %err, "SAW analysis failed");
            return Err(err);
        }

        let results = Self::rank(rows);

        info!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            method = %self.config.method,
            "SAW analysis completed"
        );

        Ok(results)
    }

    /// Sums `weight * normalized` per alternative.
    ///
    /// A criterion without a weight contributes zero and is logged once.
    fn weighted_scores(
        normalized: &BTreeMap<String, Vec<f64>>,
        weights: &WeightSet,
        alternatives: &[String],
    ) -> Vec<WeightedRow> {
        let resolved: Vec<(&str, &[f64], f64)> = normalized
            .iter()
            .map(|(criterion, values)| {
                let weight = match weights.for_criterion(criterion) {
                    Some(weight) => weight,
                    None => {
                        warn!(criterion = %criterion, "No weight found for criterion, contributing zero");
                        0.0
                    }
                };
                (criterion.as_str(), values.as_slice(), weight)
            })
            .collect();

        alternatives
            .iter()
            .enumerate()
            .map(|(i, alternative)| {
                let mut score = 0.0;
                let mut criteria_scores = BTreeMap::new();

                for (criterion, values, weight) in &resolved {
                    let contribution = weight * values[i];
                    score += contribution;
                    criteria_scores.insert(criterion.to_string(), contribution);
                }

                WeightedRow {
                    alternative: alternative.clone(),
                    score,
                    criteria_scores,
                }
            })
            .collect()
    }

    /// Stable-sorts by score descending and assigns ranks and percentages.
    ///
    /// Ties keep input order. A top score of zero or less gives every
    /// alternative 0%.
    fn rank(mut rows: Vec<WeightedRow>) -> Vec<ScoredResult> {
        rows.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let top_score = rows.first().map(|row| row.score).unwrap_or(1.0);

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| ScoredResult {
                percentage: Percentage::of(row.score, top_score),
                score: round_to(row.score, SCORE_DECIMALS),
                rank: i + 1,
                criteria_scores: row
                    .criteria_scores
                    .into_iter()
                    .map(|(criterion, value)| (criterion, round_to(value, SCORE_DECIMALS)))
                    .collect(),
                alternative: row.alternative,
            })
            .collect()
    }

    /// Checks whether the weights sum to a reasonable total.
    ///
    /// Weights do not need to sum to 1.
    pub fn check_weight_total(weights: &WeightSet) -> WeightTotal {
        let total = weights.total();
        WeightTotal {
            total,
            is_reasonable: (MIN_REASONABLE_WEIGHT_TOTAL..=MAX_REASONABLE_WEIGHT_TOTAL).contains(&total),
        }
    }

    /// Describes the method and the default criterion directions.
    pub fn method_info() -> MethodInfo {
        MethodInfo {
            name: "Simple Additive Weighting (SAW)",
            description: "A multi-criteria decision analysis method that calculates a weighted sum of normalized criteria values",
            advantages: vec![
                "Simple and intuitive to understand",
                "Computationally efficient",
                "Allows easy sensitivity analysis",
                "Transparent decision process",
            ],
            limitations: vec![
                "Assumes linear relationships between criteria",
                "May not handle extreme values well",
                "Sensitive to normalization method choice",
            ],
            criteria_types: CriterionCatalog::study_destinations()
                .iter()
                .map(|(name, direction)| (name.to_string(), direction))
                .collect(),
        }
    }
}
