//! Normalizer - Scales raw criterion values so higher is always better.
//!
//! Three interchangeable methods are supported. All of them return 1.0 for
//! every alternative when a criterion is constant, instead of dividing by zero.
//!
//! Min-max output is always within [0, 1]. Vector normalization of a cost
//! criterion subtracts from the largest normalized value, which keeps results
//! non-negative but does not bound them to [0, 1].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{Criteria, CriterionType};
use crate::domain::foundation::ValidationError;

/// Normalization method used by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    #[default]
    MinMax,
    ZScore,
    Vector,
}

impl NormalizationMethod {
    /// Returns the configuration label for this method.
    pub fn label(&self) -> &'static str {
        match self {
            NormalizationMethod::MinMax => "min_max",
            NormalizationMethod::ZScore => "z_score",
            NormalizationMethod::Vector => "vector",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for NormalizationMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "min_max" => Ok(NormalizationMethod::MinMax),
            "z_score" => Ok(NormalizationMethod::ZScore),
            "vector" => Ok(NormalizationMethod::Vector),
            other => Err(ValidationError::invalid_format(
                "normalization_method",
                format!("unknown normalization method: {}", other),
            )),
        }
    }
}

/// Normalization functions.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes one criterion's values with the given method.
    ///
    /// # Edge Cases
    /// - Empty values: Returns empty Vec
    /// - Constant values: Returns 1.0 for every alternative
    pub fn normalize(
        values: &[f64],
        criterion_type: CriterionType,
        method: NormalizationMethod,
    ) -> Vec<f64> {
        if values.is_empty() {
            return Vec::new();
        }
        if Self::is_constant(values) {
            return vec![1.0; values.len()];
        }

        match method {
            NormalizationMethod::MinMax => Self::min_max(values, criterion_type),
            NormalizationMethod::ZScore => Self::z_score(values, criterion_type),
            NormalizationMethod::Vector => Self::vector(values, criterion_type),
        }
    }

    /// Normalizes every criterion, keyed by criterion name.
    pub fn normalize_criteria(
        criteria: &Criteria,
        method: NormalizationMethod,
    ) -> BTreeMap<String, Vec<f64>> {
        criteria
            .iter()
            .map(|series| {
                (
                    series.name.clone(),
                    Self::normalize(&series.values, series.criterion_type, method),
                )
            })
            .collect()
    }

    /// Benefit: `(v - min) / (max - min)`. Cost: `(max - v) / (max - min)`.
    pub fn min_max(values: &[f64], criterion_type: CriterionType) -> Vec<f64> {
        let (min, max) = match Self::min_max_of(values) {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };
        if max == min {
            return vec![1.0; values.len()];
        }

        // Halving keeps the span finite when `max - min` exceeds f64::MAX.
        let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
        let (min, max) = (min * scale, max * scale);
        let range = max - min;
        match criterion_type {
            CriterionType::Cost => values.iter().map(|v| (max - v * scale) / range).collect(),
            CriterionType::Benefit => values.iter().map(|v| (v * scale - min) / range).collect(),
        }
    }

    /// Population z-scores rescaled to [0, 1]; cost criteria inverted after rescaling.
    pub fn z_score(values: &[f64], criterion_type: CriterionType) -> Vec<f64> {
        if values.is_empty() {
            return Vec::new();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        if std == 0.0 {
            return vec![1.0; values.len()];
        }

        let z_scores: Vec<f64> = values.iter().map(|v| (v - mean) / std).collect();
        let rescaled = Self::min_max(&z_scores, CriterionType::Benefit);

        match criterion_type {
            CriterionType::Cost => rescaled.into_iter().map(|v| 1.0 - v).collect(),
            CriterionType::Benefit => rescaled,
        }
    }

    /// Divides by the Euclidean norm; cost criteria become `max_norm - v`.
    pub fn vector(values: &[f64], criterion_type: CriterionType) -> Vec<f64> {
        let sum_of_squares: f64 = values.iter().map(|v| v * v).sum();
        if sum_of_squares == 0.0 {
            return vec![1.0; values.len()];
        }

        let norm = sum_of_squares.sqrt();
        let normalized: Vec<f64> = values.iter().map(|v| v / norm).collect();

        match criterion_type {
            CriterionType::Cost => {
                let max_norm = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                normalized.into_iter().map(|v| max_norm - v).collect()
            }
            CriterionType::Benefit => normalized,
        }
    }

    fn min_max_of(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        Some(
            values
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }

    fn is_constant(values: &[f64]) -> bool {
        match values.first() {
            Some(first) => values.iter().all(|v| v == first),
            None => true,
        }
    }
}
