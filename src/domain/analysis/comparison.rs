//! Alternative Comparison - Side-by-side raw values for a chosen subset.
//!
//! Works on the raw dataset, not on normalized scores, so users can see the
//! actual figures behind a ranking.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::warn;

use super::{CriterionCatalog, CriterionType, Dataset};
use crate::domain::foundation::ValidationError;

/// Comparison view for a set of alternatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeComparison {
    /// Requested alternatives found in the dataset, in request order.
    pub alternatives: Vec<String>,
    /// Requested alternatives absent from the dataset.
    pub missing: Vec<String>,
    pub criteria: Vec<CriterionComparison>,
}

impl AlternativeComparison {
    pub fn criterion(&self, name: &str) -> Option<&CriterionComparison> {
        self.criteria.iter().find(|c| c.criterion == name)
    }
}

/// One criterion across the compared alternatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionComparison {
    pub criterion: String,
    pub criterion_type: CriterionType,
    pub values: BTreeMap<String, f64>,
    pub best: String,
    pub worst: String,
    pub mean: f64,
    pub range: f64,
    /// Alternatives ordered best-first for this criterion's direction.
    pub ranking: Vec<String>,
}

/// Builds comparison views.
pub struct AlternativeComparator;

impl AlternativeComparator {
    /// Compares the named alternatives on the given criteria.
    ///
    /// `criteria` of `None` compares every dataset column.
    ///
    /// # Edge Cases
    /// - Names not in the dataset: Listed in `missing`
    /// - Criteria not in the dataset: Skipped with a warning
    /// - Equal values: Earlier alternative in request order wins
    ///
    /// # Errors
    /// Fails when none of the named alternatives is in the dataset.
    pub fn compare(
        dataset: &Dataset,
        catalog: &CriterionCatalog,
        names: &[String],
        criteria: Option<&[String]>,
    ) -> Result<AlternativeComparison, ValidationError> {
        let (present, missing): (Vec<&String>, Vec<&String>) = names
            .iter()
            .partition(|name| dataset.position_of(name).is_some());

        if present.is_empty() {
            return Err(ValidationError::invalid_format(
                "alternatives",
                format!("none of the requested alternatives exist: {:?}", names),
            ));
        }

        let requested: Vec<&str> = match criteria {
            Some(list) => list
                .iter()
                .map(String::as_str)
                .filter(|name| {
                    let known = dataset.columns.contains_key(*name);
                    if !known {
                        warn!(criterion = %name, "Criterion not in dataset, skipping");
                    }
                    known
                })
                .collect(),
            None => dataset.columns.keys().map(String::as_str).collect(),
        };

        let comparisons = requested
            .into_iter()
            .filter_map(|criterion| Self::compare_criterion(dataset, catalog, criterion, &present))
            .collect();

        Ok(AlternativeComparison {
            alternatives: present.into_iter().cloned().collect(),
            missing: missing.into_iter().cloned().collect(),
            criteria: comparisons,
        })
    }

    fn compare_criterion(
        dataset: &Dataset,
        catalog: &CriterionCatalog,
        criterion: &str,
        alternatives: &[&String],
    ) -> Option<CriterionComparison> {
        let direction = catalog.resolve(criterion);
        let entries: Vec<(&String, f64)> = alternatives
            .iter()
            .filter_map(|name| dataset.value(criterion, name).map(|value| (*name, value)))
            .collect();

        if entries.is_empty() {
            return None;
        }

        let mut ranked = entries.clone();
        ranked.sort_by(|a, b| Self::best_first(direction, a.1, b.1));

        let best = ranked.first()?.0.clone();
        // Equally bad entries report the earliest requested one.
        let worst_value = ranked.last()?.1;
        let worst = ranked
            .iter()
            .find(|(_, value)| *value == worst_value)
            .map(|(name, _)| (*name).clone())?;

        let values: Vec<f64> = entries.iter().map(|(_, value)| *value).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(CriterionComparison {
            criterion: criterion.to_string(),
            criterion_type: direction,
            values: entries.iter().map(|(name, value)| ((*name).clone(), *value)).collect(),
            best,
            worst,
            mean: values.iter().sum::<f64>() / values.len() as f64,
            range: max - min,
            ranking: ranked.into_iter().map(|(name, _)| name.clone()).collect(),
        })
    }

    fn best_first(direction: CriterionType, a: f64, b: f64) -> Ordering {
        let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match direction {
            CriterionType::Cost => ordering,
            CriterionType::Benefit => ordering.reverse(),
        }
    }
}
