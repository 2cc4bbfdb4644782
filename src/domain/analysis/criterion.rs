//! Criteria - Direction-tagged value series and the catalog that tags them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::weights::weight_key;

/// Whether higher or lower raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher values are better.
    #[default]
    Benefit,
    /// Lower values are better.
    Cost,
}

impl CriterionType {
    /// Returns the display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }

    pub fn is_cost(&self) -> bool {
        matches!(self, CriterionType::Cost)
    }
}

/// One criterion's raw values, index-aligned with the alternative list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSeries {
    pub name: String,
    pub criterion_type: CriterionType,
    pub values: Vec<f64>,
}

impl CriterionSeries {
    /// Creates a new series.
    pub fn new(name: impl Into<String>, criterion_type: CriterionType, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            criterion_type,
            values,
        }
    }

    /// Creates a benefit series.
    pub fn benefit(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, CriterionType::Benefit, values)
    }

    /// Creates a cost series.
    pub fn cost(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(name, CriterionType::Cost, values)
    }

    /// Returns the weight key this series is scored with.
    pub fn weight_key(&self) -> String {
        weight_key(&self.name)
    }

    /// Returns a copy of this series with replaced values.
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        Self {
            name: self.name.clone(),
            criterion_type: self.criterion_type,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The criteria of one analysis, keyed and iterated by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria {
    series: BTreeMap<String, CriterionSeries>,
}

impl Criteria {
    /// Creates an empty criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series, replacing any series with the same name.
    pub fn insert(&mut self, series: CriterionSeries) -> Option<CriterionSeries> {
        self.series.insert(series.name.clone(), series)
    }

    /// Builder-style insert.
    pub fn with(mut self, series: CriterionSeries) -> Self {
        self.insert(series);
        self
    }

    /// Tags each raw column of a dataset with its direction from the catalog.
    pub fn from_dataset(dataset: &Dataset, catalog: &CriterionCatalog) -> Self {
        dataset
            .columns
            .iter()
            .map(|(name, values)| CriterionSeries::new(name.clone(), catalog.resolve(name), values.clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&CriterionSeries> {
        self.series.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionSeries> {
        self.series.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl FromIterator<CriterionSeries> for Criteria {
    fn from_iter<I: IntoIterator<Item = CriterionSeries>>(iter: I) -> Self {
        let mut criteria = Criteria::new();
        for series in iter {
            criteria.insert(series);
        }
        criteria
    }
}

/// Raw alternatives and untagged criterion columns, as a data source supplies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub alternatives: Vec<String>,
    pub columns: BTreeMap<String, Vec<f64>>,
}

impl Dataset {
    /// Creates a dataset with the given alternatives and no columns.
    pub fn new(alternatives: Vec<impl Into<String>>) -> Self {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
            columns: BTreeMap::new(),
        }
    }

    /// Adds a criterion column.
    pub fn with_column(mut self, criterion: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(criterion.into(), values);
        self
    }

    /// Returns the position of an alternative.
    pub fn position_of(&self, alternative: &str) -> Option<usize> {
        self.alternatives.iter().position(|a| a == alternative)
    }

    /// Returns the raw value of a criterion for an alternative.
    pub fn value(&self, criterion: &str, alternative: &str) -> Option<f64> {
        let index = self.position_of(alternative)?;
        self.columns.get(criterion)?.get(index).copied()
    }

    /// Tags every column with its direction.
    pub fn criteria(&self, catalog: &CriterionCatalog) -> Criteria {
        Criteria::from_dataset(self, catalog)
    }
}

/// Directions of the study destination criteria.
pub const STUDY_DESTINATION_CRITERIA: &[(&str, CriterionType)] = &[
    ("cost_of_living", CriterionType::Cost),
    ("university_ranking", CriterionType::Benefit),
    ("language_barrier", CriterionType::Cost),
    ("visa_difficulty", CriterionType::Cost),
    ("job_prospects", CriterionType::Benefit),
    ("climate_score", CriterionType::Benefit),
    ("safety_index", CriterionType::Benefit),
];

static STUDY_DESTINATION_CATALOG: Lazy<CriterionCatalog> = Lazy::new(|| {
    STUDY_DESTINATION_CRITERIA
        .iter()
        .map(|(name, direction)| (name.to_string(), *direction))
        .collect()
});

/// Maps criterion names to their direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionCatalog {
    directions: BTreeMap<String, CriterionType>,
}

impl CriterionCatalog {
    /// Creates a catalog with no known criteria.
    pub fn empty() -> Self {
        Self {
            directions: BTreeMap::new(),
        }
    }

    /// The catalog of the seven study destination criteria.
    pub fn study_destinations() -> Self {
        STUDY_DESTINATION_CATALOG.clone()
    }

    /// Sets the direction of a criterion.
    pub fn with(mut self, criterion: impl Into<String>, direction: CriterionType) -> Self {
        self.directions.insert(criterion.into(), direction);
        self
    }

    /// Looks up a criterion's direction.
    pub fn direction_of(&self, criterion: &str) -> Option<CriterionType> {
        self.directions.get(criterion).copied()
    }

    /// Resolves a criterion's direction, falling back to benefit.
    pub fn resolve(&self, criterion: &str) -> CriterionType {
        match self.direction_of(criterion) {
            Some(direction) => direction,
            None => {
                warn!(criterion = %criterion, "Criterion type not defined, assuming benefit");
                CriterionType::Benefit
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CriterionType)> {
        self.directions.iter().map(|(name, direction)| (name.as_str(), *direction))
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

impl Default for CriterionCatalog {
    fn default() -> Self {
        Self::study_destinations()
    }
}

impl FromIterator<(String, CriterionType)> for CriterionCatalog {
    fn from_iter<I: IntoIterator<Item = (String, CriterionType)>>(iter: I) -> Self {
        Self {
            directions: iter.into_iter().collect(),
        }
    }
}
