//! User preference weights for the study destination criteria.

use serde::{Deserialize, Serialize};

use super::weights::weight_key;
use super::WeightSet;
use crate::domain::foundation::ValidationError;

/// Smallest accepted preference weight.
pub const MIN_PREFERENCE_WEIGHT: f64 = 0.0;

/// Largest accepted preference weight.
pub const MAX_PREFERENCE_WEIGHT: f64 = 10.0;

fn default_weight() -> f64 {
    1.0
}

/// How much a user cares about each destination criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default = "default_weight")]
    pub cost_weight: f64,
    #[serde(default = "default_weight")]
    pub ranking_weight: f64,
    #[serde(default = "default_weight")]
    pub language_weight: f64,
    #[serde(default = "default_weight")]
    pub visa_weight: f64,
    #[serde(default = "default_weight")]
    pub job_weight: f64,
    #[serde(default = "default_weight")]
    pub climate_weight: f64,
    #[serde(default = "default_weight")]
    pub safety_weight: f64,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            cost_weight: default_weight(),
            ranking_weight: default_weight(),
            language_weight: default_weight(),
            visa_weight: default_weight(),
            job_weight: default_weight(),
            climate_weight: default_weight(),
            safety_weight: default_weight(),
        }
    }
}

impl UserPreferences {
    /// Pairs each preference field with the criterion it weights.
    fn entries(&self) -> [(&'static str, &'static str, f64); 7] {
        [
            ("cost_weight", "cost_of_living", self.cost_weight),
            ("ranking_weight", "university_ranking", self.ranking_weight),
            ("language_weight", "language_barrier", self.language_weight),
            ("visa_weight", "visa_difficulty", self.visa_weight),
            ("job_weight", "job_prospects", self.job_weight),
            ("climate_weight", "climate_score", self.climate_weight),
            ("safety_weight", "safety_index", self.safety_weight),
        ]
    }

    /// Checks every weight is a finite number in [0, 10].
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, _, value) in self.entries() {
            if !value.is_finite() || !(MIN_PREFERENCE_WEIGHT..=MAX_PREFERENCE_WEIGHT).contains(&value) {
                return Err(ValidationError::out_of_range(
                    field,
                    MIN_PREFERENCE_WEIGHT,
                    MAX_PREFERENCE_WEIGHT,
                    value,
                ));
            }
        }
        Ok(())
    }

    /// Converts to scorer weights keyed as `<criterion>_weight`.
    pub fn to_weight_set(&self) -> WeightSet {
        self.entries()
            .into_iter()
            .map(|(_, criterion, value)| (weight_key(criterion), value))
            .collect()
    }
}
