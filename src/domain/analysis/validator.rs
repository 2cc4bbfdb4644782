//! Input Validator - Gate applied before any scoring computation.

use std::collections::HashSet;

use super::{Criteria, WeightSet};
use crate::domain::foundation::ValidationError;

/// Validation of analysis inputs.
pub struct InputValidator;

impl InputValidator {
    /// Checks that data, weights and alternatives are well-formed.
    ///
    /// # Errors
    /// - Any of the three inputs is empty
    /// - A criterion's length differs from the alternative count
    /// - A criterion value is NaN or infinite
    /// - A weight is NaN, infinite or negative
    /// - An alternative name appears twice
    pub fn validate(
        criteria: &Criteria,
        weights: &WeightSet,
        alternatives: &[String],
    ) -> Result<(), ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        if alternatives.is_empty() {
            return Err(ValidationError::empty_field("alternatives"));
        }

        let expected = alternatives.len();
        for series in criteria.iter() {
            if series.len() != expected {
                return Err(ValidationError::length_mismatch(
                    series.name.clone(),
                    expected,
                    series.len(),
                ));
            }

            if let Some((index, value)) = series
                .values
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite())
            {
                return Err(ValidationError::invalid_value(series.name.clone(), index, *value));
            }
        }

        for (key, value) in weights.iter() {
            if !value.is_finite() {
                return Err(ValidationError::invalid_weight(key, value));
            }
            if value < 0.0 {
                return Err(ValidationError::negative_weight(key, value));
            }
        }

        let mut seen = HashSet::with_capacity(alternatives.len());
        for name in alternatives {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::duplicate_alternative(name.clone()));
            }
        }

        Ok(())
    }
}
