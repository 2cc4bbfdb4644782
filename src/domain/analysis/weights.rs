//! Weight sets keyed as `<criterion>_weight`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suffix joining a criterion name to its weight key.
pub const WEIGHT_KEY_SUFFIX: &str = "_weight";

/// Returns the weight key for a criterion.
pub fn weight_key(criterion: &str) -> String {
    format!("{}{}", criterion, WEIGHT_KEY_SUFFIX)
}

/// Returns the criterion a weight key refers to, if it carries the suffix.
pub fn criterion_of(key: &str) -> Option<&str> {
    key.strip_suffix(WEIGHT_KEY_SUFFIX)
}

/// User-supplied weights. Lookups are explicit: an absent key is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightSet(BTreeMap<String, f64>);

impl WeightSet {
    /// Creates an empty weight set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a weight, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(key.into(), value)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a weight by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Looks up the weight for a criterion name.
    pub fn for_criterion(&self, criterion: &str) -> Option<f64> {
        self.get(&weight_key(criterion))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns a copy with one weight multiplied by `factor`.
    ///
    /// Returns `None` when the key is absent.
    pub fn scaled(&self, key: &str, factor: f64) -> Option<WeightSet> {
        let current = self.get(key)?;
        let mut scaled = self.clone();
        scaled.insert(key, current * factor);
        Some(scaled)
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
