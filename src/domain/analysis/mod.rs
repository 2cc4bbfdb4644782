//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that rank alternatives with
//! Simple Additive Weighting (SAW) and measure how stable that ranking is.
//!
//! # Components
//!
//! - `InputValidator` - Shared gate for data, weights and alternative names
//! - `OutlierCapper` - IQR capping applied before normalization
//! - `Normalizer` - min-max, z-score and vector normalization per direction
//! - `SawScorer` - Weighted sum, stable ranking, percentage of top score
//! - `SensitivityAnalyzer` - Single-weight perturbation sweep
//! - `AlternativeComparator` - Raw side-by-side comparison of alternatives
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects beyond logging) and stateless.
//! Data supply and persistence live behind ports.

mod comparison;
mod criterion;
mod errors;
mod normalizer;
mod outliers;
mod preferences;
mod records;
mod scorer;
mod sensitivity;
mod validator;
mod weights;

// Re-export all public types
pub use comparison::{AlternativeComparator, AlternativeComparison, CriterionComparison};
pub use criterion::{
    Criteria, CriterionCatalog, CriterionSeries, CriterionType, Dataset, STUDY_DESTINATION_CRITERIA,
};
pub use errors::AnalysisError;
pub use normalizer::{NormalizationMethod, Normalizer};
pub use outliers::{IqrBounds, OutlierCapper, IQR_MULTIPLIER};
pub use preferences::{UserPreferences, MAX_PREFERENCE_WEIGHT, MIN_PREFERENCE_WEIGHT};
pub use records::{AnalysisRecord, SensitivityRecord};
pub use scorer::{
    MethodInfo, NormalizationConfig, SawScorer, ScoredResult, WeightTotal,
    MAX_REASONABLE_WEIGHT_TOTAL, MIN_REASONABLE_WEIGHT_TOTAL, SCORE_DECIMALS,
};
pub use sensitivity::{
    BaselineSummary, CriterionSensitivity, Methodology, OverallSensitivity, ScoreChanges,
    SensitivityAnalyzer, SensitivityDistribution, SensitivityLevel, SensitivityMetrics,
    SensitivityOptions, SensitivityReport, VariationOutcome, VariationResult, ANALYSIS_METHOD,
    DEFAULT_VARIATIONS, HIGH_SENSITIVITY_BELOW, LOW_SENSITIVITY_FROM, RANKING_CHANGE_CEILING,
    REVIEW_WEIGHT_BELOW, SCORE_CHANGE_CEILING,
};
pub use validator::InputValidator;
pub use weights::{criterion_of, weight_key, WeightSet, WEIGHT_KEY_SUFFIX};
