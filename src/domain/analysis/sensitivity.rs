//! Sensitivity Analyzer - Weight perturbation sweep around a baseline ranking.
//!
//! Each weight is scaled by `(1 + variation)` on its own while every other
//! weight stays fixed, and the full scoring pipeline is rerun. The rerun is
//! compared to the baseline to measure how much rankings and scores move.
//!
//! A variation that fails to score becomes a [`VariationOutcome::Failed`]
//! entry; the rest of the sweep continues.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

use super::weights::criterion_of;
use super::{AnalysisError, Criteria, NormalizationMethod, SawScorer, ScoredResult, WeightSet};
use crate::domain::foundation::{round_to, Timestamp};

/// Variations applied when the caller does not supply any.
pub const DEFAULT_VARIATIONS: [f64; 7] = [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3];

/// Mean ranking-change count treated as fully unstable.
///
/// Fixed reference value; it does not scale with the number of alternatives.
pub const RANKING_CHANGE_CEILING: f64 = 10.0;

/// Mean absolute score change treated as fully unstable.
pub const SCORE_CHANGE_CEILING: f64 = 2.0;

/// Stability below this is high sensitivity.
pub const HIGH_SENSITIVITY_BELOW: f64 = 70.0;

/// Stability at or above this is low sensitivity.
pub const LOW_SENSITIVITY_FROM: f64 = 85.0;

/// Stability below this earns a per-criterion review recommendation.
pub const REVIEW_WEIGHT_BELOW: f64 = 60.0;

/// Name recorded in the report methodology.
pub const ANALYSIS_METHOD: &str = "Weight Variation Analysis";

const RANKING_PREVIEW_LEN: usize = 5;

/// Sweep options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityOptions {
    pub variations: Vec<f64>,
    /// Restricts the sweep to these weight keys. `None` sweeps every key.
    pub focus: Option<Vec<String>>,
}

impl Default for SensitivityOptions {
    fn default() -> Self {
        Self {
            variations: DEFAULT_VARIATIONS.to_vec(),
            focus: None,
        }
    }
}

impl SensitivityOptions {
    pub fn with_variations(variations: Vec<f64>) -> Self {
        Self {
            variations,
            focus: None,
        }
    }

    pub fn focused_on(mut self, weight_keys: Vec<String>) -> Self {
        self.focus = Some(weight_keys);
        self
    }
}

/// Score deltas of one perturbed run against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreChanges {
    /// Mean absolute change.
    pub average_change: f64,
    /// Largest absolute change.
    pub max_change: f64,
    /// Smallest absolute change.
    pub min_change: f64,
    /// Signed change (`perturbed - baseline`) per alternative.
    pub per_alternative: BTreeMap<String, f64>,
}

/// One successful perturbed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationResult {
    pub variation: f64,
    /// Variation as a percentage, 1 decimal place.
    pub variation_percentage: f64,
    /// The perturbed weight, 3 decimal places.
    pub new_weight: f64,
    pub ranking_changes: usize,
    pub top_alternative: Option<String>,
    pub top_alternative_changed: bool,
    pub score_changes: ScoreChanges,
    /// Leading entries of the perturbed ranking.
    pub new_ranking: Vec<String>,
}

/// Outcome of one variation of one weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VariationOutcome {
    Completed(VariationResult),
    Failed { variation: f64, reason: String },
}

impl VariationOutcome {
    pub fn variation(&self) -> f64 {
        match self {
            VariationOutcome::Completed(result) => result.variation,
            VariationOutcome::Failed { variation, .. } => *variation,
        }
    }

    pub fn completed(&self) -> Option<&VariationResult> {
        match self {
            VariationOutcome::Completed(result) => Some(result),
            VariationOutcome::Failed { .. } => None,
        }
    }
}

/// Aggregates over the completed variations of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityMetrics {
    pub average_ranking_changes: f64,
    pub max_ranking_changes: usize,
    pub average_score_change: f64,
    pub max_score_change: f64,
    /// Fraction of completed variations where the top alternative changed.
    pub top_change_frequency: f64,
    /// 0-100, higher is more stable.
    pub stability_score: f64,
    pub completed_variations: usize,
    pub failed_variations: usize,
}

/// Sweep results for one weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSensitivity {
    pub criterion: String,
    pub weight_key: String,
    pub base_weight: f64,
    pub variations: Vec<VariationOutcome>,
    pub metrics: SensitivityMetrics,
}

impl CriterionSensitivity {
    pub fn level(&self) -> SensitivityLevel {
        SensitivityLevel::from_stability(self.metrics.stability_score)
    }
}

/// Sensitivity bucket derived from a stability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    High,
    Medium,
    Low,
}

impl SensitivityLevel {
    /// `< 70` high, `70..85` medium, `>= 85` low.
    pub fn from_stability(stability: f64) -> Self {
        if stability < HIGH_SENSITIVITY_BELOW {
            SensitivityLevel::High
        } else if stability < LOW_SENSITIVITY_FROM {
            SensitivityLevel::Medium
        } else {
            SensitivityLevel::Low
        }
    }
}

/// Count of criteria per sensitivity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityDistribution {
    pub high_sensitivity: usize,
    pub medium_sensitivity: usize,
    pub low_sensitivity: usize,
}

/// Summary across all swept criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallSensitivity {
    pub overall_stability_score: f64,
    pub most_sensitive_criterion: Option<String>,
    pub least_sensitive_criterion: Option<String>,
    pub average_ranking_changes: f64,
    pub average_score_changes: f64,
    pub distribution: SensitivityDistribution,
}

/// The unperturbed run everything is compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSummary {
    pub ranking: Vec<String>,
    pub scores: BTreeMap<String, f64>,
    pub top_alternative: Option<String>,
}

impl BaselineSummary {
    fn from_results(results: &[ScoredResult]) -> Self {
        let ranking: Vec<String> = results.iter().map(|r| r.alternative.clone()).collect();
        Self {
            top_alternative: ranking.first().cloned(),
            scores: scores_of(results),
            ranking,
        }
    }
}

/// How the sweep was run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Methodology {
    pub variations: Vec<f64>,
    pub analysis_method: String,
    pub normalization: NormalizationMethod,
    pub base_weights: WeightSet,
}

/// Full sensitivity analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub baseline: BaselineSummary,
    pub criteria: Vec<CriterionSensitivity>,
    pub overall: OverallSensitivity,
    pub recommendations: Vec<String>,
    pub methodology: Methodology,
    pub analyzed_at: Timestamp,
}

impl SensitivityReport {
    /// Finds the sweep of a criterion by name.
    pub fn criterion(&self, name: &str) -> Option<&CriterionSensitivity> {
        self.criteria.iter().find(|c| c.criterion == name)
    }
}

/// Runs weight perturbation sweeps with a scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitivityAnalyzer {
    scorer: SawScorer,
}

impl SensitivityAnalyzer {
    pub fn new(scorer: SawScorer) -> Self {
        Self { scorer }
    }

    /// Sweeps every `_weight` key of `base_weights` across `variations`.
    ///
    /// # Errors
    /// Fails only when the baseline run fails. Failures of individual
    /// variations are recorded in the report.
    pub fn analyze(
        &self,
        criteria: &Criteria,
        base_weights: &WeightSet,
        alternatives: &[String],
        variations: &[f64],
    ) -> Result<SensitivityReport, AnalysisError> {
        self.analyze_with(
            criteria,
            base_weights,
            alternatives,
            &SensitivityOptions::with_variations(variations.to_vec()),
        )
    }

    /// Sweep with explicit options.
    pub fn analyze_with(
        &self,
        criteria: &Criteria,
        base_weights: &WeightSet,
        alternatives: &[String],
        options: &SensitivityOptions,
    ) -> Result<SensitivityReport, AnalysisError> {
        let baseline_results = self.scorer.score(criteria, base_weights, alternatives)?;
        let baseline = BaselineSummary::from_results(&baseline_results);

        let sweeps: Vec<CriterionSensitivity> = Self::weight_keys_to_sweep(base_weights, options)
            .into_iter()
            .filter_map(|(criterion, key)| {
                let base_weight = base_weights.get(&key)?;
                Some(self.analyze_criterion(
                    criteria,
                    base_weights,
                    alternatives,
                    &baseline,
                    criterion,
                    key,
                    base_weight,
                    &options.variations,
                ))
            })
            .collect();

        let overall = Self::overall(&sweeps);
        let recommendations = Self::recommendations(&sweeps, &overall);

        info!(
            criteria = sweeps.len(),
            variations = options.variations.len(),
            overall_stability = overall.overall_stability_score,
            "Sensitivity analysis completed"
        );

        Ok(SensitivityReport {
            baseline,
            criteria: sweeps,
            overall,
            recommendations,
            methodology: Methodology {
                variations: options.variations.clone(),
                analysis_method: ANALYSIS_METHOD.to_string(),
                normalization: self.scorer.method(),
                base_weights: base_weights.clone(),
            },
            analyzed_at: Timestamp::now(),
        })
    }

    /// Resolves `(criterion, weight_key)` pairs in sweep order.
    fn weight_keys_to_sweep(
        base_weights: &WeightSet,
        options: &SensitivityOptions,
    ) -> Vec<(String, String)> {
        let requested: Vec<&str> = match &options.focus {
            Some(focus) => {
                let mut seen = HashSet::new();
                focus
                    .iter()
                    .map(String::as_str)
                    .filter(|key| seen.insert(*key))
                    .filter(|key| {
                        let present = base_weights.contains_key(key);
                        if !present {
                            warn!(weight_key = %key, "Requested weight is not in the base weights, ignoring");
                        }
                        present
                    })
                    .collect()
            }
            None => base_weights.keys().collect(),
        };

        requested
            .into_iter()
            .filter_map(|key| match criterion_of(key) {
                Some(criterion) => Some((criterion.to_string(), key.to_string())),
                None => {
                    debug!(weight_key = %key, "Skipping key without weight suffix");
                    None
                }
            })
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn analyze_criterion(
        &self,
        criteria: &Criteria,
        base_weights: &WeightSet,
        alternatives: &[String],
        baseline: &BaselineSummary,
        criterion: String,
        weight_key: String,
        base_weight: f64,
        variations: &[f64],
    ) -> CriterionSensitivity {
        let outcomes: Vec<VariationOutcome> = variations
            .iter()
            .map(|&variation| {
                match self.run_variation(criteria, base_weights, alternatives, baseline, &weight_key, variation) {
                    Ok(result) => VariationOutcome::Completed(result),
                    Err(err) => {
                        warn!(
                            weight_key = %weight_key,
                            variation,
                            error = %err,
                            "Failed to analyze variation, skipping"
                        );
                        VariationOutcome::Failed {
                            variation,
                            reason: err.to_string(),
                        }
                    }
                }
            })
            .collect();

        let metrics = Self::metrics(&outcomes);

        CriterionSensitivity {
            criterion,
            weight_key,
            base_weight,
            variations: outcomes,
            metrics,
        }
    }

    fn run_variation(
        &self,
        criteria: &Criteria,
        base_weights: &WeightSet,
        alternatives: &[String],
        baseline: &BaselineSummary,
        weight_key: &str,
        variation: f64,
    ) -> Result<VariationResult, AnalysisError> {
        let modified = base_weights
            .scaled(weight_key, 1.0 + variation)
            .ok_or_else(|| AnalysisError::computation(format!("weight '{}' disappeared", weight_key)))?;
        let new_weight = modified.get(weight_key).unwrap_or_default();

        let results = self.scorer.score(criteria, &modified, alternatives)?;
        let ranking: Vec<String> = results.iter().map(|r| r.alternative.clone()).collect();
        let top_alternative = ranking.first().cloned();
        let top_alternative_changed = match (&baseline.top_alternative, &top_alternative) {
            (Some(before), Some(after)) => before != after,
            _ => false,
        };

        Ok(VariationResult {
            variation,
            variation_percentage: round_to(variation * 100.0, 1),
            new_weight: round_to(new_weight, 3),
            ranking_changes: Self::count_ranking_changes(&baseline.ranking, &ranking),
            top_alternative,
            top_alternative_changed,
            score_changes: Self::score_changes(&baseline.scores, &scores_of(&results)),
            new_ranking: ranking.into_iter().take(RANKING_PREVIEW_LEN).collect(),
        })
    }

    /// Counts baseline alternatives whose position moved or vanished.
    pub fn count_ranking_changes(baseline: &[String], perturbed: &[String]) -> usize {
        baseline
            .iter()
            .enumerate()
            .filter(|(position, alternative)| {
                perturbed
                    .iter()
                    .position(|a| a == *alternative)
                    .map_or(true, |new_position| new_position != *position)
            })
            .count()
    }

    /// Signed per-alternative deltas plus absolute mean/max/min.
    ///
    /// Alternatives missing from the perturbed scores are left out.
    pub fn score_changes(
        baseline: &BTreeMap<String, f64>,
        perturbed: &BTreeMap<String, f64>,
    ) -> ScoreChanges {
        let per_alternative: BTreeMap<String, f64> = baseline
            .iter()
            .filter_map(|(alternative, before)| {
                perturbed
                    .get(alternative)
                    .map(|after| (alternative.clone(), after - before))
            })
            .collect();

        let magnitudes: Vec<f64> = per_alternative.values().map(|change| change.abs()).collect();

        ScoreChanges {
            average_change: mean(&magnitudes),
            max_change: magnitudes.iter().copied().fold(0.0, f64::max),
            min_change: magnitudes.iter().copied().reduce(f64::min).unwrap_or(0.0),
            per_alternative,
        }
    }

    /// Stability in [0, 100] from ranking-change counts and mean absolute
    /// score changes. 100 when there is nothing to measure.
    pub fn stability_score(ranking_changes: &[usize], score_changes: &[f64]) -> f64 {
        if ranking_changes.is_empty() || score_changes.is_empty() {
            return 100.0;
        }

        let mean_ranking = ranking_changes.iter().sum::<usize>() as f64 / ranking_changes.len() as f64;
        let ranking_stability = (1.0 - mean_ranking / RANKING_CHANGE_CEILING).clamp(0.0, 1.0);

        let mean_score = mean(score_changes);
        let score_stability = (1.0 - (mean_score / SCORE_CHANGE_CEILING).min(1.0)).clamp(0.0, 1.0);

        ((ranking_stability + score_stability) / 2.0 * 100.0).clamp(0.0, 100.0)
    }

    fn metrics(outcomes: &[VariationOutcome]) -> SensitivityMetrics {
        let completed: Vec<&VariationResult> = outcomes.iter().filter_map(VariationOutcome::completed).collect();

        let ranking_changes: Vec<usize> = completed.iter().map(|r| r.ranking_changes).collect();
        let score_changes: Vec<f64> = completed
            .iter()
            .map(|r| r.score_changes.average_change.abs())
            .collect();
        let top_changes = completed.iter().filter(|r| r.top_alternative_changed).count();

        SensitivityMetrics {
            average_ranking_changes: mean(&ranking_changes.iter().map(|&c| c as f64).collect::<Vec<_>>()),
            max_ranking_changes: ranking_changes.iter().copied().max().unwrap_or(0),
            average_score_change: mean(&score_changes),
            max_score_change: score_changes.iter().copied().fold(0.0, f64::max),
            top_change_frequency: if completed.is_empty() {
                0.0
            } else {
                top_changes as f64 / completed.len() as f64
            },
            stability_score: Self::stability_score(&ranking_changes, &score_changes),
            completed_variations: completed.len(),
            failed_variations: outcomes.len() - completed.len(),
        }
    }

    /// Aggregates stability across criteria.
    ///
    /// Ties for most/least sensitive go to the criterion swept first. A
    /// criterion is only least sensitive if its stability is above zero.
    pub fn overall(criteria: &[CriterionSensitivity]) -> OverallSensitivity {
        let stabilities: Vec<f64> = criteria.iter().map(|c| c.metrics.stability_score).collect();

        let mut most_sensitive: Option<&CriterionSensitivity> = None;
        let mut least_sensitive: Option<&CriterionSensitivity> = None;
        for sweep in criteria {
            let stability = sweep.metrics.stability_score;
            if most_sensitive.map_or(true, |m| stability < m.metrics.stability_score) {
                most_sensitive = Some(sweep);
            }
            let floor = least_sensitive.map_or(0.0, |l| l.metrics.stability_score);
            if stability > floor {
                least_sensitive = Some(sweep);
            }
        }

        let mut distribution = SensitivityDistribution::default();
        for sweep in criteria {
            match sweep.level() {
                SensitivityLevel::High => distribution.high_sensitivity += 1,
                SensitivityLevel::Medium => distribution.medium_sensitivity += 1,
                SensitivityLevel::Low => distribution.low_sensitivity += 1,
            }
        }

        OverallSensitivity {
            overall_stability_score: if stabilities.is_empty() { 100.0 } else { mean(&stabilities) },
            most_sensitive_criterion: most_sensitive.map(|c| c.criterion.clone()),
            least_sensitive_criterion: least_sensitive.map(|c| c.criterion.clone()),
            average_ranking_changes: mean(
                &criteria.iter().map(|c| c.metrics.average_ranking_changes).collect::<Vec<_>>(),
            ),
            average_score_changes: mean(
                &criteria.iter().map(|c| c.metrics.average_score_change).collect::<Vec<_>>(),
            ),
            distribution,
        }
    }

    /// Fixed-template advice driven by the stability thresholds.
    pub fn recommendations(
        criteria: &[CriterionSensitivity],
        overall: &OverallSensitivity,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let headline = match SensitivityLevel::from_stability(overall.overall_stability_score) {
            SensitivityLevel::Low => {
                "Your decision is highly stable across weight variations. The ranking is reliable."
            }
            SensitivityLevel::Medium => {
                "Your decision shows moderate stability. Consider the most sensitive criteria."
            }
            SensitivityLevel::High => {
                "Your decision is sensitive to weight changes. Review your preferences carefully."
            }
        };
        recommendations.push(headline.to_string());

        if let Some(most_sensitive) = &overall.most_sensitive_criterion {
            recommendations.push(format!(
                "The '{}' criterion has the highest impact on rankings. Ensure your weight reflects its true importance to you.",
                most_sensitive
            ));
        }

        for sweep in criteria {
            if sweep.metrics.stability_score < REVIEW_WEIGHT_BELOW {
                recommendations.push(format!(
                    "Consider reviewing your '{}' weight - small changes significantly affect rankings.",
                    sweep.criterion
                ));
            }
        }

        recommendations
    }
}

fn scores_of(results: &[ScoredResult]) -> BTreeMap<String, f64> {
    results
        .iter()
        .map(|r| (r.alternative.clone(), r.score))
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::CriterionSeries;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn criteria() -> Criteria {
        Criteria::new()
            .with(CriterionSeries::cost("cost", vec![5.0, 2.0, 8.0]))
            .with(CriterionSeries::benefit("rank", vec![7.0, 9.0, 3.0]))
    }

    fn weights() -> WeightSet {
        WeightSet::new().with("cost_weight", 1.0).with("rank_weight", 1.0)
    }

    fn analyzer() -> SensitivityAnalyzer {
        SensitivityAnalyzer::default()
    }

    fn sweep_with_stability(criterion: &str, stability: f64) -> CriterionSensitivity {
        CriterionSensitivity {
            criterion: criterion.to_string(),
            weight_key: format!("{}_weight", criterion),
            base_weight: 1.0,
            variations: Vec::new(),
            metrics: SensitivityMetrics {
                average_ranking_changes: 0.0,
                max_ranking_changes: 0,
                average_score_change: 0.0,
                max_score_change: 0.0,
                top_change_frequency: 0.0,
                stability_score: stability,
                completed_variations: 0,
                failed_variations: 0,
            },
        }
    }

    #[test]
    fn zero_variation_reproduces_baseline() {
        let report = analyzer()
            .analyze(&criteria(), &weights(), &names(&["A", "B", "C"]), &[0.0])
            .unwrap();

        assert_eq!(report.criteria.len(), 2);
        for sweep in &report.criteria {
            let result = sweep.variations[0].completed().unwrap();
            assert_eq!(result.ranking_changes, 0);
            assert!(!result.top_alternative_changed);
            assert_eq!(result.score_changes.average_change, 0.0);
            assert!(result.score_changes.per_alternative.values().all(|c| *c == 0.0));
            assert_eq!(sweep.metrics.stability_score, 100.0);
        }
    }

    #[test]
    fn baseline_summary_matches_scorer() {
        let report = analyzer()
            .analyze(&criteria(), &weights(), &names(&["A", "B", "C"]), &DEFAULT_VARIATIONS)
            .unwrap();

        assert_eq!(report.baseline.ranking, names(&["B", "A", "C"]));
        assert_eq!(report.baseline.top_alternative.as_deref(), Some("B"));
        assert_eq!(report.baseline.scores["A"], 1.1667);
        assert_eq!(report.methodology.analysis_method, ANALYSIS_METHOD);
        assert_eq!(report.methodology.variations.len(), 7);
    }

    #[test]
    fn each_weight_is_perturbed_alone() {
        let report = analyzer()
            .analyze(&criteria(), &weights(), &names(&["A", "B", "C"]), &[0.2])
            .unwrap();

        let cost = report.criterion("cost").unwrap();
        let result = cost.variations[0].completed().unwrap();
        assert_eq!(result.new_weight, 1.2);
        assert_eq!(result.variation_percentage, 20.0);
        // A gains 0.5 * 0.2 = 0.1 on cost, B gains 1.0 * 0.2 = 0.2, C gains nothing
        assert!((result.score_changes.per_alternative["A"] - 0.1).abs() < 1e-9);
        assert!((result.score_changes.per_alternative["B"] - 0.2).abs() < 1e-9);
        assert_eq!(result.score_changes.per_alternative["C"], 0.0);
        assert!((result.score_changes.max_change - 0.2).abs() < 1e-9);
        assert_eq!(result.score_changes.min_change, 0.0);
    }

    #[test]
    fn focus_key_absent_from_base_weights_is_ignored() {
        let options = SensitivityOptions::default()
            .focused_on(names(&["rank_weight", "climate_score_weight"]));

        let report = analyzer()
            .analyze_with(&criteria(), &weights(), &names(&["A", "B", "C"]), &options)
            .unwrap();

        assert_eq!(report.criteria.len(), 1);
        assert!(report.criterion("rank").is_some());
        assert!(report.criterion("climate_score").is_none());
    }

    #[test]
    fn keys_without_weight_suffix_are_not_swept() {
        let base = weights().with("budget", 4.0);
        let report = analyzer()
            .analyze(&criteria(), &base, &names(&["A", "B", "C"]), &[0.1])
            .unwrap();

        let swept: Vec<_> = report.criteria.iter().map(|c| c.weight_key.as_str()).collect();
        assert_eq!(swept, vec!["cost_weight", "rank_weight"]);
    }

    #[test]
    fn failing_variation_is_recorded_and_skipped() {
        // 1 + (-1.5) makes the weight negative, which the validator rejects
        let report = analyzer()
            .analyze(&criteria(), &weights(), &names(&["A", "B", "C"]), &[-1.5, 0.1])
            .unwrap();

        let cost = report.criterion("cost").unwrap();
        assert!(matches!(cost.variations[0], VariationOutcome::Failed { variation, .. } if variation == -1.5));
        assert!(cost.variations[1].completed().is_some());
        assert_eq!(cost.metrics.completed_variations, 1);
        assert_eq!(cost.metrics.failed_variations, 1);
    }

    #[test]
    fn baseline_failure_aborts() {
        let result = analyzer().analyze(&criteria(), &WeightSet::new(), &names(&["A", "B", "C"]), &[0.1]);
        assert!(matches!(result, Err(AnalysisError::Validation(_))));
    }

    #[test]
    fn large_perturbation_can_change_top_alternative() {
        // Doubling the jobs weight lets A overtake B
        let criteria = Criteria::new()
            .with(CriterionSeries::benefit("jobs", vec![10.0, 6.0]))
            .with(CriterionSeries::benefit("safety", vec![0.0, 10.0]));
        let weights = WeightSet::new().with("jobs_weight", 1.0).with("safety_weight", 1.5);

        let report = analyzer()
            .analyze(&criteria, &weights, &names(&["A", "B"]), &[1.0])
            .unwrap();

        let jobs = report.criterion("jobs").unwrap();
        let result = jobs.variations[0].completed().unwrap();
        assert_eq!(result.top_alternative.as_deref(), Some("A"));
        assert!(result.top_alternative_changed);
        assert_eq!(result.ranking_changes, 2);
        assert_eq!(jobs.metrics.top_change_frequency, 1.0);
    }

    #[test]
    fn count_ranking_changes_counts_moves_and_absences() {
        let baseline = names(&["A", "B", "C", "D"]);
        assert_eq!(SensitivityAnalyzer::count_ranking_changes(&baseline, &baseline), 0);
        assert_eq!(
            SensitivityAnalyzer::count_ranking_changes(&baseline, &names(&["B", "A", "C", "D"])),
            2
        );
        assert_eq!(
            SensitivityAnalyzer::count_ranking_changes(&baseline, &names(&["A", "B", "C"])),
            1
        );
    }

    #[test]
    fn score_changes_skip_missing_alternatives() {
        let baseline: BTreeMap<String, f64> = [("A".to_string(), 1.0), ("B".to_string(), 2.0)].into();
        let perturbed: BTreeMap<String, f64> = [("A".to_string(), 1.5)].into();

        let changes = SensitivityAnalyzer::score_changes(&baseline, &perturbed);
        assert_eq!(changes.per_alternative.len(), 1);
        assert_eq!(changes.average_change, 0.5);
    }

    #[test]
    fn score_changes_of_nothing_are_zero() {
        let changes = SensitivityAnalyzer::score_changes(&BTreeMap::new(), &BTreeMap::new());
        assert_eq!(changes.average_change, 0.0);
        assert_eq!(changes.max_change, 0.0);
        assert_eq!(changes.min_change, 0.0);
    }

    #[test]
    fn stability_score_combines_both_terms() {
        assert_eq!(SensitivityAnalyzer::stability_score(&[], &[]), 100.0);
        assert_eq!(SensitivityAnalyzer::stability_score(&[0, 0], &[0.0, 0.0]), 100.0);
        // ranking term 1 - 5/10 = 0.5, score term 1 - 1/2 = 0.5
        assert_eq!(SensitivityAnalyzer::stability_score(&[5], &[1.0]), 50.0);
    }

    #[test]
    fn stability_score_clamps_each_term() {
        // 30 changes would give a ranking term of -2.0 without clamping
        assert_eq!(SensitivityAnalyzer::stability_score(&[30], &[0.0]), 50.0);
        assert_eq!(SensitivityAnalyzer::stability_score(&[30], &[9.0]), 0.0);
    }

    #[test]
    fn sensitivity_level_thresholds() {
        assert_eq!(SensitivityLevel::from_stability(69.9), SensitivityLevel::High);
        assert_eq!(SensitivityLevel::from_stability(70.0), SensitivityLevel::Medium);
        assert_eq!(SensitivityLevel::from_stability(84.9), SensitivityLevel::Medium);
        assert_eq!(SensitivityLevel::from_stability(85.0), SensitivityLevel::Low);
    }

    #[test]
    fn overall_identifies_extremes_and_buckets() {
        let sweeps = vec![
            sweep_with_stability("cost", 90.0),
            sweep_with_stability("visa", 55.0),
            sweep_with_stability("climate", 75.0),
        ];

        let overall = SensitivityAnalyzer::overall(&sweeps);
        assert_eq!(overall.most_sensitive_criterion.as_deref(), Some("visa"));
        assert_eq!(overall.least_sensitive_criterion.as_deref(), Some("cost"));
        assert!((overall.overall_stability_score - 220.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            overall.distribution,
            SensitivityDistribution {
                high_sensitivity: 1,
                medium_sensitivity: 1,
                low_sensitivity: 1,
            }
        );
    }

    #[test]
    fn fully_unstable_sweep_has_no_least_sensitive_criterion() {
        let sweeps = vec![sweep_with_stability("cost", 0.0), sweep_with_stability("visa", 0.0)];

        let overall = SensitivityAnalyzer::overall(&sweeps);
        assert_eq!(overall.most_sensitive_criterion.as_deref(), Some("cost"));
        assert!(overall.least_sensitive_criterion.is_none());
        assert_eq!(overall.distribution.high_sensitivity, 2);
    }

    #[test]
    fn overall_of_nothing_is_fully_stable() {
        let overall = SensitivityAnalyzer::overall(&[]);
        assert_eq!(overall.overall_stability_score, 100.0);
        assert!(overall.most_sensitive_criterion.is_none());
        assert!(overall.least_sensitive_criterion.is_none());
    }

    #[test]
    fn recommendations_follow_thresholds() {
        let sweeps = vec![sweep_with_stability("cost", 90.0), sweep_with_stability("visa", 55.0)];
        let overall = SensitivityAnalyzer::overall(&sweeps);

        let recommendations = SensitivityAnalyzer::recommendations(&sweeps, &overall);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("moderate stability"));
        assert!(recommendations[1].contains("'visa' criterion has the highest impact"));
        assert!(recommendations[2].contains("reviewing your 'visa' weight"));
    }

    #[test]
    fn stable_decision_gets_reassuring_headline() {
        let sweeps = vec![sweep_with_stability("cost", 100.0)];
        let overall = SensitivityAnalyzer::overall(&sweeps);

        let recommendations = SensitivityAnalyzer::recommendations(&sweeps, &overall);
        assert!(recommendations[0].contains("highly stable"));
        assert_eq!(recommendations.len(), 2);
    }

    #[test]
    fn report_serializes_outcome_status() {
        let report = analyzer()
            .analyze(&criteria(), &weights(), &names(&["A", "B", "C"]), &[0.0])
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["criteria"][0]["variations"][0]["status"], "completed");
    }
}
