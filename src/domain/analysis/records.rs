//! Persisted analysis results.

use serde::{Deserialize, Serialize};

use super::{NormalizationMethod, ScoredResult, SensitivityReport, WeightSet};
use crate::domain::foundation::{AnalysisId, Timestamp};

/// A stored ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    /// Free-form label grouping runs of one user session.
    pub session: Option<String>,
    pub weights: WeightSet,
    pub method: NormalizationMethod,
    pub results: Vec<ScoredResult>,
    pub created_at: Timestamp,
}

impl AnalysisRecord {
    pub fn new(
        session: Option<String>,
        weights: WeightSet,
        method: NormalizationMethod,
        results: Vec<ScoredResult>,
    ) -> Self {
        Self {
            id: AnalysisId::new(),
            session,
            weights,
            method,
            results,
            created_at: Timestamp::now(),
        }
    }

    /// The rank-1 result, if any.
    pub fn top(&self) -> Option<&ScoredResult> {
        self.results.first()
    }
}

/// A stored sensitivity sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRecord {
    pub id: AnalysisId,
    pub session: Option<String>,
    pub report: SensitivityReport,
    pub created_at: Timestamp,
}

impl SensitivityRecord {
    pub fn new(session: Option<String>, report: SensitivityReport) -> Self {
        Self {
            id: AnalysisId::new(),
            session,
            report,
            created_at: Timestamp::now(),
        }
    }
}
