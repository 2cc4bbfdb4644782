//! Outlier Capper - IQR capping applied to each criterion before normalization.

use serde::{Deserialize, Serialize};

/// Fence distance in interquartile ranges.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Quartiles and capping fences of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Clamps a value into the fences.
    pub fn cap(&self, value: f64) -> f64 {
        if value < self.lower {
            self.lower
        } else if value > self.upper {
            self.upper
        } else {
            value
        }
    }
}

/// IQR-based outlier capping.
pub struct OutlierCapper;

impl OutlierCapper {
    /// Percentile by linear interpolation between closest ranks.
    ///
    /// `pct` is in [0, 100]; the rank of the result is `pct/100 * (n - 1)`.
    /// Returns `None` for an empty slice.
    pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let fraction = rank - lo as f64;

        Some(interpolate(sorted[lo], sorted[hi], fraction))
    }

    /// Computes Q1, Q3 and the fences at `IQR_MULTIPLIER` IQRs.
    pub fn bounds(values: &[f64]) -> Option<IqrBounds> {
        let q1 = Self::percentile(values, 25.0)?;
        let q3 = Self::percentile(values, 75.0)?;
        let iqr = q3 - q1;

        Some(IqrBounds {
            q1,
            q3,
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        })
    }

    /// Caps values outside the fences to the nearest fence. Nothing is dropped.
    pub fn cap(values: &[f64]) -> Vec<f64> {
        match Self::bounds(values) {
            Some(bounds) => values.iter().map(|&v| bounds.cap(v)).collect(),
            None => Vec::new(),
        }
    }
}

/// `lo + (hi - lo) * fraction`, halved first when `hi - lo` overflows.
fn interpolate(lo: f64, hi: f64, fraction: f64) -> f64 {
    let span = hi - lo;
    if span.is_finite() {
        lo + span * fraction
    } else {
        (lo / 2.0 + (hi / 2.0 - lo / 2.0) * fraction) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(OutlierCapper::percentile(&values, 25.0), Some(1.75));
        assert_eq!(OutlierCapper::percentile(&values, 50.0), Some(2.5));
        assert_eq!(OutlierCapper::percentile(&values, 75.0), Some(3.25));
    }

    #[test]
    fn percentile_ignores_input_order() {
        assert_eq!(OutlierCapper::percentile(&[8.0, 2.0, 5.0], 25.0), Some(3.5));
        assert_eq!(OutlierCapper::percentile(&[8.0, 2.0, 5.0], 75.0), Some(6.5));
    }

    #[test]
    fn percentile_of_empty_is_none() {
        assert_eq!(OutlierCapper::percentile(&[], 50.0), None);
        assert!(OutlierCapper::bounds(&[]).is_none());
    }

    #[test]
    fn percentile_survives_span_beyond_f64_max() {
        let values = [-1e308, 1e308];
        assert_eq!(OutlierCapper::percentile(&values, 50.0), Some(0.0));
        assert_eq!(OutlierCapper::percentile(&values, 25.0), Some(-5e307));
        assert_eq!(OutlierCapper::percentile(&values, 100.0), Some(1e308));
    }

    #[test]
    fn cap_leaves_extreme_but_finite_values_finite() {
        let capped = OutlierCapper::cap(&[-1e308, 1e308, 0.0]);
        assert!(capped.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn percentile_single_value() {
        assert_eq!(OutlierCapper::percentile(&[7.0], 25.0), Some(7.0));
    }

    #[test]
    fn bounds_use_one_and_a_half_iqr() {
        let bounds = OutlierCapper::bounds(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(bounds.iqr(), 1.5);
        assert_eq!(bounds.lower, -0.5);
        assert_eq!(bounds.upper, 5.5);
    }

    #[test]
    fn cap_limits_high_outlier() {
        // Q1 = 2.0, Q3 = 4.0, IQR = 2.0, upper fence = 7.0
        let capped = OutlierCapper::cap(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        assert_eq!(capped, vec![1.0, 2.0, 3.0, 4.0, 7.0]);
    }

    #[test]
    fn cap_limits_low_outlier() {
        // Q1 = 10.0, Q3 = 12.0, lower fence = 7.0
        let capped = OutlierCapper::cap(&[-50.0, 10.0, 11.0, 12.0, 13.0]);
        assert_eq!(capped, vec![7.0, 10.0, 11.0, 12.0, 13.0]);
    }

    #[test]
    fn cap_leaves_inliers_untouched() {
        let values = vec![5.0, 2.0, 8.0];
        assert_eq!(OutlierCapper::cap(&values), values);
    }

    #[test]
    fn cap_preserves_constant_series() {
        assert_eq!(OutlierCapper::cap(&[5.0, 5.0, 5.0]), vec![5.0, 5.0, 5.0]);
    }
}
