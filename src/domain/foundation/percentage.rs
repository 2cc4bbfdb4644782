//! Percentage value object (0-100 scale, two decimal places).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive, kept at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentage, clamping to valid range and rounding to 2 dp.
    ///
    /// Non-finite input collapses to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(round_to(value.clamp(0.0, 100.0), 2))
    }

    /// Creates a Percentage from a part/whole ratio (`part / whole * 100`).
    ///
    /// A non-positive whole yields zero.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole <= 0.0 {
            return Self::ZERO;
        }
        Self::new(part / whole * 100.0)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0.0, 100.0, value));
        }
        Ok(Self(round_to(value, 2)))
    }

    /// Returns the value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Rounds to `decimals` places, resolving exact ties to even.
///
/// The decision is made on the exact binary value, so `0.03125` becomes
/// `0.0312` while `2.675` (stored slightly below) becomes `2.67`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let places = usize::try_from(decimals).unwrap_or(0);
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
