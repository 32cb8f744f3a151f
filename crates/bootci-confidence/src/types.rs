//! Common types for confidence intervals

use bootci_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level, rejecting values outside (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Text carried by the soft-failure sentinel
pub const METHOD_NOT_RECOGNIZED: &str = "method not recognized";

/// One end of an interval: a number, or the unrecognized-method sentinel
///
/// The sentinel is a value, distinct from NaN, returned when the caller asks
/// for an interval method outside the four supported ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Value(f64),
    MethodNotRecognized,
}

impl Bound {
    /// The numeric bound, or `None` for the sentinel
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Value(v) => Some(v),
            Self::MethodNotRecognized => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::MethodNotRecognized)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::MethodNotRecognized => f.write_str(METHOD_NOT_RECOGNIZED),
        }
    }
}

/// Outcome of `quantile_ci` / `mean_ci`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalResult {
    /// Statistic evaluated on the original sample
    pub estimate: f64,
    pub low: Bound,
    pub high: Bound,
}

impl IntervalResult {
    /// Result carrying numeric bounds
    pub fn from_interval(ci: &ConfidenceInterval) -> Self {
        Self {
            estimate: ci.estimate,
            low: Bound::Value(ci.lower),
            high: Bound::Value(ci.upper),
        }
    }

    /// Result for a method name that is not one of the supported four
    pub fn unrecognized(estimate: f64) -> Self {
        Self {
            estimate,
            low: Bound::MethodNotRecognized,
            high: Bound::MethodNotRecognized,
        }
    }

    /// Whether both bounds are numeric
    pub fn is_recognized(&self) -> bool {
        !self.low.is_sentinel() && !self.high.is_sentinel()
    }

    /// `(low, high)` when both bounds are numeric
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.low.value()?, self.high.value()?))
    }

    /// Interval width, `None` for the sentinel
    pub fn width(&self) -> Option<f64> {
        self.bounds().map(|(low, high)| high - low)
    }
}

impl fmt::Display for IntervalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "estimate: {}, low: {}, high: {}", self.estimate, self.low, self.high)
    }
}
