//! Error types for bootstrap confidence interval estimation
//!
//! Provides a unified error type for all bootci crates.

use thiserror::Error;

/// Core error type for bootstrap operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical degeneracy while building an interval
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Resampling was stopped through a cancellation token
    #[error("Computation cancelled before {requested} resamples completed")]
    Cancelled { requested: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf observations
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a confidence level outside the open unit interval
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Whether this error rejects the caller's input before any resampling ran
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. }
        )
    }

    /// Whether this error reports numerical degeneracy in interval construction
    pub fn is_computation(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}

/// Check that every observation is finite
pub fn check_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Check that `p` lies strictly inside (0, 1)
pub fn check_open_unit(p: f64) -> Result<()> {
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid_probability(p));
    }
    Ok(())
}
