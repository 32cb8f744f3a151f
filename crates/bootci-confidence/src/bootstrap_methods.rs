//! Bootstrap method implementations
//!
//! This module provides the four interval constructions applied to a
//! bootstrap distribution. All empirical quantiles of the distribution use
//! type-7 interpolation, so a sorted distribution `d` of length B gives
//! `d[0]` at probability 0 and `d[B - 1]` at probability 1.

use crate::{bootstrap::BootstrapMethod, jackknife, ConfidenceInterval, ConfidenceLevel, IntervalMethod};
use bootci_core::{math::distributions::normal, Error, Result};
use bootci_statistic::{quantile_sorted, std_dev};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

fn sorted_estimates(bootstrap_estimates: &[f64]) -> Result<Vec<f64>> {
    if bootstrap_estimates.is_empty() {
        return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
    }
    let mut sorted = bootstrap_estimates.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(sorted)
}

/// Percentile bootstrap method
///
/// The simplest bootstrap method. Uses the empirical quantiles of the
/// bootstrap distribution at `(1 - level) / 2` and `(1 + level) / 2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let tail = ConfidenceLevel::new(confidence_level)?.tail_probability();
        let sorted = sorted_estimates(bootstrap_estimates)?;

        Ok(ConfidenceInterval::new(
            quantile_sorted(&sorted, tail),
            quantile_sorted(&sorted, 1.0 - tail),
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Basic bootstrap method
///
/// Uses the reflection principle: if θ̂* is the bootstrap estimate and θ̂ is the
/// original estimate, then the interval is [2θ̂ - q_{1-α/2}, 2θ̂ - q_{α/2}]
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicBootstrap;

impl BootstrapMethod for BasicBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let tail = ConfidenceLevel::new(confidence_level)?.tail_probability();
        let sorted = sorted_estimates(bootstrap_estimates)?;

        let q_low = quantile_sorted(&sorted, tail);
        let q_high = quantile_sorted(&sorted, 1.0 - tail);

        Ok(ConfidenceInterval::new(
            2.0 * original_estimate - q_high,
            2.0 * original_estimate - q_low,
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Basic Bootstrap"
    }
}

/// Normal-approximation bootstrap method
///
/// Centres a symmetric interval on the original estimate with half-width
/// `z_{1-α/2}` times the bootstrap standard deviation. Needs at least two
/// resamples and a distribution that is not constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalBootstrap;

impl BootstrapMethod for NormalBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let tail = ConfidenceLevel::new(confidence_level)?.tail_probability();
        if bootstrap_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let se = std_dev(bootstrap_estimates);
        if !se.is_finite() || se == 0.0 {
            return Err(Error::Computation(format!(
                "Bootstrap standard deviation is {se}; the normal interval is undefined"
            )));
        }

        let half_width = normal::ppf(1.0 - tail) * se;
        debug!(se, half_width, "normal bootstrap interval");

        Ok(ConfidenceInterval::new(
            original_estimate - half_width,
            original_estimate + half_width,
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Normal Bootstrap"
    }
}

/// Intermediate quantities of a BCa interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BcaDiagnostics {
    /// Bias correction `ppf(#{θ̂* < θ̂} / B)`
    pub z0: f64,
    /// Acceleration from the jackknife
    pub acceleration: f64,
    /// Adjusted probability for the lower bound
    pub alpha_low: f64,
    /// Adjusted probability for the upper bound
    pub alpha_high: f64,
}

/// BCa (bias-corrected and accelerated) bootstrap method
///
/// An improved bootstrap method that corrects for bias and skewness in the
/// bootstrap distribution. The bias correction comes from the share of
/// bootstrap estimates below the original estimate, the acceleration from
/// the jackknife (see [`BCaBootstrap::from_jackknife`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct BCaBootstrap {
    acceleration: f64,
}

impl BCaBootstrap {
    /// BCa with a known acceleration constant
    pub fn new(acceleration: f64) -> Self {
        Self { acceleration }
    }

    /// BCa with acceleration estimated from leave-one-out statistic values
    pub fn from_jackknife(jackknife: &[f64]) -> Result<Self> {
        Ok(Self::new(jackknife::acceleration(jackknife)?))
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Bias correction and adjusted probabilities without building the interval
    pub fn diagnostics(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<BcaDiagnostics> {
        let tail = ConfidenceLevel::new(confidence_level)?.tail_probability();
        if bootstrap_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let count_less = bootstrap_estimates
            .iter()
            .filter(|&&x| x < original_estimate)
            .count();
        let proportion = count_less as f64 / bootstrap_estimates.len() as f64;

        debug!(count_less, proportion, "BCa bias correction");

        if proportion <= 0.0 || proportion >= 1.0 {
            return Err(Error::Computation(format!(
                "Bias correction is infinite: {count_less} of {} bootstrap estimates lie below the observed estimate",
                bootstrap_estimates.len()
            )));
        }
        let z0 = normal::ppf(proportion);

        let a = self.acceleration;
        let adjust = |z_alpha: f64| -> Result<f64> {
            let shifted = z0 + z_alpha;
            let denominator = 1.0 - a * shifted;
            if denominator == 0.0 {
                return Err(Error::Computation(
                    "BCa adjustment denominator is zero".to_string(),
                ));
            }
            let adjusted = normal::cdf(z0 + shifted / denominator);
            if !adjusted.is_finite() {
                return Err(Error::Computation(format!(
                    "BCa adjusted probability is not finite: {adjusted}"
                )));
            }
            Ok(adjusted)
        };

        let alpha_low = adjust(normal::ppf(tail))?;
        let alpha_high = adjust(normal::ppf(1.0 - tail))?;

        Ok(BcaDiagnostics {
            z0,
            acceleration: a,
            alpha_low,
            alpha_high,
        })
    }
}

impl BootstrapMethod for BCaBootstrap {
    #[instrument(skip(self, bootstrap_estimates), fields(n_estimates = bootstrap_estimates.len(), acceleration = self.acceleration))]
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval> {
        let diagnostics = self.diagnostics(bootstrap_estimates, original_estimate, confidence_level)?;

        debug!(
            z0 = diagnostics.z0,
            alpha_low = diagnostics.alpha_low,
            alpha_high = diagnostics.alpha_high,
            "BCa adjusted probabilities"
        );

        let sorted = sorted_estimates(bootstrap_estimates)?;

        Ok(ConfidenceInterval::new(
            quantile_sorted(&sorted, diagnostics.alpha_low),
            quantile_sorted(&sorted, diagnostics.alpha_high),
            original_estimate,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "BCa Bootstrap"
    }
}

/// Build an interval with `method`
///
/// `jackknife` must hold the leave-one-out values when `method` is
/// [`IntervalMethod::Bca`]; the other methods ignore it.
pub fn build_interval(
    method: IntervalMethod,
    bootstrap_estimates: &[f64],
    original_estimate: f64,
    confidence_level: f64,
    jackknife: Option<&[f64]>,
) -> Result<ConfidenceInterval> {
    match method {
        IntervalMethod::Percentile => {
            PercentileBootstrap.calculate_interval(bootstrap_estimates, original_estimate, confidence_level)
        }
        IntervalMethod::Basic => {
            BasicBootstrap.calculate_interval(bootstrap_estimates, original_estimate, confidence_level)
        }
        IntervalMethod::Normal => {
            NormalBootstrap.calculate_interval(bootstrap_estimates, original_estimate, confidence_level)
        }
        IntervalMethod::Bca => {
            let jackknife = jackknife.ok_or_else(|| {
                Error::InvalidParameter("BCa intervals require jackknife values".to_string())
            })?;
            BCaBootstrap::from_jackknife(jackknife)?.calculate_interval(
                bootstrap_estimates,
                original_estimate,
                confidence_level,
            )
        }
    }
}
