//! High-level API for bootstrap confidence intervals
//!
//! [`quantile_ci`] and [`mean_ci`] cover the common case: pass the
//! observations, a [`CiConfig`] and a random source, get back an
//! [`IntervalResult`]. [`BootstrapCi`] exposes the same pipeline with an
//! explicit execution engine, cancellation, and the intermediate steps.

use crate::{
    bootstrap::{Bootstrap, BootstrapSample, DEFAULT_CHUNK_SIZE},
    bootstrap_methods::build_interval,
    ConfidenceLevel, IntervalResult, MethodChoice,
};
use bootci_core::{
    auto_engine, check_finite, AutoEngine, CancellationToken, Error, ExecutionEngine, Result,
};
use bootci_statistic::{Mean, SampleStatistic, StatisticSelector};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use crate::bootstrap::{DEFAULT_RESAMPLES, FAST_RESAMPLES};

/// Per-call parameters of a bootstrap interval
///
/// Deserializes from partial input: missing fields take their defaults, and
/// the method is read as its lowercase name.
///
/// ```rust
/// use bootci_confidence::{CiConfig, IntervalMethod};
///
/// let config = CiConfig::default()
///     .with_bootstraps(20_000)
///     .with_method(IntervalMethod::Percentile);
/// assert_eq!(config.bootstraps, 20_000);
/// assert_eq!(config.confidence_level, 0.95);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    /// Number of bootstrap resamples (B)
    pub bootstraps: usize,
    /// Two-sided coverage in (0, 1)
    pub confidence_level: f64,
    /// Interval construction method
    pub method: MethodChoice,
    /// Resamples drawn from one RNG stream
    pub chunk_size: usize,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            bootstraps: DEFAULT_RESAMPLES,
            confidence_level: ConfidenceLevel::NINETY_FIVE.value(),
            method: MethodChoice::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CiConfig {
    pub fn with_bootstraps(mut self, bootstraps: usize) -> Self {
        self.bootstraps = bootstraps;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Accepts an [`IntervalMethod`](crate::IntervalMethod) or a method name
    pub fn with_method(mut self, method: impl Into<MethodChoice>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Check the numeric parameters
    ///
    /// An unrecognized method is not an error here; it is answered with the
    /// sentinel result.
    pub fn validate(&self) -> Result<()> {
        if self.bootstraps == 0 {
            return Err(Error::InvalidParameter(
                "Number of bootstraps must be at least 1".to_string(),
            ));
        }
        ConfidenceLevel::new(self.confidence_level)?;
        if self.chunk_size == 0 {
            return Err(Error::InvalidParameter("Chunk size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Bootstrap confidence interval driver over an execution engine
#[derive(Debug, Clone)]
pub struct BootstrapCi<E> {
    bootstrap: Bootstrap<E>,
    config: CiConfig,
}

impl<E: ExecutionEngine> BootstrapCi<E> {
    pub fn new(engine: E, config: CiConfig) -> Self {
        let bootstrap = Bootstrap::new(engine)
            .with_resamples(config.bootstraps)
            .with_chunk_size(config.chunk_size);
        Self { bootstrap, config }
    }

    /// Abort resampling and jackknife loops when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.bootstrap = self.bootstrap.with_cancellation(token);
        self
    }

    pub fn config(&self) -> &CiConfig {
        &self.config
    }

    fn validate<S: SampleStatistic>(&self, sample: &[f64], statistic: &S) -> Result<()> {
        self.config.validate()?;
        statistic.validate()?;
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        check_finite(sample, "observations")
    }

    /// Estimate, then resample and build the configured interval
    ///
    /// Input errors are reported before any resampling. A method outside the
    /// supported four yields [`IntervalResult::unrecognized`] with the observed
    /// estimate and without resampling.
    #[instrument(skip_all, fields(n = sample.len(), bootstraps = self.config.bootstraps, method = %self.config.method))]
    pub fn estimate<S, R>(&self, sample: &[f64], statistic: &S, rng: &mut R) -> Result<IntervalResult>
    where
        S: SampleStatistic,
        R: Rng + ?Sized,
    {
        self.validate(sample, statistic)?;

        let method = match self.config.method.method() {
            Some(method) => method,
            None => {
                debug!("method not recognized; returning sentinel bounds");
                let observed = statistic.estimate(sample)?;
                return Ok(IntervalResult::unrecognized(observed));
            }
        };

        let BootstrapSample { observed, distribution } = self.bootstrap.resample(sample, statistic, rng)?;

        let jackknife = if method.needs_jackknife() {
            Some(self.bootstrap.jackknife(sample, statistic)?)
        } else {
            None
        };

        let ci = build_interval(
            method,
            distribution.values(),
            observed,
            self.config.confidence_level,
            jackknife.as_deref(),
        )?;

        debug!(lower = ci.lower, upper = ci.upper, "interval built");
        Ok(IntervalResult::from_interval(&ci))
    }

    /// Bootstrap distribution only, without building an interval
    pub fn resample<S, R>(&self, sample: &[f64], statistic: &S, rng: &mut R) -> Result<BootstrapSample>
    where
        S: SampleStatistic,
        R: Rng + ?Sized,
    {
        self.validate(sample, statistic)?;
        self.bootstrap.resample(sample, statistic, rng)
    }

    /// Leave-one-out statistic values of the sample
    pub fn jackknife<S: SampleStatistic>(&self, sample: &[f64], statistic: &S) -> Result<Vec<f64>> {
        self.validate(sample, statistic)?;
        self.bootstrap.jackknife(sample, statistic)
    }
}

/// Bootstrap interval for any statistic on the automatically chosen engine
pub fn bootstrap_ci<S, R>(
    observations: &[f64],
    statistic: &S,
    config: &CiConfig,
    rng: &mut R,
) -> Result<IntervalResult>
where
    S: SampleStatistic,
    R: Rng + ?Sized,
{
    let engine: AutoEngine = auto_engine();
    BootstrapCi::new(engine, config.clone()).estimate(observations, statistic, rng)
}

/// Bootstrap interval for the `percentile` quantile of `observations`
///
/// # Example
/// ```rust
/// use bootci_confidence::{quantile_ci, CiConfig, IntervalMethod};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let days: Vec<f64> = (1..=10).map(f64::from).collect();
/// let config = CiConfig::default()
///     .with_bootstraps(2_000)
///     .with_method(IntervalMethod::Percentile);
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
///
/// let result = quantile_ci(&days, 0.5, &config, &mut rng).unwrap();
/// assert_eq!(result.estimate, 5.5);
/// let (low, high) = result.bounds().unwrap();
/// assert!(low <= 5.5 && 5.5 <= high);
/// ```
pub fn quantile_ci<R: Rng + ?Sized>(
    observations: &[f64],
    percentile: f64,
    config: &CiConfig,
    rng: &mut R,
) -> Result<IntervalResult> {
    bootstrap_ci(observations, &StatisticSelector::quantile(percentile), config, rng)
}

/// Bootstrap interval for the arithmetic mean of `observations`
pub fn mean_ci<R: Rng + ?Sized>(observations: &[f64], config: &CiConfig, rng: &mut R) -> Result<IntervalResult> {
    bootstrap_ci(observations, &Mean, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bound, IntervalMethod};
    use approx::assert_relative_eq;
    use bootci_core::sequential;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    fn one_to_ten() -> Vec<f64> {
        (1..=10).map(f64::from).collect()
    }

    #[test]
    fn test_default_config() {
        let config = CiConfig::default();
        assert_eq!(config.bootstraps, 100_000);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.method, MethodChoice::Known(IntervalMethod::Bca));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(CiConfig::default().with_bootstraps(0).validate().unwrap_err().is_invalid_input());
        assert!(CiConfig::default().with_confidence_level(1.0).validate().is_err());
        assert!(CiConfig::default().with_confidence_level(0.0).validate().is_err());
        assert!(CiConfig::default().with_chunk_size(0).validate().is_err());
        // Unknown names are data, not a configuration error
        assert!(CiConfig::default().with_method("studentized").validate().is_ok());
    }

    #[test]
    fn test_mean_ci_percentile() {
        let config = CiConfig::default()
            .with_bootstraps(4000)
            .with_method(IntervalMethod::Percentile);
        let result = mean_ci(&one_to_ten(), &config, &mut rng()).unwrap();

        assert_eq!(result.estimate, 5.5);
        let (low, high) = result.bounds().unwrap();
        assert!(low < 5.5 && 5.5 < high);
        // Standard error of the mean is about 0.87 here
        assert!(high - low > 2.0 && high - low < 5.0);
    }

    #[test]
    fn test_quantile_ci_every_method() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 37) % 40) as f64).collect();
        for method in IntervalMethod::ALL {
            let config = CiConfig::default().with_bootstraps(3000).with_method(method);
            let result = quantile_ci(&data, 0.5, &config, &mut rng()).unwrap();
            let (low, high) = result.bounds().unwrap();
            assert_relative_eq!(result.estimate, 119.5);
            assert!(low <= high, "{method}: {result}");
        }
    }

    #[test]
    fn test_unrecognized_method_returns_sentinel() {
        let config = CiConfig::default().with_method("studentized");
        let result = quantile_ci(&one_to_ten(), 0.9, &config, &mut rng()).unwrap();

        assert_relative_eq!(result.estimate, 9.1, epsilon = 1e-12);
        assert_eq!(result.low, Bound::MethodNotRecognized);
        assert_eq!(result.high, Bound::MethodNotRecognized);
    }

    #[test]
    fn test_unrecognized_method_still_validates_input() {
        let config = CiConfig::default().with_method("studentized");
        let err = quantile_ci(&one_to_ten(), 1.5, &config, &mut rng()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_input_errors() {
        let config = CiConfig::default().with_bootstraps(100);

        let err = mean_ci(&[], &config, &mut rng()).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 2, actual: 0 }));

        let err = mean_ci(&[1.0], &config, &mut rng()).unwrap_err();
        assert!(err.is_invalid_input());

        let err = mean_ci(&[1.0, f64::NAN, 3.0], &config, &mut rng()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = quantile_ci(&one_to_ten(), 0.0, &config, &mut rng()).unwrap_err();
        assert!(err.is_invalid_input());

        let err = mean_ci(&one_to_ten(), &config.clone().with_confidence_level(1.2), &mut rng()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = CiConfig::default().with_bootstraps(2000);
        let a = quantile_ci(&one_to_ten(), 0.75, &config, &mut rng()).unwrap();
        let b = quantile_ci(&one_to_ten(), 0.75, &config, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_driver_steps() {
        let driver = BootstrapCi::new(sequential(), CiConfig::default().with_bootstraps(500));
        let sample = one_to_ten();

        let drawn = driver.resample(&sample, &Mean, &mut rng()).unwrap();
        assert_eq!(drawn.distribution.len(), 500);
        assert_eq!(drawn.observed, 5.5);

        let jack = driver.jackknife(&sample, &Mean).unwrap();
        assert_eq!(jack.len(), 10);
        assert_relative_eq!(jack[0], 6.0);
    }

    #[test]
    fn test_driver_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let driver = BootstrapCi::new(sequential(), CiConfig::default().with_bootstraps(1000))
            .with_cancellation(token);

        let err = driver.estimate(&one_to_ten(), &Mean, &mut rng()).unwrap_err();
        assert!(matches!(err, Error::Cancelled { requested: 1000 }));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn driver(method: IntervalMethod, level: f64) -> BootstrapCi<bootci_core::SequentialEngine> {
            let config = CiConfig::default()
                .with_bootstraps(300)
                .with_confidence_level(level)
                .with_method(method);
            BootstrapCi::new(sequential(), config)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn percentile_interval_nests_as_confidence_rises(
                sample in prop::collection::vec(-50.0f64..50.0, 2..30),
                p in 0.05f64..0.95,
                level in 0.5f64..0.9,
                extra in 0.01f64..0.09,
                seed in any::<u64>(),
            ) {
                let statistic = StatisticSelector::quantile(p);
                let narrow = driver(IntervalMethod::Percentile, level)
                    .estimate(&sample, &statistic, &mut ChaCha8Rng::seed_from_u64(seed))
                    .unwrap();
                let wide = driver(IntervalMethod::Percentile, level + extra)
                    .estimate(&sample, &statistic, &mut ChaCha8Rng::seed_from_u64(seed))
                    .unwrap();

                let (narrow_low, narrow_high) = narrow.bounds().unwrap();
                let (wide_low, wide_high) = wide.bounds().unwrap();
                prop_assert!(wide_low <= narrow_low && narrow_high <= wide_high);
            }

            #[test]
            fn basic_interval_reflects_percentile(
                sample in prop::collection::vec(-50.0f64..50.0, 2..30),
                level in 0.5f64..0.99,
                seed in any::<u64>(),
            ) {
                let percentile = driver(IntervalMethod::Percentile, level)
                    .estimate(&sample, &Mean, &mut ChaCha8Rng::seed_from_u64(seed))
                    .unwrap();
                let basic = driver(IntervalMethod::Basic, level)
                    .estimate(&sample, &Mean, &mut ChaCha8Rng::seed_from_u64(seed))
                    .unwrap();

                let (pct_low, pct_high) = percentile.bounds().unwrap();
                let (basic_low, basic_high) = basic.bounds().unwrap();
                let twice = 2.0 * basic.estimate;
                prop_assert!((basic_low - (twice - pct_high)).abs() <= 1e-9);
                prop_assert!((basic_high - (twice - pct_low)).abs() <= 1e-9);
            }
        }
    }
}
