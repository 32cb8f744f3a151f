//! Nonparametric bootstrap resampling
//!
//! This module provides the resampling engine that:
//! - Draws B resamples of size n with replacement from the sample
//! - Evaluates a statistic on each resample through an execution engine
//! - Reuses per-task workspaces instead of allocating per resample
//! - Produces the same distribution for a given seed on every engine
//!
//! Reproducibility does not depend on scheduling: the caller's RNG supplies
//! one base seed, the B iterations are cut into fixed-size chunks, and each
//! chunk runs on its own ChaCha stream keyed by the chunk index.

use crate::{jackknife, ConfidenceInterval};
use bootci_core::{
    CancellationToken, Error, ExecutionEngine, ResampleWorkspace, Result,
};
use bootci_statistic::{mean, std_dev, SampleStatistic};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 100_000;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 10_000;

/// Resamples handled by one RNG stream
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Construction of a confidence interval from a bootstrap distribution
///
/// Each interval method (percentile, basic, normal, BCa) implements this
/// trait. `confidence_level` is the two-sided coverage, e.g. 0.95.
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from bootstrap distribution
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        confidence_level: f64,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Bootstrap statistic values, one per resample
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapDistribution {
    values: Vec<f64>,
}

impl BootstrapDistribution {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the bootstrap values
    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    /// Sample standard deviation of the bootstrap values (n - 1 denominator)
    pub fn std_dev(&self) -> f64 {
        std_dev(&self.values)
    }

    /// Sorted copy of the values
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        sorted
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Observed estimate together with its bootstrap distribution
#[derive(Debug, Clone)]
pub struct BootstrapSample {
    /// Statistic on the original sample
    pub observed: f64,
    pub distribution: BootstrapDistribution,
}

/// Bootstrap resampler parameterised by an execution engine
#[derive(Debug, Clone)]
pub struct Bootstrap<E> {
    engine: E,
    n_resamples: usize,
    chunk_size: usize,
    cancellation: Option<CancellationToken>,
}

impl<E: ExecutionEngine> Bootstrap<E> {
    /// Create a new resampler with [`DEFAULT_RESAMPLES`] resamples
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            n_resamples: DEFAULT_RESAMPLES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancellation: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set how many resamples share one RNG stream
    ///
    /// Changing the chunk size changes which draws a seed produces.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Stop resampling when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled {
                requested: self.n_resamples,
            }),
            _ => Ok(()),
        }
    }

    /// Draw the bootstrap distribution of `statistic` over `sample`
    ///
    /// Consumes one `u64` from `rng`. Two calls with identically seeded RNGs
    /// return identical distributions regardless of the engine.
    #[instrument(skip_all, fields(n = sample.len(), n_resamples = self.n_resamples, statistic = statistic.name()))]
    pub fn resample<S, R>(&self, sample: &[f64], statistic: &S, rng: &mut R) -> Result<BootstrapSample>
    where
        S: SampleStatistic,
        R: Rng + ?Sized,
    {
        if sample.is_empty() {
            return Err(Error::InvalidInput("Cannot resample an empty sample".to_string()));
        }
        if self.n_resamples == 0 {
            return Err(Error::InvalidParameter(
                "Number of resamples must be positive".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidParameter("Chunk size must be positive".to_string()));
        }

        let observed = statistic.estimate(sample)?;
        let base_seed: u64 = rng.gen();
        let n_chunks = self.n_resamples.div_ceil(self.chunk_size);

        debug!(n_chunks, chunk_size = self.chunk_size, "running bootstrap chunks");

        let chunks = self.engine.execute_batch(n_chunks, |chunk| -> Result<Vec<f64>> {
            let start = chunk * self.chunk_size;
            let len = self.chunk_size.min(self.n_resamples - start);

            let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
            rng.set_stream(chunk as u64);
            let mut workspace = ResampleWorkspace::with_capacity(sample.len());
            let mut values = Vec::with_capacity(len);

            for _ in 0..len {
                self.check_cancelled()?;
                let resampled = workspace.draw(&mut rng, sample);
                values.push(statistic.evaluate_in_place(resampled));
            }
            Ok(values)
        });

        let mut values = Vec::with_capacity(self.n_resamples);
        for chunk in chunks {
            values.extend(chunk?);
        }
        debug_assert_eq!(values.len(), self.n_resamples);

        debug!(observed, "bootstrap completed");

        Ok(BootstrapSample {
            observed,
            distribution: BootstrapDistribution::new(values),
        })
    }

    /// Leave-one-out values of `statistic`, computed on this resampler's engine
    pub fn jackknife<S: SampleStatistic>(&self, sample: &[f64], statistic: &S) -> Result<Vec<f64>> {
        jackknife::jackknife_values(&self.engine, sample, statistic, self.cancellation.as_ref())
    }
}
