//! Bootstrap confidence intervals for a quantile or a mean
//!
//! This crate re-exports the workspace members:
//!
//! - [`bootci_core`]: error type, normal distribution helpers, execution engines,
//!   resampling buffers, cancellation
//! - [`bootci_statistic`]: type-7 quantile and mean behind the `SampleStatistic` trait
//! - [`bootci_confidence`]: resampler, jackknife, interval methods and the
//!   `quantile_ci` / `mean_ci` entry points
//!
//! # Example
//!
//! ```rust
//! use bootci::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let sample: Vec<f64> = (1..=10).map(f64::from).collect();
//! let config = CiConfig::default()
//!     .with_bootstraps(2_000)
//!     .with_method(IntervalMethod::Percentile);
//! let mut rng = ChaCha8Rng::seed_from_u64(3);
//!
//! let median = quantile_ci(&sample, 0.5, &config, &mut rng)?;
//! assert_eq!(median.estimate, 5.5);
//! # Ok::<(), bootci::Error>(())
//! ```

pub use bootci_confidence;
pub use bootci_core;
pub use bootci_statistic;

pub use bootci_confidence::{
    bootstrap_ci, mean_ci, quantile_ci, BootstrapCi, Bound, CiConfig, ConfidenceInterval,
    ConfidenceLevel, IntervalMethod, IntervalResult, MethodChoice,
};
pub use bootci_core::{CancellationToken, Error, Result};
pub use bootci_statistic::{Mean, Quantile, SampleStatistic, StatisticSelector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use bootci_confidence::{
        mean_ci, quantile_ci, BootstrapCi, Bound, CiConfig, IntervalMethod, IntervalResult,
    };
    pub use bootci_core::prelude::*;
    pub use bootci_statistic::{Mean, Quantile, SampleStatistic, StatisticSelector};
}
