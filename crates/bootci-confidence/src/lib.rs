//! Bootstrap confidence intervals for a quantile or a mean
//!
//! This crate resamples a numeric sample with replacement, evaluates a
//! statistic on every resample, and turns the resulting bootstrap
//! distribution into an interval with one of four methods:
//!
//! - **Percentile**: empirical quantiles of the bootstrap distribution
//! - **Basic**: percentile bounds reflected around the observed estimate
//! - **Normal**: observed estimate plus/minus a normal quantile times the bootstrap SD
//! - **BCa**: percentile bounds adjusted for bias and skewness, with the
//!   acceleration taken from a jackknife pass
//!
//! # Overview
//!
//! The random source is always supplied by the caller. Given the same seed,
//! the same configuration produces the same interval whether the resamples
//! run on one thread or on rayon's pool (`parallel` feature).
//!
//! A method name outside the supported four is not an error: the result
//! carries the observed estimate and [`Bound::MethodNotRecognized`] for both
//! bounds.
//!
//! # Examples
//!
//! ## 90th percentile
//!
//! ```rust
//! use bootci_confidence::{quantile_ci, CiConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let first_flowering = [
//!     112.0, 118.0, 121.0, 109.0, 130.0, 125.0, 117.0, 119.0, 141.0, 123.0,
//!     115.0, 128.0, 120.0, 126.0, 111.0, 133.0, 122.0, 116.0, 124.0, 129.0,
//! ];
//! let config = CiConfig::default().with_bootstraps(5_000);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let result = quantile_ci(&first_flowering, 0.9, &config, &mut rng).unwrap();
//! println!("{result}");
//! ```
//!
//! ## Unrecognized method
//!
//! ```rust
//! use bootci_confidence::{mean_ci, Bound, CiConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = CiConfig::default().with_method("studentized");
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//!
//! let result = mean_ci(&[1.0, 2.0, 3.0], &config, &mut rng).unwrap();
//! assert_eq!(result.estimate, 2.0);
//! assert_eq!(result.low, Bound::MethodNotRecognized);
//! ```

pub mod api;
mod bootstrap;
mod bootstrap_methods;
pub mod jackknife;
mod method;
mod types;

// Re-exports
pub use api::{
    bootstrap_ci, mean_ci, quantile_ci, BootstrapCi, CiConfig, DEFAULT_RESAMPLES, FAST_RESAMPLES,
};
pub use bootstrap::{
    Bootstrap, BootstrapDistribution, BootstrapMethod, BootstrapSample, DEFAULT_CHUNK_SIZE,
};
pub use bootstrap_methods::{
    build_interval, BCaBootstrap, BasicBootstrap, BcaDiagnostics, NormalBootstrap,
    PercentileBootstrap,
};
pub use jackknife::jackknife_values;
pub use method::{IntervalMethod, MethodChoice, UnknownMethod};
pub use types::{Bound, ConfidenceInterval, ConfidenceLevel, IntervalResult, METHOD_NOT_RECOGNIZED};
