//! Sample statistics for bootstrap confidence intervals
//!
//! Two statistics are supported:
//!
//! - **Quantile**: Hyndman-Fan type 7 (linear interpolation), the R default
//! - **Mean**: arithmetic mean
//!
//! Both implement [`SampleStatistic`], which the resampler calls once per
//! bootstrap resample and once per jackknife deletion.
//!
//! # Example
//!
//! ```rust
//! use bootci_statistic::{SampleStatistic, StatisticSelector};
//!
//! let days = [121.0, 130.0, 118.0, 140.0, 125.0];
//! let median = StatisticSelector::quantile(0.5).estimate(&days).unwrap();
//! assert_eq!(median, 125.0);
//! ```

pub mod mean;
pub mod quantile;
mod selector;
mod traits;

pub use mean::{mean, std_dev, variance, Mean};
pub use quantile::{quantile, quantile_select, quantile_sorted, Quantile};
pub use selector::StatisticSelector;
pub use traits::SampleStatistic;
