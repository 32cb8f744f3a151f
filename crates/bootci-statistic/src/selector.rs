//! Closed set of statistics the confidence facade can bootstrap

use crate::{mean::Mean, quantile::Quantile, traits::SampleStatistic};
use bootci_core::{check_open_unit, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which statistic to bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum StatisticSelector {
    /// Type-7 quantile at `percentile`, which must lie in (0, 1)
    Quantile { percentile: f64 },
    /// Arithmetic mean
    Mean,
}

impl StatisticSelector {
    pub fn quantile(percentile: f64) -> Self {
        Self::Quantile { percentile }
    }
}

impl SampleStatistic for StatisticSelector {
    #[inline]
    fn evaluate_in_place(&self, values: &mut [f64]) -> f64 {
        match *self {
            Self::Quantile { percentile } => crate::quantile::quantile_select(values, percentile),
            Self::Mean => Mean.evaluate_in_place(values),
        }
    }

    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        match *self {
            Self::Quantile { percentile } => Quantile::new(percentile)?.estimate(sample),
            Self::Mean => Mean.estimate(sample),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Self::Quantile { percentile } => check_open_unit(percentile),
            Self::Mean => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Quantile { .. } => "quantile",
            Self::Mean => "mean",
        }
    }
}

impl From<Quantile> for StatisticSelector {
    fn from(q: Quantile) -> Self {
        Self::Quantile {
            percentile: q.probability(),
        }
    }
}

impl From<Mean> for StatisticSelector {
    fn from(_: Mean) -> Self {
        Self::Mean
    }
}

impl fmt::Display for StatisticSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantile { percentile } => write!(f, "quantile({percentile})"),
            Self::Mean => write!(f, "mean"),
        }
    }
}
