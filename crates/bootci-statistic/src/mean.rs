//! Arithmetic mean and sample moments

use crate::traits::SampleStatistic;
use serde::{Deserialize, Serialize};

/// Arithmetic mean; NaN for empty input
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (n - 1 denominator); NaN below two observations
pub fn variance(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

/// Sample standard deviation (n - 1 denominator)
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Arithmetic mean statistic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mean;

impl SampleStatistic for Mean {
    #[inline]
    fn evaluate_in_place(&self, values: &mut [f64]) -> f64 {
        mean(values)
    }

    fn estimate(&self, sample: &[f64]) -> bootci_core::Result<f64> {
        if sample.is_empty() {
            return Err(bootci_core::Error::InvalidInput(
                "Cannot compute mean of empty data".to_string(),
            ));
        }
        Ok(mean(sample))
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}
