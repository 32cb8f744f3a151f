//! Core trait for statistics evaluated by the bootstrap
//!
//! A statistic is evaluated many thousands of times per interval, once per
//! resample, always on a buffer the caller owns. Implementations are free to
//! reorder that buffer (quantiles partially sort it), which lets the
//! resampler avoid an allocation per evaluation.

use bootci_core::{Error, Result};

/// A scalar statistic of a numeric sample
pub trait SampleStatistic: Send + Sync {
    /// Evaluate the statistic on `values`, which may be reordered
    ///
    /// `values` is non-empty and finite whenever it comes from the resampler.
    /// An empty slice yields NaN.
    fn evaluate_in_place(&self, values: &mut [f64]) -> f64;

    /// Evaluate the statistic on an immutable sample
    ///
    /// Copies the sample before delegating to
    /// [`evaluate_in_place`](Self::evaluate_in_place).
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        if sample.is_empty() {
            return Err(Error::InvalidInput(format!(
                "Cannot compute {} of empty data",
                self.name()
            )));
        }
        let mut scratch = sample.to_vec();
        Ok(self.evaluate_in_place(&mut scratch))
    }

    /// Check the statistic's own parameters
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Short lowercase name used in errors and tracing fields
    fn name(&self) -> &'static str;
}

impl<S: SampleStatistic + ?Sized> SampleStatistic for &S {
    fn evaluate_in_place(&self, values: &mut [f64]) -> f64 {
        (**self).evaluate_in_place(values)
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
