//! Linear-interpolation sample quantile (Hyndman-Fan type 7)
//!
//! For a sorted sequence `x[0..m]` and probability `p`, the quantile sits at
//! the zero-based fractional position `h = p * (m - 1)` and interpolates
//! between `x[floor(h)]` and `x[floor(h) + 1]`. This is the default
//! definition in R and NumPy.

use crate::traits::SampleStatistic;
use bootci_core::{check_open_unit, Error, Result};
use serde::{Deserialize, Serialize};

/// Split `p * (len - 1)` into its integer index and fractional weight
#[inline]
fn position(len: usize, p: f64) -> (usize, f64) {
    let h = p.clamp(0.0, 1.0) * (len - 1) as f64;
    let lo = h.floor();
    (lo as usize, h - lo)
}

/// Type-7 quantile of already sorted data
///
/// `p` is clamped to `[0, 1]`. Returns NaN for empty input.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || p.is_nan() {
        return f64::NAN;
    }
    let (lo, frac) = position(sorted.len(), p);
    if frac == 0.0 || lo + 1 >= sorted.len() {
        return sorted[lo];
    }
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

/// Type-7 quantile computed by selection instead of a full sort
///
/// Reorders `values`. Runs in expected linear time, which matters when the
/// statistic is evaluated once per bootstrap resample.
pub fn quantile_select(values: &mut [f64], p: f64) -> f64 {
    if values.is_empty() || p.is_nan() {
        return f64::NAN;
    }
    let (lo, frac) = position(values.len(), p);
    let (_, &mut lower, upper) = values.select_nth_unstable_by(lo, f64::total_cmp);
    if frac == 0.0 || upper.is_empty() {
        return lower;
    }
    // The next order statistic is the minimum of the upper partition
    let next = upper
        .iter()
        .copied()
        .min_by(|a, b| a.total_cmp(b))
        .unwrap_or(lower);
    lower + frac * (next - lower)
}

/// Type-7 quantile of unsorted data
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::InvalidInput(
            "Cannot compute quantile of empty data".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "Quantile probability {p} must be in [0, 1]"
        )));
    }
    let mut scratch = data.to_vec();
    Ok(quantile_select(&mut scratch, p))
}

/// Sample quantile at a fixed probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantile {
    probability: f64,
}

impl Quantile {
    /// Create a quantile statistic for `probability` in (0, 1)
    pub fn new(probability: f64) -> Result<Self> {
        check_open_unit(probability)?;
        Ok(Self { probability })
    }

    /// The median (p = 0.5)
    pub fn median() -> Self {
        Self { probability: 0.5 }
    }

    /// Target probability
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl SampleStatistic for Quantile {
    #[inline]
    fn evaluate_in_place(&self, values: &mut [f64]) -> f64 {
        quantile_select(values, self.probability)
    }

    fn validate(&self) -> Result<()> {
        check_open_unit(self.probability)
    }

    fn name(&self) -> &'static str {
        "quantile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_median_even_length() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_relative_eq!(quantile(&data, 0.5).unwrap(), 5.5);
    }

    #[test]
    fn test_known_type7_values() {
        // R: quantile(c(1, 3, 7, 15), c(0.1, 0.25, 0.9)) -> 1.6 2.5 12.6
        let data = [15.0, 1.0, 7.0, 3.0];
        assert_relative_eq!(quantile(&data, 0.1).unwrap(), 1.6, epsilon = 1e-12);
        assert_relative_eq!(quantile(&data, 0.25).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(quantile(&data, 0.9).unwrap(), 12.6, epsilon = 1e-12);
    }

    #[test]
    fn test_extremes() {
        let data = [4.0, 2.0, 9.0];
        assert_eq!(quantile(&data, 0.0).unwrap(), 2.0);
        assert_eq!(quantile(&data, 1.0).unwrap(), 9.0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(quantile(&[3.5], 0.3).unwrap(), 3.5);
        assert_eq!(quantile_sorted(&[3.5], 0.3), 3.5);
    }

    #[test]
    fn test_constant_data() {
        let data = [5.0; 5];
        assert_eq!(quantile(&data, 0.37).unwrap(), 5.0);
    }

    #[test]
    fn test_errors() {
        assert!(quantile(&[], 0.5).is_err());
        assert!(quantile(&[1.0], 1.5).is_err());
        assert!(quantile(&[1.0], f64::NAN).is_err());
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_quantile_statistic() {
        let q = Quantile::new(0.25).unwrap();
        let mut values = vec![8.0, 1.0, 4.0, 2.0, 6.0];
        assert_relative_eq!(q.evaluate_in_place(&mut values), 2.0);
        assert_eq!(q.name(), "quantile");
        assert!(Quantile::new(0.0).is_err());
        assert!(Quantile::new(1.0).is_err());
        assert_eq!(Quantile::median().probability(), 0.5);
    }

    #[test]
    fn test_select_with_ties_and_signed_zero() {
        let data = [2.0, 0.0, -0.0, 1.0, -0.0, 2.0, -3.5, 1.0];
        let mut sorted = data.to_vec();
        sorted.sort_by(f64::total_cmp);

        for p in [0.0, 0.1, 0.2, 0.3, 0.45, 0.5, 0.62, 0.8, 0.93, 1.0] {
            let mut scratch = data.to_vec();
            let selected = quantile_select(&mut scratch, p);
            assert_eq!(selected, quantile_sorted(&sorted, p), "p = {p}");
        }
    }

    proptest! {
        #[test]
        fn select_matches_sorted(
            data in prop::collection::vec(-1e6f64..1e6, 1..200),
            p in 0.0f64..=1.0,
        ) {
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let mut scratch = data.clone();
            let expected = quantile_sorted(&sorted, p);
            let actual = quantile_select(&mut scratch, p);
            prop_assert!((expected - actual).abs() <= 1e-9 * (1.0 + expected.abs()));
        }
    }
}
