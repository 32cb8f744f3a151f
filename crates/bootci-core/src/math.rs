//! Mathematical utilities for bootstrap interval construction
//!
//! Standard normal CDF and quantile function used by the normal and BCa
//! interval methods.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of the standard normal
        pub fn cdf(x: f64) -> f64 {
            if x.is_nan() {
                return f64::NAN;
            }
            0.5 * erfc(-x / SQRT_2)
        }

        /// Inverse CDF (quantile function) of the standard normal
        ///
        /// Returns `-inf` for `p <= 0`, `+inf` for `p >= 1` and NaN for NaN, so
        /// callers can detect degenerate inputs instead of panicking.
        pub fn ppf(p: f64) -> f64 {
            if p.is_nan() {
                return f64::NAN;
            }
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for ppf (percent point function) that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

    }
}
