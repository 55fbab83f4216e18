//! Mathematical utilities shared by the kernel and embedding crates
//!
//! Every closed form in the formula bank is built from a handful of
//! dimensionless differences and standard normal quantities; they live here
//! so that all formulas scale their arguments the same way.

use statrs::function::factorial::factorial;

/// Dimensionless difference `(a - b) / (scale * normalizer)`
///
/// `scale` is a length-scale or standard deviation and is positive by the
/// invariants of the parameter records. `normalizer` is typically `1` or `sqrt(2)`.
#[inline]
pub fn scaled_diff(a: f64, b: f64, scale: f64, normalizer: f64) -> f64 {
    (a - b) / (scale * normalizer)
}

/// Coefficients `c_m` of the half-integer Matérn polynomial in `s = sqrt(2 nu) r / ell`
///
/// With `p = nu - 1/2`, the kernel is `exp(-s) * sum_m c_m s^m` where
/// `c_m = p!/(2p)! * (2p-m)! / ((p-m)! m!) * 2^m`. Every coefficient is built
/// from factorials up to `(2p)!`, which overflow once `2p > 170`;
/// [`MaternParams`](crate::MaternParams) rejects such degrees, see
/// [`MAX_MATERN_DEGREE`](crate::MAX_MATERN_DEGREE).
pub fn matern_coefficients(degree: u64) -> Vec<f64> {
    let p = degree;
    let scale = factorial(p) / factorial(2 * p);
    (0..=p)
        .map(|m| {
            scale * factorial(2 * p - m) / (factorial(p - m) * factorial(m)) * 2f64.powi(m as i32)
        })
        .collect()
}

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use statrs::function::erf::erfc;
        use std::f64::consts::{PI, SQRT_2};

        /// CDF of the standard normal distribution
        ///
        /// Written through `erfc` so the lower tail keeps full relative precision.
        #[inline]
        pub fn cdf(x: f64) -> f64 {
            0.5 * erfc(-x / SQRT_2)
        }

        /// PDF of the standard normal distribution
        #[inline]
        pub fn pdf(x: f64) -> f64 {
            (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
        }

        /// Partial moments `∫_lo^hi u^k N(u; mean, std²) du` for `k = 0..=order`
        ///
        /// Uses the recurrence obtained by integrating `u^(k-1) (u - mean) N(u)`
        /// by parts:
        ///
        /// `J_k = mean J_(k-1) + std² (k-1) J_(k-2) - std² [u^(k-1) N(u)]_lo^hi`
        pub fn partial_moments(order: usize, mean: f64, std: f64, lo: f64, hi: f64) -> Vec<f64> {
            let var = std * std;
            let density = |u: f64| pdf((u - mean) / std) / std;
            let (f_lo, f_hi) = (density(lo), density(hi));

            let mut moments = Vec::with_capacity(order + 1);
            moments.push(cdf((hi - mean) / std) - cdf((lo - mean) / std));

            for k in 1..=order {
                let prev = moments[k - 1];
                let prev2 = if k >= 2 { moments[k - 2] } else { 0.0 };
                let boundary = hi.powi(k as i32 - 1) * f_hi - lo.powi(k as i32 - 1) * f_lo;
                moments.push(mean * prev + var * (k - 1) as f64 * prev2 - var * boundary);
            }

            moments
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_abs_diff_eq;

            #[test]
            fn test_normal_cdf() {
                assert_abs_diff_eq!(cdf(0.0), 0.5, epsilon = 1e-15);
                assert_abs_diff_eq!(cdf(-1.959963984540054), 0.025, epsilon = 1e-12);
                assert_abs_diff_eq!(cdf(1.959963984540054), 0.975, epsilon = 1e-12);
                // lower tail stays representable
                assert!(cdf(-30.0) > 0.0);
            }

            #[test]
            fn test_normal_pdf() {
                assert_abs_diff_eq!(pdf(0.0), 0.398_942_280_401_432_7, epsilon = 1e-15);
                assert_abs_diff_eq!(pdf(1.0), pdf(-1.0), epsilon = 1e-15);
            }

            #[test]
            fn test_partial_moments_full_line() {
                // Over (practically) the whole line these are the raw moments of N(m, s²)
                let (m, s) = (0.7, 1.3);
                let j = partial_moments(4, m, s, m - 40.0 * s, m + 40.0 * s);
                assert_abs_diff_eq!(j[0], 1.0, epsilon = 1e-12);
                assert_abs_diff_eq!(j[1], m, epsilon = 1e-12);
                assert_abs_diff_eq!(j[2], m * m + s * s, epsilon = 1e-12);
                assert_abs_diff_eq!(j[3], m.powi(3) + 3.0 * m * s * s, epsilon = 1e-10);
                assert_abs_diff_eq!(
                    j[4],
                    m.powi(4) + 6.0 * m * m * s * s + 3.0 * s.powi(4),
                    epsilon = 1e-10
                );
            }

            #[test]
            fn test_partial_moments_half_line() {
                // E[u 1{u > 0}] for a standard normal is pdf(0)
                let j = partial_moments(2, 0.0, 1.0, 0.0, 50.0);
                assert_abs_diff_eq!(j[0], 0.5, epsilon = 1e-14);
                assert_abs_diff_eq!(j[1], pdf(0.0), epsilon = 1e-14);
                assert_abs_diff_eq!(j[2], 0.5, epsilon = 1e-14);
            }
        }
    }
}
