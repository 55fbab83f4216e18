//! Closed-form 1-D initial variances `∫∫ k(x, y) dμ(x) dμ(y)`

use ked_core::{ExpQuadParams, LebesgueParams};
use statrs::function::erf::erf;
use std::f64::consts::{PI, SQRT_2};

/// Exponentiated quadratic against a Lebesgue measure
///
/// `sqrt(2π) ell density² (ell sqrt(2/π) (exp(-L²/(2 ell²)) - 1) + L erf(L / (ell sqrt 2)))`
/// with `L = ub - lb`.
pub fn expquad_lebesgue(kernel: &ExpQuadParams, measure: &LebesgueParams) -> f64 {
    let ell = kernel.ell();
    let width = measure.width();
    let ratio = width / ell;
    let bracket =
        ell * (2.0 / PI).sqrt() * (-0.5 * ratio * ratio).exp_m1() + width * erf(ratio / SQRT_2);
    (2.0 * PI).sqrt() * ell * measure.density().powi(2) * bracket
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_interval() {
        let kernel = ExpQuadParams::new(1.0).unwrap();
        let measure = LebesgueParams::new(0.0, 1.0, 1.0).unwrap();
        assert_abs_diff_eq!(
            expquad_lebesgue(&kernel, &measure),
            0.924_310_103_209_564_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_normalized_interval() {
        let kernel = ExpQuadParams::new(0.3).unwrap();
        let measure = LebesgueParams::with_normalization(-0.5, 2.5, true).unwrap();
        assert_abs_diff_eq!(
            expquad_lebesgue(&kernel, &measure),
            0.230_662_827_463_1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_short_interval_has_no_cancellation() {
        // k ≈ 1 on an interval much shorter than ell, so the variance is ≈ L²
        let kernel = ExpQuadParams::new(1.0e4).unwrap();
        let measure = LebesgueParams::new(0.0, 1.0e-3, 1.0).unwrap();
        let variance = expquad_lebesgue(&kernel, &measure);
        assert!((variance / 1.0e-6 - 1.0).abs() < 1e-6);
    }
}
