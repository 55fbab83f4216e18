//! Pairwise 1-D kernel functions
//!
//! All kernels here are stationary: they depend on `x1 - x2` only, scaled by
//! the length-scale `ell`. The specific Matérn functions are the closed forms
//! of [`matern`] for `nu` in `{1/2, 3/2, 5/2, 7/2}`.

use ked_core::{matern_coefficients, scaled_diff};

/// `exp(-(x1 - x2)² / (2 ell²))`
pub fn expquad(x1: f64, x2: f64, ell: f64) -> f64 {
    let diff = scaled_diff(x1, x2, ell, std::f64::consts::SQRT_2);
    (-diff * diff).exp()
}

/// Matérn kernel for a positive half-integer `nu`
pub fn matern(x1: f64, x2: f64, ell: f64, nu: f64) -> f64 {
    let degree = (nu - 0.5).round() as u64;
    let s = (2.0 * nu).sqrt() * scaled_diff(x1, x2, ell, 1.0).abs();
    let poly: f64 = matern_coefficients(degree)
        .iter()
        .enumerate()
        .map(|(m, c)| c * s.powi(m as i32))
        .sum();
    (-s).exp() * poly
}

pub fn matern12(x1: f64, x2: f64, ell: f64) -> f64 {
    (-scaled_diff(x1, x2, ell, 1.0).abs()).exp()
}

pub fn matern32(x1: f64, x2: f64, ell: f64) -> f64 {
    let s = 3f64.sqrt() * scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 + s) * (-s).exp()
}

pub fn matern52(x1: f64, x2: f64, ell: f64) -> f64 {
    let s = 5f64.sqrt() * scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 + s + s * s / 3.0) * (-s).exp()
}

pub fn matern72(x1: f64, x2: f64, ell: f64) -> f64 {
    let s = 7f64.sqrt() * scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 + s + 2.0 * s * s / 5.0 + s.powi(3) / 15.0) * (-s).exp()
}

/// `(1 - r)_+` with `r = |x1 - x2| / ell`
pub fn wendland0(x1: f64, x2: f64, ell: f64) -> f64 {
    let r = scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 - r).max(0.0)
}

/// `(1 - r)_+³ (3r + 1)` with `r = |x1 - x2| / ell`
pub fn wendland2(x1: f64, x2: f64, ell: f64) -> f64 {
    let r = scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 - r).max(0.0).powi(3) * (3.0 * r + 1.0)
}

/// `(1 - r)_+⁵ (1 + 5r + 8r²)` with `r = |x1 - x2| / ell`
pub fn wendland4(x1: f64, x2: f64, ell: f64) -> f64 {
    let r = scaled_diff(x1, x2, ell, 1.0).abs();
    (1.0 - r).max(0.0).powi(5) * (1.0 + 5.0 * r + 8.0 * r * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_diagonal() {
        for x in [-1.3, 0.0, 0.4, 7.0] {
            assert_eq!(expquad(x, x, 0.7), 1.0);
            assert_relative_eq!(matern(x, x, 0.7, 4.5), 1.0, epsilon = 1e-14);
            assert_eq!(matern12(x, x, 0.7), 1.0);
            assert_eq!(matern32(x, x, 0.7), 1.0);
            assert_eq!(matern52(x, x, 0.7), 1.0);
            assert_eq!(matern72(x, x, 0.7), 1.0);
            assert_eq!(wendland0(x, x, 0.7), 1.0);
            assert_eq!(wendland2(x, x, 0.7), 1.0);
            assert_eq!(wendland4(x, x, 0.7), 1.0);
        }
    }

    #[test]
    fn test_known_values() {
        assert_relative_eq!(expquad(0.0, 1.0, 1.0), (-0.5f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(matern12(0.0, 2.0, 1.0), (-2.0f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(wendland0(0.0, 0.25, 1.0), 0.75, epsilon = 1e-15);
        assert_relative_eq!(wendland2(0.5, 0.0, 1.0), 0.125 * 2.5, epsilon = 1e-15);
        assert_relative_eq!(wendland4(0.0, 1.0, 2.0), 0.03125 * 5.5, epsilon = 1e-15);
    }

    #[test]
    fn test_compact_support() {
        assert_eq!(wendland0(0.0, 1.0, 1.0), 0.0);
        assert_eq!(wendland0(0.0, 3.0, 1.0), 0.0);
        assert_eq!(wendland2(0.0, -1.2, 1.0), 0.0);
        assert!(wendland2(0.0, 0.99, 1.0) > 0.0);
        assert_eq!(wendland4(0.0, 1.0, 1.0), 0.0);
        assert!(wendland4(0.0, 0.99, 1.0) > 0.0);
    }

    #[test]
    fn test_general_matern_matches_closed_forms() {
        for (x1, x2, ell) in [(0.0, 0.3, 1.0), (1.2, -0.4, 0.3), (2.0, 2.5, 1.6)] {
            assert_relative_eq!(matern(x1, x2, ell, 0.5), matern12(x1, x2, ell), epsilon = 1e-14);
            assert_relative_eq!(matern(x1, x2, ell, 1.5), matern32(x1, x2, ell), epsilon = 1e-14);
            assert_relative_eq!(matern(x1, x2, ell, 2.5), matern52(x1, x2, ell), epsilon = 1e-14);
            assert_relative_eq!(matern(x1, x2, ell, 3.5), matern72(x1, x2, ell), epsilon = 1e-14);
        }
    }
}
