//! Closed-form 1-D kernel mean embeddings
//!
//! Each function evaluates `∫ k(x, y) dμ(y)` for one axis at every entry of
//! `x`. Lebesgue formulas assume `x` lies inside `[lb, ub]`. The Matérn and
//! Wendland formulas are written in terms of the scaled distances
//! `(ub - x) / ell` and `(x - lb) / ell` so that no large exponentials cancel.

use ked_core::math::distributions::normal;
use ked_core::{
    matern_coefficients, scaled_diff, Error, ExpQuadParams, GaussianParams, LebesgueParams,
    MaternParams, Result, WendlandParams,
};
use ndarray::{Array1, ArrayView1};
use statrs::function::erf::erf;
use statrs::function::factorial::factorial;
use std::f64::consts::{PI, SQRT_2};

/// `exp(exponent) * weight` for a nonnegative `weight`, evaluated in log space
///
/// The Gaussian-measure Matérn formulas multiply exponentials that overflow
/// far from the mean by normal CDFs that underflow there.
#[inline]
fn weighted_exp(exponent: f64, weight: f64) -> f64 {
    if weight > 0.0 {
        (exponent + weight.ln()).exp()
    } else {
        0.0
    }
}

fn require_zero_mean(kernel: &str, measure: &GaussianParams) -> Result<()> {
    if measure.mean() != 0.0 {
        return Err(Error::DomainRestriction(format!(
            "the {kernel} embedding of a Gaussian measure is only available for mean 0, got mean {}",
            measure.mean()
        )));
    }
    Ok(())
}

pub fn expquad_lebesgue(
    x: ArrayView1<f64>,
    kernel: &ExpQuadParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    let factor = measure.density() * (PI / 2.0).sqrt() * ell;
    x.mapv(|x| {
        let erf_lo = erf(scaled_diff(measure.lb(), x, ell, SQRT_2));
        let erf_up = erf(scaled_diff(measure.ub(), x, ell, SQRT_2));
        factor * (erf_up - erf_lo)
    })
}

pub fn expquad_gaussian(
    x: ArrayView1<f64>,
    kernel: &ExpQuadParams,
    measure: &GaussianParams,
) -> Array1<f64> {
    let total_var = kernel.ell().powi(2) + measure.variance();
    let factor = (kernel.ell().powi(2) / total_var).sqrt();
    x.mapv(|x| {
        let diff = scaled_diff(x, measure.mean(), total_var.sqrt(), SQRT_2);
        factor * (-diff * diff).exp()
    })
}

/// Matérn with general half-integer `nu` against a Lebesgue measure
///
/// With `a = sqrt(2 nu) / ell` and the polynomial coefficients `c_m` of the
/// kernel, the embedding is
/// `density / a * (2 C - exp(-D1) Q(D1) - exp(-D2) Q(D2))` where
/// `D1 = a (ub - x)`, `D2 = a (x - lb)`, `C = sum_m c_m m!` and
/// `Q(D) = sum_m c_m m! sum_(j <= m) D^j / j!`.
///
/// The coefficients need `(2p)!` for `p = nu - 1/2`, which bounds `nu` by
/// [`ked_core::MAX_MATERN_DEGREE`]` + 1/2`.
pub fn matern_lebesgue(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let a = (2.0 * kernel.nu()).sqrt() / kernel.ell();
    // c_m m!
    let weights: Vec<f64> = matern_coefficients(kernel.degree())
        .iter()
        .enumerate()
        .map(|(m, c)| c * factorial(m as u64))
        .collect();
    let total: f64 = weights.iter().sum();

    let tail = |d: f64| -> f64 {
        let mut partial_exp = 0.0;
        let mut term = 1.0;
        let mut q = 0.0;
        for (j, w) in weights.iter().enumerate() {
            if j > 0 {
                term *= d / j as f64;
            }
            partial_exp += term;
            q += w * partial_exp;
        }
        (-d).exp() * q
    };

    x.mapv(|x| {
        let d_up = a * (measure.ub() - x);
        let d_lo = a * (x - measure.lb());
        measure.density() / a * (2.0 * total - tail(d_up) - tail(d_lo))
    })
}

pub fn matern12_lebesgue(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    x.mapv(|x| {
        let exp_lb_x = scaled_diff(measure.lb(), x, ell, 1.0).exp();
        let exp_x_ub = scaled_diff(x, measure.ub(), ell, 1.0).exp();
        measure.density() * ell * (2.0 - exp_lb_x - exp_x_ub)
    })
}

pub fn matern32_lebesgue(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    let sqrt3 = 3f64.sqrt();
    let (lb, ub) = (measure.lb(), measure.ub());
    x.mapv(|x| {
        let diff_x_ub = sqrt3 * scaled_diff(x, ub, ell, 1.0);
        let diff_lb_x = sqrt3 * scaled_diff(lb, x, ell, 1.0);
        let upper = diff_x_ub.exp() * (ub + 2.0 * ell / sqrt3 - x);
        let lower = diff_lb_x.exp() * (x + 2.0 * ell / sqrt3 - lb);
        measure.density() * (4.0 * ell / sqrt3 - upper - lower)
    })
}

pub fn matern52_lebesgue(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    let sqrt5 = 5f64.sqrt();
    let exp_term = |d: f64| ell * d.exp() * (8.0 - 5.0 * d + d * d) / (3.0 * sqrt5);
    x.mapv(|x| {
        let diff_x_ub = sqrt5 * scaled_diff(x, measure.ub(), ell, 1.0);
        let diff_lb_x = sqrt5 * scaled_diff(measure.lb(), x, ell, 1.0);
        measure.density() * (16.0 * ell / (3.0 * sqrt5) - exp_term(diff_x_ub) - exp_term(diff_lb_x))
    })
}

pub fn matern72_lebesgue(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    let sqrt7 = 7f64.sqrt();
    let exp_term =
        |d: f64| ell * d.exp() * (48.0 - 33.0 * d + 9.0 * d * d - d.powi(3)) / (15.0 * sqrt7);
    x.mapv(|x| {
        let diff_x_ub = sqrt7 * scaled_diff(x, measure.ub(), ell, 1.0);
        let diff_lb_x = sqrt7 * scaled_diff(measure.lb(), x, ell, 1.0);
        measure.density() * (32.0 * ell / (5.0 * sqrt7) - exp_term(diff_x_ub) - exp_term(diff_lb_x))
    })
}

/// Matérn-1/2 against `N(mean, variance)`
///
/// Sum of the two one-sided integrals `y < x` and `y > x`, each an
/// exponential times a normal CDF of the mean shifted by `∓ variance / ell`.
pub fn matern12_gaussian(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &GaussianParams,
) -> Array1<f64> {
    let a = 1.0 / kernel.ell();
    let (mean, var, std) = (measure.mean(), measure.variance(), measure.std());
    let shift = 0.5 * a * a * var;
    x.mapv(|x| {
        let u_lo = scaled_diff(x, mean + a * var, std, 1.0);
        let u_up = scaled_diff(x, mean - a * var, std, 1.0);
        weighted_exp(a * (mean - x) + shift, normal::cdf(u_lo))
            + weighted_exp(a * (x - mean) + shift, normal::cdf(-u_up))
    })
}

/// Matérn-3/2 against `N(mean, variance)`
///
/// Like [`matern12_gaussian`] with the shifted means `mean ∓ sqrt(3) variance / ell`;
/// the linear factor of the kernel adds normal PDF terms.
pub fn matern32_gaussian(
    x: ArrayView1<f64>,
    kernel: &MaternParams,
    measure: &GaussianParams,
) -> Array1<f64> {
    let a = 3f64.sqrt() / kernel.ell();
    let (mean, var, std) = (measure.mean(), measure.variance(), measure.std());
    let shift = 0.5 * a * a * var;
    let (mean_lo, mean_up) = (mean + a * var, mean - a * var);
    x.mapv(|x| {
        let u_lo = scaled_diff(x, mean_lo, std, 1.0);
        let u_up = scaled_diff(x, mean_up, std, 1.0);
        let below = (1.0 + a * (x - mean_lo)) * normal::cdf(u_lo) + a * std * normal::pdf(u_lo);
        let above = (1.0 + a * (mean_up - x)) * normal::cdf(-u_up) + a * std * normal::pdf(u_up);
        weighted_exp(a * (mean - x) + shift, below) + weighted_exp(a * (x - mean) + shift, above)
    })
}

/// Wendland-0 against a Lebesgue measure
///
/// Classified per point by how the support `[x - ell, x + ell]` overlaps
/// `[lb, ub]`: inside on both sides, cut at `lb`, cut at `ub`, or cut at both.
pub fn wendland0_lebesgue(
    x: ArrayView1<f64>,
    kernel: &WendlandParams,
    measure: &LebesgueParams,
) -> Array1<f64> {
    let ell = kernel.ell();
    let (lb, ub) = (measure.lb(), measure.ub());
    // ∫_0^d (1 - t / ell) dt
    let truncated = |d: f64| d - d * d / (2.0 * ell);
    x.mapv(|x| {
        let fits_above = ub >= x + ell;
        let fits_below = lb + ell < x;
        let mass = match (fits_below, fits_above) {
            (true, true) => ell,
            (false, true) => 0.5 * ell + truncated(x - lb),
            (true, false) => 0.5 * ell + truncated(ub - x),
            (false, false) => truncated(x - lb) + truncated(ub - x),
        };
        measure.density() * mass
    })
}

/// Wendland-0 against `N(0, variance)`
///
/// Fails with [`Error::DomainRestriction`] for a nonzero mean.
pub fn wendland0_gaussian(
    x: ArrayView1<f64>,
    kernel: &WendlandParams,
    measure: &GaussianParams,
) -> Result<Array1<f64>> {
    require_zero_mean("wendland0", measure)?;
    let ell = kernel.ell();
    let (var, std) = (measure.variance(), measure.std());
    let cdf = |t: f64| normal::cdf(t / std);
    let pdf = |t: f64| normal::pdf(t / std) / std;
    Ok(x.mapv(|x| {
        let first = x * (2.0 * cdf(x) - cdf(x - ell) - cdf(x + ell));
        let second = var * (2.0 * pdf(x) - pdf(x - ell) - pdf(x + ell));
        cdf(x + ell) - cdf(x - ell) - (first + second) / ell
    }))
}

/// Wendland-2 against `N(0, variance)`
///
/// The kernel is the polynomial `1 - 6t² + 8t³ - 3t⁴` in `t = |x - y| / ell` on
/// its support, so each side of `x` is a combination of truncated normal
/// moments of order up to 4. Fails with [`Error::DomainRestriction`] for a
/// nonzero mean.
pub fn wendland2_gaussian(
    x: ArrayView1<f64>,
    kernel: &WendlandParams,
    measure: &GaussianParams,
) -> Result<Array1<f64>> {
    const POLY: [f64; 5] = [1.0, 0.0, -6.0, 8.0, -3.0];

    require_zero_mean("wendland2", measure)?;
    let ell = kernel.ell();
    let std = measure.std();
    Ok(x.mapv(|x| {
        // y = x + u on the right, y = x - u on the left, u in [0, ell]
        let right = normal::partial_moments(4, -x, std, 0.0, ell);
        let left = normal::partial_moments(4, x, std, 0.0, ell);
        POLY.iter()
            .enumerate()
            .map(|(k, c)| c / ell.powi(k as i32) * (right[k] + left[k]))
            .sum()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    fn unit_interval() -> LebesgueParams {
        LebesgueParams::new(0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_expquad_lebesgue_unit_interval() {
        let kernel = ExpQuadParams::new(1.0).unwrap();
        let mean = expquad_lebesgue(arr1(&[0.1, 0.5, 0.9]).view(), &kernel, &unit_interval());
        assert_abs_diff_eq!(mean[0], 0.891_777_405_925_190_1, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[1], 0.959_850_437_919_768_3, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[2], mean[0], epsilon = 1e-15);
    }

    #[test]
    fn test_expquad_gaussian_at_mean() {
        let kernel = ExpQuadParams::new(2.0).unwrap();
        let measure = GaussianParams::new(0.5, 5.0).unwrap();
        let mean = expquad_gaussian(arr1(&[0.5, 3.5]).view(), &kernel, &measure);
        assert_abs_diff_eq!(mean[0], 2.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(mean[1], 2.0 / 3.0 * (-0.5f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_matern_lebesgue_reference_values() {
        let x = arr1(&[0.5]);
        let expected = [
            (0.5, 0.786_938_680_574_733_2),
            (1.5, 0.917_400_709_628_826_2),
            (2.5, 0.938_678_533_428_001_6),
            (3.5, 0.946_125_618_120_799_1),
            (4.5, 0.949_763_943_676_604_8),
        ];
        for (nu, value) in expected {
            let kernel = MaternParams::new(1.0, nu).unwrap();
            let mean = matern_lebesgue(x.view(), &kernel, &unit_interval());
            assert_abs_diff_eq!(mean[0], value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matern_lebesgue_at_largest_degree() {
        let kernel = MaternParams::new(1.0, 85.5).unwrap();
        let mean = matern_lebesgue(arr1(&[0.0, 0.5, 1.0]).view(), &kernel, &unit_interval());
        assert!(mean.iter().all(|m| m.is_finite()));
        assert_abs_diff_eq!(mean[0], 0.854_366_649_598_898, epsilon = 1e-9);
        assert_abs_diff_eq!(mean[1], 0.959_410_409_570_493, epsilon = 1e-9);
        assert_abs_diff_eq!(mean[2], mean[0], epsilon = 1e-12);
    }

    #[test]
    fn test_general_matern_lebesgue_matches_fixed_forms() {
        let x = arr1(&[-0.45, 0.0, 0.1, 1.3, 2.49]);
        let measure = LebesgueParams::with_normalization(-0.5, 2.5, true).unwrap();
        for ell in [0.3, 1.0, 1.6] {
            let fixed = [
                matern12_lebesgue(x.view(), &MaternParams::new(ell, 0.5).unwrap(), &measure),
                matern32_lebesgue(x.view(), &MaternParams::new(ell, 1.5).unwrap(), &measure),
                matern52_lebesgue(x.view(), &MaternParams::new(ell, 2.5).unwrap(), &measure),
                matern72_lebesgue(x.view(), &MaternParams::new(ell, 3.5).unwrap(), &measure),
            ];
            for (nu, expected) in [0.5, 1.5, 2.5, 3.5].into_iter().zip(fixed.iter()) {
                let kernel = MaternParams::new(ell, nu).unwrap();
                let general = matern_lebesgue(x.view(), &kernel, &measure);
                for (g, e) in general.iter().zip(expected.iter()) {
                    assert_abs_diff_eq!(*g, *e, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_matern_gaussian_reference_values() {
        let cases = [
            (0.3, 1.0, 0.0, 1.0, 0.510_968_512_542_949_6, 0.620_896_098_073_155_3),
            (2.0, 2.0, -0.3, 0.3, 0.328_734_498_450_309_8, 0.422_466_228_188_208_45),
        ];
        for (x, ell, mean, var, m12, m32) in cases {
            let measure = GaussianParams::new(mean, var).unwrap();
            let x = arr1(&[x]);
            let value = matern12_gaussian(x.view(), &MaternParams::new(ell, 0.5).unwrap(), &measure);
            assert_abs_diff_eq!(value[0], m12, epsilon = 1e-12);
            let value = matern32_gaussian(x.view(), &MaternParams::new(ell, 1.5).unwrap(), &measure);
            assert_abs_diff_eq!(value[0], m32, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matern_gaussian_far_tail_is_finite() {
        let measure = GaussianParams::new(0.0, 1.0).unwrap();
        let x = arr1(&[-60.0, 60.0]);
        let kernel = MaternParams::new(0.01, 0.5).unwrap();
        let mean = matern12_gaussian(x.view(), &kernel, &measure);
        assert!(mean.iter().all(|m| m.is_finite() && *m >= 0.0));
        let kernel = MaternParams::new(0.01, 1.5).unwrap();
        let mean = matern32_gaussian(x.view(), &kernel, &measure);
        assert!(mean.iter().all(|m| m.is_finite() && *m >= 0.0));
    }

    #[test]
    fn test_wendland0_lebesgue_cases() {
        let kernel = WendlandParams::new(0.8, 0).unwrap();
        let measure = LebesgueParams::with_normalization(-0.3, 1.4, true).unwrap();
        // cut at lb, inside, cut at ub
        let mean = wendland0_lebesgue(arr1(&[0.1, 0.55, 0.8]).view(), &kernel, &measure);
        assert_abs_diff_eq!(mean[0], 0.411_764_705_882_353, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[1], 0.470_588_235_294_117_7, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[2], 0.455_882_352_941_176_5, epsilon = 1e-12);

        // cut at both
        let kernel = WendlandParams::new(0.9, 0).unwrap();
        let mean = wendland0_lebesgue(arr1(&[0.55]).view(), &kernel, &measure);
        assert_abs_diff_eq!(mean[0], 0.527_777_777_777_777_8, epsilon = 1e-12);

        // support strictly inside
        let wide = LebesgueParams::new(-5.0, 5.0, 1.0).unwrap();
        let mean = wendland0_lebesgue(arr1(&[0.0]).view(), &kernel, &wide);
        assert_abs_diff_eq!(mean[0], 0.9, epsilon = 1e-15);
    }

    #[test]
    fn test_wendland_gaussian_reference_values() {
        let kernel = WendlandParams::new(1.0, 0).unwrap();
        let measure = GaussianParams::new(0.0, 1.0).unwrap();
        let mean = wendland0_gaussian(arr1(&[0.1]).view(), &kernel, &measure).unwrap();
        assert_abs_diff_eq!(mean[0], 0.367_179_984_668_771_44, epsilon = 1e-12);

        let kernel = WendlandParams::new(1.0, 2).unwrap();
        let mean = wendland2_gaussian(arr1(&[-0.1, 0.5, 0.9]).view(), &kernel, &measure).unwrap();
        assert_abs_diff_eq!(mean[0], 0.303_464_877_651_125_1, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[1], 0.272_014_368_672_661_04, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[2], 0.210_716_918_460_301_27, epsilon = 1e-12);
    }

    #[test]
    fn test_wendland_gaussian_requires_zero_mean() {
        let measure = GaussianParams::new(0.2, 1.0).unwrap();
        let x = arr1(&[0.0]);
        let err = wendland0_gaussian(x.view(), &WendlandParams::new(1.0, 0).unwrap(), &measure)
            .unwrap_err();
        assert!(matches!(err, Error::DomainRestriction(_)));
        assert!(wendland2_gaussian(x.view(), &WendlandParams::new(1.0, 2).unwrap(), &measure).is_err());
    }
}
