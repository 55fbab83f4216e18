//! Family names and typed per-axis parameter records
//!
//! Kernel and measure families are identified by the lowercase strings used
//! in configuration (`"expquad"`, `"matern32"`, `"lebesgue"`, ...). Each axis of a
//! product kernel or measure exposes its shape parameters as one of the
//! records below; construction validates them once, and they are read-only
//! afterwards.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kernel families with closed-form embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelFamily {
    /// Exponentiated quadratic (squared exponential, RBF)
    ExpQuad,
    /// Matérn with a general positive half-integer smoothness `nu`
    Matern,
    /// Matérn with `nu = 1/2`
    Matern12,
    /// Matérn with `nu = 3/2`
    Matern32,
    /// Matérn with `nu = 5/2`
    Matern52,
    /// Matérn with `nu = 7/2`
    Matern72,
    /// Compactly supported Wendland kernel of smoothness order 0
    Wendland0,
    /// Compactly supported Wendland kernel of smoothness order 2
    Wendland2,
    /// Compactly supported Wendland kernel of smoothness order 4
    ///
    /// Evaluation only: no embedding is registered for it.
    Wendland4,
}

impl KernelFamily {
    /// Every kernel family, in catalogue order
    pub const ALL: [KernelFamily; 9] = [
        Self::ExpQuad,
        Self::Matern,
        Self::Matern12,
        Self::Matern32,
        Self::Matern52,
        Self::Matern72,
        Self::Wendland0,
        Self::Wendland2,
        Self::Wendland4,
    ];

    /// Configuration name of the family
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExpQuad => "expquad",
            Self::Matern => "matern",
            Self::Matern12 => "matern12",
            Self::Matern32 => "matern32",
            Self::Matern52 => "matern52",
            Self::Matern72 => "matern72",
            Self::Wendland0 => "wendland0",
            Self::Wendland2 => "wendland2",
            Self::Wendland4 => "wendland4",
        }
    }
}

impl fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| Error::UnknownKernel(s.to_string()))
    }
}

/// Measure families with closed-form embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureFamily {
    /// Lebesgue measure on a box, optionally normalized
    Lebesgue,
    /// Gaussian with diagonal covariance
    Gaussian,
}

impl MeasureFamily {
    /// Every measure family, in catalogue order
    pub const ALL: [MeasureFamily; 2] = [Self::Lebesgue, Self::Gaussian];

    /// Configuration name of the family
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lebesgue => "lebesgue",
            Self::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for MeasureFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| Error::UnknownMeasure(s.to_string()))
    }
}

fn check_lengthscale(ell: f64) -> Result<()> {
    // also rejects NaN
    if !(ell > 0.0) {
        return Err(Error::non_positive("ell", ell));
    }
    Ok(())
}

/// Length-scale of a single exponentiated-quadratic axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpQuadParams {
    ell: f64,
}

impl ExpQuadParams {
    pub fn new(ell: f64) -> Result<Self> {
        check_lengthscale(ell)?;
        Ok(Self { ell })
    }

    pub fn ell(&self) -> f64 {
        self.ell
    }
}

/// Largest polynomial degree `p = nu - 1/2` whose `(2p)!` is finite in f64
pub const MAX_MATERN_DEGREE: u64 = 85;

/// Length-scale and half-integer smoothness of a single Matérn axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaternParams {
    ell: f64,
    nu: f64,
}

impl MaternParams {
    /// Validate `ell > 0` and that `nu` is a positive half-integer with
    /// degree at most [`MAX_MATERN_DEGREE`]
    pub fn new(ell: f64, nu: f64) -> Result<Self> {
        check_lengthscale(ell)?;
        // 2 nu must be an odd integer; nu + 0.5 rounds away the half for large nu
        let twice = 2.0 * nu;
        if !(nu > 0.0) || twice.fract() != 0.0 || twice % 2.0 != 1.0 {
            return Err(Error::InvalidParameter(format!(
                "only kernels and embeddings for positive half-integer nu ({nu}) are implemented"
            )));
        }
        if nu - 0.5 > MAX_MATERN_DEGREE as f64 {
            return Err(Error::InvalidParameter(format!(
                "nu ({nu}) exceeds the largest supported smoothness {}.5",
                MAX_MATERN_DEGREE
            )));
        }
        Ok(Self { ell, nu })
    }

    pub fn ell(&self) -> f64 {
        self.ell
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Polynomial degree `p = nu - 1/2` of the half-integer Matérn kernel
    pub fn degree(&self) -> u64 {
        (self.nu - 0.5).round() as u64
    }
}

/// Length-scale (support radius) and smoothness order of a single Wendland axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WendlandParams {
    ell: f64,
    order: u32,
}

impl WendlandParams {
    pub fn new(ell: f64, order: u32) -> Result<Self> {
        check_lengthscale(ell)?;
        Ok(Self { ell, order })
    }

    pub fn ell(&self) -> f64 {
        self.ell
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

/// Shape parameters of one kernel axis, tagged by parameter layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelParams {
    ExpQuad(ExpQuadParams),
    Matern(MaternParams),
    Wendland(WendlandParams),
}

impl KernelParams {
    /// Length-scale shared by every layout
    pub fn ell(&self) -> f64 {
        match self {
            Self::ExpQuad(p) => p.ell(),
            Self::Matern(p) => p.ell(),
            Self::Wendland(p) => p.ell(),
        }
    }
}

/// Bounds and density of a single Lebesgue axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LebesgueParams {
    lb: f64,
    ub: f64,
    density: f64,
}

impl LebesgueParams {
    /// Validate `lb < ub` and a positive density
    pub fn new(lb: f64, ub: f64, density: f64) -> Result<Self> {
        if !(lb < ub) {
            return Err(Error::InvalidParameter(format!(
                "lower bound ({lb}) must be smaller than upper bound ({ub})"
            )));
        }
        if !(density > 0.0) {
            return Err(Error::non_positive("density", density));
        }
        Ok(Self { lb, ub, density })
    }

    /// Unnormalized axis (density 1) or a probability measure (density `1/(ub-lb)`)
    pub fn with_normalization(lb: f64, ub: f64, normalize: bool) -> Result<Self> {
        let density = if normalize { 1.0 / (ub - lb) } else { 1.0 };
        Self::new(lb, ub, density)
    }

    pub fn lb(&self) -> f64 {
        self.lb
    }

    pub fn ub(&self) -> f64 {
        self.ub
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Length of the interval
    pub fn width(&self) -> f64 {
        self.ub - self.lb
    }
}

/// Mean and variance of a single Gaussian axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    mean: f64,
    variance: f64,
}

impl GaussianParams {
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !(variance > 0.0) {
            return Err(Error::non_positive("variance", variance));
        }
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!("mean ({mean}) must be finite")));
        }
        Ok(Self { mean, variance })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn std(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Shape parameters of one measure axis, tagged by family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureParams {
    Lebesgue(LebesgueParams),
    Gaussian(GaussianParams),
}

impl MeasureParams {
    pub fn family(&self) -> MeasureFamily {
        match self {
            Self::Lebesgue(_) => MeasureFamily::Lebesgue,
            Self::Gaussian(_) => MeasureFamily::Gaussian,
        }
    }
}
