//! Formula selection for (kernel family, measure family) pairs
//!
//! Every pair of families is listed explicitly in [`MeanFormula::resolve`]
//! and [`VarianceFormula::resolve`], so adding a family does not compile
//! until its pairs are either given a formula or declared unsupported.

use crate::{mean_1d, variance_1d};
use ked_core::{Error, KernelFamily, KernelParams, MeasureFamily, MeasureParams, Result};
use ndarray::{Array1, ArrayView1};
use std::fmt;

fn unsupported(kernel: KernelFamily, measure: MeasureFamily, quantity: &'static str) -> Error {
    Error::UnsupportedCombination {
        kernel: kernel.to_string(),
        measure: measure.to_string(),
        quantity,
    }
}

fn mismatch(formula: impl fmt::Display, kernel: &KernelParams, measure: &MeasureParams) -> Error {
    Error::ParameterMismatch(format!(
        "{formula} cannot be evaluated with {kernel:?} and {measure:?}"
    ))
}

/// Closed-form 1-D mean embedding of one kernel family against one measure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeanFormula {
    ExpQuadLebesgue,
    ExpQuadGaussian,
    MaternLebesgue,
    Matern12Lebesgue,
    Matern12Gaussian,
    Matern32Lebesgue,
    Matern32Gaussian,
    Matern52Lebesgue,
    Matern72Lebesgue,
    Wendland0Lebesgue,
    Wendland0Gaussian,
    Wendland2Gaussian,
}

impl MeanFormula {
    /// Every registered formula
    pub const ALL: [MeanFormula; 12] = [
        Self::ExpQuadLebesgue,
        Self::ExpQuadGaussian,
        Self::MaternLebesgue,
        Self::Matern12Lebesgue,
        Self::Matern12Gaussian,
        Self::Matern32Lebesgue,
        Self::Matern32Gaussian,
        Self::Matern52Lebesgue,
        Self::Matern72Lebesgue,
        Self::Wendland0Lebesgue,
        Self::Wendland0Gaussian,
        Self::Wendland2Gaussian,
    ];

    /// Formula for the pair, or [`Error::UnsupportedCombination`]
    pub fn resolve(kernel: KernelFamily, measure: MeasureFamily) -> Result<Self> {
        use KernelFamily as K;
        use MeasureFamily as M;

        match (kernel, measure) {
            (K::ExpQuad, M::Lebesgue) => Ok(Self::ExpQuadLebesgue),
            (K::ExpQuad, M::Gaussian) => Ok(Self::ExpQuadGaussian),
            (K::Matern, M::Lebesgue) => Ok(Self::MaternLebesgue),
            (K::Matern12, M::Lebesgue) => Ok(Self::Matern12Lebesgue),
            (K::Matern12, M::Gaussian) => Ok(Self::Matern12Gaussian),
            (K::Matern32, M::Lebesgue) => Ok(Self::Matern32Lebesgue),
            (K::Matern32, M::Gaussian) => Ok(Self::Matern32Gaussian),
            (K::Matern52, M::Lebesgue) => Ok(Self::Matern52Lebesgue),
            (K::Matern72, M::Lebesgue) => Ok(Self::Matern72Lebesgue),
            (K::Wendland0, M::Lebesgue) => Ok(Self::Wendland0Lebesgue),
            (K::Wendland0, M::Gaussian) => Ok(Self::Wendland0Gaussian),
            (K::Wendland2, M::Gaussian) => Ok(Self::Wendland2Gaussian),
            (K::Matern, M::Gaussian)
            | (K::Matern52, M::Gaussian)
            | (K::Matern72, M::Gaussian)
            | (K::Wendland2, M::Lebesgue)
            | (K::Wendland4, M::Lebesgue | M::Gaussian) => Err(unsupported(kernel, measure, "mean")),
        }
    }

    pub fn kernel_family(&self) -> KernelFamily {
        match self {
            Self::ExpQuadLebesgue | Self::ExpQuadGaussian => KernelFamily::ExpQuad,
            Self::MaternLebesgue => KernelFamily::Matern,
            Self::Matern12Lebesgue | Self::Matern12Gaussian => KernelFamily::Matern12,
            Self::Matern32Lebesgue | Self::Matern32Gaussian => KernelFamily::Matern32,
            Self::Matern52Lebesgue => KernelFamily::Matern52,
            Self::Matern72Lebesgue => KernelFamily::Matern72,
            Self::Wendland0Lebesgue | Self::Wendland0Gaussian => KernelFamily::Wendland0,
            Self::Wendland2Gaussian => KernelFamily::Wendland2,
        }
    }

    pub fn measure_family(&self) -> MeasureFamily {
        match self {
            Self::ExpQuadLebesgue
            | Self::MaternLebesgue
            | Self::Matern12Lebesgue
            | Self::Matern32Lebesgue
            | Self::Matern52Lebesgue
            | Self::Matern72Lebesgue
            | Self::Wendland0Lebesgue => MeasureFamily::Lebesgue,
            Self::ExpQuadGaussian
            | Self::Matern12Gaussian
            | Self::Matern32Gaussian
            | Self::Wendland0Gaussian
            | Self::Wendland2Gaussian => MeasureFamily::Gaussian,
        }
    }

    /// Evaluate the 1-D mean embedding of one axis at every entry of `x`
    ///
    /// Fails with [`Error::ParameterMismatch`] when the parameter records do
    /// not have the layout this formula consumes, and with
    /// [`Error::DomainRestriction`] where the formula itself is restricted.
    pub fn evaluate(
        &self,
        x: ArrayView1<f64>,
        kernel: &KernelParams,
        measure: &MeasureParams,
    ) -> Result<Array1<f64>> {
        use KernelParams as K;
        use MeasureParams as M;

        match (self, kernel, measure) {
            (Self::ExpQuadLebesgue, K::ExpQuad(k), M::Lebesgue(m)) => {
                Ok(mean_1d::expquad_lebesgue(x, k, m))
            }
            (Self::ExpQuadGaussian, K::ExpQuad(k), M::Gaussian(m)) => {
                Ok(mean_1d::expquad_gaussian(x, k, m))
            }
            (Self::MaternLebesgue, K::Matern(k), M::Lebesgue(m)) => {
                Ok(mean_1d::matern_lebesgue(x, k, m))
            }
            (Self::Matern12Lebesgue, K::Matern(k), M::Lebesgue(m)) => {
                Ok(mean_1d::matern12_lebesgue(x, k, m))
            }
            (Self::Matern12Gaussian, K::Matern(k), M::Gaussian(m)) => {
                Ok(mean_1d::matern12_gaussian(x, k, m))
            }
            (Self::Matern32Lebesgue, K::Matern(k), M::Lebesgue(m)) => {
                Ok(mean_1d::matern32_lebesgue(x, k, m))
            }
            (Self::Matern32Gaussian, K::Matern(k), M::Gaussian(m)) => {
                Ok(mean_1d::matern32_gaussian(x, k, m))
            }
            (Self::Matern52Lebesgue, K::Matern(k), M::Lebesgue(m)) => {
                Ok(mean_1d::matern52_lebesgue(x, k, m))
            }
            (Self::Matern72Lebesgue, K::Matern(k), M::Lebesgue(m)) => {
                Ok(mean_1d::matern72_lebesgue(x, k, m))
            }
            (Self::Wendland0Lebesgue, K::Wendland(k), M::Lebesgue(m)) => {
                Ok(mean_1d::wendland0_lebesgue(x, k, m))
            }
            (Self::Wendland0Gaussian, K::Wendland(k), M::Gaussian(m)) => {
                mean_1d::wendland0_gaussian(x, k, m)
            }
            (Self::Wendland2Gaussian, K::Wendland(k), M::Gaussian(m)) => {
                mean_1d::wendland2_gaussian(x, k, m)
            }
            _ => Err(mismatch(self, kernel, measure)),
        }
    }
}

impl fmt::Display for MeanFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} mean", self.kernel_family(), self.measure_family())
    }
}

/// Closed-form 1-D initial variance of one kernel family against one measure family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarianceFormula {
    ExpQuadLebesgue,
}

impl VarianceFormula {
    /// Formula for the pair, or [`Error::UnsupportedCombination`]
    pub fn resolve(kernel: KernelFamily, measure: MeasureFamily) -> Result<Self> {
        use KernelFamily as K;
        use MeasureFamily as M;

        match (kernel, measure) {
            (K::ExpQuad, M::Lebesgue) => Ok(Self::ExpQuadLebesgue),
            (K::ExpQuad, M::Gaussian)
            | (
                K::Matern
                | K::Matern12
                | K::Matern32
                | K::Matern52
                | K::Matern72
                | K::Wendland0
                | K::Wendland2
                | K::Wendland4,
                M::Lebesgue | M::Gaussian,
            ) => Err(unsupported(kernel, measure, "variance")),
        }
    }

    /// Evaluate the 1-D variance of one axis
    pub fn evaluate(&self, kernel: &KernelParams, measure: &MeasureParams) -> Result<f64> {
        match (self, kernel, measure) {
            (Self::ExpQuadLebesgue, KernelParams::ExpQuad(k), MeasureParams::Lebesgue(m)) => {
                Ok(variance_1d::expquad_lebesgue(k, m))
            }
            _ => Err(mismatch(self, kernel, measure)),
        }
    }
}

impl fmt::Display for VarianceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpQuadLebesgue => f.write_str("expquad-lebesgue variance"),
        }
    }
}
