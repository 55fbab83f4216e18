//! Exponentiated-quadratic kernel

use crate::config::KernelConfig;
use crate::funcs;
use crate::product::AxisKernel;
use ked_core::{ExpQuadParams, KernelFamily, KernelParams, Result, UnivariateKernel};
use std::fmt;

/// One axis of an exponentiated-quadratic (squared exponential) kernel
///
/// `k(x1, x2) = exp(-(x1 - x2)² / (2 ell²))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpQuadKernelUni {
    params: ExpQuadParams,
}

impl ExpQuadKernelUni {
    pub fn new(ell: f64) -> Result<Self> {
        Ok(Self {
            params: ExpQuadParams::new(ell)?,
        })
    }

    pub fn ell(&self) -> f64 {
        self.params.ell()
    }
}

impl UnivariateKernel for ExpQuadKernelUni {
    const FAMILY: KernelFamily = KernelFamily::ExpQuad;

    fn params(&self) -> KernelParams {
        KernelParams::ExpQuad(self.params)
    }

    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
        funcs::expquad(x1, x2, self.ell())
    }
}

impl AxisKernel for ExpQuadKernelUni {
    fn from_config(ell: f64, _config: &KernelConfig) -> Result<Self> {
        Self::new(ell)
    }
}

impl fmt::Display for ExpQuadKernelUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ell={}", self.ell())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn test_gram_block() {
        let kernel = ExpQuadKernelUni::new(0.5).unwrap();
        let gram = kernel.evaluate(arr1(&[0.0, 1.0]).view(), arr1(&[0.0, 0.5, 1.0]).view());
        assert_eq!(gram.dim(), (2, 3));
        assert_relative_eq!(gram[[0, 0]], 1.0);
        assert_relative_eq!(gram[[0, 1]], (-0.5f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(gram[[1, 0]], (-2.0f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(gram[[0, 2]], gram[[1, 0]]);
    }

    #[test]
    fn test_rejects_bad_lengthscale() {
        assert!(ExpQuadKernelUni::new(0.0).is_err());
    }
}
