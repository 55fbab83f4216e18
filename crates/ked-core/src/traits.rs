//! Capability traits for kernels and measures
//!
//! A univariate kernel exposes its shape parameters and a pairwise
//! evaluation; a univariate measure exposes its shape parameters and a
//! sampler. Product kernels and measures are ordered collections of these,
//! one per axis, and the embedding layer only ever talks to them through
//! [`Kernel`] and [`Measure`].

use crate::params::{KernelFamily, KernelParams, MeasureFamily, MeasureParams};
use crate::Result;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::RngCore;
use std::fmt;

/// One axis of a product kernel
pub trait UnivariateKernel: fmt::Debug + Clone + Send + Sync {
    /// Family every axis of a product of this kernel belongs to
    const FAMILY: KernelFamily;

    /// Shape parameters of this axis
    fn params(&self) -> KernelParams;

    /// Kernel value `k(x1, x2)`
    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64;

    /// Gram block `K[i, j] = k(x1[i], x2[j])` of shape `(n1, n2)`
    fn evaluate(&self, x1: ArrayView1<f64>, x2: ArrayView1<f64>) -> Array2<f64> {
        Array2::from_shape_fn((x1.len(), x2.len()), |(i, j)| {
            self.evaluate_pair(x1[i], x2[j])
        })
    }
}

/// One axis of a product measure
pub trait UnivariateMeasure: fmt::Debug + Clone + Send + Sync {
    /// Family every axis of a product of this measure belongs to
    const FAMILY: MeasureFamily;

    /// Shape parameters of this axis
    fn params(&self) -> MeasureParams;

    /// Density of the measure at `x`
    fn pdf(&self, x: f64) -> f64;

    /// Draw `num_points` i.i.d. samples
    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array1<f64>;
}

/// Multivariate product kernel over `ndim` axes of one family
pub trait Kernel: fmt::Debug + fmt::Display + Send + Sync {
    /// Family name used for formula dispatch
    fn family(&self) -> KernelFamily;

    /// Number of axes
    fn ndim(&self) -> usize;

    /// Shape parameters of axis `dim`
    fn params_at(&self, dim: usize) -> Result<KernelParams>;

    /// Gram matrix of shape `(n1, n2)` for points given as `(n1, ndim)` and `(n2, ndim)`
    fn evaluate(&self, x1: ArrayView2<f64>, x2: ArrayView2<f64>) -> Result<Array2<f64>>;
}

/// Multivariate product measure over `ndim` axes of one family
pub trait Measure: fmt::Debug + fmt::Display + Send + Sync {
    /// Family name used for formula dispatch
    fn family(&self) -> MeasureFamily;

    /// Number of axes
    fn ndim(&self) -> usize;

    /// Shape parameters of axis `dim`
    fn params_at(&self, dim: usize) -> Result<MeasureParams>;

    /// Product density at each row of an `(n, ndim)` batch
    fn pdf(&self, x: ArrayView2<f64>) -> Result<Array1<f64>>;

    /// Draw `num_points` i.i.d. samples as a `(num_points, ndim)` array
    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array2<f64>;
}

impl<K: Kernel + ?Sized> Kernel for Box<K> {
    fn family(&self) -> KernelFamily {
        (**self).family()
    }

    fn ndim(&self) -> usize {
        (**self).ndim()
    }

    fn params_at(&self, dim: usize) -> Result<KernelParams> {
        (**self).params_at(dim)
    }

    fn evaluate(&self, x1: ArrayView2<f64>, x2: ArrayView2<f64>) -> Result<Array2<f64>> {
        (**self).evaluate(x1, x2)
    }
}

impl<M: Measure + ?Sized> Measure for Box<M> {
    fn family(&self) -> MeasureFamily {
        (**self).family()
    }

    fn ndim(&self) -> usize {
        (**self).ndim()
    }

    fn params_at(&self, dim: usize) -> Result<MeasureParams> {
        (**self).params_at(dim)
    }

    fn pdf(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        (**self).pdf(x)
    }

    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array2<f64> {
        (**self).sample(num_points, rng)
    }
}
