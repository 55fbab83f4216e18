//! Kernel embeddings of product kernels against product measures

use crate::dispatch::{MeanFormula, VarianceFormula};
use ked_core::{as_batch, Error, Kernel, Measure, Result};
use ndarray::{Array1, ArrayBase, Data, Dimension};
use std::fmt;
use tracing::{debug, trace};

/// A product kernel bound to a product measure of the same dimensionality
///
/// Both the kernel and the measure factorize over axes, so the mean embedding
/// is the pointwise product of the 1-D embeddings of every axis. The 1-D
/// formulas are resolved once, at construction.
///
/// # Example
///
/// ```rust,ignore
/// let embedding = KernelEmbedding::new(kernel, measure)?;
/// let means = embedding.mean(&x)?; // x: (n_points, ndim)
/// ```
#[derive(Debug)]
pub struct KernelEmbedding<K = Box<dyn Kernel>, M = Box<dyn Measure>> {
    kernel: K,
    measure: M,
    mean_formula: MeanFormula,
    variance_formula: Option<VarianceFormula>,
}

impl<K: Kernel, M: Measure> KernelEmbedding<K, M> {
    /// Bind `kernel` to `measure`
    ///
    /// Fails with [`Error::DimensionMismatch`] if the dimensionalities differ
    /// and with [`Error::UnsupportedCombination`] if no closed-form mean is
    /// registered for the pair of families.
    pub fn new(kernel: K, measure: M) -> Result<Self> {
        if kernel.ndim() != measure.ndim() {
            return Err(Error::DimensionMismatch {
                kernel: kernel.ndim(),
                measure: measure.ndim(),
            });
        }

        let mean_formula = MeanFormula::resolve(kernel.family(), measure.family())?;
        let variance_formula = VarianceFormula::resolve(kernel.family(), measure.family()).ok();

        debug!(
            kernel = %kernel.family(),
            measure = %measure.family(),
            ndim = kernel.ndim(),
            has_variance = variance_formula.is_some(),
            "resolved kernel embedding"
        );

        Ok(Self {
            kernel,
            measure,
            mean_formula,
            variance_formula,
        })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    pub fn ndim(&self) -> usize {
        self.kernel.ndim()
    }

    pub fn mean_formula(&self) -> MeanFormula {
        self.mean_formula
    }

    pub fn variance_formula(&self) -> Option<VarianceFormula> {
        self.variance_formula
    }

    /// Kernel mean `∫ k(x, y) dμ(y)` at every row of `x`
    ///
    /// `x` must have shape `(n_points, ndim)`; anything else fails with
    /// [`Error::InvalidShape`]. Errors of any single axis fail the whole call.
    pub fn mean<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = as_batch(x, self.ndim())?;
        trace!(formula = %self.mean_formula, n_points = x.nrows(), "evaluating kernel mean");

        let mut mean = Array1::ones(x.nrows());
        for dim in 0..self.ndim() {
            let kernel = self.kernel.params_at(dim)?;
            let measure = self.measure.params_at(dim)?;
            mean *= &self.mean_formula.evaluate(x.column(dim), &kernel, &measure)?;
        }
        Ok(mean)
    }

    /// Initial variance `∫∫ k(x, y) dμ(x) dμ(y)`
    ///
    /// Fails with [`Error::UnsupportedCombination`] unless a closed-form
    /// variance is registered for the pair of families.
    pub fn variance(&self) -> Result<f64> {
        let formula = self
            .variance_formula
            .ok_or_else(|| Error::UnsupportedCombination {
                kernel: self.kernel.family().to_string(),
                measure: self.measure.family().to_string(),
                quantity: "variance",
            })?;

        (0..self.ndim()).try_fold(1.0, |acc, dim| {
            let kernel = self.kernel.params_at(dim)?;
            let measure = self.measure.params_at(dim)?;
            Ok(acc * formula.evaluate(&kernel, &measure)?)
        })
    }
}

impl<K: Kernel, M: Measure> fmt::Display for KernelEmbedding<K, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kernel embedding (ndim = {})", self.ndim())?;
        writeln!(f, "  kernel:  {}", self.kernel)?;
        write!(f, "  measure: {}", self.measure)
    }
}
