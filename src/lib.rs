//! Closed-form kernel mean embeddings for product kernels and product measures
//!
//! This crate re-exports the `ked-*` workspace crates and adds the name-based
//! entry point [`get_embedding`]:
//! - [`ked_core`]: errors, family names, parameter records and traits
//! - [`ked_kernels`]: exponentiated quadratic, Matérn and Wendland kernels
//! - [`ked_measures`]: Lebesgue and Gaussian measures
//! - [`ked_embeddings`]: the formula bank and [`KernelEmbedding`]
//!
//! # Example
//!
//! ```rust
//! use kernel_embedding_dictionary::prelude::*;
//! use ndarray::arr2;
//!
//! let embedding = get_embedding("expquad", "lebesgue", None, None).unwrap();
//! let means = embedding.mean(&arr2(&[[0.1], [0.5], [0.9]])).unwrap();
//! assert!((0.9594..0.9601).contains(&means[1]));
//!
//! let err = get_embedding("matern52", "gaussian", None, None).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedCombination { .. }));
//! ```

pub use ked_core::{
    as_batch, Error, ExpQuadParams, GaussianParams, Kernel, KernelFamily, KernelParams,
    LebesgueParams, MaternParams, Measure, MeasureFamily, MeasureParams, Result,
    UnivariateKernel, UnivariateMeasure, WendlandParams,
};
pub use ked_embeddings::{mean_1d, variance_1d, KernelEmbedding, MeanFormula, VarianceFormula};
pub use ked_kernels::{
    build_kernel, ExpQuadKernel, KernelConfig, Matern12Kernel, Matern32Kernel, Matern52Kernel,
    Matern72Kernel, MaternKernel, ProductKernel, Wendland0Kernel, Wendland2Kernel,
    Wendland4Kernel,
};
pub use ked_measures::{
    build_measure, GaussianConfig, GaussianMeasure, LebesgueConfig, LebesgueMeasure,
    MeasureConfig, ProductMeasure,
};

pub use ked_core;
pub use ked_embeddings;
pub use ked_kernels;
pub use ked_measures;

pub mod prelude {
    pub use crate::{
        get_embedding, Error, GaussianConfig, Kernel, KernelConfig, KernelEmbedding,
        KernelFamily, LebesgueConfig, Measure, MeasureConfig, MeasureFamily, Result,
    };
}

use tracing::debug;

/// Build the kernel embedding of a named kernel against a named measure
///
/// Names are the lowercase family names (`"expquad"`, `"matern32"`,
/// `"lebesgue"`, ...). A `None` configuration builds the one-dimensional
/// defaults of that family.
///
/// # Errors
///
/// - [`Error::UnknownKernel`] / [`Error::UnknownMeasure`] for names outside the catalogue
/// - [`Error::UnsupportedCombination`] if no closed-form mean is registered for the pair
/// - [`Error::DimensionMismatch`] if the configurations disagree on `ndim`
/// - [`Error::InvalidParameter`] for invalid configurations
pub fn get_embedding(
    kernel_name: &str,
    measure_name: &str,
    kernel_config: Option<&KernelConfig>,
    measure_config: Option<&MeasureConfig>,
) -> Result<KernelEmbedding> {
    let kernel_family: KernelFamily = kernel_name.parse()?;
    let measure_family: MeasureFamily = measure_name.parse()?;

    // fail on the pair before validating either configuration
    MeanFormula::resolve(kernel_family, measure_family)?;

    debug!(kernel = kernel_name, measure = measure_name, "building kernel embedding");

    let kernel = match kernel_config {
        Some(config) => build_kernel(kernel_family, config)?,
        None => build_kernel(kernel_family, &KernelConfig::default())?,
    };
    let measure = build_measure(measure_family, measure_config)?;

    KernelEmbedding::new(kernel, measure)
}
