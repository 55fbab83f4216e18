//! Closed-form kernel mean embeddings
//!
//! The mean embedding of a kernel `k` against a measure `μ` is the function
//! `x -> ∫ k(x, y) dμ(y)`. For the kernel and measure families of this
//! workspace it has a closed form per axis, and product kernels against
//! product measures factorize over axes.
//!
//! - [`mean_1d`] and [`variance_1d`]: the per-axis formula bank
//! - [`MeanFormula`] / [`VarianceFormula`]: selection of a formula for a
//!   (kernel family, measure family) pair
//! - [`KernelEmbedding`]: the product over axes
//!
//! # Example
//!
//! ```rust
//! use ked_embeddings::KernelEmbedding;
//! use ked_kernels::{ExpQuadKernel, KernelConfig};
//! use ked_measures::{LebesgueConfig, LebesgueMeasure};
//! use ndarray::arr2;
//!
//! let kernel = ExpQuadKernel::from_config(&KernelConfig::default()).unwrap();
//! let measure = LebesgueMeasure::from_config(&LebesgueConfig::default()).unwrap();
//! let embedding = KernelEmbedding::new(kernel, measure).unwrap();
//!
//! let means = embedding.mean(&arr2(&[[0.1], [0.5], [0.9]])).unwrap();
//! assert!((0.8909..0.8928).contains(&means[0]));
//! assert!((0.9594..0.9601).contains(&means[1]));
//! ```

pub mod dispatch;
pub mod embedding;
pub mod mean_1d;
pub mod variance_1d;

pub use dispatch::{MeanFormula, VarianceFormula};
pub use embedding::KernelEmbedding;
