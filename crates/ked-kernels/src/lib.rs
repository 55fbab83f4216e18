//! Product kernels for closed-form kernel embeddings
//!
//! This crate provides the stationary kernels whose mean embeddings have a
//! closed form against Lebesgue and Gaussian measures:
//! - Exponentiated quadratic
//! - Matérn with general half-integer `nu`, and the fixed `nu = 1/2, 3/2, 5/2, 7/2` forms
//! - Wendland of order 0 and 2, and of order 4 for kernel evaluation only
//!
//! Multivariate kernels are coordinate-wise products of one family, see
//! [`ProductKernel`].
//!
//! # Example
//!
//! ```rust
//! use ked_core::Kernel;
//! use ked_kernels::{KernelConfig, Matern32Kernel};
//! use ndarray::arr2;
//!
//! let kernel = Matern32Kernel::from_config(&KernelConfig::with_ndim(2)).unwrap();
//! let x = arr2(&[[0.0, 0.0], [0.5, 0.5]]);
//! let gram = kernel.evaluate(x.view(), x.view()).unwrap();
//! assert_eq!(gram.dim(), (2, 2));
//! assert_eq!(gram[[0, 0]], 1.0);
//! ```

pub mod config;
pub mod expquad;
pub mod funcs;
pub mod matern;
pub mod product;
pub mod wendland;

pub use config::{KernelConfig, DEFAULT_NU};
pub use expquad::ExpQuadKernelUni;
pub use matern::{
    Matern12KernelUni, Matern32KernelUni, Matern52KernelUni, Matern72KernelUni, MaternKernelUni,
};
pub use product::{
    build_kernel, AxisKernel, ExpQuadKernel, Matern12Kernel, Matern32Kernel, Matern52Kernel,
    Matern72Kernel, MaternKernel, ProductKernel, Wendland0Kernel, Wendland2Kernel, Wendland4Kernel,
};
pub use wendland::{Wendland0KernelUni, Wendland2KernelUni, Wendland4KernelUni};
