//! Core traits and types for closed-form kernel embeddings
//!
//! This crate holds everything the kernel, measure and embedding crates
//! share: the error taxonomy, family names, validated per-axis parameter
//! records, the [`Kernel`] / [`Measure`] capability traits and the small set
//! of scalar math helpers the closed forms are built from.
//!
//! # Example
//!
//! ```rust
//! use ked_core::{KernelFamily, LebesgueParams, MaternParams};
//!
//! let family: KernelFamily = "matern32".parse().unwrap();
//! assert_eq!(family, KernelFamily::Matern32);
//!
//! let kernel_axis = MaternParams::new(0.3, 1.5).unwrap();
//! let measure_axis = LebesgueParams::with_normalization(-0.5, 2.5, true).unwrap();
//! assert_eq!(kernel_axis.degree(), 1);
//! assert!((measure_axis.density() - 1.0 / 3.0).abs() < 1e-15);
//! ```

pub mod batch;
pub mod error;
pub mod math;
pub mod params;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use batch::as_batch;
pub use math::{matern_coefficients, scaled_diff};
pub use params::{
    ExpQuadParams, GaussianParams, KernelFamily, KernelParams, LebesgueParams, MaternParams,
    MeasureFamily, MeasureParams, WendlandParams, MAX_MATERN_DEGREE,
};
pub use traits::{Kernel, Measure, UnivariateKernel, UnivariateMeasure};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
