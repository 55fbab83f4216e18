//! Product measures for closed-form kernel embeddings
//!
//! Two families are supported:
//! - Lebesgue measure on a box, optionally normalized to unit mass
//! - Gaussian with diagonal covariance
//!
//! Measures are used for their shape parameters by the embedding formulas,
//! and for their densities and samples when cross-checking those formulas.
//!
//! # Example
//!
//! ```rust
//! use ked_core::Measure;
//! use ked_measures::{LebesgueConfig, LebesgueMeasure};
//!
//! let config = LebesgueConfig::with_ndim(2).bounds(vec![(0.0, 2.0)]).normalized();
//! let measure = LebesgueMeasure::from_config(&config).unwrap();
//! assert_eq!(measure.ndim(), 2);
//! assert_eq!(measure.density(), 0.25);
//! ```

pub mod config;
pub mod gaussian;
pub mod lebesgue;
pub mod product;

pub use config::{GaussianConfig, LebesgueConfig, MeasureConfig};
pub use gaussian::GaussianMeasureUni;
pub use lebesgue::LebesgueMeasureUni;
pub use product::{build_measure, AxisMeasure, GaussianMeasure, LebesgueMeasure, ProductMeasure};
