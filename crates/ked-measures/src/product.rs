//! Product measures over `ndim` axes of one family

use crate::{GaussianMeasureUni, LebesgueMeasureUni, MeasureConfig};
use ked_core::{
    as_batch, Error, Measure, MeasureFamily, MeasureParams, Result, UnivariateMeasure,
};
use ndarray::{Array1, Array2, ArrayView2};
use rand::RngCore;
use std::fmt;

/// A univariate measure whose axes can be built from a family configuration
pub trait AxisMeasure: UnivariateMeasure + fmt::Display {
    type Config: Default;

    /// One validated axis per configured dimension
    fn axes_from_config(config: &Self::Config) -> Result<Vec<Self>>;
}

/// Product of independent univariate measures of one family
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMeasure<M> {
    axes: Vec<M>,
}

pub type LebesgueMeasure = ProductMeasure<LebesgueMeasureUni>;
pub type GaussianMeasure = ProductMeasure<GaussianMeasureUni>;

impl<M: UnivariateMeasure> ProductMeasure<M> {
    pub fn new(axes: Vec<M>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidParameter(
                "a product measure needs at least one axis".to_string(),
            ));
        }
        Ok(Self { axes })
    }

    pub fn axes(&self) -> &[M] {
        &self.axes
    }
}

impl<M: AxisMeasure> ProductMeasure<M> {
    pub fn from_config(config: &M::Config) -> Result<Self> {
        Self::new(M::axes_from_config(config)?)
    }
}

impl LebesgueMeasure {
    /// Lower bound of every axis
    pub fn lower_bounds(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.lb()).collect()
    }

    /// Upper bound of every axis
    pub fn upper_bounds(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.ub()).collect()
    }

    /// Constant density on the box
    pub fn density(&self) -> f64 {
        self.axes.iter().map(|axis| axis.density()).product()
    }
}

impl GaussianMeasure {
    pub fn means(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.mean()).collect()
    }

    pub fn variances(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.variance()).collect()
    }
}

impl<M: AxisMeasure> Measure for ProductMeasure<M> {
    fn family(&self) -> MeasureFamily {
        M::FAMILY
    }

    fn ndim(&self) -> usize {
        self.axes.len()
    }

    fn params_at(&self, dim: usize) -> Result<MeasureParams> {
        self.axes.get(dim).map(|axis| axis.params()).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "axis {dim} is out of range for a measure with ndim = {}",
                self.axes.len()
            ))
        })
    }

    fn pdf(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let x = as_batch(&x, self.axes.len())?;
        Ok(x.rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .zip(&self.axes)
                    .map(|(&xd, axis)| axis.pdf(xd))
                    .product::<f64>()
            })
            .collect())
    }

    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array2<f64> {
        let mut samples = Array2::zeros((num_points, self.axes.len()));
        for (mut column, axis) in samples.columns_mut().into_iter().zip(&self.axes) {
            column.assign(&axis.sample(num_points, rng));
        }
        samples
    }
}

impl<M: AxisMeasure> fmt::Display for ProductMeasure<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} measure (ndim = {}): [", M::FAMILY, self.axes.len())?;
        for (d, axis) in self.axes.iter().enumerate() {
            if d > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("]")
    }
}

/// Build the product measure of the named family
///
/// `config` defaults to the family's default configuration and must belong
/// to `family` when given.
pub fn build_measure(
    family: MeasureFamily,
    config: Option<&MeasureConfig>,
) -> Result<Box<dyn Measure>> {
    let config = config
        .cloned()
        .unwrap_or_else(|| MeasureConfig::default_for(family));

    if config.family() != family {
        return Err(Error::InvalidParameter(format!(
            "a {} configuration cannot build a {family} measure",
            config.family()
        )));
    }

    Ok(match config {
        MeasureConfig::Lebesgue(c) => Box::new(LebesgueMeasure::from_config(&c)?),
        MeasureConfig::Gaussian(c) => Box::new(GaussianMeasure::from_config(&c)?),
    })
}
