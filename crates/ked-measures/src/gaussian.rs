//! Univariate Gaussian measure

use crate::config::GaussianConfig;
use crate::product::AxisMeasure;
use ked_core::math::distributions::normal;
use ked_core::{Error, GaussianParams, MeasureFamily, MeasureParams, Result, UnivariateMeasure};
use ndarray::Array1;
use rand::RngCore;
use rand_distr::{Distribution, Normal};
use std::fmt;

/// One axis of a Gaussian measure `N(mean, variance)`
#[derive(Debug, Clone, Copy)]
pub struct GaussianMeasureUni {
    params: GaussianParams,
    normal: Normal<f64>,
}

impl GaussianMeasureUni {
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        Self::from_params(GaussianParams::new(mean, variance)?)
    }

    pub fn from_params(params: GaussianParams) -> Result<Self> {
        let normal = Normal::new(params.mean(), params.std())
            .map_err(|e| Error::InvalidParameter(e.to_string()))?;
        Ok(Self { params, normal })
    }

    pub fn mean(&self) -> f64 {
        self.params.mean()
    }

    pub fn variance(&self) -> f64 {
        self.params.variance()
    }
}

impl PartialEq for GaussianMeasureUni {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl UnivariateMeasure for GaussianMeasureUni {
    const FAMILY: MeasureFamily = MeasureFamily::Gaussian;

    fn params(&self) -> MeasureParams {
        MeasureParams::Gaussian(self.params)
    }

    fn pdf(&self, x: f64) -> f64 {
        let std = self.params.std();
        normal::pdf((x - self.mean()) / std) / std
    }

    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array1<f64> {
        Array1::from_shape_fn(num_points, |_| self.normal.sample(&mut *rng))
    }
}

impl AxisMeasure for GaussianMeasureUni {
    type Config = GaussianConfig;

    fn axes_from_config(config: &GaussianConfig) -> Result<Vec<Self>> {
        config.resolve_axes()?.into_iter().map(Self::from_params).collect()
    }
}

impl fmt::Display for GaussianMeasureUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean={}, variance={}", self.mean(), self.variance())
    }
}
