//! Lebesgue measure on an interval

use crate::config::LebesgueConfig;
use crate::product::AxisMeasure;
use ked_core::{LebesgueParams, MeasureFamily, MeasureParams, Result, UnivariateMeasure};
use ndarray::Array1;
use rand::RngCore;
use rand_distr::{Distribution, Uniform};
use std::fmt;

/// One axis of a Lebesgue measure on `[lb, ub]` with constant density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LebesgueMeasureUni {
    params: LebesgueParams,
}

impl LebesgueMeasureUni {
    pub fn new(lb: f64, ub: f64, density: f64) -> Result<Self> {
        Ok(Self {
            params: LebesgueParams::new(lb, ub, density)?,
        })
    }

    /// Unnormalized (`normalize = false`) or probability measure on `[lb, ub]`
    pub fn with_normalization(lb: f64, ub: f64, normalize: bool) -> Result<Self> {
        Ok(Self {
            params: LebesgueParams::with_normalization(lb, ub, normalize)?,
        })
    }

    pub fn lb(&self) -> f64 {
        self.params.lb()
    }

    pub fn ub(&self) -> f64 {
        self.params.ub()
    }

    pub fn density(&self) -> f64 {
        self.params.density()
    }
}

impl UnivariateMeasure for LebesgueMeasureUni {
    const FAMILY: MeasureFamily = MeasureFamily::Lebesgue;

    fn params(&self) -> MeasureParams {
        MeasureParams::Lebesgue(self.params)
    }

    fn pdf(&self, x: f64) -> f64 {
        if (self.lb()..=self.ub()).contains(&x) {
            self.density()
        } else {
            0.0
        }
    }

    /// Uniform draws on `[lb, ub)`, independent of the density
    fn sample(&self, num_points: usize, rng: &mut dyn RngCore) -> Array1<f64> {
        let uniform = Uniform::new(self.lb(), self.ub());
        Array1::from_shape_fn(num_points, |_| uniform.sample(&mut *rng))
    }
}

impl AxisMeasure for LebesgueMeasureUni {
    type Config = LebesgueConfig;

    fn axes_from_config(config: &LebesgueConfig) -> Result<Vec<Self>> {
        Ok(config
            .resolve_axes()?
            .into_iter()
            .map(|params| Self { params })
            .collect())
    }
}

impl fmt::Display for LebesgueMeasureUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}], density={}", self.lb(), self.ub(), self.density())
    }
}
