//! Configuration for product measures

use ked_core::{Error, GaussianParams, LebesgueParams, MeasureFamily, Result};
use serde::Deserialize;

/// Lebesgue measure configuration
///
/// Bounds default to the unit interval. A single pair of bounds is broadcast
/// to `ndim` axes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LebesgueConfig {
    pub bounds: Option<Vec<(f64, f64)>>,
    pub ndim: Option<usize>,
    /// Scale the density to `1 / prod(ub - lb)` so the measure has unit mass
    pub normalize: bool,
}

impl LebesgueConfig {
    pub fn with_ndim(ndim: usize) -> Self {
        Self {
            ndim: Some(ndim),
            ..Default::default()
        }
    }

    pub fn bounds(mut self, bounds: Vec<(f64, f64)>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalize = true;
        self
    }

    /// Validated parameters of every axis
    pub fn resolve_axes(&self) -> Result<Vec<LebesgueParams>> {
        let bounds = self.bounds.clone().unwrap_or_else(|| vec![(0.0, 1.0)]);

        let bounds = match self.ndim {
            None if bounds.is_empty() => {
                return Err(Error::InvalidParameter(
                    "at least one pair of bounds is required".to_string(),
                ))
            }
            None => bounds,
            Some(0) => return Err(Error::InvalidParameter("ndim must be at least 1".to_string())),
            Some(ndim) if bounds.len() == 1 => vec![bounds[0]; ndim],
            Some(ndim) if bounds.len() == ndim => bounds,
            Some(ndim) => return Err(Error::size_mismatch(ndim, bounds.len(), "bounds")),
        };

        bounds
            .into_iter()
            .map(|(lb, ub)| LebesgueParams::with_normalization(lb, ub, self.normalize))
            .collect()
    }
}

/// Gaussian measure configuration with diagonal covariance
///
/// Missing means default to `0` and missing variances to `1`. Without any
/// list, `ndim` (default `1`) sets the dimensionality; otherwise every given
/// list and `ndim` must agree in length.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaussianConfig {
    pub means: Option<Vec<f64>>,
    pub variances: Option<Vec<f64>>,
    pub ndim: Option<usize>,
}

impl GaussianConfig {
    pub fn with_ndim(ndim: usize) -> Self {
        Self {
            ndim: Some(ndim),
            ..Default::default()
        }
    }

    pub fn means(mut self, means: Vec<f64>) -> Self {
        self.means = Some(means);
        self
    }

    pub fn variances(mut self, variances: Vec<f64>) -> Self {
        self.variances = Some(variances);
        self
    }

    /// Validated parameters of every axis
    pub fn resolve_axes(&self) -> Result<Vec<GaussianParams>> {
        let ndim = self
            .ndim
            .or_else(|| self.means.as_ref().map(Vec::len))
            .or_else(|| self.variances.as_ref().map(Vec::len))
            .unwrap_or(1);

        if ndim == 0 {
            return Err(Error::InvalidParameter("ndim must be at least 1".to_string()));
        }
        if let Some(means) = &self.means {
            if means.len() != ndim {
                return Err(Error::size_mismatch(ndim, means.len(), "means"));
            }
        }
        if let Some(variances) = &self.variances {
            if variances.len() != ndim {
                return Err(Error::size_mismatch(ndim, variances.len(), "variances"));
            }
        }

        let means = self.means.clone().unwrap_or_else(|| vec![0.0; ndim]);
        let variances = self.variances.clone().unwrap_or_else(|| vec![1.0; ndim]);
        means
            .into_iter()
            .zip(variances)
            .map(|(mean, variance)| GaussianParams::new(mean, variance))
            .collect()
    }
}

/// Configuration of any measure family
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureConfig {
    Lebesgue(LebesgueConfig),
    Gaussian(GaussianConfig),
}

impl MeasureConfig {
    /// Default configuration of `family`
    pub fn default_for(family: MeasureFamily) -> Self {
        match family {
            MeasureFamily::Lebesgue => Self::Lebesgue(LebesgueConfig::default()),
            MeasureFamily::Gaussian => Self::Gaussian(GaussianConfig::default()),
        }
    }

    pub fn family(&self) -> MeasureFamily {
        match self {
            Self::Lebesgue(_) => MeasureFamily::Lebesgue,
            Self::Gaussian(_) => MeasureFamily::Gaussian,
        }
    }
}

impl From<LebesgueConfig> for MeasureConfig {
    fn from(config: LebesgueConfig) -> Self {
        Self::Lebesgue(config)
    }
}

impl From<GaussianConfig> for MeasureConfig {
    fn from(config: GaussianConfig) -> Self {
        Self::Gaussian(config)
    }
}
