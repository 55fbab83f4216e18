//! Configuration for product kernels

use ked_core::{Error, Result};
use serde::Deserialize;

/// Default smoothness of the general Matérn kernel
pub const DEFAULT_NU: f64 = 2.5;

/// Kernel configuration as read from a user-supplied mapping
///
/// ```rust
/// use ked_kernels::KernelConfig;
///
/// let config: KernelConfig = serde_json::from_str(r#"{"ndim": 3, "lengthscales": [0.5]}"#).unwrap();
/// assert_eq!(config.resolve_lengthscales().unwrap(), vec![0.5, 0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// One length-scale per axis, or a single one broadcast to `ndim` axes
    pub lengthscales: Option<Vec<f64>>,
    /// Number of axes
    pub ndim: Option<usize>,
    /// Smoothness of the general Matérn kernel, ignored by every other family
    pub nu: Option<f64>,
}

impl KernelConfig {
    /// Configuration of `ndim` axes sharing the default length-scale
    pub fn with_ndim(ndim: usize) -> Self {
        Self {
            ndim: Some(ndim),
            ..Default::default()
        }
    }

    /// Set the length-scales
    pub fn lengthscales(mut self, lengthscales: Vec<f64>) -> Self {
        self.lengthscales = Some(lengthscales);
        self
    }

    /// Set the Matérn smoothness
    pub fn nu(mut self, nu: f64) -> Self {
        self.nu = Some(nu);
        self
    }

    /// Per-axis length-scales after defaulting and broadcasting
    pub fn resolve_lengthscales(&self) -> Result<Vec<f64>> {
        let ell = self.lengthscales.clone().unwrap_or_else(|| vec![1.0]);

        match self.ndim {
            None if ell.is_empty() => Err(Error::InvalidParameter(
                "at least one lengthscale is required".to_string(),
            )),
            None => Ok(ell),
            Some(0) => Err(Error::InvalidParameter("ndim must be at least 1".to_string())),
            Some(ndim) if ell.len() == 1 => Ok(vec![ell[0]; ndim]),
            Some(ndim) if ell.len() == ndim => Ok(ell),
            Some(ndim) => Err(Error::size_mismatch(ndim, ell.len(), "lengthscales")),
        }
    }

    /// Matérn smoothness after defaulting
    pub fn resolve_nu(&self) -> f64 {
        self.nu.unwrap_or(DEFAULT_NU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.resolve_lengthscales().unwrap(), vec![1.0]);
        assert_eq!(config.resolve_nu(), 2.5);
    }

    #[test]
    fn test_broadcasting() {
        let config = KernelConfig::with_ndim(2);
        assert_eq!(config.resolve_lengthscales().unwrap(), vec![1.0, 1.0]);

        let config = KernelConfig::with_ndim(2).lengthscales(vec![0.03, 1.6]);
        assert_eq!(config.resolve_lengthscales().unwrap(), vec![0.03, 1.6]);

        let config = KernelConfig::default().lengthscales(vec![0.3, 0.4, 0.5]);
        assert_eq!(config.resolve_lengthscales().unwrap(), vec![0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_mismatch_raises() {
        let config = KernelConfig::with_ndim(3).lengthscales(vec![0.3, 0.4]);
        assert!(matches!(
            config.resolve_lengthscales(),
            Err(Error::InvalidParameter(_))
        ));

        assert!(KernelConfig::with_ndim(0).resolve_lengthscales().is_err());
        assert!(KernelConfig::default()
            .lengthscales(vec![])
            .resolve_lengthscales()
            .is_err());
    }

    #[test]
    fn test_deserialize() {
        let config: KernelConfig =
            serde_json::from_str(r#"{"ndim": 1, "lengthscales": [0.3], "nu": 1.5}"#).unwrap();
        assert_eq!(
            config,
            KernelConfig {
                lengthscales: Some(vec![0.3]),
                ndim: Some(1),
                nu: Some(1.5),
            }
        );

        let empty: KernelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, KernelConfig::default());

        assert!(serde_json::from_str::<KernelConfig>(r#"{"lengthscale": [1.0]}"#).is_err());
    }
}
