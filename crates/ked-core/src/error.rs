//! Error types for closed-form kernel embeddings
//!
//! Provides a unified error type for all ked crates.

use thiserror::Error;

/// Core error type for kernel embedding operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid shape parameter of a kernel or measure
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Kernel and measure disagree on the number of axes
    #[error("Dimension mismatch: kernel has {kernel} dimensions, measure has {measure}")]
    DimensionMismatch { kernel: usize, measure: usize },

    /// No closed form is registered for the kernel/measure pair
    #[error("Unsupported combination: no closed-form {quantity} for kernel '{kernel}' with measure '{measure}'")]
    UnsupportedCombination {
        kernel: String,
        measure: String,
        quantity: &'static str,
    },

    /// Kernel family name is not in the catalogue
    #[error("Unknown kernel: '{0}'")]
    UnknownKernel(String),

    /// Measure family name is not in the catalogue
    #[error("Unknown measure: '{0}'")]
    UnknownMeasure(String),

    /// Evaluation points have the wrong rank or column count
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Formula invoked outside the parameter domain it is derived for
    #[error("Domain restriction: {0}")]
    DomainRestriction(String),

    /// Parameter record of the wrong family handed to a formula
    #[error("Parameter mismatch: {0}")]
    ParameterMismatch(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter that must be strictly positive
    pub fn non_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} ({value}) must be positive"))
    }

    /// Create an error for a parameter list whose length disagrees with `ndim`
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidParameter(format!(
            "ndim ({expected}) and dimensionality of {context} ({actual}) do not match"
        ))
    }

    /// Construction-time errors: fix the configuration, not the inputs
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::DimensionMismatch { .. }
                | Self::UnsupportedCombination { .. }
                | Self::UnknownKernel(_)
                | Self::UnknownMeasure(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("ell must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: ell must be positive");

        let err = Error::DimensionMismatch { kernel: 1, measure: 2 };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: kernel has 1 dimensions, measure has 2"
        );

        let err = Error::UnsupportedCombination {
            kernel: "wendland2".to_string(),
            measure: "lebesgue".to_string(),
            quantity: "mean",
        };
        assert_eq!(
            err.to_string(),
            "Unsupported combination: no closed-form mean for kernel 'wendland2' with measure 'lebesgue'"
        );

        let err = Error::UnknownKernel("rbf".to_string());
        assert_eq!(err.to_string(), "Unknown kernel: 'rbf'");

        let err = Error::DomainRestriction("mean must be zero".to_string());
        assert_eq!(err.to_string(), "Domain restriction: mean must be zero");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::non_positive("ell", -1.0);
        assert_eq!(err.to_string(), "Invalid parameter: ell (-1) must be positive");

        let err = Error::size_mismatch(3, 2, "lengthscales");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: ndim (3) and dimensionality of lengthscales (2) do not match"
        );
    }

    #[test]
    fn test_configuration_classification() {
        assert!(Error::non_positive("variance", 0.0).is_configuration_error());
        assert!(Error::DimensionMismatch { kernel: 1, measure: 2 }.is_configuration_error());
        assert!(Error::UnknownMeasure("cauchy".to_string()).is_configuration_error());

        assert!(!Error::InvalidShape("rank 3".to_string()).is_configuration_error());
        assert!(!Error::DomainRestriction("mean".to_string()).is_configuration_error());
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<()> {
            Err(Error::InvalidShape("expected rank 2".to_string()))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err, Error::InvalidShape("expected rank 2".to_string()));
    }
}
