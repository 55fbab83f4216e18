//! Matérn kernels with half-integer smoothness
//!
//! [`MaternKernelUni`] carries an arbitrary positive half-integer `nu`. The
//! fixed-smoothness kernels evaluate the expanded closed forms for
//! `nu = 1/2, 3/2, 5/2, 7/2` and dispatch to their own embedding formulas,
//! but expose the same [`MaternParams`] layout.

use crate::config::KernelConfig;
use crate::funcs;
use crate::product::AxisKernel;
use ked_core::{KernelFamily, KernelParams, MaternParams, Result, UnivariateKernel};
use std::fmt;

/// One axis of a Matérn kernel with general half-integer `nu`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaternKernelUni {
    params: MaternParams,
}

impl MaternKernelUni {
    pub fn new(ell: f64, nu: f64) -> Result<Self> {
        Ok(Self {
            params: MaternParams::new(ell, nu)?,
        })
    }

    pub fn ell(&self) -> f64 {
        self.params.ell()
    }

    pub fn nu(&self) -> f64 {
        self.params.nu()
    }
}

impl UnivariateKernel for MaternKernelUni {
    const FAMILY: KernelFamily = KernelFamily::Matern;

    fn params(&self) -> KernelParams {
        KernelParams::Matern(self.params)
    }

    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
        funcs::matern(x1, x2, self.ell(), self.nu())
    }
}

impl AxisKernel for MaternKernelUni {
    fn from_config(ell: f64, config: &KernelConfig) -> Result<Self> {
        Self::new(ell, config.resolve_nu())
    }
}

impl fmt::Display for MaternKernelUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ell={}, nu={}", self.ell(), self.nu())
    }
}

macro_rules! fixed_matern {
    ($(#[$doc:meta])* $name:ident, $family:ident, $nu:expr, $func:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            params: MaternParams,
        }

        impl $name {
            pub const NU: f64 = $nu;

            pub fn new(ell: f64) -> Result<Self> {
                Ok(Self {
                    params: MaternParams::new(ell, Self::NU)?,
                })
            }

            pub fn ell(&self) -> f64 {
                self.params.ell()
            }
        }

        impl UnivariateKernel for $name {
            const FAMILY: KernelFamily = KernelFamily::$family;

            fn params(&self) -> KernelParams {
                KernelParams::Matern(self.params)
            }

            fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
                $func(x1, x2, self.ell())
            }
        }

        impl AxisKernel for $name {
            fn from_config(ell: f64, _config: &KernelConfig) -> Result<Self> {
                Self::new(ell)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "ell={}", self.ell())
            }
        }
    };
}

fixed_matern!(
    /// One axis of a Matérn-1/2 (exponential) kernel
    Matern12KernelUni,
    Matern12,
    0.5,
    funcs::matern12
);
fixed_matern!(
    /// One axis of a Matérn-3/2 kernel
    Matern32KernelUni,
    Matern32,
    1.5,
    funcs::matern32
);
fixed_matern!(
    /// One axis of a Matérn-5/2 kernel
    Matern52KernelUni,
    Matern52,
    2.5,
    funcs::matern52
);
fixed_matern!(
    /// One axis of a Matérn-7/2 kernel
    Matern72KernelUni,
    Matern72,
    3.5,
    funcs::matern72
);
