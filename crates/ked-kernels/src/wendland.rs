//! Compactly supported Wendland kernels
//!
//! All kernels vanish for `|x1 - x2| >= ell`. Order 4 has no registered
//! embedding and is available for kernel evaluation only.

use crate::config::KernelConfig;
use crate::funcs;
use crate::product::AxisKernel;
use ked_core::{KernelFamily, KernelParams, Result, UnivariateKernel, WendlandParams};
use std::fmt;

/// One axis of the order-0 Wendland kernel `(1 - r)_+`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wendland0KernelUni {
    params: WendlandParams,
}

impl Wendland0KernelUni {
    pub fn new(ell: f64) -> Result<Self> {
        Ok(Self {
            params: WendlandParams::new(ell, 0)?,
        })
    }

    pub fn ell(&self) -> f64 {
        self.params.ell()
    }
}

impl UnivariateKernel for Wendland0KernelUni {
    const FAMILY: KernelFamily = KernelFamily::Wendland0;

    fn params(&self) -> KernelParams {
        KernelParams::Wendland(self.params)
    }

    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
        funcs::wendland0(x1, x2, self.ell())
    }
}

impl AxisKernel for Wendland0KernelUni {
    fn from_config(ell: f64, _config: &KernelConfig) -> Result<Self> {
        Self::new(ell)
    }
}

impl fmt::Display for Wendland0KernelUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ell={}", self.ell())
    }
}

/// One axis of the order-2 Wendland kernel `(1 - r)_+³ (3r + 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wendland2KernelUni {
    params: WendlandParams,
}

impl Wendland2KernelUni {
    pub fn new(ell: f64) -> Result<Self> {
        Ok(Self {
            params: WendlandParams::new(ell, 2)?,
        })
    }

    pub fn ell(&self) -> f64 {
        self.params.ell()
    }
}

impl UnivariateKernel for Wendland2KernelUni {
    const FAMILY: KernelFamily = KernelFamily::Wendland2;

    fn params(&self) -> KernelParams {
        KernelParams::Wendland(self.params)
    }

    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
        funcs::wendland2(x1, x2, self.ell())
    }
}

impl AxisKernel for Wendland2KernelUni {
    fn from_config(ell: f64, _config: &KernelConfig) -> Result<Self> {
        Self::new(ell)
    }
}

impl fmt::Display for Wendland2KernelUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ell={}", self.ell())
    }
}

/// One axis of the order-4 Wendland kernel `(1 - r)_+⁵ (1 + 5r + 8r²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wendland4KernelUni {
    params: WendlandParams,
}

impl Wendland4KernelUni {
    pub fn new(ell: f64) -> Result<Self> {
        Ok(Self {
            params: WendlandParams::new(ell, 4)?,
        })
    }

    pub fn ell(&self) -> f64 {
        self.params.ell()
    }
}

impl UnivariateKernel for Wendland4KernelUni {
    const FAMILY: KernelFamily = KernelFamily::Wendland4;

    fn params(&self) -> KernelParams {
        KernelParams::Wendland(self.params)
    }

    fn evaluate_pair(&self, x1: f64, x2: f64) -> f64 {
        funcs::wendland4(x1, x2, self.ell())
    }
}

impl AxisKernel for Wendland4KernelUni {
    fn from_config(ell: f64, _config: &KernelConfig) -> Result<Self> {
        Self::new(ell)
    }
}

impl fmt::Display for Wendland4KernelUni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ell={}", self.ell())
    }
}
