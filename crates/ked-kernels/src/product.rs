//! Product kernels over `ndim` axes of one family

use crate::config::KernelConfig;
use crate::{
    ExpQuadKernelUni, Matern12KernelUni, Matern32KernelUni, Matern52KernelUni, Matern72KernelUni,
    MaternKernelUni, Wendland0KernelUni, Wendland2KernelUni, Wendland4KernelUni,
};
use ked_core::{
    as_batch, Error, Kernel, KernelFamily, KernelParams, Result, UnivariateKernel,
};
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension};
use std::fmt;

/// A univariate kernel that can be built from one axis of a [`KernelConfig`]
pub trait AxisKernel: UnivariateKernel + fmt::Display {
    /// Build the axis with length-scale `ell`, reading any family-specific
    /// settings from `config`
    fn from_config(ell: f64, config: &KernelConfig) -> Result<Self>;
}

/// Coordinate-wise product `k(x1, x2) = prod_d k_d(x1[d], x2[d])`
///
/// Every axis belongs to the same family `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductKernel<K> {
    axes: Vec<K>,
}

pub type ExpQuadKernel = ProductKernel<ExpQuadKernelUni>;
pub type MaternKernel = ProductKernel<MaternKernelUni>;
pub type Matern12Kernel = ProductKernel<Matern12KernelUni>;
pub type Matern32Kernel = ProductKernel<Matern32KernelUni>;
pub type Matern52Kernel = ProductKernel<Matern52KernelUni>;
pub type Matern72Kernel = ProductKernel<Matern72KernelUni>;
pub type Wendland0Kernel = ProductKernel<Wendland0KernelUni>;
pub type Wendland2Kernel = ProductKernel<Wendland2KernelUni>;
pub type Wendland4Kernel = ProductKernel<Wendland4KernelUni>;

impl<K: UnivariateKernel> ProductKernel<K> {
    /// Product of the given axes, in order
    pub fn new(axes: Vec<K>) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidParameter(
                "a product kernel needs at least one axis".to_string(),
            ));
        }
        Ok(Self { axes })
    }

    pub fn axes(&self) -> &[K] {
        &self.axes
    }

    /// Length-scale of every axis
    pub fn lengthscales(&self) -> Vec<f64> {
        self.axes.iter().map(|axis| axis.params().ell()).collect()
    }

    /// Gram matrix for batches of any rank, rejecting anything but `(n, ndim)`
    pub fn gram<S1, S2, D1, D2>(
        &self,
        x1: &ArrayBase<S1, D1>,
        x2: &ArrayBase<S2, D2>,
    ) -> Result<Array2<f64>>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let ndim = self.axes.len();
        Ok(self.product_gram(as_batch(x1, ndim)?, as_batch(x2, ndim)?))
    }

    fn product_gram(&self, x1: ArrayView2<f64>, x2: ArrayView2<f64>) -> Array2<f64> {
        let mut gram = Array2::ones((x1.nrows(), x2.nrows()));
        for (d, axis) in self.axes.iter().enumerate() {
            gram *= &axis.evaluate(x1.column(d), x2.column(d));
        }
        gram
    }
}

impl<K: AxisKernel> ProductKernel<K> {
    /// Build one axis per resolved length-scale
    pub fn from_config(config: &KernelConfig) -> Result<Self> {
        let axes = config
            .resolve_lengthscales()?
            .into_iter()
            .map(|ell| K::from_config(ell, config))
            .collect::<Result<Vec<_>>>()?;
        Self::new(axes)
    }
}

impl<K: AxisKernel> Kernel for ProductKernel<K> {
    fn family(&self) -> KernelFamily {
        K::FAMILY
    }

    fn ndim(&self) -> usize {
        self.axes.len()
    }

    fn params_at(&self, dim: usize) -> Result<KernelParams> {
        self.axes.get(dim).map(|axis| axis.params()).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "axis {dim} is out of range for a kernel with ndim = {}",
                self.axes.len()
            ))
        })
    }

    fn evaluate(&self, x1: ArrayView2<f64>, x2: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.gram(&x1, &x2)
    }
}

impl<K: AxisKernel> fmt::Display for ProductKernel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kernel (ndim = {}): [", K::FAMILY, self.axes.len())?;
        for (d, axis) in self.axes.iter().enumerate() {
            if d > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("]")
    }
}

/// Build the product kernel of the named family from `config`
pub fn build_kernel(family: KernelFamily, config: &KernelConfig) -> Result<Box<dyn Kernel>> {
    Ok(match family {
        KernelFamily::ExpQuad => Box::new(ExpQuadKernel::from_config(config)?),
        KernelFamily::Matern => Box::new(MaternKernel::from_config(config)?),
        KernelFamily::Matern12 => Box::new(Matern12Kernel::from_config(config)?),
        KernelFamily::Matern32 => Box::new(Matern32Kernel::from_config(config)?),
        KernelFamily::Matern52 => Box::new(Matern52Kernel::from_config(config)?),
        KernelFamily::Matern72 => Box::new(Matern72Kernel::from_config(config)?),
        KernelFamily::Wendland0 => Box::new(Wendland0Kernel::from_config(config)?),
        KernelFamily::Wendland2 => Box::new(Wendland2Kernel::from_config(config)?),
        KernelFamily::Wendland4 => Box::new(Wendland4Kernel::from_config(config)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr2, Array1, Array3};

    #[test]
    fn test_from_config_broadcasts() {
        let kernel = ExpQuadKernel::from_config(&KernelConfig::with_ndim(3)).unwrap();
        assert_eq!(kernel.ndim(), 3);
        assert_eq!(kernel.lengthscales(), vec![1.0, 1.0, 1.0]);

        let kernel =
            MaternKernel::from_config(&KernelConfig::default().lengthscales(vec![0.2, 0.3]).nu(1.5))
                .unwrap();
        assert_eq!(kernel.ndim(), 2);
        match kernel.params_at(1).unwrap() {
            KernelParams::Matern(p) => assert_eq!((p.ell(), p.nu()), (0.3, 1.5)),
            other => panic!("unexpected params {other:?}"),
        }
        assert!(kernel.params_at(2).is_err());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = KernelConfig::with_ndim(2).lengthscales(vec![0.3, -0.1]);
        assert!(Matern32Kernel::from_config(&config).is_err());
        let config = KernelConfig::with_ndim(2).lengthscales(vec![0.3, 0.2, 0.1]);
        assert!(Wendland0Kernel::from_config(&config).is_err());
        assert!(ExpQuadKernel::new(vec![]).is_err());
    }

    #[test]
    fn test_gram_is_product_of_axes() {
        let kernel = ExpQuadKernel::from_config(
            &KernelConfig::default().lengthscales(vec![0.5, 2.0]),
        )
        .unwrap();
        let x1 = arr2(&[[0.0, 0.0], [1.0, -1.0]]);
        let x2 = arr2(&[[0.5, 1.0], [0.0, 0.0], [2.0, 3.0]]);
        let gram = kernel.evaluate(x1.view(), x2.view()).unwrap();
        assert_eq!(gram.dim(), (2, 3));

        for i in 0..2 {
            for j in 0..3 {
                let expected = crate::funcs::expquad(x1[[i, 0]], x2[[j, 0]], 0.5)
                    * crate::funcs::expquad(x1[[i, 1]], x2[[j, 1]], 2.0);
                assert_relative_eq!(gram[[i, j]], expected, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_gram_rejects_bad_shapes() {
        let kernel = Matern52Kernel::from_config(&KernelConfig::with_ndim(2)).unwrap();
        let good = arr2(&[[0.0, 0.0]]);
        let wrong_cols = arr2(&[[0.0, 0.0, 0.0]]);
        assert!(matches!(
            kernel.evaluate(good.view(), wrong_cols.view()),
            Err(Error::InvalidShape(_))
        ));
        assert!(kernel.gram(&Array1::<f64>::zeros(2), &good).is_err());
        assert!(kernel.gram(&good, &Array3::<f64>::zeros((1, 2, 1))).is_err());
    }

    #[test]
    fn test_build_kernel_families() {
        for family in KernelFamily::ALL {
            let kernel = build_kernel(family, &KernelConfig::with_ndim(2)).unwrap();
            assert_eq!(kernel.family(), family);
            assert_eq!(kernel.ndim(), 2);
        }
    }

    #[test]
    fn test_display() {
        let kernel = MaternKernel::from_config(&KernelConfig::with_ndim(2).nu(1.5)).unwrap();
        assert_eq!(
            kernel.to_string(),
            "matern kernel (ndim = 2): [ell=1, nu=1.5; ell=1, nu=1.5]"
        );
    }
}
