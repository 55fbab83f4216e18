//! Shape validation for batches of evaluation points

use crate::{Error, Result};
use ndarray::{ArrayBase, ArrayView2, Data, Dimension, Ix2};

/// View `x` as a batch of points of shape `(n_points, ndim)`
///
/// Accepts arrays of any static or dynamic rank and fails with
/// [`Error::InvalidShape`] unless the rank is exactly 2 and the column count is `ndim`.
pub fn as_batch<S, D>(x: &ArrayBase<S, D>, ndim: usize) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.ndim() != 2 {
        return Err(Error::InvalidShape(format!(
            "expected an array of shape (n_points, {ndim}), got rank {} with shape {:?}",
            x.ndim(),
            x.shape()
        )));
    }

    let view = x
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|e| Error::InvalidShape(e.to_string()))?;

    if view.ncols() != ndim {
        return Err(Error::InvalidShape(format!(
            "points have {} columns, expected ndim = {ndim}",
            view.ncols()
        )));
    }

    Ok(view)
}
