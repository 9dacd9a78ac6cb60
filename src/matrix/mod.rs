//! Matrix storage, views, and expression traits

use thiserror::Error;

pub mod dense;
pub mod dim;
pub mod expr;
pub mod view;

pub use dense::DenseMatrix;
pub use dim::{Dim, Dyn, Fixed};
pub use expr::{
    ConstMatrix, ContiguousData, DenseData, DenseDataMut, MapExpr, MatrixExpr, Scalar, ZipExpr,
};
pub use view::{DenseView, DenseViewMut};

/// Construction errors for matrices and views.
///
/// Evaluation itself never returns an error; an (expression, policy)
/// combination that cannot be evaluated does not compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("data length {len} does not match a {rows}x{cols} matrix")]
    LengthMismatch { len: usize, rows: usize, cols: usize },

    #[error("lead dimension {ldim} is smaller than row count {rows}")]
    ShortLeadDim { ldim: usize, rows: usize },

    #[error("{rows}x{cols} view with lead dimension {ldim} needs {needed} elements, storage has {len}")]
    ViewOutOfBounds {
        rows: usize,
        cols: usize,
        ldim: usize,
        needed: usize,
        len: usize,
    },
}
