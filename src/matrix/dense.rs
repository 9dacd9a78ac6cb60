//! Owned dense matrix with column-major storage
//!
//! `DenseMatrix` always stores its elements as one unbroken column-major run
//! (`lead_dim == nrows`), so it carries the contiguous-layout capability and
//! can serve as both expression source and evaluation destination.

use std::ops::Index;

use num_traits::Zero;

use super::dim::Dim;
use super::expr::{ContiguousData, DenseData, DenseDataMut, MatrixExpr, Scalar};
use super::MatrixError;

/// Owned column-major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T, R, C> {
    rows: R,
    cols: C,
    data: Vec<T>,
}

impl<T: Scalar, R: Dim, C: Dim> DenseMatrix<T, R, C> {
    /// Wrap a column-major element vector.
    ///
    /// Fails when the vector length does not match the extents.
    pub fn from_vec(rows: R, cols: C, data: Vec<T>) -> Result<Self, MatrixError> {
        let expected = rows.size() * cols.size();
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                len: data.len(),
                rows: rows.size(),
                cols: cols.size(),
            });
        }
        Ok(DenseMatrix { rows, cols, data })
    }

    pub fn zeros(rows: R, cols: C) -> Self {
        DenseMatrix {
            rows,
            cols,
            data: vec![T::zero(); rows.size() * cols.size()],
        }
    }

    /// Fill from a function of the logical position, in column-major order.
    pub fn from_fn(rows: R, cols: C, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let (nr, nc) = (rows.size(), cols.size());
        let mut data = Vec::with_capacity(nr * nc);
        for j in 0..nc {
            for i in 0..nr {
                data.push(f(i, j));
            }
        }
        DenseMatrix { rows, cols, data }
    }

    /// Materialize an arbitrary expression in a single full pass.
    ///
    /// Every source element is read exactly once.
    pub fn from_expr<E>(expr: &E) -> Self
    where
        E: MatrixExpr<Elem = T, Rows = R, Cols = C>,
    {
        let rows = expr.rows();
        let cols = expr.cols();
        let (nr, nc) = (rows.size(), cols.size());
        let mut data = Vec::with_capacity(nr * nc);
        for j in 0..nc {
            for i in 0..nr {
                data.push(expr.eval_at(i, j));
            }
        }
        DenseMatrix { rows, cols, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows() && j < self.ncols());
        self.data[j * self.nrows() + i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.nrows() && j < self.ncols());
        let nr = self.nrows();
        self.data[j * nr + i] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Scalar, R: Dim, C: Dim> MatrixExpr for DenseMatrix<T, R, C> {
    type Elem = T;
    type Rows = R;
    type Cols = C;

    #[inline]
    fn rows(&self) -> R {
        self.rows
    }

    #[inline]
    fn cols(&self) -> C {
        self.cols
    }

    #[inline]
    fn eval_at(&self, i: usize, j: usize) -> T {
        self.data[j * self.nrows() + i]
    }
}

impl<T: Scalar, R: Dim, C: Dim> DenseData for DenseMatrix<T, R, C> {
    #[inline]
    fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn lead_dim(&self) -> usize {
        self.nrows()
    }
}

impl<T: Scalar, R: Dim, C: Dim> ContiguousData for DenseMatrix<T, R, C> {}

impl<T: Scalar, R: Dim, C: Dim> DenseDataMut for DenseMatrix<T, R, C> {
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar, R: Dim, C: Dim> Index<(usize, usize)> for DenseMatrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[j * self.nrows() + i]
    }
}
