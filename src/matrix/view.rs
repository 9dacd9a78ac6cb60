//! Strided windows over dense storage
//!
//! A view addresses an `nrows x ncols` region inside a larger column-major
//! buffer through an explicit leading dimension. Views are dense (column `j`
//! starts at `j * lead_dim`) but never contiguous at the type level, so the
//! evaluation engine treats them as per-column material and refuses the
//! direct linear path for them.

use super::dim::Dim;
use super::expr::{DenseData, DenseDataMut, MatrixExpr, Scalar};
use super::MatrixError;

fn check_view(rows: usize, cols: usize, ldim: usize, len: usize) -> Result<(), MatrixError> {
    if ldim < rows {
        return Err(MatrixError::ShortLeadDim { ldim, rows });
    }
    let needed = if cols == 0 { 0 } else { (cols - 1) * ldim + rows };
    if needed > len {
        return Err(MatrixError::ViewOutOfBounds {
            rows,
            cols,
            ldim,
            needed,
            len,
        });
    }
    Ok(())
}

/// Read-only strided window.
#[derive(Clone, Copy, Debug)]
pub struct DenseView<'a, T, R, C> {
    rows: R,
    cols: C,
    ldim: usize,
    data: &'a [T],
}

impl<'a, T: Scalar, R: Dim, C: Dim> DenseView<'a, T, R, C> {
    pub fn new(rows: R, cols: C, ldim: usize, data: &'a [T]) -> Result<Self, MatrixError> {
        check_view(rows.size(), cols.size(), ldim, data.len())?;
        Ok(DenseView {
            rows,
            cols,
            ldim,
            data,
        })
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows() && j < self.ncols());
        self.data[j * self.ldim + i]
    }
}

impl<T: Scalar, R: Dim, C: Dim> MatrixExpr for DenseView<'_, T, R, C> {
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
        self.data[j * self.ldim + i]
    }
}

impl<T: Scalar, R: Dim, C: Dim> DenseData for DenseView<'_, T, R, C> {
    #[inline]
    fn data(&self) -> &[T] {
        self.data
    }

    #[inline]
    fn lead_dim(&self) -> usize {
        self.ldim
    }
}

/// Writable strided window, usable as an evaluation destination.
#[derive(Debug)]
pub struct DenseViewMut<'a, T, R, C> {
    rows: R,
    cols: C,
    ldim: usize,
    data: &'a mut [T],
}

impl<'a, T: Scalar, R: Dim, C: Dim> DenseViewMut<'a, T, R, C> {
    pub fn new(rows: R, cols: C, ldim: usize, data: &'a mut [T]) -> Result<Self, MatrixError> {
        check_view(rows.size(), cols.size(), ldim, data.len())?;
        Ok(DenseViewMut {
            rows,
            cols,
            ldim,
            data,
        })
    }

    /// Read-only view of the same window.
    pub fn as_view(&self) -> DenseView<'_, T, R, C> {
        DenseView {
            rows: self.rows,
            cols: self.cols,
            ldim: self.ldim,
            data: self.data,
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.nrows() && j < self.ncols());
        self.data[j * self.ldim + i]
    }
}

impl<T: Scalar, R: Dim, C: Dim> MatrixExpr for DenseViewMut<'_, T, R, C> {
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
        self.data[j * self.ldim + i]
    }
}

impl<T: Scalar, R: Dim, C: Dim> DenseData for DenseViewMut<'_, T, R, C> {
    #[inline]
    fn data(&self) -> &[T] {
        self.data
    }

    #[inline]
    fn lead_dim(&self) -> usize {
        self.ldim
    }
}

impl<T: Scalar, R: Dim, C: Dim> DenseDataMut for DenseViewMut<'_, T, R, C> {
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        self.data
    }
}
