//! Expression traits and lazy expression nodes
//!
//! A matrix expression is a read-only producer of elements over a 2-D index
//! space. Capabilities beyond that are expressed as trait refinements:
//! `DenseData` for expressions backed by addressable storage, `ContiguousData`
//! for storage that is one unbroken run, `DenseDataMut` for writable
//! destinations. The evaluation engine selects its strategy from these
//! capabilities at monomorphization time.

use num_traits::Num;

use crate::ops::{BinaryFun, UnaryFun};

use super::dim::Dim;

/// Element type of a matrix expression.
pub trait Scalar: Copy + Num + PartialOrd + std::fmt::Debug + 'static {}

impl<T> Scalar for T where T: Copy + Num + PartialOrd + std::fmt::Debug + 'static {}

/// A read-only 2-D element producer.
///
/// `eval_at` is the logical read used when an expression has to be
/// materialized; dense expressions additionally expose their storage through
/// [`DenseData`] so evaluation can bypass it.
pub trait MatrixExpr {
    type Elem: Scalar;
    type Rows: Dim;
    type Cols: Dim;

    fn rows(&self) -> Self::Rows;
    fn cols(&self) -> Self::Cols;

    /// Element at logical position `(i, j)`.
    fn eval_at(&self, i: usize, j: usize) -> Self::Elem;

    #[inline]
    fn nrows(&self) -> usize {
        self.rows().size()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols().size()
    }

    #[inline]
    fn nelems(&self) -> usize {
        self.nrows() * self.ncols()
    }
}

impl<E: MatrixExpr> MatrixExpr for &E {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> Self::Rows {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> Self::Cols {
        (**self).cols()
    }

    #[inline]
    fn eval_at(&self, i: usize, j: usize) -> Self::Elem {
        (**self).eval_at(i, j)
    }
}

/// Dense capability: the expression is backed by addressable column-major
/// storage.
///
/// Column `j` occupies `data()[j * lead_dim() .. j * lead_dim() + nrows()]`.
pub trait DenseData: MatrixExpr {
    /// Backing storage window.
    fn data(&self) -> &[Self::Elem];

    /// Stride, in elements, between the start of consecutive columns.
    fn lead_dim(&self) -> usize;
}

/// Contiguous-layout capability: the whole matrix is the unbroken prefix
/// `data()[..nelems()]`, with no per-column gap.
///
/// This is a property of the type, not of a particular value; a strided view
/// never carries it even when its stride happens to equal its row count.
pub trait ContiguousData: DenseData {}

/// Writable destination capability.
pub trait DenseDataMut: DenseData {
    fn data_mut(&mut self) -> &mut [Self::Elem];
}

/// Broadcast expression: every element is the same scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstMatrix<T, R, C> {
    value: T,
    rows: R,
    cols: C,
}

impl<T: Scalar, R: Dim, C: Dim> ConstMatrix<T, R, C> {
    pub fn new(rows: R, cols: C, value: T) -> Self {
        ConstMatrix { value, rows, cols }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Scalar, R: Dim, C: Dim> MatrixExpr for ConstMatrix<T, R, C> {
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
    fn eval_at(&self, _i: usize, _j: usize) -> T {
        self.value
    }
}

/// Lazy element-wise application of a unary functor.
///
/// Not dense: reading an element computes it, so the evaluation engine routes
/// this through a cached evaluator.
#[derive(Clone, Copy, Debug)]
pub struct MapExpr<E, F> {
    expr: E,
    f: F,
}

impl<E, F> MapExpr<E, F>
where
    E: MatrixExpr,
    F: UnaryFun<E::Elem>,
{
    pub fn new(expr: E, f: F) -> Self {
        MapExpr { expr, f }
    }
}

impl<E, F> MatrixExpr for MapExpr<E, F>
where
    E: MatrixExpr,
    F: UnaryFun<E::Elem>,
{
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> Self::Rows {
        self.expr.rows()
    }

    #[inline]
    fn cols(&self) -> Self::Cols {
        self.expr.cols()
    }

    #[inline]
    fn eval_at(&self, i: usize, j: usize) -> Self::Elem {
        self.f.apply(self.expr.eval_at(i, j))
    }
}

/// Lazy element-wise combination of two same-shaped expressions.
///
/// Shape agreement is the caller's obligation and checked eagerly at
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct ZipExpr<A, B, F> {
    lhs: A,
    rhs: B,
    f: F,
}

impl<A, B, F> ZipExpr<A, B, F>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    F: BinaryFun<A::Elem>,
{
    pub fn new(lhs: A, rhs: B, f: F) -> Self {
        assert_eq!(lhs.nrows(), rhs.nrows());
        assert_eq!(lhs.ncols(), rhs.ncols());
        ZipExpr { lhs, rhs, f }
    }
}

impl<A, B, F> MatrixExpr for ZipExpr<A, B, F>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    F: BinaryFun<A::Elem>,
{
    type Elem = A::Elem;
    type Rows = A::Rows;
    type Cols = A::Cols;

    #[inline]
    fn rows(&self) -> Self::Rows {
        self.lhs.rows()
    }

    #[inline]
    fn cols(&self) -> Self::Cols {
        self.lhs.cols()
    }

    #[inline]
    fn eval_at(&self, i: usize, j: usize) -> Self::Elem {
        self.f.apply(self.lhs.eval_at(i, j), self.rhs.eval_at(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Dyn, Fixed};
    use crate::ops::{AddOp, SqrOp};

    #[test]
    fn test_const_matrix() {
        let c = ConstMatrix::new(Dyn(3), Dyn(2), 7.5_f64);
        assert_eq!(c.nrows(), 3);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c.nelems(), 6);
        assert_eq!(c.eval_at(2, 1), 7.5);
        assert_eq!(c.value(), 7.5);
    }

    #[test]
    fn test_ref_expr_forwards() {
        let c = ConstMatrix::new(Fixed::<2>, Fixed::<2>, 1.0_f64);
        let r = &c;
        assert_eq!(r.nrows(), 2);
        assert_eq!(r.eval_at(0, 0), 1.0);
    }

    #[test]
    fn test_map_expr() {
        let c = ConstMatrix::new(Dyn(2), Dyn(2), 3.0_f64);
        let m = MapExpr::new(&c, SqrOp);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.eval_at(1, 1), 9.0);
    }

    #[test]
    fn test_zip_expr() {
        let a = ConstMatrix::new(Dyn(2), Dyn(3), 3.0_f64);
        let b = ConstMatrix::new(Dyn(2), Dyn(3), 4.0_f64);
        let z = ZipExpr::new(&a, &b, AddOp);
        assert_eq!(z.ncols(), 3);
        assert_eq!(z.eval_at(0, 2), 7.0);
    }

    #[test]
    #[should_panic]
    fn test_zip_shape_mismatch_panics() {
        let a = ConstMatrix::new(Dyn(2), Dyn(3), 1.0_f64);
        let b = ConstMatrix::new(Dyn(3), Dyn(2), 1.0_f64);
        let _ = ZipExpr::new(&a, &b, AddOp);
    }
}
