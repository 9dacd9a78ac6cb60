//! Vector evaluators
//!
//! An evaluator is constructed once per evaluation call and produces the
//! destination's values either in flattened order ([`LinearEval`]) or column
//! by column ([`PerColEval`]). Direct evaluators borrow the source storage;
//! constant evaluators hold one scalar; cached evaluators own a private
//! temporary materialized from the source in a single pass.

use crate::matrix::{
    ContiguousData, DenseData, DenseMatrix, Dim, MatrixExpr, Scalar,
};

/// Produces elements in flattened (whole-matrix) order.
pub trait LinearEval {
    type Elem: Scalar;

    /// Element at flattened index `i`, valid for `i` in `[0, nelems)`.
    fn get(&self, i: usize) -> Self::Elem;
}

/// Produces elements of one column at a time.
///
/// `get(i)` addresses row `i` of the current column. `next_column` must run
/// exactly once between finishing a column and reading the next, and rows of
/// a column must be read in increasing order.
pub trait PerColEval {
    type Elem: Scalar;

    fn get(&self, i: usize) -> Self::Elem;

    fn next_column(&mut self);
}

/// Direct linear evaluator over contiguous dense storage.
///
/// Only constructible from a [`ContiguousData`] expression; a strided view
/// does not qualify, and requesting it does not compile:
///
/// ```compile_fail
/// use mateval::eval::ContinuousLinear;
/// use mateval::{DenseView, Dyn};
///
/// let buf = vec![0.0_f64; 6];
/// let v = DenseView::new(Dyn(2), Dyn(2), 3, &buf).unwrap();
/// let _ev = ContinuousLinear::new(&v);
/// ```
#[derive(Debug)]
pub struct ContinuousLinear<'a, T> {
    data: &'a [T],
}

impl<'a, T: Scalar> ContinuousLinear<'a, T> {
    #[inline]
    pub fn new<E>(expr: &'a E) -> Self
    where
        E: ContiguousData<Elem = T>,
    {
        ContinuousLinear { data: expr.data() }
    }
}

impl<T: Scalar> LinearEval for ContinuousLinear<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, i: usize) -> T {
        self.data[i]
    }
}

/// Direct per-column evaluator over dense storage with any stride.
#[derive(Debug)]
pub struct DensePerCol<'a, T> {
    data: &'a [T],
    ldim: usize,
    offset: usize,
}

impl<'a, T: Scalar> DensePerCol<'a, T> {
    #[inline]
    pub fn new<E>(expr: &'a E) -> Self
    where
        E: DenseData<Elem = T>,
    {
        DensePerCol {
            data: expr.data(),
            ldim: expr.lead_dim(),
            offset: 0,
        }
    }
}

impl<T: Scalar> PerColEval for DensePerCol<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, i: usize) -> T {
        self.data[self.offset + i]
    }

    #[inline(always)]
    fn next_column(&mut self) {
        self.offset += self.ldim;
    }
}

/// Linear evaluator for a broadcast scalar.
#[derive(Debug)]
pub struct ConstLinear<T> {
    value: T,
}

impl<T: Scalar> ConstLinear<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        ConstLinear { value }
    }
}

impl<T: Scalar> LinearEval for ConstLinear<T> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, _i: usize) -> T {
        self.value
    }
}

/// Per-column evaluator for a broadcast scalar. Column advance is a no-op.
#[derive(Debug)]
pub struct ConstPerCol<T> {
    value: T,
}

impl<T: Scalar> ConstPerCol<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        ConstPerCol { value }
    }
}

impl<T: Scalar> PerColEval for ConstPerCol<T> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, _i: usize) -> T {
        self.value
    }

    #[inline(always)]
    fn next_column(&mut self) {}
}

/// Linear evaluator over a privately materialized temporary.
///
/// Construction reads every source element once; after that, reads are plain
/// loads from the owned contiguous cache. The cache is dropped with the
/// evaluator.
#[derive(Debug)]
pub struct CachedLinear<T, R, C> {
    cache: DenseMatrix<T, R, C>,
}

impl<T: Scalar, R: Dim, C: Dim> CachedLinear<T, R, C> {
    #[inline]
    pub fn new<E>(expr: &E) -> Self
    where
        E: MatrixExpr<Elem = T, Rows = R, Cols = C>,
    {
        CachedLinear {
            cache: DenseMatrix::from_expr(expr),
        }
    }
}

impl<T: Scalar, R: Dim, C: Dim> LinearEval for CachedLinear<T, R, C> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, i: usize) -> T {
        self.cache.as_slice()[i]
    }
}

/// Per-column evaluator over a privately materialized temporary.
#[derive(Debug)]
pub struct CachedPerCol<T, R, C> {
    cache: DenseMatrix<T, R, C>,
    offset: usize,
}

impl<T: Scalar, R: Dim, C: Dim> CachedPerCol<T, R, C> {
    #[inline]
    pub fn new<E>(expr: &E) -> Self
    where
        E: MatrixExpr<Elem = T, Rows = R, Cols = C>,
    {
        CachedPerCol {
            cache: DenseMatrix::from_expr(expr),
            offset: 0,
        }
    }
}

impl<T: Scalar, R: Dim, C: Dim> PerColEval for CachedPerCol<T, R, C> {
    type Elem = T;

    #[inline(always)]
    fn get(&self, i: usize) -> T {
        self.cache.as_slice()[self.offset + i]
    }

    #[inline(always)]
    fn next_column(&mut self) {
        self.offset += self.cache.lead_dim();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ConstMatrix, DenseView, Dyn};
    use crate::ops::{map, SqrOp};

    #[test]
    fn test_continuous_linear_reads_flat() {
        let m = DenseMatrix::from_vec(Dyn(2), Dyn(2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let ev = ContinuousLinear::new(&m);
        assert_eq!(ev.get(0), 1.0);
        assert_eq!(ev.get(3), 4.0);
    }

    #[test]
    fn test_dense_percol_strides() {
        // 3-row storage, 2x2 window
        let buf = vec![1, 2, 3, 4, 5, 6];
        let v = DenseView::new(Dyn(2), Dyn(2), 3, &buf).unwrap();
        let mut ev = DensePerCol::new(&v);
        assert_eq!(ev.get(0), 1);
        assert_eq!(ev.get(1), 2);
        ev.next_column();
        assert_eq!(ev.get(0), 4);
        assert_eq!(ev.get(1), 5);
    }

    #[test]
    fn test_const_evaluators() {
        let lin = ConstLinear::new(2.5);
        assert_eq!(lin.get(0), 2.5);
        assert_eq!(lin.get(99), 2.5);

        let mut pc = ConstPerCol::new(7);
        assert_eq!(pc.get(3), 7);
        pc.next_column();
        assert_eq!(pc.get(0), 7);
    }

    #[test]
    fn test_cached_linear_materializes() {
        let src = DenseMatrix::from_vec(Dyn(2), Dyn(2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let ev = CachedLinear::new(&map(&src, SqrOp));
        assert_eq!(ev.get(0), 1.0);
        assert_eq!(ev.get(1), 4.0);
        assert_eq!(ev.get(2), 9.0);
        assert_eq!(ev.get(3), 16.0);
    }

    #[test]
    fn test_cached_percol_walks_columns() {
        let c = ConstMatrix::new(Dyn(2), Dyn(3), 5.0);
        let mut ev = CachedPerCol::new(&c);
        for _ in 0..2 {
            assert_eq!(ev.get(0), 5.0);
            assert_eq!(ev.get(1), 5.0);
            ev.next_column();
        }
        assert_eq!(ev.get(1), 5.0);
    }
}
