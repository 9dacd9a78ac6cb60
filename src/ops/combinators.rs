//! Expression builders
//!
//! Free functions that assemble lazy expression trees from matrices and
//! functors. The result stays unevaluated until it is handed to the
//! evaluation engine.

use crate::matrix::{MapExpr, MatrixExpr, ZipExpr};

use super::functors::{
    AddOp, BinaryFun, DivOp, ExpOp, LnOp, MaxOp, MinOp, MulOp, SqrOp, SqrtOp, SubOp, UnaryFun,
};

/// Apply a unary functor element-wise.
#[inline]
pub fn map<E, F>(expr: E, f: F) -> MapExpr<E, F>
where
    E: MatrixExpr,
    F: UnaryFun<E::Elem>,
{
    MapExpr::new(expr, f)
}

/// Combine two same-shaped expressions element-wise.
///
/// Panics when the shapes disagree.
#[inline]
pub fn zip<A, B, F>(lhs: A, rhs: B, f: F) -> ZipExpr<A, B, F>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    F: BinaryFun<A::Elem>,
{
    ZipExpr::new(lhs, rhs, f)
}

macro_rules! binary_builder {
    ($name:ident, $op:ident) => {
        #[inline]
        pub fn $name<A, B>(lhs: A, rhs: B) -> ZipExpr<A, B, $op>
        where
            A: MatrixExpr,
            B: MatrixExpr<Elem = A::Elem>,
            $op: BinaryFun<A::Elem>,
        {
            zip(lhs, rhs, $op)
        }
    };
}

binary_builder!(add, AddOp);
binary_builder!(sub, SubOp);
binary_builder!(mul, MulOp);
binary_builder!(div, DivOp);
binary_builder!(min, MinOp);
binary_builder!(max, MaxOp);

macro_rules! unary_builder {
    ($name:ident, $op:ident) => {
        #[inline]
        pub fn $name<E>(expr: E) -> MapExpr<E, $op>
        where
            E: MatrixExpr,
            $op: UnaryFun<E::Elem>,
        {
            map(expr, $op)
        }
    };
}

unary_builder!(sqr, SqrOp);
unary_builder!(sqrt, SqrtOp);
unary_builder!(exp, ExpOp);
unary_builder!(ln, LnOp);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ConstMatrix, DenseMatrix, Dyn};

    #[test]
    fn test_add_builder() {
        let a = DenseMatrix::from_vec(Dyn(2), Dyn(1), vec![1.0, 2.0]).unwrap();
        let b = ConstMatrix::new(Dyn(2), Dyn(1), 10.0);
        let e = add(&a, &b);
        assert_eq!(e.eval_at(0, 0), 11.0);
        assert_eq!(e.eval_at(1, 0), 12.0);
    }

    #[test]
    fn test_nested_tree() {
        // (x^2 + x) on [1, 2, 3]
        let x = DenseMatrix::from_vec(Dyn(3), Dyn(1), vec![1.0, 2.0, 3.0]).unwrap();
        let e = add(sqr(&x), &x);
        assert_eq!(e.eval_at(0, 0), 2.0);
        assert_eq!(e.eval_at(1, 0), 6.0);
        assert_eq!(e.eval_at(2, 0), 12.0);
    }

    #[test]
    fn test_min_max_builders() {
        let a = DenseMatrix::from_vec(Dyn(2), Dyn(1), vec![1.0, 5.0]).unwrap();
        let b = DenseMatrix::from_vec(Dyn(2), Dyn(1), vec![3.0, 3.0]).unwrap();
        assert_eq!(min(&a, &b).eval_at(0, 0), 1.0);
        assert_eq!(max(&a, &b).eval_at(1, 0), 5.0);
    }
}
