//! Policy tags and the evaluator type map
//!
//! The organization axis picks the traversal order, the means axis picks the
//! execution mode. For each implemented (expression, organization, means)
//! combination there is exactly one plan impl naming the concrete evaluator
//! type and its static cost. There is no fallback: a combination without an
//! impl does not compile.
//!
//! Only the scalar means is implemented. [`Simd`] is the declared seam for a
//! vectorized means; adding it later means adding plan impls for it without
//! touching the cost model or the scalar loops. Selecting it today is
//! rejected at compile time:
//!
//! ```compile_fail
//! use mateval::eval::{evaluate, EvalPolicy, Linear, Simd};
//! use mateval::{DenseMatrix, Dyn};
//!
//! let m = DenseMatrix::from_vec(Dyn(2), Dyn(1), vec![1.0, 2.0]).unwrap();
//! let mut d = DenseMatrix::zeros(Dyn(2), Dyn(1));
//! evaluate(&m, &mut d, EvalPolicy::<Linear, Simd>::new());
//! ```

use std::marker::PhantomData;

use crate::matrix::{
    ConstMatrix, DenseMatrix, DenseView, Dim, MapExpr, MatrixExpr, Scalar, ZipExpr,
};
use crate::ops::{BinaryFun, UnaryFun};

use super::cost::{linear_access_cost, percol_access_cost_for};
use super::evaluators::{
    CachedLinear, CachedPerCol, ConstLinear, ConstPerCol, ContinuousLinear, DensePerCol,
    LinearEval, PerColEval,
};

/// Traversal-order axis.
pub trait Organization: Copy + Default + 'static {}

/// Flatten the destination into one index space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

/// Iterate columns, then rows within a column.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerColumn;

impl Organization for Linear {}
impl Organization for PerColumn {}

/// Execution-mode axis.
pub trait Means: Copy + Default + 'static {}

/// Plain scalar loads and stores. The only implemented means.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalars;

/// Vectorized execution. Declared as an extension point; no plan impls
/// exist for it yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simd;

impl Means for Scalars {}
impl Means for Simd {}

/// Evaluation policy: one organization plus one means.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalPolicy<O: Organization, M: Means> {
    _tags: PhantomData<(O, M)>,
}

impl<O: Organization, M: Means> EvalPolicy<O, M> {
    pub fn new() -> Self {
        EvalPolicy { _tags: PhantomData }
    }
}

/// Plan for evaluating an expression in linear organization under means `M`.
///
/// Implementations form a closed map from expression type to evaluator type;
/// `COST` is the static price the organization selector compares.
pub trait LinearEvalPlan<M: Means>: MatrixExpr {
    type Evaluator<'a>: LinearEval<Elem = Self::Elem>
    where
        Self: 'a;

    const COST: u32;

    fn evaluator(&self) -> Self::Evaluator<'_>;
}

/// Plan for evaluating an expression in per-column organization under means
/// `M`.
pub trait PerColEvalPlan<M: Means>: MatrixExpr {
    type Evaluator<'a>: PerColEval<Elem = Self::Elem>
    where
        Self: 'a;

    const COST: u32;

    fn evaluator(&self) -> Self::Evaluator<'_>;
}

// Owned dense storage is contiguous: direct on both paths.

impl<T: Scalar, R: Dim, C: Dim> LinearEvalPlan<Scalars> for DenseMatrix<T, R, C> {
    type Evaluator<'a>
        = ContinuousLinear<'a, T>
    where
        Self: 'a;

    const COST: u32 = linear_access_cost(true);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        ContinuousLinear::new(self)
    }
}

impl<T: Scalar, R: Dim, C: Dim> PerColEvalPlan<Scalars> for DenseMatrix<T, R, C> {
    type Evaluator<'a>
        = DensePerCol<'a, T>
    where
        Self: 'a;

    const COST: u32 = percol_access_cost_for::<R>(true);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        DensePerCol::new(self)
    }
}

// A strided view is dense but not contiguous: linear access has to go
// through a cache, per-column access is direct.

impl<T: Scalar, R: Dim, C: Dim> LinearEvalPlan<Scalars> for DenseView<'_, T, R, C> {
    type Evaluator<'a>
        = CachedLinear<T, R, C>
    where
        Self: 'a;

    const COST: u32 = linear_access_cost(false);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        CachedLinear::new(self)
    }
}

impl<T: Scalar, R: Dim, C: Dim> PerColEvalPlan<Scalars> for DenseView<'_, T, R, C> {
    type Evaluator<'a>
        = DensePerCol<'a, T>
    where
        Self: 'a;

    const COST: u32 = percol_access_cost_for::<R>(true);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        DensePerCol::new(self)
    }
}

// Broadcast scalars never touch memory: zero cost under both organizations,
// unconditionally, so a constant is never routed through a cache.

impl<T: Scalar, R: Dim, C: Dim> LinearEvalPlan<Scalars> for ConstMatrix<T, R, C> {
    type Evaluator<'a>
        = ConstLinear<T>
    where
        Self: 'a;

    const COST: u32 = 0;

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        ConstLinear::new(self.value())
    }
}

impl<T: Scalar, R: Dim, C: Dim> PerColEvalPlan<Scalars> for ConstMatrix<T, R, C> {
    type Evaluator<'a>
        = ConstPerCol<T>
    where
        Self: 'a;

    const COST: u32 = 0;

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        ConstPerCol::new(self.value())
    }
}

// Computed expressions have no addressable storage: both paths materialize.

impl<E, F> LinearEvalPlan<Scalars> for MapExpr<E, F>
where
    E: MatrixExpr,
    F: UnaryFun<E::Elem>,
{
    type Evaluator<'a>
        = CachedLinear<E::Elem, E::Rows, E::Cols>
    where
        Self: 'a;

    const COST: u32 = linear_access_cost(false);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        CachedLinear::new(self)
    }
}

impl<E, F> PerColEvalPlan<Scalars> for MapExpr<E, F>
where
    E: MatrixExpr,
    F: UnaryFun<E::Elem>,
{
    type Evaluator<'a>
        = CachedPerCol<E::Elem, E::Rows, E::Cols>
    where
        Self: 'a;

    const COST: u32 = percol_access_cost_for::<E::Rows>(false);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        CachedPerCol::new(self)
    }
}

impl<A, B, F> LinearEvalPlan<Scalars> for ZipExpr<A, B, F>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    F: BinaryFun<A::Elem>,
{
    type Evaluator<'a>
        = CachedLinear<A::Elem, A::Rows, A::Cols>
    where
        Self: 'a;

    const COST: u32 = linear_access_cost(false);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        CachedLinear::new(self)
    }
}

impl<A, B, F> PerColEvalPlan<Scalars> for ZipExpr<A, B, F>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    F: BinaryFun<A::Elem>,
{
    type Evaluator<'a>
        = CachedPerCol<A::Elem, A::Rows, A::Cols>
    where
        Self: 'a;

    const COST: u32 = percol_access_cost_for::<A::Rows>(false);

    #[inline]
    fn evaluator(&self) -> Self::Evaluator<'_> {
        CachedPerCol::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::cost::{CACHE_COST, SHORT_VEC_PERCOL_COST};
    use crate::matrix::{Dyn, Fixed};
    use crate::ops::{AddOp, SqrOp};

    type DynMat = DenseMatrix<f64, Dyn, Dyn>;

    #[test]
    fn test_dense_matrix_is_free_both_ways() {
        assert_eq!(<DynMat as LinearEvalPlan<Scalars>>::COST, 0);
        assert_eq!(<DynMat as PerColEvalPlan<Scalars>>::COST, 0);
    }

    #[test]
    fn test_dense_matrix_maps_to_direct_evaluators() {
        let lin = std::any::type_name::<<DynMat as LinearEvalPlan<Scalars>>::Evaluator<'static>>();
        assert!(lin.contains("ContinuousLinear"));
        let pc = std::any::type_name::<<DynMat as PerColEvalPlan<Scalars>>::Evaluator<'static>>();
        assert!(pc.contains("DensePerCol"));
    }

    #[test]
    fn test_view_pays_cache_only_for_linear() {
        type View = DenseView<'static, f64, Dyn, Dyn>;
        assert_eq!(<View as LinearEvalPlan<Scalars>>::COST, CACHE_COST);
        assert_eq!(<View as PerColEvalPlan<Scalars>>::COST, 0);
    }

    #[test]
    fn test_const_matrix_is_always_free() {
        type Cm = ConstMatrix<f64, Fixed<2>, Dyn>;
        assert_eq!(<Cm as LinearEvalPlan<Scalars>>::COST, 0);
        // Short static rows add nothing for a broadcast
        assert_eq!(<Cm as PerColEvalPlan<Scalars>>::COST, 0);
    }

    #[test]
    fn test_computed_exprs_pay_cache_both_ways() {
        type M = MapExpr<DynMat, SqrOp>;
        assert_eq!(<M as LinearEvalPlan<Scalars>>::COST, CACHE_COST);
        assert_eq!(<M as PerColEvalPlan<Scalars>>::COST, CACHE_COST);

        type Z = ZipExpr<DynMat, DynMat, AddOp>;
        assert_eq!(<Z as LinearEvalPlan<Scalars>>::COST, CACHE_COST);
    }

    #[test]
    fn test_short_static_rows_penalize_percol() {
        type ShortMat = DenseMatrix<f64, Fixed<2>, Dyn>;
        assert_eq!(
            <ShortMat as PerColEvalPlan<Scalars>>::COST,
            SHORT_VEC_PERCOL_COST
        );
        // The penalty lands on top of the cache cost without changing the
        // evaluator kind
        type ShortView = DenseView<'static, f64, Fixed<2>, Dyn>;
        assert_eq!(
            <ShortView as PerColEvalPlan<Scalars>>::COST,
            SHORT_VEC_PERCOL_COST
        );
        type ShortMap = MapExpr<ShortMat, SqrOp>;
        assert_eq!(
            <ShortMap as PerColEvalPlan<Scalars>>::COST,
            CACHE_COST + SHORT_VEC_PERCOL_COST
        );
        let pc =
            std::any::type_name::<<ShortView as PerColEvalPlan<Scalars>>::Evaluator<'static>>();
        assert!(pc.contains("DensePerCol"));
    }
}
