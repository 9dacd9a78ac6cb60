//! Dispatch entry points
//!
//! One policy-driven entry plus two convenience entries with the policy
//! fixed, and the cost-model-driven default that compares the two plan costs.
//! All strategy choices resolve per monomorphization; the comparison in
//! [`evaluate_into`] is between associated constants, so each instantiation
//! compiles down to a single already-chosen loop.

use crate::matrix::{ContiguousData, DenseDataMut, MatrixExpr};

use super::loops::{linear_eval_impl, percol_eval_impl};
use super::plan::{
    EvalPolicy, Linear, LinearEvalPlan, Means, PerColEvalPlan, PerColumn, Scalars,
};

/// Ties a policy tag to the loop engine and evaluator construction it
/// implies. Implemented once per organization; the means parameter stays
/// generic so a vectorized means can slot in with its own plan impls.
pub trait ExecutePolicy<E, D> {
    fn execute(expr: &E, dst: &mut D);
}

impl<E, D, M> ExecutePolicy<E, D> for EvalPolicy<Linear, M>
where
    M: Means,
    E: LinearEvalPlan<M>,
    D: DenseDataMut<Elem = E::Elem> + ContiguousData,
{
    #[inline]
    fn execute(expr: &E, dst: &mut D) {
        debug_assert_eq!(expr.nelems(), dst.nelems());
        let evaluator = expr.evaluator();
        linear_eval_impl(&evaluator, dst);
    }
}

impl<E, D, M> ExecutePolicy<E, D> for EvalPolicy<PerColumn, M>
where
    M: Means,
    E: PerColEvalPlan<M>,
    D: DenseDataMut<Elem = E::Elem>,
{
    #[inline]
    fn execute(expr: &E, dst: &mut D) {
        debug_assert_eq!(expr.nrows(), dst.nrows());
        debug_assert_eq!(expr.ncols(), dst.ncols());
        let mut evaluator = expr.evaluator();
        percol_eval_impl(&mut evaluator, dst);
    }
}

/// Evaluate `expr` into `dst` under an explicit policy.
///
/// The destination must already have the expression's shape; this is the
/// caller's obligation and only checked by debug assertion.
#[inline]
pub fn evaluate<E, D, P>(expr: &E, dst: &mut D, _policy: P)
where
    P: ExecutePolicy<E, D>,
{
    P::execute(expr, dst);
}

/// Evaluate with the policy fixed to (linear, scalars).
///
/// For call sites that already know the flattened orders agree.
#[inline]
pub fn evaluate_linear<E, D>(expr: &E, dst: &mut D)
where
    E: LinearEvalPlan<Scalars>,
    D: DenseDataMut<Elem = E::Elem> + ContiguousData,
{
    evaluate(expr, dst, EvalPolicy::<Linear, Scalars>::new());
}

/// Evaluate with the policy fixed to (per-column, scalars).
#[inline]
pub fn evaluate_percol<E, D>(expr: &E, dst: &mut D)
where
    E: PerColEvalPlan<Scalars>,
    D: DenseDataMut<Elem = E::Elem>,
{
    evaluate(expr, dst, EvalPolicy::<PerColumn, Scalars>::new());
}

/// Whether the cost model prefers linear organization for `E`. Ties go to
/// linear.
#[inline]
pub fn selects_linear<E>() -> bool
where
    E: LinearEvalPlan<Scalars> + PerColEvalPlan<Scalars>,
{
    <E as LinearEvalPlan<Scalars>>::COST <= <E as PerColEvalPlan<Scalars>>::COST
}

/// Evaluate `expr` into `dst` under the cheaper organization.
///
/// The comparison runs over two associated constants of `E`, so it folds at
/// monomorphization time; no strategy branching survives into the loop.
#[inline]
pub fn evaluate_into<E, D>(expr: &E, dst: &mut D)
where
    E: LinearEvalPlan<Scalars> + PerColEvalPlan<Scalars>,
    D: DenseDataMut<Elem = <E as MatrixExpr>::Elem> + ContiguousData,
{
    if selects_linear::<E>() {
        evaluate_linear(expr, dst);
    } else {
        evaluate_percol(expr, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ConstMatrix, DenseMatrix, DenseView, Dyn, Fixed, MapExpr, ZipExpr};
    use crate::ops::{AddOp, SqrOp};

    #[test]
    fn test_policy_entry_matches_convenience_entries() {
        let src = DenseMatrix::from_vec(Dyn(2), Dyn(2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut a: DenseMatrix<f64, _, _> = DenseMatrix::zeros(Dyn(2), Dyn(2));
        let mut b: DenseMatrix<f64, _, _> = DenseMatrix::zeros(Dyn(2), Dyn(2));

        evaluate(&src, &mut a, EvalPolicy::<Linear, Scalars>::new());
        evaluate_linear(&src, &mut b);
        assert_eq!(a, b);

        evaluate(&src, &mut a, EvalPolicy::<PerColumn, Scalars>::new());
        evaluate_percol(&src, &mut b);
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_selector_prefers_linear_on_ties() {
        assert!(selects_linear::<DenseMatrix<f64, Dyn, Dyn>>());
        assert!(selects_linear::<ConstMatrix<f64, Dyn, Dyn>>());
        assert!(selects_linear::<MapExpr<DenseMatrix<f64, Dyn, Dyn>, SqrOp>>());
    }

    #[test]
    fn test_selector_prefers_percol_for_strided_sources() {
        assert!(!selects_linear::<DenseView<'static, f64, Dyn, Dyn>>());
    }

    #[test]
    fn test_short_static_rows_force_linear() {
        assert!(selects_linear::<DenseMatrix<f64, Fixed<2>, Dyn>>());
    }

    #[test]
    fn test_evaluate_into_runs_the_cheap_path() {
        let src = DenseMatrix::from_vec(Dyn(3), Dyn(1), vec![1.0, 2.0, 3.0]).unwrap();
        let e = ZipExpr::new(&src, &src, AddOp);
        let mut dst: DenseMatrix<f64, _, _> = DenseMatrix::zeros(Dyn(3), Dyn(1));
        evaluate_into(&e, &mut dst);
        assert_eq!(dst.as_slice(), &[2.0, 4.0, 6.0]);
    }
}
