//! Evaluation loop engines
//!
//! Tight write loops that consume an evaluator and fill a destination. Trip
//! counts come from `Dim::STATIC` where the destination's extents are known
//! at compile time, so those monomorphizations loop over literal bounds; the
//! dynamic fallbacks read the extents from the destination.

use crate::matrix::{ContiguousData, DenseDataMut, Dim, MatrixExpr};

use super::evaluators::{LinearEval, PerColEval};

/// Fill a contiguous destination in flattened order.
///
/// Every element of the destination is written exactly once.
#[inline]
pub fn linear_eval_impl<Ev, D>(evaluator: &Ev, dst: &mut D)
where
    Ev: LinearEval,
    D: DenseDataMut<Elem = Ev::Elem> + ContiguousData,
{
    let len = match (
        <<D as MatrixExpr>::Rows as Dim>::STATIC,
        <<D as MatrixExpr>::Cols as Dim>::STATIC,
    ) {
        (Some(r), Some(c)) => r * c,
        _ => dst.nelems(),
    };
    let out = &mut dst.data_mut()[..len];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = evaluator.get(i);
    }
}

/// Fill a destination column by column, rows in increasing order.
///
/// `next_column` runs exactly once per column, after that column's rows are
/// written and before the next column's. Columns are never interleaved.
#[inline]
pub fn percol_eval_impl<Ev, D>(evaluator: &mut Ev, dst: &mut D)
where
    Ev: PerColEval,
    D: DenseDataMut<Elem = Ev::Elem>,
{
    let nrows = match <<D as MatrixExpr>::Rows as Dim>::STATIC {
        Some(r) => r,
        None => dst.nrows(),
    };
    let ncols = match <<D as MatrixExpr>::Cols as Dim>::STATIC {
        Some(c) => c,
        None => dst.ncols(),
    };
    let ldim = dst.lead_dim();
    let data = dst.data_mut();

    for j in 0..ncols {
        let col = &mut data[j * ldim..j * ldim + nrows];
        for (i, slot) in col.iter_mut().enumerate() {
            *slot = evaluator.get(i);
        }
        evaluator.next_column();
    }
}
