//! Static cost model
//!
//! Costs are dimensionless integers compared at monomorphization time to pick
//! an iteration organization for one expression type. Only the relative order
//! of the two candidate costs matters; the magnitudes below were tuned
//! empirically and are kept as named constants rather than re-derived.

use crate::matrix::Dim;

/// Flat penalty for materializing an expression into a temporary before
/// element access becomes a plain load.
pub const CACHE_COST: u32 = 1000;

/// Row counts below this make per-column iteration overhead dominate.
pub const SHORT_VEC_THRESHOLD: usize = 4;

/// Extra per-column cost charged when the compile-time row count is short.
pub const SHORT_VEC_PERCOL_COST: u32 = 200;

/// Cost of linear-organization access.
///
/// `direct` means the expression is dense with contiguous layout, so the
/// flattened read is free; anything else pays the cache penalty.
#[inline]
pub const fn linear_access_cost(direct: bool) -> u32 {
    if direct {
        0
    } else {
        CACHE_COST
    }
}

/// Cost of per-column-organization access.
///
/// `direct` means the expression is dense (any stride). The short-vector
/// penalty applies only when the row count is statically known and under
/// [`SHORT_VEC_THRESHOLD`]; a dynamic row count is never charged for it.
#[inline]
pub const fn percol_access_cost(direct: bool, static_rows: Option<usize>) -> u32 {
    let base = if direct { 0 } else { CACHE_COST };
    let short = match static_rows {
        Some(n) => n < SHORT_VEC_THRESHOLD,
        None => false,
    };
    if short {
        base + SHORT_VEC_PERCOL_COST
    } else {
        base
    }
}

/// Per-column cost keyed on a dimension type's static extent.
#[inline]
pub const fn percol_access_cost_for<R: Dim>(direct: bool) -> u32 {
    percol_access_cost(direct, R::STATIC)
}
