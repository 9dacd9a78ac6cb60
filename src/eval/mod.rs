//! Expression evaluation engine
//!
//! Turns a matrix expression plus a dense destination into a filled
//! destination, choosing among evaluator implementations and iteration
//! organizations at monomorphization time:
//!
//! 1. The cost model prices each organization for the expression type.
//! 2. The plan traits map (expression, organization, means) to one concrete
//!    evaluator type.
//! 3. A loop engine specialized for the destination's static or dynamic
//!    extents consumes the evaluator and writes the destination.
//!
//! The chosen strategy is a property of the types involved; no strategy
//! decision is made per call.

pub mod cost;
pub mod dispatch;
pub mod evaluators;
pub mod loops;
pub mod plan;

pub use cost::{
    linear_access_cost, percol_access_cost, percol_access_cost_for, CACHE_COST,
    SHORT_VEC_PERCOL_COST, SHORT_VEC_THRESHOLD,
};
pub use dispatch::{
    evaluate, evaluate_into, evaluate_linear, evaluate_percol, selects_linear, ExecutePolicy,
};
pub use evaluators::{
    CachedLinear, CachedPerCol, ConstLinear, ConstPerCol, ContinuousLinear, DensePerCol,
    LinearEval, PerColEval,
};
pub use loops::{linear_eval_impl, percol_eval_impl};
pub use plan::{
    EvalPolicy, Linear, LinearEvalPlan, Means, Organization, PerColEvalPlan, PerColumn, Scalars,
    Simd,
};
