//! Element-wise operations
//!
//! Functor types plus the free functions that build lazy expression trees
//! from them.

pub mod combinators;
pub mod functors;

pub use combinators::{add, div, exp, ln, map, max, min, mul, sqr, sqrt, sub, zip};
pub use functors::{
    AbsOp, AddOp, BinaryFun, DivOp, ExpOp, LnOp, MaxOp, MinOp, MulOp, NegOp, RecipOp, SqrOp,
    SqrtOp, SubOp, UnaryFun,
};
