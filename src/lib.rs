//! mateval: dense-matrix expression evaluation
//!
//! Lazy element-wise expressions over column-major dense matrices, evaluated
//! into a destination by the cheapest valid strategy. Strategy selection
//! (iteration organization and evaluator implementation) happens per type
//! combination at monomorphization time, so the executed loop carries no
//! branching on strategy.
//!
//! # Example
//!
//! ```
//! use mateval::{add, evaluate_into, sqr, DenseMatrix, Dyn};
//!
//! let x = DenseMatrix::from_vec(Dyn(3), Dyn(1), vec![1.0, 2.0, 3.0]).unwrap();
//! let mut y = DenseMatrix::zeros(Dyn(3), Dyn(1));
//!
//! // y = x^2 + x
//! evaluate_into(&add(sqr(&x), &x), &mut y);
//! assert_eq!(y.as_slice(), &[2.0, 6.0, 12.0]);
//! ```

pub mod eval;
pub mod matrix;
pub mod ops;

pub use eval::{
    evaluate, evaluate_into, evaluate_linear, evaluate_percol, selects_linear, EvalPolicy, Linear,
    PerColumn, Scalars, Simd,
};
pub use matrix::{
    ConstMatrix, ContiguousData, DenseData, DenseDataMut, DenseMatrix, DenseView, DenseViewMut,
    Dim, Dyn, Fixed, MapExpr, MatrixError, MatrixExpr, Scalar, ZipExpr,
};
pub use ops::{add, div, exp, ln, map, max, min, mul, sqr, sqrt, sub, zip};
