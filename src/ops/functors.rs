//! Element-wise functors
//!
//! Each functor is a zero-sized struct implementing [`UnaryFun`] or
//! [`BinaryFun`]. Expressions carry the functor by value, so a monomorphized
//! evaluation loop inlines the arithmetic with no indirection.

use num_traits::{Float, Signed};
use std::ops::Neg;

use crate::matrix::Scalar;

/// Unary element-wise operation.
pub trait UnaryFun<T> {
    fn apply(&self, x: T) -> T;
}

/// Binary element-wise operation over same-typed operands.
pub trait BinaryFun<T> {
    fn apply(&self, x: T, y: T) -> T;
}

macro_rules! binary_fun {
    ($name:ident, $x:ident, $y:ident, $body:expr) => {
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl<T: Scalar> BinaryFun<T> for $name {
            #[inline(always)]
            fn apply(&self, $x: T, $y: T) -> T {
                $body
            }
        }
    };
}

binary_fun!(AddOp, x, y, x + y);
binary_fun!(SubOp, x, y, x - y);
binary_fun!(MulOp, x, y, x * y);
binary_fun!(DivOp, x, y, x / y);
binary_fun!(MinOp, x, y, if y < x { y } else { x });
binary_fun!(MaxOp, x, y, if y > x { y } else { x });

/// Squares its argument.
#[derive(Clone, Copy, Debug, Default)]
pub struct SqrOp;

impl<T: Scalar> UnaryFun<T> for SqrOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x * x
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NegOp;

impl<T: Scalar + Neg<Output = T>> UnaryFun<T> for NegOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        -x
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AbsOp;

impl<T: Scalar + Signed> UnaryFun<T> for AbsOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.abs()
    }
}

/// Multiplicative inverse.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecipOp;

impl<T: Float> UnaryFun<T> for RecipOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.recip()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SqrtOp;

impl<T: Float> UnaryFun<T> for SqrtOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExpOp;

impl<T: Float> UnaryFun<T> for ExpOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.exp()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LnOp;

impl<T: Float> UnaryFun<T> for LnOp {
    #[inline(always)]
    fn apply(&self, x: T) -> T {
        x.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arith_functors() {
        assert_eq!(AddOp.apply(2.0, 3.0), 5.0);
        assert_eq!(SubOp.apply(2.0, 3.0), -1.0);
        assert_eq!(MulOp.apply(2.0, 3.0), 6.0);
        assert_eq!(DivOp.apply(9.0, 3.0), 3.0);
        assert_eq!(NegOp.apply(2.5), -2.5);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(MinOp.apply(2, 3), 2);
        assert_eq!(MaxOp.apply(2, 3), 3);
        assert_eq!(MinOp.apply(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_unary_math() {
        assert_eq!(SqrOp.apply(4.0), 16.0);
        assert_eq!(SqrOp.apply(-3_i64), 9);
        assert_eq!(AbsOp.apply(-3.5), 3.5);
        assert_relative_eq!(SqrtOp.apply(2.0_f64), std::f64::consts::SQRT_2);
        assert_relative_eq!(LnOp.apply(ExpOp.apply(1.5_f64)), 1.5);
        assert_relative_eq!(RecipOp.apply(4.0_f64), 0.25);
    }
}
