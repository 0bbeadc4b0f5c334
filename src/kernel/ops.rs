// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    kernel::guard::{Member, Operator, kernel_only},
    matrix::Matrix,
    utils::num::{ClosedAdd, ClosedDiv, ClosedMul, ClosedNeg, ClosedSub},
};
use core::ops::{Add, Div, Mul, Neg, Sub};

impl<T: ClosedNeg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Self;

    #[track_caller]
    #[inline]
    fn neg(self) -> Self::Output {
        kernel_only::<T, ROWS, COLS>(Member::Operator(Operator::Neg))
    }
}

macro_rules! impl_elementwise_ops {
    ( $( $op_trait:ident :: $op_fn:ident => $bound:ident, $operator:ident ),* $(,)? ) => {
        $(
            impl<T: $bound, const ROWS: usize, const COLS: usize> $op_trait for Matrix<T, ROWS, COLS> {
                type Output = Self;

                #[track_caller]
                #[inline]
                fn $op_fn(self, _rhs: Self) -> Self::Output {
                    kernel_only::<T, ROWS, COLS>(Member::Operator(Operator::$operator))
                }
            }
        )*
    };
}

impl_elementwise_ops! {
    Add::add => ClosedAdd, Add,
    Sub::sub => ClosedSub, Sub,
    Mul::mul => ClosedMul, Mul,
    Div::div => ClosedDiv, Div,
}
