// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    kernel::guard::{Member, TypeDescriptor, kernel_only},
    matrix::Matrix,
    vector::Vector,
};

// Only degenerate shapes with a vector counterpart convert; `Matrix<T, 1, 1>` is a
// scalar, and shapes with two or more rows and columns are never vectors.
macro_rules! impl_into_vector {
    ( $( ($rows:literal, $cols:literal) => $len:literal ),* $(,)? ) => {
        $(
            impl<T> From<Matrix<T, $rows, $cols>> for Vector<T, $len> {
                #[track_caller]
                #[inline]
                fn from(_matrix: Matrix<T, $rows, $cols>) -> Self {
                    kernel_only::<T, $rows, $cols>(Member::IntoVector {
                        target: TypeDescriptor::vector::<T, $len>(),
                    })
                }
            }
        )*
    };
}

impl_into_vector! {
    (1, 2) => 2,
    (1, 3) => 3,
    (1, 4) => 4,
    (2, 1) => 2,
    (3, 1) => 3,
    (4, 1) => 4,
}
