// SPDX-License-Identifier: MIT OR Apache-2.0

//! The kernel-only surface of matrices.
//!
//! Everything in this module exists as a target for a kernel translator, which matches
//! these members by signature and replaces each call site with device instructions:
//!
//! * the row indexer `matrix[row]`, yielding a [`Vector`] of the row (or the bare scalar
//!   when the matrix has a single column);
//! * the swizzle indexers `matrix[(a, b)]`, `matrix[(a, b, c)]` and
//!   `matrix[(a, b, c, d)]`, yielding a [`Vector`] of the elements named by the
//!   [`MatrixIndex`] selectors, in selector order;
//! * unary `-` and elementwise `+`, `-`, `*` and `/` between matrices of the same shape;
//! * the implicit conversion of single-row and single-column matrices into vectors.
//!
//! None of these do anything on the host except fail through [`guard::kernel_only()`]:
//!
//! ```should_panic
//! # use kernel_math::matrix::Matrix2x2;
//! let matrix = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
//! let _ = -matrix;
//! ```
//!
//! There is no single-selector swizzle, since a single element is already reachable
//! through the row indexer:
//!
//! ```compile_fail
//! # use kernel_math::{kernel::MatrixIndex, matrix::Matrix2x2};
//! let matrix = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
//! let _ = &matrix[MatrixIndex::M11];
//! ```
//!
//! Nor can more than four components be selected at once:
//!
//! ```compile_fail
//! # use kernel_math::{kernel::MatrixIndex, matrix::Matrix2x3};
//! use MatrixIndex as I;
//! let matrix = Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
//! let _ = &matrix[(I::M11, I::M12, I::M13, I::M21, I::M22)];
//! ```
//!
//! Only degenerate shapes convert into vectors:
//!
//! ```compile_fail
//! # use kernel_math::{matrix::Matrix2x2, vector::Vector4};
//! let vector: Vector4 = Matrix2x2::new(1.0, 2.0, 3.0, 4.0).into();
//! ```
//!
//! ```compile_fail
//! # use kernel_math::{matrix::Matrix1x1, vector::Vector1};
//! let vector: Vector1 = Matrix1x1::new(1.0).into();
//! ```
//!
//! [`Vector`]: crate::vector::Vector

mod convert;
pub mod guard;
mod index;
mod ops;


pub use self::{
    guard::{InvalidExecutionContext, TypeDescriptor, kernel_only},
    index::MatrixIndex,
};
