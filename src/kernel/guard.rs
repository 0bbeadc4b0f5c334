// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host-context guard.
//!
//! Kernel-only members have bodies only so that they type check; a translator rewrites
//! their call sites before anything runs. If one of them is reached on the host anyway,
//! it calls [`kernel_only()`], which fails with an [`InvalidExecutionContext`] naming
//! the type and the member. There is no fallback value: executing kernel arithmetic on
//! the host would hide the fact that a call site was never translated.

use core::{any, fmt};
use thiserror::Error;

/// An operator that kernel code may apply to a matrix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    #[must_use]
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg | Self::Sub => "-",
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Neg)
    }
}

/// The signature of a kernel-only member.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Member {
    /// `matrix[row]`, yielding one row.
    Row { mutable: bool },
    /// `matrix[(a, b, ..)]`, yielding `arity` selected elements.
    Swizzle { arity: usize, mutable: bool },
    /// A unary or binary operator.
    Operator(Operator),
    /// The implicit conversion of a degenerate matrix into `target`.
    IntoVector { target: TypeDescriptor },
}

impl fmt::Display for Member {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_trait = |mutable: bool| if mutable { "IndexMut" } else { "Index" };

        match *self {
            Self::Row { mutable } => write!(fmtr, "{}<usize>", index_trait(mutable)),
            Self::Swizzle { arity, mutable } => {
                write!(fmtr, "{}<(", index_trait(mutable))?;
                for i in 0..arity {
                    if i > 0 {
                        fmtr.write_str(", ")?;
                    }
                    fmtr.write_str("MatrixIndex")?;
                }
                fmtr.write_str(")>")
            }
            Self::Operator(op) if op.is_unary() => write!(fmtr, "unary operator {}", op.symbol()),
            Self::Operator(op) => write!(fmtr, "binary operator {}", op.symbol()),
            Self::IntoVector { target } => write!(fmtr, "implicit conversion into {target}"),
        }
    }
}

/// Names a matrix or vector type together with its full shape.
///
/// The shape is carried as numbers rather than read back from
/// [`core::any::type_name`], which may leave out generic arguments equal to their
/// defaults.
///
/// ```
/// # use kernel_math::kernel::guard::TypeDescriptor;
/// assert_eq!(TypeDescriptor::matrix::<f64, 4, 4>().to_string(), "Matrix<f64, 4, 4>");
/// assert_eq!(TypeDescriptor::vector::<f32, 3>().to_string(), "Vector<f32, 3>");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeDescriptor {
    Matrix {
        scalar: &'static str,
        rows: usize,
        cols: usize,
    },
    Vector {
        scalar: &'static str,
        len: usize,
    },
}

impl TypeDescriptor {
    #[must_use]
    #[inline]
    pub fn matrix<T, const ROWS: usize, const COLS: usize>() -> Self {
        Self::Matrix {
            scalar: any::type_name::<T>(),
            rows: ROWS,
            cols: COLS,
        }
    }

    #[must_use]
    #[inline]
    pub fn vector<T, const N: usize>() -> Self {
        Self::Vector {
            scalar: any::type_name::<T>(),
            len: N,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Matrix { scalar, rows, cols } => write!(fmtr, "Matrix<{scalar}, {rows}, {cols}>"),
            Self::Vector { scalar, len } => write!(fmtr, "Vector<{scalar}, {len}>"),
        }
    }
}

/// A kernel-only member was executed on the host.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("`{member}` of `{declaring_type}` can only be used in kernel code being translated for the device")]
pub struct InvalidExecutionContext {
    pub declaring_type: TypeDescriptor,
    pub member: Member,
}

impl InvalidExecutionContext {
    /// Creates the error for `member`, declared on `Matrix<T, ROWS, COLS>`.
    #[must_use]
    #[inline]
    pub fn new<T, const ROWS: usize, const COLS: usize>(member: Member) -> Self {
        Self {
            declaring_type: TypeDescriptor::matrix::<T, ROWS, COLS>(),
            member,
        }
    }
}

/// Fails because `member` of `Matrix<T, ROWS, COLS>` was executed outside of kernel
/// translation.
///
/// Every kernel-only member body is a call to this function.
///
/// # Panics
///
/// Always. With the `std` feature the panic payload is the [`InvalidExecutionContext`]
/// itself, so it can be recovered with [`downcast`] after [`catch_unwind`]; without it,
/// the payload is the error's [`Display`] text.
///
/// [`Display`]: core::fmt::Display
/// [`downcast`]: std::boxed::Box::downcast
/// [`catch_unwind`]: std::panic::catch_unwind
#[cold]
#[inline(never)]
#[track_caller]
pub fn kernel_only<T, const ROWS: usize, const COLS: usize>(member: Member) -> ! {
    let error = InvalidExecutionContext::new::<T, ROWS, COLS>(member);

    #[cfg(feature = "tracing")]
    tracing::error!(
        declaring_type = %error.declaring_type,
        member = %error.member,
        "kernel-only member executed on the host"
    );

    #[cfg(feature = "std")]
    std::panic::panic_any(error);

    #[cfg(not(feature = "std"))]
    panic!("{error}")
}

#[cfg(test)]
mod tests {
    use super::{InvalidExecutionContext, Member, Operator, TypeDescriptor};

    #[test]
    fn test_member_signatures() {
        assert_eq!(Member::Row { mutable: false }.to_string(), "Index<usize>");
        assert_eq!(Member::Row { mutable: true }.to_string(), "IndexMut<usize>");
        assert_eq!(
            Member::Swizzle {
                arity: 3,
                mutable: false
            }
            .to_string(),
            "Index<(MatrixIndex, MatrixIndex, MatrixIndex)>"
        );
        assert_eq!(
            Member::Swizzle {
                arity: 3,
                mutable: true
            }
            .to_string(),
            "IndexMut<(MatrixIndex, MatrixIndex, MatrixIndex)>"
        );
        assert_eq!(Member::Operator(Operator::Neg).to_string(), "unary operator -");
        assert_eq!(Member::Operator(Operator::Sub).to_string(), "binary operator -");
        assert_eq!(Member::Operator(Operator::Div).to_string(), "binary operator /");
        assert_eq!(
            Member::IntoVector {
                target: TypeDescriptor::vector::<f64, 2>()
            }
            .to_string(),
            "implicit conversion into Vector<f64, 2>"
        );
    }

    #[test]
    fn test_default_shapes_are_spelled_out() {
        assert_eq!(TypeDescriptor::matrix::<f64, 4, 4>().to_string(), "Matrix<f64, 4, 4>");
        assert_eq!(TypeDescriptor::matrix::<f64, 3, 4>().to_string(), "Matrix<f64, 3, 4>");
        assert_eq!(TypeDescriptor::matrix::<f32, 1, 4>().to_string(), "Matrix<f32, 1, 4>");
        assert_eq!(TypeDescriptor::vector::<f64, 3>().to_string(), "Vector<f64, 3>");
    }

    #[test]
    fn test_error_names_type_and_member() {
        let error = InvalidExecutionContext::new::<f64, 2, 3>(Member::Operator(Operator::Mul));
        assert_eq!(
            error.declaring_type,
            TypeDescriptor::Matrix {
                scalar: "f64",
                rows: 2,
                cols: 3
            }
        );
        assert_eq!(
            error.to_string(),
            "`binary operator *` of `Matrix<f64, 2, 3>` can only be used in kernel code \
             being translated for the device"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_payload_is_the_typed_error() {
        let payload = std::panic::catch_unwind(|| {
            super::kernel_only::<i32, 4, 4>(Member::Row { mutable: false })
        })
        .unwrap_err();

        let error = payload.downcast::<InvalidExecutionContext>().unwrap();
        assert_eq!(error.declaring_type, TypeDescriptor::matrix::<i32, 4, 4>());
        assert_eq!(error.member, Member::Row { mutable: false });
    }
}
