// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    dim::{Const, Dimension, RowOf},
    kernel::guard::{Member, kernel_only},
    matrix::{Matrix, layout::MAX_DIMENSION},
    vector::Vector,
};
use core::ops::{Index, IndexMut};

/// Names one element of a matrix, for use as a swizzle selector.
///
/// The constants follow the usual 1-based `Mrc` naming, so `M23` is the third element
/// of the second row. A selector is resolved against the shape it is used with: in a
/// matrix with `COLS` columns it picks position `(row - 1) * COLS + (col - 1)` of the
/// row-major element sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MatrixIndex {
    row: u8,
    col: u8,
}

macro_rules! decl_matrix_indices {
    ( $( $name:ident => ($row:literal, $col:literal) ),* $(,)? ) => {
        impl MatrixIndex {
            $(
                pub const $name: Self = Self { row: $row, col: $col };
            )*
        }
    };
}

decl_matrix_indices! {
    M11 => (0, 0), M12 => (0, 1), M13 => (0, 2), M14 => (0, 3),
    M21 => (1, 0), M22 => (1, 1), M23 => (1, 2), M24 => (1, 3),
    M31 => (2, 0), M32 => (2, 1), M33 => (2, 2), M34 => (2, 3),
    M41 => (3, 0), M42 => (3, 1), M43 => (3, 2), M44 => (3, 3),
}

impl MatrixIndex {
    /// Returns the selector for the 0-based position `(row, col)`, or `None` if either
    /// coordinate is outside of the largest supported matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::kernel::MatrixIndex;
    /// assert_eq!(MatrixIndex::new(1, 2), Some(MatrixIndex::M23));
    /// assert_eq!(MatrixIndex::new(4, 0), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < MAX_DIMENSION && col < MAX_DIMENSION {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The 0-based row.
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// The 0-based column.
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS>
where
    Const<COLS>: Dimension,
{
    type Output = RowOf<T, COLS>;

    #[track_caller]
    #[inline]
    fn index(&self, _row: usize) -> &Self::Output {
        kernel_only::<T, ROWS, COLS>(Member::Row { mutable: false })
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS>
where
    Const<COLS>: Dimension,
{
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, _row: usize) -> &mut Self::Output {
        kernel_only::<T, ROWS, COLS>(Member::Row { mutable: true })
    }
}

macro_rules! impl_swizzle_indexers {
    ( $( ( $( $selector:ty ),+ ) => $arity:literal ),* $(,)? ) => {
        $(
            impl<T, const ROWS: usize, const COLS: usize> Index<( $( $selector ),+ )>
                for Matrix<T, ROWS, COLS>
            {
                type Output = Vector<T, $arity>;

                #[track_caller]
                #[inline]
                fn index(&self, _selectors: ( $( $selector ),+ )) -> &Self::Output {
                    kernel_only::<T, ROWS, COLS>(Member::Swizzle { arity: $arity, mutable: false })
                }
            }

            impl<T, const ROWS: usize, const COLS: usize> IndexMut<( $( $selector ),+ )>
                for Matrix<T, ROWS, COLS>
            {
                #[track_caller]
                #[inline]
                fn index_mut(&mut self, _selectors: ( $( $selector ),+ )) -> &mut Self::Output {
                    kernel_only::<T, ROWS, COLS>(Member::Swizzle { arity: $arity, mutable: true })
                }
            }
        )*
    };
}

impl_swizzle_indexers! {
    (MatrixIndex, MatrixIndex) => 2,
    (MatrixIndex, MatrixIndex, MatrixIndex) => 3,
    (MatrixIndex, MatrixIndex, MatrixIndex, MatrixIndex) => 4,
}
