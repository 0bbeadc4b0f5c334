// SPDX-License-Identifier: MIT OR Apache-2.0

//! Byte layout of matrices.
//!
//! Every matrix is stored row-major with no padding: the element at the 1-based
//! position `(row, col)` of a `ROWS x COLS` matrix of scalar `T` lives at byte offset
//! `((row - 1) * COLS + (col - 1)) * size_of::<T>()`. Kernel translators rely on this
//! ordering to pack the same value on the device, so it is part of the public ABI.

use crate::{const_assert_larger, const_assert_smaller_or_equal, kernel::MatrixIndex};
use core::{fmt, iter::FusedIterator, mem};

/// The largest number of rows or columns a matrix can have.
pub const MAX_DIMENSION: usize = 4;

/// The layout of a matrix shape over a scalar of a given size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
    scalar_size: usize,
}

impl Layout {
    /// Returns the layout of a `rows x cols` matrix of scalars `scalar_size` bytes wide.
    ///
    /// Returns `None` if either dimension is outside `1..=4`, or if `scalar_size` is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::layout::Layout;
    /// let layout = Layout::new(2, 3, 8).unwrap();
    /// assert_eq!(layout.size(), 48);
    ///
    /// assert!(Layout::new(5, 1, 8).is_none());
    /// assert!(Layout::new(2, 0, 8).is_none());
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(rows: usize, cols: usize, scalar_size: usize) -> Option<Self> {
        let rows_ok = rows > 0 && rows <= MAX_DIMENSION;
        let cols_ok = cols > 0 && cols <= MAX_DIMENSION;
        if !rows_ok || !cols_ok || scalar_size == 0 {
            return None;
        }

        Some(Self {
            rows,
            cols,
            scalar_size,
        })
    }

    /// Returns the layout of `Matrix<T, ROWS, COLS>`.
    ///
    /// # Panics
    ///
    /// Panics if the shape is unsupported. When used in a constant (as
    /// [`Matrix::LAYOUT`] does), this is a compile-time error instead.
    ///
    /// [`Matrix::LAYOUT`]: crate::matrix::Matrix::LAYOUT
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn of<T, const ROWS: usize, const COLS: usize>() -> Self {
        match Self::new(ROWS, COLS, mem::size_of::<T>()) {
            Some(layout) => layout,
            None => panic!("matrix dimensions must be within 1..=4 and the scalar must not be zero-sized"),
        }
    }

    #[must_use]
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    #[inline]
    pub const fn scalar_size(&self) -> usize {
        self.scalar_size
    }

    /// The number of scalar elements in the matrix.
    #[must_use]
    #[inline]
    pub const fn element_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The total size of the matrix in bytes.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.element_count() * self.scalar_size
    }

    /// Returns the byte offset of the element at the 1-based position `(row, col)`, or
    /// `None` if the position lies outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::layout::Layout;
    /// let layout = Layout::new(3, 2, 8).unwrap();
    /// assert_eq!(layout.offset(1, 1), Some(0));
    /// assert_eq!(layout.offset(2, 1), Some(16));
    /// assert_eq!(layout.offset(3, 2), Some(40));
    /// assert_eq!(layout.offset(0, 1), None);
    /// assert_eq!(layout.offset(3, 3), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return None;
        }

        Some(((row - 1) * self.cols + (col - 1)) * self.scalar_size)
    }

    /// Resolves a swizzle selector to its 0-based position in the row-major sequence of
    /// elements, or `None` if the selector names an element this shape does not have.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::{kernel::MatrixIndex, matrix::layout::Layout};
    /// let layout = Layout::new(2, 3, 8).unwrap();
    /// assert_eq!(layout.resolve(MatrixIndex::M11), Some(0));
    /// assert_eq!(layout.resolve(MatrixIndex::M21), Some(3));
    /// assert_eq!(layout.resolve(MatrixIndex::M23), Some(5));
    /// assert_eq!(layout.resolve(MatrixIndex::M31), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn resolve(&self, index: MatrixIndex) -> Option<usize> {
        let (row, col) = (index.row(), index.col());
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the byte offsets of the elements picked by a swizzle, in selector order.
    ///
    /// Selectors may repeat and appear in any order; the composite a swizzle yields has
    /// its components in exactly this order. Returns `None` if any selector falls
    /// outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::{kernel::MatrixIndex, matrix::layout::Layout};
    /// let layout = Layout::new(2, 2, 8).unwrap();
    /// let offsets = layout.swizzle_offsets([MatrixIndex::M22, MatrixIndex::M11, MatrixIndex::M22]);
    /// assert_eq!(offsets, Some([24, 0, 24]));
    /// ```
    #[must_use]
    #[inline]
    pub const fn swizzle_offsets<const N: usize>(
        &self,
        selectors: [MatrixIndex; N],
    ) -> Option<[usize; N]> {
        const_assert_larger!(N, 1);
        const_assert_smaller_or_equal!(N, 4);

        let mut offsets = [0; N];

        let mut i = 0;
        while i < N {
            match self.resolve(selectors[i]) {
                Some(position) => offsets[i] = position * self.scalar_size,
                None => return None,
            }
            i += 1;
        }

        Some(offsets)
    }

    /// Returns an iterator over every element of the matrix, in memory order.
    #[inline]
    pub fn fields(&self) -> Fields {
        Fields {
            layout: *self,
            next: 0,
        }
    }
}

/// One scalar element of a matrix layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    /// 1-based row.
    pub row: usize,
    /// 1-based column.
    pub col: usize,
    /// Byte offset from the start of the matrix.
    pub offset: usize,
}

impl fmt::Display for Field {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmtr, "m{}{}", self.row, self.col)
    }
}

/// Iterator over the [`Field`]s of a [`Layout`], created by [`Layout::fields()`].
#[derive(Clone, Debug)]
pub struct Fields {
    layout: Layout,
    next: usize,
}

impl Iterator for Fields {
    type Item = Field;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.layout.element_count() {
            return None;
        }

        let position = self.next;
        self.next += 1;

        Some(Field {
            row: position / self.layout.cols + 1,
            col: position % self.layout.cols + 1,
            offset: position * self.layout.scalar_size,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.element_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields {}

impl FusedIterator for Fields {}
