// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matrices of one to four rows and columns.
//!
//! On the host a [`Matrix`] is inert data: it can be constructed, copied, compared, read
//! element by element and cast to bytes for upload, but its indexers, operators and
//! vector conversions (see [`kernel`]) are reserved for kernel code.
//!
//! [`kernel`]: crate::kernel

use crate::{
    const_assert_larger, const_assert_smaller_or_equal,
    dim::{Const, VectorDimension},
    vector::Vector,
};
use core::{
    mem::{self, ManuallyDrop},
    ptr, slice,
};

pub mod layout;

#[cfg(test)]
mod tests;

use self::layout::{Layout, MAX_DIMENSION};

/// A row-major matrix of `ROWS x COLS` scalars, without padding.
///
/// The element at the 1-based position `(row, col)` lives at byte offset
/// `((row - 1) * COLS + (col - 1)) * size_of::<T>()`; see [`Layout`].
///
/// Both dimensions must be within `1..=4`. Using any other shape is a compile-time
/// error as soon as the matrix is constructed:
///
/// ```compile_fail
/// # use kernel_math::matrix::Matrix;
/// let matrix: Matrix<f64, 5, 1> = Matrix::splat(0.0);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct Matrix<T = f64, const ROWS: usize = 4, const COLS: usize = 4> {
    data: [[T; COLS]; ROWS],
}

impl<T: Default, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| Default::default())
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// The byte layout of this shape.
    pub const LAYOUT: Layout = Layout::of::<T, ROWS, COLS>();

    /// The size of this shape in bytes, `ROWS * COLS * size_of::<T>()`.
    pub const SIZE: usize = Self::LAYOUT.size();

    /// Create a new `Matrix` from its rows, given as a nested array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 2> = Matrix::from_array([[1, 2], [3, 4]]);
    /// assert_eq!(matrix.get(1, 0), Some(&3));
    /// ```
    #[must_use]
    #[inline]
    pub const fn from_array(data: [[T; COLS]; ROWS]) -> Self {
        const_assert_larger!(ROWS, 0);
        const_assert_larger!(COLS, 0);
        const_assert_smaller_or_equal!(ROWS, MAX_DIMENSION);
        const_assert_smaller_or_equal!(COLS, MAX_DIMENSION);

        const {
            assert!(
                mem::size_of::<Self>() == Self::SIZE,
                "matrix storage must not contain padding"
            );
        }

        Self { data }
    }

    /// Create a new `Matrix` by calling `f` with the 0-based `(row, col)` of every
    /// element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix;
    /// let matrix: Matrix<usize, 2, 3> = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(matrix.to_array(), [[0, 1, 2], [10, 11, 12]]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        let mut row = 0;
        Self::from_array([(); ROWS].map(|()| {
            let mut col = 0;
            let elems = [(); COLS].map(|()| {
                let elem = f(row, col);
                col += 1;
                elem
            });
            row += 1;
            elems
        }))
    }

    /// Returns the byte offset of the element at the 1-based position `(row, col)`.
    ///
    /// # Panics
    ///
    /// This method will panic if `row` is not in `1..=ROWS` or `col` is not in `1..=COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix;
    /// assert_eq!(Matrix::<f64, 3, 2>::offset_of(3, 1), 32);
    /// assert_eq!(Matrix::<f32, 3, 2>::offset_of(3, 1), 16);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn offset_of(row: usize, col: usize) -> usize {
        match Self::LAYOUT.offset(row, col) {
            Some(offset) => offset,
            None => panic!("matrix position is out of bounds"),
        }
    }

    /// Returns a reference to the rows of the matrix.
    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [[T; COLS]; ROWS] {
        let array = unsafe { ptr::read(&self.data) };
        let _self = ManuallyDrop::new(self);
        array
    }

    /// Returns every element of the matrix as a flat slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix2x3;
    /// let matrix = Matrix2x3::new(1, 2, 3, 4, 5, 6);
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), ROWS * COLS) }
    }

    /// Access the start of the `Matrix`'s element data as a pointer.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr().cast()
    }

    /// Attempt to get a reference to the element at the 0-based position `(row, col)`.
    ///
    /// This method returns `None` if either of the given indices are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix3x2;
    /// let matrix = Matrix3x2::new(5.0, 6.0, 1.0, 2.0, 7.0, 9.0);
    ///
    /// assert_eq!(matrix.get(2, 1), Some(&9.0));
    /// assert_eq!(matrix.get(1, 2), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < ROWS && col < COLS {
            Some(&self.data[row][col])
        } else {
            None
        }
    }

    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::matrix::Matrix;
    /// let matrix: Matrix<_, 4, 4> = Matrix::splat(21);
    /// assert!(matrix.elems().all(|elem| *elem == 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::from_array([[value; COLS]; ROWS])
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS>
where
    Const<ROWS>: VectorDimension,
    Const<COLS>: VectorDimension,
{
    /// Creates a new matrix from its rows.
    ///
    /// Only matrices with at least two rows and two columns have this constructor; a
    /// single row or column is built from its scalars, or from one vector with
    /// [`from_row_vector()`] or [`from_column_vector()`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::{matrix::Matrix3x2, vector::Vector2};
    /// let matrix = Matrix3x2::from_rows([
    ///     Vector2::new([1.0, 2.0]),
    ///     Vector2::new([3.0, 4.0]),
    ///     Vector2::new([5.0, 6.0]),
    /// ]);
    ///
    /// assert_eq!(matrix, Matrix3x2::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    /// ```
    ///
    /// ```compile_fail
    /// # use kernel_math::{matrix::Matrix3x1, vector::Vector1};
    /// let matrix = Matrix3x1::from_rows([Vector1::new([1.0]); 3]);
    /// ```
    ///
    /// [`from_row_vector()`]: Matrix::from_row_vector
    /// [`from_column_vector()`]: Matrix::from_column_vector
    #[must_use]
    #[inline]
    pub fn from_rows(rows: [Vector<T, COLS>; ROWS]) -> Self {
        Self::from_array(rows.map(Vector::to_array))
    }
}

impl<T, const COLS: usize> Matrix<T, 1, COLS>
where
    Const<COLS>: VectorDimension,
{
    /// Creates a new single-row matrix from the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::{matrix::Matrix1x3, vector::Vector3};
    /// let matrix = Matrix1x3::from_row_vector(Vector3::new([1.0, 2.0, 3.0]));
    /// assert_eq!(matrix.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    #[inline]
    pub const fn from_row_vector(vector: Vector<T, COLS>) -> Self {
        Self::from_array([vector.to_array()])
    }
}

impl<T, const ROWS: usize> Matrix<T, ROWS, 1>
where
    Const<ROWS>: VectorDimension,
{
    /// Creates a new single-column matrix from the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::{matrix::Matrix2x1, vector::Vector2};
    /// let matrix = Matrix2x1::from_column_vector(Vector2::new([1.0, 2.0]));
    /// assert_eq!(matrix.to_array(), [[1.0], [2.0]]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_column_vector(vector: Vector<T, ROWS>) -> Self {
        Self::from_array(vector.to_array().map(|elem| [elem]))
    }
}

macro_rules! impl_scalar_constructors {
    (
        $(
            $alias:ident ($rows:literal, $cols:literal) [ $( [ $( $elem:ident ),+ ] ),+ ]
        )*
    ) => {
        $(
            #[doc = concat!("A ", stringify!($rows), "x", stringify!($cols), " matrix.")]
            pub type $alias<T = f64> = Matrix<T, $rows, $cols>;

            impl<T> Matrix<T, $rows, $cols> {
                /// Creates a new matrix from its elements, given in row-major order.
                #[allow(clippy::too_many_arguments)]
                #[must_use]
                #[inline]
                pub const fn new( $( $( $elem: T ),+ ),+ ) -> Self {
                    Self::from_array([ $( [ $( $elem ),+ ] ),+ ])
                }
            }
        )*
    };
}

impl_scalar_constructors! {
    Matrix1x1 (1, 1) [[m11]]
    Matrix1x2 (1, 2) [[m11, m12]]
    Matrix1x3 (1, 3) [[m11, m12, m13]]
    Matrix1x4 (1, 4) [[m11, m12, m13, m14]]

    Matrix2x1 (2, 1) [[m11], [m21]]
    Matrix2x2 (2, 2) [[m11, m12], [m21, m22]]
    Matrix2x3 (2, 3) [[m11, m12, m13], [m21, m22, m23]]
    Matrix2x4 (2, 4) [[m11, m12, m13, m14], [m21, m22, m23, m24]]

    Matrix3x1 (3, 1) [[m11], [m21], [m31]]
    Matrix3x2 (3, 2) [[m11, m12], [m21, m22], [m31, m32]]
    Matrix3x3 (3, 3) [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]]
    Matrix3x4 (3, 4) [[m11, m12, m13, m14], [m21, m22, m23, m24], [m31, m32, m33, m34]]

    Matrix4x1 (4, 1) [[m11], [m21], [m31], [m41]]
    Matrix4x2 (4, 2) [[m11, m12], [m21, m22], [m31, m32], [m41, m42]]
    Matrix4x3 (4, 3) [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33], [m41, m42, m43]]
    Matrix4x4 (4, 4) [
        [m11, m12, m13, m14],
        [m21, m22, m23, m24],
        [m31, m32, m33, m34],
        [m41, m42, m43, m44]
    ]
}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::from_array(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.data
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }
}

unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
}

unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}
