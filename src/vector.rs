// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short vectors of one to four components.
//!
//! In kernel code a [`Vector`] is the composite produced by matrix row and swizzle
//! indexers. On the host it is only a data container: it can be built from its
//! components and read back through its axis labels.
//!
//! ```
//! # use kernel_math::vector::Vector3;
//! let vector = Vector3::new([1.0, 2.0, 3.0]);
//! assert_eq!(vector.x, 1.0);
//! assert_eq!(vector.z, 3.0);
//! ```

use core::{
    array, fmt,
    mem::ManuallyDrop,
    ptr,
    slice::Iter,
};

/// A vector of `N` components, laid out exactly like `[T; N]`.
#[repr(C)]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vector<T = f64, const N: usize = 3> {
    data: [T; N],
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        let mut debug_list = fmtr.debug_list();
        debug_list.entries(self.data.iter());
        debug_list.finish()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            data: array::from_fn(|_| Default::default()),
        }
    }
}

pub type Vector1<T = f64> = Vector<T, 1>;
pub type Vector2<T = f64> = Vector<T, 2>;
pub type Vector3<T = f64> = Vector<T, 3>;
pub type Vector4<T = f64> = Vector<T, 4>;

impl_coerce_to_fields! {
    Vector<{T, 1}> => X,
    Vector<{T, 2}> => Xy,
    Vector<{T, 3}> => Xyz,
    Vector<{T, 4}> => Xyzw,
}

impl<T, const N: usize> Vector<T, N> {
    pub const LENGTH: usize = N;

    /// Returns a new vector, initializing every element from the given `array`.
    ///
    /// # Example
    ///
    /// ```
    /// # use kernel_math::vector::Vector;
    /// let vector: Vector<i32, 4> = Vector::new([1, 2, 3, 4]);
    /// assert_eq!(vector.w, 4);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(array: [T; N]) -> Self {
        Self { data: array }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::new(array::from_fn(f))
    }

    #[must_use]
    #[inline]
    pub const fn get(&self, index: usize) -> Option<&T> {
        if index < N {
            Some(&self.data[index])
        } else {
            None
        }
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    #[must_use]
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        let array = unsafe { ptr::read(&self.data) };
        let _this = ManuallyDrop::new(self);
        array
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a new `Vector` with each element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kernel_math::vector::Vector;
    /// let vector = Vector::<_, 4>::splat(21);
    /// assert!(vector.iter().all(|elem| *elem == 21));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Vector { data: [value; N] }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.data
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self { data: value }
    }
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}

unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
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
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::{Vector, Vector2, Vector4};

    #[test]
    fn test_axis_labels() {
        let vector = Vector4::new([1, 2, 3, 4]);
        assert_eq!((vector.x, vector.y, vector.z, vector.w), (1, 2, 3, 4));

        let vector = Vector::new([7.5]);
        assert_eq!(vector.x, 7.5);
    }

    #[test]
    fn test_layout_matches_array() {
        assert_eq!(size_of::<Vector2<f64>>(), size_of::<[f64; 2]>());
        assert_eq!(align_of::<Vector4<f32>>(), align_of::<f32>());

        let vector = Vector::new([1.0f64, 2.0, 3.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&vector);
        assert_eq!(bytes.len(), 24);
        assert_eq!(bytemuck::cast::<_, [f64; 3]>(vector), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_get() {
        let vector = Vector::new([5, 6]);
        assert_eq!(vector.get(1), Some(&6));
        assert_eq!(vector.get(2), None);
    }

    #[test]
    fn test_data_access() {
        let vector = Vector::<i32, 4>::from_fn(|i| i as i32 * 10);
        assert_eq!(vector.as_slice(), &[0, 10, 20, 30]);
        assert_eq!(vector.as_array(), &[0, 10, 20, 30]);
        assert_eq!(vector.to_array(), [0, 10, 20, 30]);
        assert_eq!(<[i32; 4]>::from(vector), [0, 10, 20, 30]);
        assert_eq!(Vector::from([0, 10, 20, 30]), vector);
        assert_eq!(vector.iter().sum::<i32>(), 60);
        assert_eq!(Vector4::<i32>::LENGTH, 4);
    }
}
