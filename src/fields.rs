// SPDX-License-Identifier: MIT OR Apache-2.0

//! Axis-labelled views of short vectors.
//!
//! A [`Vector`] of one to four components dereferences to one of these structs, which
//! is how kernel and host code alike name its components (`v.x`, `v.y`, `v.z`, `v.w`).
//!
//! [`Vector`]: crate::vector::Vector

macro_rules! decl_fields {
    (
        $(
            $ty_name:ident <{ $dim:expr }> {
                $( $field:ident ),+
                $(,)?
            }
        )*
    ) => {
        $(
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $ty_name <T> {
                $( pub $field : T ),+
            }

            impl<T> $ty_name<T> {
                #[must_use]
                #[inline]
                pub const fn new( $( $field : T ),+ ) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            impl<T> From<$ty_name<T>> for [T; $dim] {
                #[inline]
                fn from($ty_name { $( $field ),+}: $ty_name<T>) -> Self {
                    [ $($field),+ ]
                }
            }

            impl<T> From<[T; $dim]> for $ty_name<T> {
                #[inline]
                fn from([ $( $field ),+ ]: [T ; $dim]) -> Self {
                    Self {
                        $($field),+
                    }
                }
            }

            unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $ty_name<T> {}

            unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $ty_name<T> {}
        )*
    };
}

decl_fields! {
    X <{ 1 }> { x }
    Xy <{ 2 }> { x, y }
    Xyz <{ 3 }> { x, y, z }
    Xyzw <{ 4 }> { x, y, z, w, }
}
