// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size matrix and vector value types for authoring GPU kernels.
//!
//! The types in this crate are plain data on the host: they can be built, copied,
//! compared and uploaded byte-for-byte into device buffers. Everything else they
//! expose (row and swizzle indexers, arithmetic operators, conversions into vectors)
//! lives in the [`kernel`] module and is only meaningful inside kernel source that a
//! translator lowers to device code. Calling any of those members on the host fails
//! immediately with an [`InvalidExecutionContext`] diagnostic.
//!
//! [`InvalidExecutionContext`]: crate::kernel::guard::InvalidExecutionContext

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! impl_coerce_to_fields {
    (
        $( $type:ident<{ $generic:ident, $const:expr }>  => $fields_type:ident ),+ $(,)?
    ) => {
        $(
            impl<$generic> core::ops::Deref for $type<$generic, $const> {
                type Target = crate::fields:: $fields_type<$generic>;
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<$type<f32, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f32, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::size_of::<$type<f64, $const>>()
                            == core::mem::size_of::<crate::fields:: $fields_type<f64>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<$type<f64, $const>>()
                            == core::mem::align_of::<crate::fields:: $fields_type<f64>>()
                    );

                    unsafe { &*(self as *const _ as *const crate::fields:: $fields_type<$generic>) }
                }
            }

            impl<$generic> From<$type<$generic, $const>> for crate::fields:: $fields_type<$generic> {
                #[inline]
                fn from(value: $type<$generic, $const>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }

            impl<$generic> From<crate::fields:: $fields_type<$generic>> for $type<$generic, $const> {
                #[inline]
                fn from(value: crate::fields:: $fields_type<$generic>) -> Self {
                    let as_array: [$generic; $const] = value.into();
                    From::from(as_array)
                }
            }
        )+
    };
}

pub mod dim;
pub mod fields;
pub mod kernel;
pub mod matrix;
pub mod utils;
pub mod vector;
