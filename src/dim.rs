// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-level dimensions.
//!
//! Matrix and vector shapes are const generics, but stable Rust cannot branch on the
//! value of a const parameter inside a signature. These marker traits lift the
//! supported sizes into the trait system, so that an impl can say "for every column
//! count from one to four" or "only for shapes that have a vector counterpart", and so
//! that the type of a matrix row can depend on its column count.

use crate::vector::Vector;

mod sealed {
    pub trait Sealed {}
}

/// A dimension as a type, used as `Const<N>: Dimension` in `where` clauses.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Const<const N: usize>;

/// A dimension supported by matrices and vectors in this crate, i.e. `1..=4`.
pub trait Dimension: sealed::Sealed {
    const LEN: usize;

    /// The composite produced by indexing one row of a matrix with `LEN` columns.
    ///
    /// A single column has no vector counterpart, so its row is the bare scalar.
    type Row<T>;
}

/// A dimension which has a [`Vector`] counterpart, i.e. `2..=4`.
///
/// Matrices with exactly one row or column of such a length are isomorphic to a vector
/// of the same length.
pub trait VectorDimension: Dimension {}

impl sealed::Sealed for Const<1> {}
impl Dimension for Const<1> {
    const LEN: usize = 1;
    type Row<T> = T;
}

macro_rules! impl_vector_dimensions {
    ( $( $n:literal ),* $(,)? ) => {
        $(
            impl sealed::Sealed for Const<$n> {}

            impl Dimension for Const<$n> {
                const LEN: usize = $n;
                type Row<T> = Vector<T, $n>;
            }

            impl VectorDimension for Const<$n> {}
        )*
    };
}

impl_vector_dimensions!(2, 3, 4);

/// The row type of a matrix with `COLS` columns.
pub type RowOf<T, const COLS: usize> = <Const<COLS> as Dimension>::Row<T>;

#[cfg(test)]
mod tests {
    use super::{Const, Dimension, RowOf};
    use crate::vector::Vector;
    use core::any::TypeId;

    #[test]
    fn test_row_types() {
        assert_eq!(TypeId::of::<RowOf<f64, 1>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<RowOf<f64, 2>>(), TypeId::of::<Vector<f64, 2>>());
        assert_eq!(TypeId::of::<RowOf<f32, 3>>(), TypeId::of::<Vector<f32, 3>>());
        assert_eq!(TypeId::of::<RowOf<i32, 4>>(), TypeId::of::<Vector<i32, 4>>());
    }

    #[test]
    fn test_dimension_len() {
        assert_eq!(<Const<1> as Dimension>::LEN, 1);
        assert_eq!(<Const<2> as Dimension>::LEN, 2);
        assert_eq!(<Const<3> as Dimension>::LEN, 3);
        assert_eq!(<Const<4> as Dimension>::LEN, 4);
    }
}
