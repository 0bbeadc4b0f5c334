// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod assertions {
    #[macro_export]
    macro_rules! const_assert_larger {
        ($x:expr, $y:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertLarger<{ $x }, { $y }>>::ASSERT;
        };
    }

    #[macro_export]
    macro_rules! const_assert_smaller_or_equal {
        ($x:expr, $y:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertSmallerOrEqual<{ $x }, { $y }>>::ASSERT;
        };
    }

    #[non_exhaustive]
    pub struct AssertLarger<const X: usize, const Y: usize>;

    impl<const X: usize, const Y: usize> AssertLarger<{ X }, { Y }> {
        pub const ASSERT: () = assert!(X > Y);
    }

    #[non_exhaustive]
    pub struct AssertSmallerOrEqual<const X: usize, const Y: usize>;

    impl<const X: usize, const Y: usize> AssertSmallerOrEqual<X, Y> {
        pub const ASSERT: () = assert!(X <= Y);
    }
}

pub mod num;
