//! Approximate equality through the [`approx`] traits.
//!
//! Compound types compare equal if all of their elements do.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Homogeneous, Matrix, Transform, Vector};

/// Compares the arrays returned by `$elems` element by element.
macro_rules! elementwise {
    ($([$($generics:tt)*] $ty:ty => $elems:ident;)+) => {
        $(
            impl<T: AbsDiffEq, $($generics)*> AbsDiffEq for $ty
            where
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.$elems()
                        .iter()
                        .zip(other.$elems())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<T: RelativeEq, $($generics)*> RelativeEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.$elems()
                        .iter()
                        .zip(other.$elems())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<T: UlpsEq, $($generics)*> UlpsEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.$elems()
                        .iter()
                        .zip(other.$elems())
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}

elementwise! {
    [const N: usize] Vector<T, N> => as_array;
    [const R: usize, const C: usize] Matrix<T, R, C> => rows;
}

/// Forwards the comparisons of a wrapper type to the value returned by `$inner`.
macro_rules! forward {
    ($([$($generics:tt)*] $ty:ty => $inner:ident;)+) => {
        $(
            impl<T: AbsDiffEq, $($generics)*> AbsDiffEq for $ty
            where
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.$inner().abs_diff_eq(other.$inner(), epsilon)
                }
            }

            impl<T: RelativeEq, $($generics)*> RelativeEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.$inner().relative_eq(other.$inner(), epsilon, max_relative)
                }
            }

            impl<T: UlpsEq, $($generics)*> UlpsEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.$inner().ulps_eq(other.$inner(), epsilon, max_ulps)
                }
            }
        )+
    };
}

forward! {
    [const D: usize] Homogeneous<T, D> => as_vector;
    [const D: usize] Transform<T, D> => as_matrix;
}
