//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    dim::{Dims, Promotion},
    traits::{ElementEq, Number},
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.at_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element-wise equality, also between vectors of different element types.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// assert_eq!(vec3(1, 2, 3), vec3(1.0, 2.0, 3.0));
/// assert_ne!(vec2(1u8, 2), vec2(1.0f32, 2.5));
/// ```
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: ElementEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.element_eq(b))
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Combines the first `M` elements of `self` with `rhs`, leaving the trailing ones untouched.
    fn apply_prefix<const M: usize>(&mut self, rhs: Vector<T, M>, op: fn(T, T) -> T) {
        let () = Dims::<M, N>::FITS;
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs = op(*lhs, rhs);
        }
    }

    fn promote_with<const M: usize, const K: usize>(
        self,
        rhs: Vector<T, M>,
        op: fn(T, T) -> T,
    ) -> Vector<T, K> {
        let () = Promotion::<N, M, K>::LARGER;
        let mut out = self.widen::<K>();
        out.apply_prefix(rhs, op);
        out
    }

    /// Adds two vectors of possibly different sizes.
    ///
    /// The result has `K = max(N, M)` elements: `self` is widened to `K` elements first, then `rhs`
    /// is added to its first `M` elements. Any other `K` is a compile error. The `+` operator does
    /// the same for sizes up to 4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let long = Vector::<i32, 6>::from_fn(|i| i as i32);
    /// let sum: Vector<i32, 6> = long.add_promoted(vec2(10, 10));
    /// assert_eq!(sum, [10, 11, 2, 3, 4, 5]);
    ///
    /// let sum: Vector<i32, 6> = vec2(10, 10).add_promoted(long);
    /// assert_eq!(sum, [10, 11, 2, 3, 4, 5]);
    /// ```
    ///
    /// ```compile_fail
    /// # use mml::*;
    /// let sum: Vector<i32, 5> = vec2(1, 2).add_promoted(vec3(1, 2, 3));
    /// ```
    pub fn add_promoted<const M: usize, const K: usize>(self, rhs: Vector<T, M>) -> Vector<T, K> {
        self.promote_with(rhs, <T as Add>::add)
    }

    /// Subtracts two vectors of possibly different sizes, see [`Vector::add_promoted`].
    pub fn sub_promoted<const M: usize, const K: usize>(self, rhs: Vector<T, M>) -> Vector<T, K> {
        self.promote_with(rhs, <T as Sub>::sub)
    }

    /// Multiplies two vectors of possibly different sizes element-wise, see
    /// [`Vector::add_promoted`].
    ///
    /// Trailing elements of a longer `self` are kept, trailing elements of a longer `rhs` meet
    /// the zeros `self` was widened with.
    pub fn mul_promoted<const M: usize, const K: usize>(self, rhs: Vector<T, M>) -> Vector<T, K> {
        self.promote_with(rhs, <T as Mul>::mul)
    }

    /// Divides two vectors of possibly different sizes element-wise, see
    /// [`Vector::add_promoted`].
    pub fn div_promoted<const M: usize, const K: usize>(self, rhs: Vector<T, M>) -> Vector<T, K> {
        self.promote_with(rhs, <T as Div>::div)
    }
}

macro_rules! elementwise {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)+) => {
        $(
            /// Element-wise operation over the first `M` elements.
            ///
            /// A right-hand side with more elements than `self` is a compile error.
            impl<T: Number, const N: usize, const M: usize> $OpAssign<Vector<T, M>> for Vector<T, N> {
                fn $op_assign(&mut self, rhs: Vector<T, M>) {
                    self.apply_prefix(rhs, <T as $Op>::$op);
                }
            }

            /// Element-wise operation between vectors of the same size.
            impl<T: Number, const N: usize> $Op for Vector<T, N> {
                type Output = Self;

                fn $op(mut self, rhs: Self) -> Self {
                    self.$op_assign(rhs);
                    self
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// Binary operators between differently sized vectors produce the larger size. Stable const
// generics cannot express `max(N, M)` in a generic impl, so the operators are spelled out for the
// sizes this library is used with. The `*_promoted` methods cover every other size.
macro_rules! promote {
    ($($small:literal < $large:literal),+) => {
        $(
            promote!(@pair $small, $large:
                Add::add / add_promoted,
                Sub::sub / sub_promoted,
                Mul::mul / mul_promoted,
                Div::div / div_promoted
            );
        )+
    };
    (@pair $small:literal, $large:literal: $($Op:ident::$op:ident / $promoted:ident),+) => {
        $(
            impl<T: Number> $Op<Vector<T, $small>> for Vector<T, $large> {
                type Output = Self;

                fn $op(self, rhs: Vector<T, $small>) -> Self {
                    self.$promoted(rhs)
                }
            }

            impl<T: Number> $Op<Vector<T, $large>> for Vector<T, $small> {
                type Output = Vector<T, $large>;

                fn $op(self, rhs: Vector<T, $large>) -> Self::Output {
                    self.$promoted(rhs)
                }
            }
        )+
    };
}

promote!(1 < 2, 1 < 3, 1 < 4, 2 < 3, 2 < 4, 3 < 4);

// NB: vector-scalar multiplication coexists with the vector-vector impls above because a scalar
// `T` can never unify with `Vector<T, M>`.

/// Vector-Scalar multiplication (scaling).
impl<T: Number, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs = *lhs * rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Number, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Vector-Scalar division.
impl<T: Number, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs = *lhs / rhs);
    }
}

/// Vector-Scalar division.
impl<T: Number, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }

            /// Divides the scalar by each element.
            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn div(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec1, vec2, vec3, vec4, Vec3d, Vec3i, Vector};

    #[test]
    fn same_size() {
        assert_eq!(vec3(1, 2, 3) + vec3(4, 5, 6), vec3(5, 7, 9));
        assert_eq!(vec3(4, 5, 6) - vec3(1, 2, 3), vec3(3, 3, 3));
        assert_eq!(vec2(2.0, 3.0) * vec2(4.0, 0.5), vec2(8.0, 1.5));
        assert_eq!(vec2(8, 9) / vec2(2, 3), vec2(4, 3));
        assert_eq!(-vec2(1, -2), vec2(-1, 2));
    }

    #[test]
    fn compound_over_prefix() {
        let mut v = vec4(1, 1, 1, 1);
        v += vec2(10, 20);
        assert_eq!(v, [11, 21, 1, 1]);
        v -= vec3(1, 1, 1);
        assert_eq!(v, [10, 20, 0, 1]);
        v *= vec2(2, 3);
        assert_eq!(v, [20, 60, 0, 1]);
        v /= vec1(4);
        assert_eq!(v, [5, 60, 0, 1]);
    }

    #[test]
    fn promotion() {
        assert_eq!(vec2(1, 2) + vec4(10, 20, 30, 40), vec4(11, 22, 30, 40));
        assert_eq!(vec4(10, 20, 30, 40) + vec2(1, 2), vec4(11, 22, 30, 40));
        assert_eq!(vec2(1, 2) - vec3(1, 1, 1), vec3(0, 1, -1));
        assert_eq!(vec3(2, 4, 6) / vec2(2, 2), vec3(1, 2, 6));
        assert_eq!(vec2(3, 4) * vec3(2, 2, 2), vec3(6, 8, 0));
    }

    #[test]
    fn promotion_beyond_four() {
        let long = Vector::<i32, 5>::from_fn(|i| i as i32 + 1);
        let sum: Vector<i32, 5> = long.add_promoted(vec3(10, 20, 30));
        assert_eq!(sum, [11, 22, 33, 4, 5]);
        let diff: Vector<i32, 5> = vec3(10, 20, 30).sub_promoted(long);
        assert_eq!(diff, [9, 18, 27, -4, -5]);
        let product: Vector<i32, 5> = vec2(2, 3).mul_promoted(long);
        assert_eq!(product, [2, 6, 0, 0, 0]);
        let quotient: Vector<i32, 5> = long.div_promoted(vec1(2));
        assert_eq!(quotient, [0, 2, 3, 4, 5]);
    }

    #[test]
    fn scalars() {
        let mut v = vec3(1, 2, 3);
        v *= 2;
        assert_eq!(v, [2, 4, 6]);
        v /= 2;
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v * 3, 3 * v);
        assert_eq!(12i32 / vec3(1, 2, 3), vec3(12, 6, 4));
        assert_eq!(vec3(2.0, 4.0, 8.0) / 2.0, vec3(1.0, 2.0, 4.0));
        assert_eq!(0.5f32 * vec2(2.0, 4.0), vec2(1.0, 2.0));
    }

    #[test]
    fn unsigned_elements() {
        let v = vec3(1u8, 2, 3) + vec3(4, 5, 6);
        assert_eq!(v, [5, 7, 9]);
        assert_eq!(v * 2, [10, 14, 18]);
    }

    #[test]
    fn equality() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_ne!(vec3(1, 2, 3), Vec3i::ZERO);
        assert!(vec2(1.0, 2.0) == [1.0, 2.0][..]);
    }

    #[test]
    fn mixed_element_types() {
        let ints: Vec3i = vec3(1, 2, 3);
        let doubles: Vec3d = vec3(1.0, 2.0, 3.0);
        assert_eq!(ints, doubles);
        assert_eq!(doubles, ints);
        assert_ne!(ints, vec3(1.0f64, 2.0, 3.5));
        assert_eq!(vec2(255u8, 0), vec2(255.0f32, 0.0));
        assert_eq!(vec2(-1i64, 7), vec2(-1i8, 7));
        assert_ne!(vec1(-1i32), vec1(u32::MAX));
    }
}
