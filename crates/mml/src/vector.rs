use std::{array, fmt, slice};

use log::trace;

use crate::{
    dim::Dims,
    traits::{Number, Real, Sqrt, ToReal, Zero},
    Error, One, Result,
};

mod ops;
mod view;

macro_rules! aliases {
    ($($alias:ident = $n:literal x $elem:ty;)+) => {
        $(
            #[doc = concat!(
                "A ", stringify!($n), "-dimensional vector with [`", stringify!($elem), "`] elements."
            )]
            pub type $alias = Vector<$elem, $n>;
        )+
    };
}

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

aliases! {
    Vec2f = 2 x f32;
    Vec2d = 2 x f64;
    Vec2b = 2 x u8;
    Vec2u = 2 x u32;
    Vec2i = 2 x i32;
    Vec3f = 3 x f32;
    Vec3d = 3 x f64;
    Vec3b = 3 x u8;
    Vec3u = 3 x u32;
    Vec3i = 3 x i32;
    Vec4f = 4 x f32;
    Vec4d = 4 x f64;
    Vec4b = 4 x u8;
    Vec4u = 4 x u32;
    Vec4i = 4 x i32;
}

/// A fixed-size vector of `N` elements of type `T`.
///
/// The size is part of the type and never changes. Operations between vectors of different sizes
/// are resolved at compile time: operands that would need to shrink are rejected, and binary
/// operators produce a vector of the larger size.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions create vectors from all
///   of their elements.
/// - [`Vector::from_prefix`] takes up to `N` leading elements and zero-fills the rest.
///   [`Vector::from_slice`] does the same for a runtime-sized list and fails if it is too long.
/// - [`Vector::ZERO`] and the [`Default`] impl yield an all-zero vector.
/// - [`Vector::splat`] and [`Vector::from_fn`] fill every element from a value or closure.
/// - [`Vector::widen`] converts to a larger size (zero-filled), [`Vector::resize`] converts to any
///   size and discards trailing elements when shrinking.
///
/// # Element Access
///
/// - Vectors with 1 to 4 elements expose their elements as fields `x`, `y`, `z` and `w`.
/// - [`Vector::at`], [`Vector::at_mut`] and [`Vector::set`] return an
///   [`Error::VectorIndexOutOfBounds`] for indices `>= N`. The [`Index`] and [`IndexMut`] impls
///   panic with the same message.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` implements them.
///
/// ```
/// # use mml::*;
/// let mut v = Vec3i::from_prefix([1, 2]);
/// v.z = 7;
/// assert_eq!(v, [1, 2, 7]);
/// assert!(v.at(3).is_err());
/// ```
///
/// Fields that do not exist are rejected at compile time:
///
/// ```compile_fail
/// # use mml::*;
/// let v = vec2(1, 2);
/// let z = v.z;
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// A vector with every element set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + Copy, const N: usize> Zero for Vector<T, N> {
    const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with the index of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = Vector::from_fn(|i| i * 10);
    /// assert_eq!(v, vec3(0, 10, 20));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from its first `M` elements, setting the remaining ones to zero.
    ///
    /// Passing more than `N` elements is a compile error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = Vec4f::from_prefix([1.0, 2.0]);
    /// assert_eq!(v, [1.0, 2.0, 0.0, 0.0]);
    ///
    /// let empty = Vec2i::from_prefix([]);
    /// assert_eq!(empty, Vec2i::ZERO);
    /// ```
    ///
    /// ```compile_fail
    /// # use mml::*;
    /// let v = Vec2i::from_prefix([1, 2, 3]);
    /// ```
    pub fn from_prefix<const M: usize>(elems: [T; M]) -> Self
    where
        T: Zero,
    {
        let () = Dims::<M, N>::FITS;
        let mut elems = elems.into_iter();
        Self::from_fn(|_| elems.next().unwrap_or(T::ZERO))
    }

    /// Creates a vector from a list of up to `N` values, setting the remaining elements to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`] if `elems` has more than `N` values. The reported
    /// index is `N`, the first position that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(Vec3i::from_slice(&[4, 5])?, vec3(4, 5, 0));
    /// assert_eq!(
    ///     Vec2i::from_slice(&[1, 2, 3]),
    ///     Err(Error::VectorIndexOutOfBounds { index: 2, len: 2 }),
    /// );
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_slice(elems: &[T]) -> Result<Self>
    where
        T: Zero + Copy,
    {
        if elems.len() > N {
            return Err(Error::VectorIndexOutOfBounds { index: N, len: N });
        }
        Ok(Self::from_fn(|i| elems.get(i).copied().unwrap_or(T::ZERO)))
    }

    /// Returns a vector holding `f` applied to every element of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = vec3(1, 2, 3).zip(vec3('a', 'b', 'c'));
    /// assert_eq!(v.into_array(), [(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Returns an iterator over the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec3(1, 2, 3).iter().sum::<i32>(), 6);
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Converts each element to another numeric type.
    ///
    /// Only lossless conversions (those with a [`From`] impl) are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v: Vec3d = vec3(1u8, 2, 3).cast();
    /// assert_eq!(v, [1.0, 2.0, 3.0]);
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Converts `self` into a vector with `K >= N` elements, filling the new slots with zero.
    ///
    /// Widening to a smaller size is a compile error, use [`Vector::resize`] to discard elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec2(1, 2).widen::<4>(), vec4(1, 2, 0, 0));
    /// ```
    ///
    /// ```compile_fail
    /// # use mml::*;
    /// let v = vec4(1, 2, 3, 4).widen::<3>();
    /// ```
    pub fn widen<const K: usize>(self) -> Vector<T, K>
    where
        T: Zero,
    {
        let () = Dims::<N, K>::FITS;
        self.resize()
    }

    /// Converts `self` into a vector with `K` elements.
    ///
    /// The first `min(N, K)` elements are copied, trailing elements of `self` are discarded and any
    /// new slots are set to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<3>(), vec3(1, 2, 0));
    /// ```
    pub fn resize<const K: usize>(self) -> Vector<T, K>
    where
        T: Zero,
    {
        if K < N {
            trace!("resizing vector from {N} to {K} elements, dropping {}", N - K);
        }
        let mut elems = self.0.into_iter();
        Vector::from_fn(|_| elems.next().unwrap_or(T::ZERO))
    }

    /// Returns the number of elements, `N`.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.at(1), Ok(&6));
    /// assert_eq!(v.at(2), Err(Error::VectorIndexOutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.0
            .get(index)
            .ok_or(Error::VectorIndexOutOfBounds { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0
            .get_mut(index)
            .ok_or(Error::VectorIndexOutOfBounds { index, len: N })
    }

    /// Overwrites the element at `index`.
    ///
    /// Nothing is written if the index is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`] if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Borrows the elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as an array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the elements into an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns `true` if every element is zero.
    ///
    /// This says nothing about `N`: a vector of zero elements is trivially all-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert!(Vec3f::ZERO.is_zero());
    /// assert!(!vec2(0, 1).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool
    where
        T: Zero + PartialEq,
    {
        self.0.iter().all(|elem| *elem == T::ZERO)
    }

    /// Sets every element to zero.
    pub fn clear(&mut self)
    where
        T: Zero,
    {
        self.0.iter_mut().for_each(|elem| *elem = T::ZERO);
    }

    /// Returns the sum of the squared elements, the squared Euclidean length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec2(4, 3).length2(), 25);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem * elem)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// The length is computed in the floating-point type associated with `T`, so integer vectors
    /// get a fractional length instead of a truncated one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(vec2(3.0f64, 4.0).length(), 5.0);
    /// assert_eq!(vec2(1i32, 1).length(), 2.0f32.sqrt());
    /// ```
    pub fn length(&self) -> T::Real
    where
        T: ToReal,
    {
        self.0
            .iter()
            .fold(<T::Real as Zero>::ZERO, |acc, elem| {
                let elem = elem.to_real();
                acc + elem * elem
            })
            .sqrt()
    }

    /// Divides this vector by its length in place, turning it into a unit vector.
    ///
    /// A zero-length vector follows IEEE semantics and ends up with NaN elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mut v = vec3(0.0f32, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec3f::Z);
    /// ```
    pub fn normalize(&mut self)
    where
        T: Real,
    {
        let length = self.length2().sqrt();
        *self /= length;
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// Integer vectors are converted to floating point first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let v: Vec2f = vec2(0i32, -5).normalized();
    /// assert_eq!(v, [0.0, -1.0]);
    /// ```
    pub fn normalized(self) -> Vector<T::Real, N>
    where
        T: ToReal,
    {
        let mut real = self.map(ToReal::to_real);
        real.normalize();
        real
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// If the sizes differ, only the first `min(N, M)` elements of both vectors contribute.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a.dot(vec2(4, -2)), -2);
    /// ```
    pub fn dot<const M: usize>(self, other: Vector<T, M>) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

/// Operands accepted by the 3D cross product.
///
/// Homogeneous 4-vectors take part with their first three components.
pub trait CrossOperand<T> {
    /// Returns the 3D direction that enters the cross product.
    fn into_direction(self) -> Vector<T, 3>;
}

impl<T> CrossOperand<T> for Vector<T, 3> {
    #[inline]
    fn into_direction(self) -> Self {
        self
    }
}

impl<T> Vector<T, 3> {
    /// Returns the cross product `self x other`.
    ///
    /// The result is perpendicular to both operands. Swapping them inverts its direction.
    ///
    /// For unsigned element types the intermediate differences must not underflow.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// assert_eq!(x.cross(y), Vec3f::Z);
    /// assert_eq!(y.cross(x), -Vec3f::Z);
    ///
    /// let p = HVec3f::new([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(p), Vec3f::Z);
    /// ```
    pub fn cross(self, other: impl CrossOperand<T>) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.into_direction().0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
