use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{
    dim::Dims,
    traits::{Number, One, Zero},
    vec3, CrossOperand, Result, Vector,
};

/// A 2D point or direction in homogeneous coordinates.
pub type HVec2<T> = Homogeneous<T, 3>;
/// A 2D point or direction in homogeneous coordinates with [`f32`] elements.
pub type HVec2f = HVec2<f32>;
/// A 3D point or direction in homogeneous coordinates.
pub type HVec3<T> = Homogeneous<T, 4>;
/// A 3D point or direction in homogeneous coordinates with [`f32`] elements.
pub type HVec3f = HVec3<f32>;

/// A vector in homogeneous coordinates, stored in `D` slots.
///
/// The first `D - 1` slots hold the payload, the last one the homogeneous coordinate `w`. Points
/// built from their payload get `w = 1`, so an affine [`Transform`][crate::Transform] moves them.
/// Building from all `D` values keeps them as given, which is how directions (`w = 0`) or
/// already-projected coordinates are expressed.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// let p = HVec3f::new([1.0, 2.0, 3.0]);
/// assert_eq!(p.into_vector(), [1.0, 2.0, 3.0, 1.0]);
///
/// let d = HVec3f::from([1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(d.w(), 0.0);
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Homogeneous<T, const D: usize>(Vector<T, D>);

unsafe impl<T: bytemuck::Zeroable, const D: usize> bytemuck::Zeroable for Homogeneous<T, D> {}
unsafe impl<T: bytemuck::Pod, const D: usize> bytemuck::Pod for Homogeneous<T, D> {}

impl<T: Zero + One, const D: usize> Homogeneous<T, D> {
    fn point(payload: impl IntoIterator<Item = T>) -> Self {
        let mut payload = payload.into_iter();
        Self(Vector::from_fn(|i| {
            if i + 1 == D {
                T::ONE
            } else {
                payload.next().unwrap_or(T::ZERO)
            }
        }))
    }

    /// Creates a point from up to `D - 1` payload values.
    ///
    /// Missing payload slots are zero, the homogeneous coordinate is 1. Passing `D` or more values
    /// is a compile error; use the [`From`] impl to specify every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(HVec3::new([5, 6]).into_vector(), [5, 6, 0, 1]);
    /// ```
    ///
    /// ```compile_fail
    /// # use mml::*;
    /// let p = HVec2f::new([1.0, 2.0, 3.0]);
    /// ```
    pub fn new<const N: usize>(payload: [T; N]) -> Self {
        let () = Dims::<N, D>::BELOW;
        Self::point(payload)
    }

    /// Converts a plain vector of at most `D` elements.
    ///
    /// A vector with fewer than `D` elements is treated as a point payload and gets `w = 1`. A
    /// vector with exactly `D` elements already carries its homogeneous coordinate and is kept
    /// verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(HVec3::from_vector(vec2(1, 2)).into_vector(), [1, 2, 0, 1]);
    /// assert_eq!(HVec3::from_vector(vec4(1, 2, 3, 4)).into_vector(), [1, 2, 3, 4]);
    /// ```
    pub fn from_vector<const M: usize>(v: Vector<T, M>) -> Self {
        let () = Dims::<M, D>::FITS;
        if M == D {
            Self(v.resize())
        } else {
            Self::point(v.into_array())
        }
    }

    /// Converts a vector with at least `D` elements by keeping its first `D` values verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let h = HVec2::resize_from(vec4(1, 2, 3, 4));
    /// assert_eq!(h.into_vector(), [1, 2, 3]);
    /// ```
    pub fn resize_from<const M: usize>(v: Vector<T, M>) -> Self {
        let () = Dims::<D, M>::FITS;
        Self(v.resize())
    }

    /// Creates a homogeneous vector from a list of values.
    ///
    /// Fewer than `D` values are a point payload (`w = 1`), exactly `D` values are used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`][crate::Error::VectorIndexOutOfBounds] if more
    /// than `D` values are given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(HVec2::from_slice(&[7])?.into_vector(), [7, 0, 1]);
    /// assert_eq!(HVec2::from_slice(&[7, 8, 9])?.into_vector(), [7, 8, 9]);
    /// assert!(HVec2::from_slice(&[7, 8, 9, 10]).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_slice(elems: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if elems.len() < D {
            Ok(Self::point(elems.iter().copied()))
        } else {
            Vector::from_slice(elems).map(Self)
        }
    }
}

impl<T, const D: usize> Homogeneous<T, D> {
    /// Creates a homogeneous vector from all `D` slots, including the homogeneous coordinate.
    ///
    /// Same as the [`From`] impl.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let d = HVec3::from_array([1, 0, 0, 0]);
    /// assert_eq!(d.w(), 0);
    /// assert_eq!(d, HVec3::from([1, 0, 0, 0]));
    /// ```
    #[inline]
    pub fn from_array(elems: [T; D]) -> Self {
        Self(Vector::from(elems))
    }

    /// Returns the homogeneous coordinate (the last slot).
    pub fn w(&self) -> T
    where
        T: Copy,
    {
        let () = Dims::<1, D>::FITS;
        self.0[D - 1]
    }

    /// Overwrites the homogeneous coordinate.
    pub fn set_w(&mut self, w: T) {
        let () = Dims::<1, D>::FITS;
        self.0[D - 1] = w;
    }

    /// Returns the payload without the homogeneous coordinate.
    ///
    /// `N` must be `D - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let p = HVec3::new([1, 2, 3]);
    /// assert_eq!(p.truncate(), vec3(1, 2, 3));
    /// ```
    pub fn truncate<const N: usize>(self) -> Vector<T, N>
    where
        T: Copy,
    {
        let () = Dims::<N, D>::HOMOGENEOUS;
        Vector::from_fn(|i| self.0[i])
    }

    /// Returns a reference to the slot at `index`, including the homogeneous coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`][crate::Error::VectorIndexOutOfBounds] if
    /// `index >= D`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.0.at(index)
    }

    /// Returns a mutable reference to the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorIndexOutOfBounds`][crate::Error::VectorIndexOutOfBounds] if
    /// `index >= D`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0.at_mut(index)
    }

    /// Returns all `D` slots as a plain vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector<T, D> {
        &self.0
    }

    /// Converts `self` into a plain vector holding all `D` slots.
    #[inline]
    pub fn into_vector(self) -> Vector<T, D> {
        self.0
    }
}

impl<T> CrossOperand<T> for Homogeneous<T, 4> {
    fn into_direction(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0.into_array();
        vec3(x, y, z)
    }
}

impl<T> Homogeneous<T, 4> {
    /// Computes the cross product of the 3D part of `self` with `other`.
    ///
    /// The homogeneous coordinates of both operands are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let a = HVec3::new([1, 0, 0]);
    /// let b = HVec3::from([0, 1, 0, 0]);
    /// assert_eq!(a.cross(b), vec3(0, 0, 1));
    /// assert_eq!(a.cross(vec3(0, 0, 1)), vec3(0, -1, 0));
    /// ```
    pub fn cross(self, other: impl CrossOperand<T>) -> Vector<T, 3>
    where
        T: Number,
    {
        self.into_direction().cross(other)
    }
}

impl<T, const D: usize> From<[T; D]> for Homogeneous<T, D> {
    /// Uses all `D` values verbatim, including the homogeneous coordinate.
    #[inline]
    fn from(elems: [T; D]) -> Self {
        Self::from_array(elems)
    }
}

impl<T, const D: usize> From<Homogeneous<T, D>> for Vector<T, D> {
    #[inline]
    fn from(h: Homogeneous<T, D>) -> Self {
        h.0
    }
}

impl<T, const D: usize> Index<usize> for Homogeneous<T, D> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Homogeneous<T, D> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: fmt::Debug, const D: usize> fmt::Debug for Homogeneous<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: fmt::Display, const D: usize> fmt::Display for Homogeneous<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Error, Vector};

    use super::*;

    #[test]
    fn point_construction() {
        assert_eq!(HVec3::new([1, 2, 3]).into_vector(), [1, 2, 3, 1]);
        assert_eq!(HVec3::new([1]).into_vector(), [1, 0, 0, 1]);
        assert_eq!(HVec3::<i32>::new([]).into_vector(), [0, 0, 0, 1]);
        assert_eq!(HVec2f::new([0.5, 0.25]).w(), 1.0);
    }

    #[test]
    fn verbatim_construction() {
        let h = HVec3::from([1, 2, 3, 0]);
        assert_eq!(h.w(), 0);
        assert_eq!(HVec3::from_array([1, 2, 3, 0]), h);
        assert_eq!(HVec3::from_vector(vec4(1, 2, 3, 9)).w(), 9);
        assert_eq!(HVec3::from_vector(vec3(1, 2, 3)).w(), 1);

        let h = HVec2::resize_from(Vector::from([1, 2, 3, 4, 5]));
        assert_eq!(h.into_vector(), [1, 2, 3]);
        let h = HVec2::resize_from(vec3(4, 5, 6));
        assert_eq!(h.into_vector(), [4, 5, 6]);
    }

    #[test]
    fn slices() {
        assert_eq!(
            HVec3::<i32>::from_slice(&[]).map(|h| h.into_vector()),
            Ok(vec4(0, 0, 0, 1))
        );
        assert_eq!(
            HVec3::from_slice(&[1, 2, 3]).map(|h| h.into_vector()),
            Ok(vec4(1, 2, 3, 1))
        );
        assert_eq!(
            HVec3::from_slice(&[1, 2, 3, 4]).map(|h| h.into_vector()),
            Ok(vec4(1, 2, 3, 4))
        );
        assert_eq!(
            HVec3::from_slice(&[1, 2, 3, 4, 5]),
            Err(Error::VectorIndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn slot_access() {
        let mut h = HVec2::new([3, 4]);
        assert_eq!(h[2], 1);
        h[0] = 7;
        h.set_w(0);
        assert_eq!(h.into_vector(), [7, 4, 0]);
        assert_eq!(h.truncate(), vec2(7, 4));
        assert_eq!(
            h.at(3),
            Err(Error::VectorIndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn cross_ignores_w() {
        let a = HVec3::from([1.0, 2.0, 3.0, 7.0]);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), vec3(1.0, 2.0, 3.0).cross(b));
        assert_eq!(b.cross(a), -a.cross(b));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", HVec2::new([1, 2])), "(1, 2, 1)");
    }
}
