//! Affine transformations in homogeneous coordinates.

use std::{
    fmt,
    ops::{Index, Mul, MulAssign},
};

use crate::{
    dim::Dims,
    traits::{Number, One, Real, Zero},
    Error, Homogeneous, Matrix, Result, Vec2, Vector,
};

/// A 2D affine transformation.
pub type Transform2<T> = Transform<T, 3>;
/// A 3D affine transformation.
pub type Transform3<T> = Transform<T, 4>;
/// A 2D affine transformation with [`f32`] elements.
pub type Transform2f = Transform2<f32>;
/// A 2D affine transformation with [`f64`] elements.
pub type Transform2d = Transform2<f64>;
/// A 3D affine transformation with [`f32`] elements.
pub type Transform3f = Transform3<f32>;
/// A 3D affine transformation with [`f64`] elements.
pub type Transform3d = Transform3<f64>;

/// An affine transformation of `D - 1` dimensional space, stored as a `D`x`D` matrix.
///
/// The translation lives in the last column. Builder methods consume and return the transform,
/// so they can be chained:
///
/// ```
/// # use mml::*;
/// let t = Transform3f::identity()
///     .translate(vec3(1.0, 0.0, 0.0))
///     .scale(vec3(2.0, 2.0, 2.0));
/// assert_eq!(t.transform_point(vec3(1.0, 1.0, 1.0)), vec3(3.0, 2.0, 2.0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Transform<T, const D: usize>(Matrix<T, D, D>);

unsafe impl<T: bytemuck::Zeroable, const D: usize> bytemuck::Zeroable for Transform<T, D> {}
unsafe impl<T: bytemuck::Pod, const D: usize> bytemuck::Pod for Transform<T, D> {}

impl<T: Zero + One + Copy, const D: usize> Transform<T, D> {
    /// Returns the identity transformation.
    pub fn identity() -> Self {
        Self(Matrix::identity())
    }
}

impl<T, const D: usize> Transform<T, D> {
    /// Wraps a matrix without checking that it is affine.
    #[inline]
    pub fn from_matrix(matrix: Matrix<T, D, D>) -> Self {
        Self(matrix)
    }

    /// Borrows the underlying matrix.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<T, D, D> {
        &self.0
    }

    /// Unwraps the underlying matrix.
    #[inline]
    pub fn into_matrix(self) -> Matrix<T, D, D> {
        self.0
    }

    /// Returns a reference to the matrix element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if either index is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.0.at(row, col)
    }
}

impl<T: Number, const D: usize> Transform<T, D> {
    /// Creates a transformation that moves points by `direction`.
    pub fn from_translation<const N: usize>(direction: Vector<T, N>) -> Self {
        Self::identity().translate(direction)
    }

    /// Creates a transformation that scales each axis by the matching element of `factors`.
    pub fn from_scaling<const N: usize>(factors: Vector<T, N>) -> Self {
        Self::identity().scale(factors)
    }

    /// Applies a translation by `direction` before `self`.
    ///
    /// Every row gains its dot product with `direction` in the last column, so translations are
    /// expressed in the coordinate system established by the transformations so far.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let t = Transform2::identity().translate(vec2(3, 4));
    /// assert_eq!(t.transform_point(vec2(1, 1)), vec2(4, 5));
    ///
    /// let scaled = Transform2::from_scaling(vec2(2, 2)).translate(vec2(3, 4));
    /// assert_eq!(scaled.transform_point(vec2(0, 0)), vec2(6, 8));
    /// ```
    pub fn translate<const N: usize>(mut self, direction: Vector<T, N>) -> Self {
        let () = Dims::<N, D>::HOMOGENEOUS;
        for row in self.0.rows_mut() {
            let offset = row.dot(direction);
            row[N] = row[N] + offset;
        }
        self
    }

    /// Applies a scaling by `factors` before `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let t = Transform3::identity().scale(vec3(1, 2, 3));
    /// assert_eq!(t.transform_point(vec3(1, 1, 1)), vec3(1, 2, 3));
    /// ```
    pub fn scale<const N: usize>(mut self, factors: Vector<T, N>) -> Self {
        let () = Dims::<N, D>::HOMOGENEOUS;
        for row in self.0.rows_mut() {
            *row *= factors;
        }
        self
    }

    /// Transforms a point, which is moved by the translation part.
    ///
    /// No perspective division takes place, the homogeneous coordinate of the result is dropped.
    pub fn transform_point<const N: usize>(&self, point: Vector<T, N>) -> Vector<T, N> {
        let () = Dims::<N, D>::HOMOGENEOUS;
        (*self * Homogeneous::from_vector(point)).truncate()
    }

    /// Transforms a direction, which is not affected by the translation part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let t = translation(vec3(5.0, 5.0, 5.0));
    /// assert_eq!(t.transform_direction(vec3(0.0, 1.0, 0.0)), vec3(0.0, 1.0, 0.0));
    /// ```
    pub fn transform_direction<const N: usize>(&self, direction: Vector<T, N>) -> Vector<T, N> {
        let () = Dims::<N, D>::HOMOGENEOUS;
        Homogeneous::from((self.0 * direction.widen::<D>()).into_array()).truncate()
    }
}

impl<T: Real> Transform<T, 3> {
    /// Applies a counterclockwise rotation by `angle` radians after `self`.
    pub fn rotate(self, angle: T) -> Self {
        rotation_2d(angle) * self
    }
}

impl<T: Real> Transform<T, 4> {
    /// Applies a rotation by `angle` radians around `axis` after `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// # use approx::assert_relative_eq;
    /// let t = Transform3d::identity().rotate(std::f64::consts::FRAC_PI_2, Vec3d::Z);
    /// assert_relative_eq!(t.transform_point(Vec3d::X), Vec3d::Y);
    /// ```
    pub fn rotate(self, angle: T, axis: Vector<T, 3>) -> Self {
        rotation(angle, axis) * self
    }
}

impl<T: Zero + One + Copy, const D: usize> Default for Transform<T, D> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T, const D: usize> From<Matrix<T, D, D>> for Transform<T, D> {
    fn from(matrix: Matrix<T, D, D>) -> Self {
        Self(matrix)
    }
}

impl<T, const D: usize> From<Transform<T, D>> for Matrix<T, D, D> {
    fn from(transform: Transform<T, D>) -> Self {
        transform.0
    }
}

impl<T, const D: usize> Index<(usize, usize)> for Transform<T, D> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: (usize, usize)) -> &T {
        &self.0[index]
    }
}

/// Composition: `a * b` applies `b` first, then `a`.
impl<T: Number, const D: usize> Mul for Transform<T, D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<T: Number, const D: usize> MulAssign for Transform<T, D> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl<T: Number, const D: usize> Mul<Homogeneous<T, D>> for Transform<T, D> {
    type Output = Homogeneous<T, D>;

    fn mul(self, rhs: Homogeneous<T, D>) -> Self::Output {
        Homogeneous::from((self.0 * rhs.into_vector()).into_array())
    }
}

impl<T: Number, const D: usize> Mul<Vector<T, D>> for Transform<T, D> {
    type Output = Vector<T, D>;

    fn mul(self, rhs: Vector<T, D>) -> Self::Output {
        self.0 * rhs
    }
}

impl<T: fmt::Debug, const D: usize> fmt::Debug for Transform<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.0).finish()
    }
}

/// Vectors that can describe a translation or scaling.
///
/// The transform size follows from the vector size: 2-vectors build [`Transform2`], 3-vectors
/// build [`Transform3`].
pub trait AffineVector {
    /// The transformation acting on the vector's space.
    type Transform;

    /// Builds a transformation that moves points by `self`.
    fn into_translation(self) -> Self::Transform;

    /// Builds a transformation that scales each axis by the matching element of `self`.
    fn into_scaling(self) -> Self::Transform;
}

macro_rules! affine_vector {
    ($($n:literal => $d:literal),+) => {
        $(
            impl<T: Number> AffineVector for Vector<T, $n> {
                type Transform = Transform<T, $d>;

                fn into_translation(self) -> Self::Transform {
                    Transform::from_translation(self)
                }

                fn into_scaling(self) -> Self::Transform {
                    Transform::from_scaling(self)
                }
            }
        )+
    };
}

affine_vector!(2 => 3, 3 => 4);

/// Creates a transformation that moves points by `direction`.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// let t = translation(vec3(1, 0, 0)).translate(vec3(0, 1, 0));
/// assert_eq!(t.transform_point(Vec3::ZERO), vec3(1, 1, 0));
/// ```
pub fn translation<V: AffineVector>(direction: V) -> V::Transform {
    direction.into_translation()
}

/// Creates a transformation that scales each axis by the matching element of `factors`.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// let t = scaling(vec2(2, 3));
/// assert_eq!(t.transform_point(vec2(1, 1)), vec2(2, 3));
/// ```
pub fn scaling<V: AffineVector>(factors: V) -> V::Transform {
    factors.into_scaling()
}

/// Creates a counterclockwise rotation by `angle` radians around the X axis.
pub fn rotation_x<T: Real>(angle: T) -> Transform<T, 4> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, i) = (T::ZERO, T::ONE);
    Transform(Matrix::from_rows([
        [i, o, o, o],
        [o, c, -s, o],
        [o, s, c, o],
        [o, o, o, i],
    ]))
}

/// Creates a counterclockwise rotation by `angle` radians around the Y axis.
pub fn rotation_y<T: Real>(angle: T) -> Transform<T, 4> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, i) = (T::ZERO, T::ONE);
    Transform(Matrix::from_rows([
        [c, o, s, o],
        [o, i, o, o],
        [-s, o, c, o],
        [o, o, o, i],
    ]))
}

/// Creates a counterclockwise rotation by `angle` radians around the Z axis.
pub fn rotation_z<T: Real>(angle: T) -> Transform<T, 4> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, i) = (T::ZERO, T::ONE);
    Transform(Matrix::from_rows([
        [c, -s, o, o],
        [s, c, o, o],
        [o, o, i, o],
        [o, o, o, i],
    ]))
}

/// Creates a counterclockwise rotation by `angle` radians in the plane.
pub fn rotation_2d<T: Real>(angle: T) -> Transform<T, 3> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, i) = (T::ZERO, T::ONE);
    Transform(Matrix::from_rows([[c, -s, o], [s, c, o], [o, o, i]]))
}

/// Creates a rotation by `angle` radians around `axis`.
///
/// `axis` does not need to be normalized. A zero axis yields NaN elements.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// # use approx::assert_relative_eq;
/// let angle = 0.3f64;
/// assert_relative_eq!(rotation(angle, vec3(0.0, 0.0, 2.0)), rotation_z(angle));
/// ```
pub fn rotation<T: Real>(angle: T, mut axis: Vector<T, 3>) -> Transform<T, 4> {
    let (s, c) = (angle.sin(), angle.cos());
    let (o, i) = (T::ZERO, T::ONE);

    axis.normalize();
    let [a0, a1, a2] = axis.into_array();
    let [t0, t1, t2] = (axis * (i - c)).into_array();

    Transform(Matrix::from_rows([
        [c + t0 * a0, t1 * a0 - s * a2, t2 * a0 + s * a1, o],
        [t0 * a1 + s * a2, c + t1 * a1, t2 * a1 - s * a0, o],
        [t0 * a2 - s * a1, t1 * a2 + s * a0, c + t2 * a2, o],
        [o, o, o, i],
    ]))
}

/// The six clipping planes of a view volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum<T> {
    /// X coordinate of the left plane.
    pub left: T,
    /// X coordinate of the right plane.
    pub right: T,
    /// Y coordinate of the bottom plane.
    pub bottom: T,
    /// Y coordinate of the top plane.
    pub top: T,
    /// Distance to the near plane.
    pub near: T,
    /// Distance to the far plane.
    pub far: T,
}

impl<T: Real> Frustum<T> {
    /// Creates a frustum from its `[left, right]`, `[bottom, top]` and `[near, far]` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let f = Frustum::from_edges(vec3(vec2(-1.0, 1.0), vec2(-2.0, 2.0), vec2(0.1, 100.0)));
    /// assert_eq!(f.top, 2.0);
    /// assert_eq!(f.near, 0.1);
    /// ```
    pub fn from_edges(edges: Vector<Vec2<T>, 3>) -> Self {
        let [horizontal, vertical, depth] = edges.into_array();
        let [left, right] = horizontal.into_array();
        let [bottom, top] = vertical.into_array();
        let [near, far] = depth.into_array();
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    fn check(&self) -> Result<()> {
        let reason = if self.left == self.right {
            "left and right planes coincide"
        } else if self.bottom == self.top {
            "bottom and top planes coincide"
        } else if self.near == self.far {
            "near and far planes coincide"
        } else {
            return Ok(());
        };
        Err(Error::Transformation { reason })
    }

    /// Builds the perspective projection for this frustum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transformation`] if two opposite planes coincide.
    pub fn perspective(&self) -> Result<Transform<T, 4>> {
        self.check()?;
        let Self {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;
        let (o, two) = (T::ZERO, T::ONE + T::ONE);

        Ok(Transform(Matrix::from_rows([
            [two * n / (r - l), o, (r + l) / (r - l), o],
            [o, two * n / (t - b), (t + b) / (t - b), o],
            [o, o, -(f + n) / (f - n), -two * f * n / (f - n)],
            [o, o, -T::ONE, o],
        ])))
    }

    /// Builds the orthographic projection for this frustum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transformation`] if two opposite planes coincide.
    pub fn orthographic(&self) -> Result<Transform<T, 4>> {
        self.check()?;
        let Self {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;
        let (o, i, two) = (T::ZERO, T::ONE, T::ONE + T::ONE);

        Ok(Transform(Matrix::from_rows([
            [two / (r - l), o, o, -(r + l) / (r - l)],
            [o, two / (t - b), o, -(t + b) / (t - b)],
            [o, o, -two / (f - n), -(f + n) / (f - n)],
            [o, o, o, i],
        ])))
    }
}

/// Creates a perspective projection from the six planes of the view frustum.
///
/// # Errors
///
/// Returns [`Error::Transformation`] if `left == right`, `bottom == top` or `near == far`.
///
/// # Examples
///
/// ```
/// # use mml::*;
/// let p = perspective_projection(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)?;
/// assert_eq!(p[(3, 2)], -1.0);
/// assert!(perspective_projection(1.0, 1.0, -1.0, 1.0, 1.0, 10.0).is_err());
/// # Ok::<_, Error>(())
/// ```
pub fn perspective_projection<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<Transform<T, 4>> {
    Frustum {
        left,
        right,
        bottom,
        top,
        near,
        far,
    }
    .perspective()
}

/// Creates an orthographic projection from the six planes of the view volume.
///
/// # Errors
///
/// Returns [`Error::Transformation`] if `left == right`, `bottom == top` or `near == far`.
pub fn orthographic_projection<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<Transform<T, 4>> {
    Frustum {
        left,
        right,
        bottom,
        top,
        near,
        far,
    }
    .orthographic()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use crate::{vec2, vec3, vec4, HVec3, Mat4f, Vec2f, Vec3f};

    use super::*;

    #[test]
    fn chained_translation() {
        let t = translation(vec3(1.0f32, 0.0, 0.0)).translate(vec3(0.0, 1.0, 0.0));
        assert_eq!(t.transform_point(Vec3f::ZERO), vec3(1.0, 1.0, 0.0));
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], 1.0);
        assert_eq!(t.at(3, 3), Ok(&1.0));
        assert!(t.at(4, 0).is_err());
    }

    #[test]
    fn translate_is_order_sensitive() {
        let a = Transform2::identity().translate(vec2(1, 0)).scale(vec2(2, 2));
        let b = Transform2::identity().scale(vec2(2, 2)).translate(vec2(1, 0));
        assert_eq!(a.transform_point(vec2(0, 0)), vec2(1, 0));
        assert_eq!(b.transform_point(vec2(0, 0)), vec2(2, 0));
    }

    #[test]
    fn builders_match_composition() {
        let t = Transform3::from_translation(vec3(1, 2, 3));
        let s = Transform3::from_scaling(vec3(2, 2, 2));
        assert_eq!(t * s, t.scale(vec3(2, 2, 2)));
        assert_eq!(scaling(vec3(2, 2, 2)), s);

        let mut m = t;
        m *= s;
        assert_eq!(m, t * s);
    }

    #[test]
    fn points_and_directions() {
        let t = translation(vec2(10, 20));
        assert_eq!(t.transform_point(vec2(1, 1)), vec2(11, 21));
        assert_eq!(t.transform_direction(vec2(1, 1)), vec2(1, 1));
        assert_eq!(t * vec3(1, 1, 0), vec3(1, 1, 0));

        let t = translation(vec3(1, 1, 1));
        let moved = t * HVec3::new([1, 2, 3]);
        assert_eq!(moved.into_vector(), vec4(2, 3, 4, 1));
    }

    #[test]
    fn axis_rotations() {
        let p = Vec3f::X;
        assert_relative_eq!(rotation_z(FRAC_PI_2).transform_point(p), Vec3f::Y);
        assert_relative_eq!(rotation_y(FRAC_PI_2).transform_point(p), -Vec3f::Z);
        assert_relative_eq!(rotation_x(FRAC_PI_2).transform_point(Vec3f::Y), Vec3f::Z);

        let r = rotation_2d(FRAC_PI_2);
        assert_relative_eq!(r.transform_point(Vec2f::X), Vec2f::Y);
        assert_relative_eq!(Transform2f::identity().rotate(FRAC_PI_2), r);
    }

    #[test]
    fn axis_angle_rotation() {
        let angle = 0.7f32;
        assert_relative_eq!(rotation(angle, Vec3f::X), rotation_x(angle));
        assert_relative_eq!(rotation(angle, vec3(0.0, 3.0, 0.0)), rotation_y(angle));

        let r = rotation(angle, vec3(1.0, 1.0, 1.0));
        let axis = vec3(1.0, 1.0, 1.0);
        assert_relative_eq!(r.transform_direction(axis), axis, epsilon = 1e-6);
        assert_relative_eq!(r.as_matrix().resize::<3, 3>().determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_prepends() {
        let t = Transform3f::from_translation(vec3(1.0, 0.0, 0.0)).rotate(FRAC_PI_2, Vec3f::Z);
        assert_relative_eq!(t.transform_point(Vec3f::ZERO), Vec3f::Y);
    }

    #[test]
    fn projections() {
        let p = perspective_projection(-1.0f32, 1.0, -1.0, 1.0, 0.5, 50.0).unwrap();
        assert_eq!(p[(3, 2)], -1.0);
        assert_eq!(p[(3, 3)], 0.0);

        let o = orthographic_projection(-2.0f32, 2.0, -1.0, 1.0, 0.5, 50.0).unwrap();
        assert!(o[(2, 2)] < 0.0);
        assert_eq!(o[(0, 0)], 0.5);
        assert_eq!(o[(3, 3)], 1.0);
        assert_ne!(*o.as_matrix(), Mat4f::identity());
    }

    #[test]
    fn degenerate_projections() {
        assert_eq!(
            perspective_projection(1.0, 1.0, -1.0, 1.0, 0.5, 50.0),
            Err(Error::Transformation {
                reason: "left and right planes coincide"
            }),
        );
        assert!(orthographic_projection(-1.0, 1.0, 2.0, 2.0, 0.5, 50.0).is_err());
        assert!(orthographic_projection(-1.0, 1.0, -1.0, 1.0, 3.0, 3.0).is_err());
    }

    #[test]
    fn frustum_edges() {
        let edges = vec3(vec2(-1.0, 1.0), vec2(-0.5, 0.5), vec2(1.0, 10.0));
        let frustum = Frustum::from_edges(edges);
        assert_eq!(
            frustum,
            Frustum {
                left: -1.0,
                right: 1.0,
                bottom: -0.5,
                top: 0.5,
                near: 1.0,
                far: 10.0,
            }
        );
        assert_eq!(
            frustum.perspective(),
            perspective_projection(-1.0, 1.0, -0.5, 0.5, 1.0, 10.0)
        );
    }

    #[test]
    fn debug() {
        let t = Transform2::<i32>::identity();
        assert_eq!(
            format!("{t:?}"),
            "Transform([[1, 0, 0], [0, 1, 0], [0, 0, 1]])"
        );
    }
}
