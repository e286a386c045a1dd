use std::fmt;

use log::trace;

use crate::{
    dim::Dims,
    traits::{Number, One, Zero},
    Error, Result, Vector,
};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

macro_rules! aliases {
    ($($alias:ident = $n:literal x $elem:ty;)+) => {
        $(
            #[doc = concat!(
                "A ", stringify!($n), "x", stringify!($n), " matrix with [`", stringify!($elem),
                "`] elements."
            )]
            pub type $alias = Matrix<$elem, $n, $n>;
        )+
    };
}

aliases! {
    Mat2f = 2 x f32;
    Mat2d = 2 x f64;
    Mat2b = 2 x u8;
    Mat2u = 2 x u32;
    Mat2i = 2 x i32;
    Mat3f = 3 x f32;
    Mat3d = 3 x f64;
    Mat3b = 3 x u8;
    Mat3u = 3 x u32;
    Mat3i = 3 x i32;
    Mat4f = 4 x f32;
    Mat4d = 4 x f64;
    Mat4b = 4 x u8;
    Mat4u = 4 x u32;
    Mat4i = 4 x i32;
}

/// Initial contents of a [`Matrix`] created with [`Matrix::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatrixFill {
    /// Every element is zero.
    Zero,
    /// 1 on the main diagonal, 0 elsewhere. For non-square matrices only the first `min(R, C)`
    /// diagonal elements are set.
    #[default]
    Identity,
}

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as `R` row [`Vector`]s, and element-wise arithmetic is carried out row by
/// row with the vector operators.
///
/// # Construction
///
/// - [`Matrix::new`] creates an identity or zero matrix. [`Default`] yields the identity.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take every row or column as an array or
///   [`Vector`]. [`Matrix::try_from_rows`], [`Matrix::try_from_columns`] and
///   [`Matrix::from_slice`] accept runtime-sized input that may be shorter than the matrix.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::widen`] and [`Matrix::resize`] convert between shapes.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples and for a row index
/// alone, which yields the row vector. Out-of-bounds indexing panics; [`Matrix::at`] and
/// [`Matrix::row`] return an [`Error::MatrixIndexOutOfBounds`] instead.
///
/// ```
/// # use mml::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[1], vec2(2, 3));
/// assert!(mat.at(2, 0).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(Vector<Vector<T, C>, R>);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self(Vector::<Vector<T, C>, R>::ZERO);

    /// Creates a matrix from a flat list of up to `R * C` values in row-major order.
    ///
    /// Elements not covered by `elems` are zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if more than `R * C` values are given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Mat2x3::from_slice(&[1, 2, 3, 4])?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 0, 0],
    /// ]));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_slice(elems: &[T]) -> Result<Self> {
        if elems.len() > R * C {
            return Err(Self::out_of_bounds(R, 0));
        }
        Ok(Self::from_fn(|row, col| {
            elems.get(row * C + col).copied().unwrap_or(T::ZERO)
        }))
    }

    /// Creates a matrix from a list of up to `R` rows of up to `C` values each.
    ///
    /// Rows can be given as slices, arrays or [`Vector`]s. Elements not covered by the input are
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if there are more than `R` rows, or if any row
    /// has more than `C` values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Mat3i::try_from_rows(&[&[1, 2][..], &[3]])?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 0, 0],
    ///     [0, 0, 0],
    /// ]));
    ///
    /// let err = Mat2i::try_from_rows(&[[1, 2, 3]]).unwrap_err();
    /// assert_eq!(err, Error::MatrixIndexOutOfBounds { row: 0, col: 2, rows: 2, cols: 2 });
    /// # Ok::<_, Error>(())
    /// ```
    pub fn try_from_rows<U: AsRef<[T]>>(rows: &[U]) -> Result<Self> {
        if rows.len() > R {
            return Err(Self::out_of_bounds(R, 0));
        }
        let mut out = Self::ZERO;
        for (index, (row, elems)) in out.0.as_mut_array().iter_mut().zip(rows).enumerate() {
            let elems = elems.as_ref();
            if elems.len() > C {
                return Err(Self::out_of_bounds(index, C));
            }
            *row = Vector::from_slice(elems)?;
        }
        Ok(out)
    }

    /// Creates a matrix from a list of up to `C` columns of up to `R` values each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if there are more than `C` columns, or if any
    /// column has more than `R` values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Mat2i::try_from_columns(&[vec2(1, 2)])?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0],
    ///     [2, 0],
    /// ]));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn try_from_columns<U: AsRef<[T]>>(columns: &[U]) -> Result<Self> {
        Matrix::<T, C, R>::try_from_rows(columns)
            .map(Matrix::transpose)
            .map_err(|e| match e {
                Error::MatrixIndexOutOfBounds { row, col, .. } => Self::out_of_bounds(col, row),
                e => e,
            })
    }

    /// Converts `self` into a larger matrix, filling new elements with zero.
    ///
    /// Shrinking either dimension is a compile error, use [`Matrix::resize`] to discard elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Mat2i::identity().widen::<2, 3>();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use mml::*;
    /// let mat = Mat3i::identity().widen::<2, 3>();
    /// ```
    pub fn widen<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2> {
        let () = Dims::<R, R2>::FITS;
        let () = Dims::<C, C2>::FITS;
        self.resize()
    }

    /// Converts `self` into a matrix of any shape.
    ///
    /// The overlapping top-left submatrix is copied, everything else is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.resize::<1, 2>(), Matrix::from_rows([[1, 2]]));
    /// assert_eq!(mat.resize::<3, 1>(), Matrix::from_rows([[1], [4], [0]]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2> {
        if R2 < R || C2 < C {
            trace!("resizing {R}x{C} matrix to {R2}x{C2}, dropping elements outside the overlap");
        }
        Matrix::from_fn(|row, col| self.get(row, col).copied().unwrap_or(T::ZERO))
    }

    /// Sets every element to zero.
    pub fn clear(&mut self) {
        *self = Self::ZERO;
    }

    /// Returns `true` if every element is zero.
    pub fn is_zero(&self) -> bool
    where
        T: PartialEq,
    {
        self.0.as_array().iter().all(Vector::is_zero)
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix with the given initial contents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// assert_eq!(Mat2x3::<i32>::new(MatrixFill::Identity), Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 1, 0],
    /// ]));
    /// assert_eq!(Mat2x3::<i32>::new(MatrixFill::Zero), Mat2x3::<i32>::ZERO);
    /// ```
    pub fn new(fill: MatrixFill) -> Self {
        match fill {
            MatrixFill::Zero => Self::ZERO,
            MatrixFill::Identity => Self::identity(),
        }
    }

    /// Returns the identity matrix: 1 on the main diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with a square identity matrix returns the vector unchanged.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    fn out_of_bounds(row: usize, col: usize) -> Error {
        Error::MatrixIndexOutOfBounds {
            row,
            col,
            rows: R,
            cols: C,
        }
    }

    /// Builds a matrix from `R` rows, given as arrays or [`Vector`]s.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(Vector::from(rows.map(Into::into)))
    }

    /// Builds a matrix from `C` columns, given as arrays or [`Vector`]s.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Builds a matrix by calling `cb` with the row and column of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(Vector::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Returns a matrix holding `f` applied to every element of `self`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts each element to another numeric type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat: Mat2d = Mat2i::identity().cast();
    /// assert_eq!(mat, Mat2d::identity());
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Returns the transposed matrix, turning rows into columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns the element at `(row, col)`, or [`None`] outside the `R`x`C` shape.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0
            .as_array()
            .get(row)
            .and_then(|r| r.as_array().get(col))
    }

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if `row >= R` or `col >= C`.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.get(row, col).ok_or(Self::out_of_bounds(row, col))
    }

    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if `row >= R` or `col >= C`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.0
            .as_mut_array()
            .get_mut(row)
            .and_then(|r| r.as_mut_array().get_mut(col))
            .ok_or(Self::out_of_bounds(row, col))
    }

    /// Returns a reference to the row vector at index `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if `row >= R`.
    pub fn row(&self, row: usize) -> Result<&Vector<T, C>> {
        self.0
            .as_array()
            .get(row)
            .ok_or(Self::out_of_bounds(row, 0))
    }

    /// Returns a mutable reference to the row vector at index `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if `row >= R`.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut Vector<T, C>> {
        self.0
            .as_mut_array()
            .get_mut(row)
            .ok_or(Self::out_of_bounds(row, 0))
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixIndexOutOfBounds`] if `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.column(1)?, vec2(2, 4));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn column(&self, col: usize) -> Result<Vector<T, R>>
    where
        T: Copy,
    {
        if col >= C {
            return Err(Self::out_of_bounds(0, col));
        }
        Ok(Vector::from_fn(|row| self[(row, col)]))
    }

    /// Returns the rows of this matrix.
    #[inline]
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        self.0.as_array()
    }

    /// Returns mutable references to the rows of this matrix.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Vector<T, C>; R] {
        self.0.as_mut_array()
    }

    /// Converts this matrix into its row vectors.
    #[inline]
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0.into_array()
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        self.0
            .as_mut_array()
            .iter_mut()
            .for_each(|row| *row = Vector::splat(value));
    }

    fn into_arrays(self) -> [[T; C]; R] {
        self.0.into_array().map(Vector::into_array)
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the main diagonal as a vector.
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Builds a square matrix with `diag` on its main diagonal.
    ///
    /// All other elements are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

// Determinant limited to 3x3 for now.
impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Returns the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.into_arrays();
        a * d - b * c
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the determinant.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.into_arrays();
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.as_array().iter().map(Vector::as_array))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::vec3;

    use super::*;

    #[test]
    fn fill_modes() {
        assert_eq!(Mat3f::default(), Mat3f::identity());
        assert_eq!(Mat3f::new(MatrixFill::default()), Mat3f::identity());
        assert!(Mat3f::new(MatrixFill::Zero).is_zero());
        assert_eq!(
            Mat3x2::<i32>::new(MatrixFill::Identity),
            Matrix::from_rows([[1, 0], [0, 1], [0, 0]])
        );
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3::from_rows([vec3(1, 2, 3), vec3(4, 5, 6)]),
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
        );
    }

    #[test]
    fn from_lists() {
        assert_eq!(Mat2i::from_slice(&[]), Ok(Mat2i::ZERO));
        assert_eq!(
            Mat2i::from_slice(&[1, 2, 3, 4]),
            Ok(Matrix::from_rows([[1, 2], [3, 4]]))
        );
        assert_eq!(
            Mat2i::from_slice(&[1, 2, 3, 4, 5]),
            Err(Error::MatrixIndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );

        let rows: [&[i32]; 3] = [&[1], &[2], &[3]];
        assert_eq!(
            Mat2i::try_from_rows(&rows),
            Err(Error::MatrixIndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(
            Mat2x3::try_from_columns(&[[1, 2], [3, 4]]),
            Ok(Matrix::from_rows([[1, 3, 0], [2, 4, 0]]))
        );
        assert_eq!(
            Mat2x3::<i32>::try_from_columns(&[&[1, 2, 3][..]]),
            Err(Error::MatrixIndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn access() {
        let mut mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.at(1, 2), Ok(&6));
        assert_eq!(
            mat.at(0, 3),
            Err(Error::MatrixIndexOutOfBounds {
                row: 0,
                col: 3,
                rows: 2,
                cols: 3
            })
        );
        assert!(mat.at(2, 0).is_err());
        assert!(mat.row(2).is_err());
        assert!(mat.column(3).is_err());

        *mat.at_mut(0, 0).unwrap() = 10;
        mat.row_mut(1).unwrap().z = 60;
        assert_eq!(mat, Matrix::from_rows([[10, 2, 3], [4, 5, 60]]));
        assert_eq!(mat.row(0), Ok(&vec3(10, 2, 3)));
    }

    #[test]
    #[should_panic(expected = "matrix index (3, 0) out of bounds for 3x3 matrix")]
    fn index_out_of_bounds_panics() {
        let mat = Mat3f::identity();
        let _elem = mat[(3, 0)];
    }

    #[test]
    fn fill_and_clear() {
        let mut mat = Mat2f::identity();
        mat.fill(2.5);
        assert_eq!(mat, Matrix::from_rows([[2.5, 2.5], [2.5, 2.5]]));
        assert!(!mat.is_zero());
        mat.clear();
        assert!(mat.is_zero());
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.widen::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));
        assert_eq!(larger.resize::<2, 2>(), mat);

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1::<f32>::identity().determinant(), 1.0);
        assert_eq!(Mat2f::identity().determinant(), 1.0);
        assert_eq!(Mat3f::identity().determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
    }
}
