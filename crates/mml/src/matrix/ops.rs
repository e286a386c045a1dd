use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    dim::{max, Dims, Promotion},
    traits::{ElementEq, Number},
    Vector,
};

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.at(row, col) {
            Ok(elem) => elem,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.at_mut(row, col) {
            Ok(elem) => elem,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Row access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    #[track_caller]
    fn index(&self, row: usize) -> &Self::Output {
        match self.row(row) {
            Ok(row) => row,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        match self.row_mut(row) {
            Ok(row) => row,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Element-wise equality, also between matrices of different element types.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: ElementEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.rows().iter().zip(other.rows()).all(|(a, b)| a == b)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Matrix(self.0.map(Vector::neg))
    }
}

macro_rules! elementwise {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident;)+) => {
        $(
            /// Element-wise operation over the top-left `R2`x`C2` submatrix.
            ///
            /// A right-hand side larger than `self` in either dimension is a compile error.
            impl<T, const R: usize, const C: usize, const R2: usize, const C2: usize>
                $OpAssign<Matrix<T, R2, C2>> for Matrix<T, R, C>
            where
                T: Number,
            {
                fn $op_assign(&mut self, rhs: Matrix<T, R2, C2>) {
                    let () = Dims::<R2, R>::FITS;
                    for (lhs, rhs) in self.0.as_mut_array().iter_mut().zip(rhs.into_rows()) {
                        lhs.$op_assign(rhs);
                    }
                }
            }

            /// Element-wise operation between matrices of the same shape.
            impl<T: Number, const R: usize, const C: usize> $Op for Matrix<T, R, C> {
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
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Adds two matrices of possibly different shapes.
    ///
    /// The result has `max(R, R2)` rows and `max(C, C2)` columns; any other shape is a compile
    /// error. `self` is widened to that shape first, then `rhs` is added to its top-left
    /// submatrix. The `+` operator does the same for shapes up to 4x4.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mml::*;
    /// let wide = Matrix::from_rows([[1, 2, 3, 4, 5]]);
    /// let sum: Matrix<i32, 2, 5> = wide.add_promoted(Mat2i::identity());
    /// assert_eq!(sum, Matrix::from_rows([
    ///     [2, 2, 3, 4, 5],
    ///     [0, 1, 0, 0, 0],
    /// ]));
    /// ```
    pub fn add_promoted<const R2: usize, const C2: usize, const R3: usize, const C3: usize>(
        self,
        rhs: Matrix<T, R2, C2>,
    ) -> Matrix<T, R3, C3> {
        let mut out = self.promote::<R2, C2, R3, C3>();
        out += rhs;
        out
    }

    /// Subtracts two matrices of possibly different shapes, see [`Matrix::add_promoted`].
    pub fn sub_promoted<const R2: usize, const C2: usize, const R3: usize, const C3: usize>(
        self,
        rhs: Matrix<T, R2, C2>,
    ) -> Matrix<T, R3, C3> {
        let mut out = self.promote::<R2, C2, R3, C3>();
        out -= rhs;
        out
    }

    fn promote<const R2: usize, const C2: usize, const R3: usize, const C3: usize>(
        self,
    ) -> Matrix<T, R3, C3> {
        let () = Promotion::<R, R2, R3>::LARGER;
        let () = Promotion::<C, C2, C3>::LARGER;
        self.widen()
    }
}

// Matrices of different shapes add and subtract into the larger shape in each dimension. Every
// ordered pair of distinct shapes up to 4x4 gets an operator impl.
macro_rules! promote {
    (@each [$($done:tt)*] []) => {};
    (@each [$($done:tt)*] [$lhs:tt $($rest:tt)*]) => {
        $( promote!(@pair $lhs $done); )*
        $( promote!(@pair $lhs $rest); )*
        promote!(@each [$($done)* $lhs] [$($rest)*]);
    };
    (@pair ($r1:literal, $c1:literal) ($r2:literal, $c2:literal)) => {
        impl<T: Number> Add<Matrix<T, $r2, $c2>> for Matrix<T, $r1, $c1> {
            type Output = Matrix<T, { max($r1, $r2) }, { max($c1, $c2) }>;

            fn add(self, rhs: Matrix<T, $r2, $c2>) -> Self::Output {
                self.add_promoted(rhs)
            }
        }

        impl<T: Number> Sub<Matrix<T, $r2, $c2>> for Matrix<T, $r1, $c1> {
            type Output = Matrix<T, { max($r1, $r2) }, { max($c1, $c2) }>;

            fn sub(self, rhs: Matrix<T, $r2, $c2>) -> Self::Output {
                self.sub_promoted(rhs)
            }
        }
    };
    ($($shape:tt)+) => {
        promote!(@each [] [$($shape)+]);
    };
}

promote! {
    (1, 1) (1, 2) (1, 3) (1, 4)
    (2, 1) (2, 2) (2, 3) (2, 4)
    (3, 1) (3, 2) (3, 3) (3, 4)
    (4, 1) (4, 2) (4, 3) (4, 4)
}

/// Matrix * Matrix.
impl<T, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, C, P>) -> Self::Output {
        let rhs = rhs.into_rows();
        Matrix(self.0.map(|row| {
            row.into_array()
                .into_iter()
                .zip(rhs)
                .fold(Vector::ZERO, |acc, (elem, rhs_row)| acc + rhs_row * elem)
        }))
    }
}

/// Replaces `self` with `self * rhs`.
impl<T: Number, const N: usize> MulAssign<Matrix<T, N, N>> for Matrix<T, N, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.0.map(|row| row.dot(rhs))
    }
}

/// Row Vector * Matrix.
impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R>
where
    T: Number,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        self.into_array()
            .into_iter()
            .zip(rhs.into_rows())
            .fold(Vector::ZERO, |acc, (elem, row)| acc + row * elem)
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<T: Number, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        self.0.as_mut_array().iter_mut().for_each(|row| *row *= rhs);
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Matrix-Scalar division.
impl<T: Number, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    fn div_assign(&mut self, rhs: T) {
        self.0.as_mut_array().iter_mut().for_each(|row| *row /= rhs);
    }
}

/// Matrix-Scalar division.
impl<T: Number, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            /// Scalar-Matrix multiplication (scaling).
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }

            /// Divides the scalar by each element.
            impl<const R: usize, const C: usize> Div<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn div(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2i, Mat3i, Mat3x4, Mat4f, MatrixFill};

    use super::*;

    #[test]
    fn mat_mat_mul() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a * b, Matrix::from_rows([[19, 22], [43, 50]]));

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 10]]);
        assert_eq!(Mat3i::identity() * m, m);
        assert_eq!(m * Mat3i::identity(), m);

        let mut n = m;
        n *= Mat3i::identity();
        assert_eq!(n, m);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3], [4, 5]]);
        assert_eq!(mat * vec2(4, 5), [5, 23, 41]);
        assert_eq!(vec3(1, 1, 1) * mat, [6, 9]);
    }

    #[test]
    fn compound_over_top_left() {
        let mut m = Mat3i::identity();
        m += Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m, Matrix::from_rows([[2, 2, 0], [3, 5, 0], [0, 0, 1]]));
        m -= Matrix::from_rows([[1, 1, 1]]);
        assert_eq!(m, Matrix::from_rows([[1, 1, -1], [3, 5, 0], [0, 0, 1]]));
    }

    #[test]
    fn promotion() {
        let big = Mat3i::identity() + Mat2i::from_rows([[1, 1], [1, 1]]);
        assert_eq!(big, Matrix::from_rows([[2, 1, 0], [1, 2, 0], [0, 0, 1]]));
        let big = Mat2i::from_rows([[1, 1], [1, 1]]) - Mat3i::identity();
        assert_eq!(big, Matrix::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, -1]]));

        // An affine 3x4 matrix plus its linear 3x3 part.
        let affine: Mat3x4<i32> = Matrix::from_rows([[1, 0, 0, 5], [0, 1, 0, 6], [0, 0, 1, 7]]);
        let sum = affine + Mat3i::identity();
        assert_eq!(
            sum,
            Matrix::from_rows([[2, 0, 0, 5], [0, 2, 0, 6], [0, 0, 2, 7]])
        );
        let diff = Mat3i::identity() - affine;
        assert_eq!(
            diff,
            Matrix::from_rows([[0, 0, 0, -5], [0, 0, 0, -6], [0, 0, 0, -7]])
        );

        // Neither operand contains the other.
        let tall = Matrix::from_rows([[1], [2], [3]]);
        let flat = Matrix::from_rows([[10, 20]]);
        let sum: Matrix<i32, 3, 2> = tall + flat;
        assert_eq!(sum, Matrix::from_rows([[11, 20], [2, 0], [3, 0]]));
    }

    #[test]
    fn promotion_beyond_four() {
        let big = Matrix::<i32, 5, 6>::new(MatrixFill::Identity);
        let sum: Matrix<i32, 5, 6> = Mat2i::from_rows([[1, 2], [3, 4]]).add_promoted(big);
        assert_eq!(sum[(0, 1)], 2);
        assert_eq!(sum[(1, 1)], 5);
        assert_eq!(sum[(4, 4)], 1);
        assert_eq!(sum[(4, 5)], 0);

        let diff: Matrix<i32, 5, 6> = big.sub_promoted(Mat2i::identity());
        for i in 0..5 {
            assert_eq!(diff[(i, i)], if i < 2 { 0 } else { 1 });
        }
    }

    #[test]
    fn mixed_element_types() {
        assert_eq!(Mat2i::identity(), Matrix::<f64, 2, 2>::identity());
        assert_ne!(Mat2i::identity(), Matrix::<f64, 2, 2>::ZERO);
        assert_eq!(
            Matrix::from_rows([[1u8, 2], [3, 4]]),
            Matrix::from_rows([[1.0f32, 2.0], [3.0, 4.0]])
        );
    }

    #[test]
    fn scalars() {
        let m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 2.0, Matrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!(m / 2.0, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(12.0 / m, Matrix::from_rows([[12.0, 6.0], [4.0, 3.0]]));
        assert_eq!(-Mat4f::identity() + Mat4f::identity(), Mat4f::ZERO);
    }
}
