//! Implementations of `std::ops` and the `approx` comparison traits.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::Number, Matrix};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.0
            .iter_mut()
            .flatten()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: AddAssign,
{
    type Output = Matrix<T, R, C>;

    fn add(mut self, rhs: Matrix<T, R, C>) -> Self::Output {
        self += rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        self.0
            .iter_mut()
            .flatten()
            .zip(rhs.0.into_iter().flatten())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: SubAssign,
{
    type Output = Matrix<T, R, C>;

    fn sub(mut self, rhs: Matrix<T, R, C>) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Matrix * Matrix.
///
/// The result has as many rows as the left-hand side and as many columns as the right-hand side.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix *= Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().flatten().for_each(|elem| *elem *= rhs);
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Clone,
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
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_relative_eq, assert_ulps_eq};

    use crate::{Mat2, Mat2x3, Mat3x2, Matrix};

    #[test]
    fn equality_is_cellwise() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        for row in 0..2 {
            for col in 0..3 {
                let mut b = a;
                b[(row, col)] += 1;
                assert_ne!(a, b, "differs at ({row}, {col})");
                assert_ne!(b, a);
            }
        }
        assert_eq!(a, a.transpose().transpose());
        // Cells are compared through `T: PartialEq<U>`.
        let names = Mat2::from_rows([["a", "b"], ["c", "d"]]);
        let owned = names.map(String::from);
        assert_eq!(owned, names);
        assert_ne!(owned, Mat2::from_rows([["a", "b"], ["c", "x"]]));
    }

    #[test]
    fn mat_mat_mul() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Mat3x2::from_rows([[7, 8], [9, 10], [11, 12]]);
        let c: Mat2<i64> = a * b;
        assert_eq!(c, Matrix::from_rows([[58, 64], [139, 154]]));

        let d = b * a;
        assert_eq!(d[(0, 0)], 7 * 1 + 8 * 4);
        assert_eq!(d[(2, 2)], 11 * 3 + 12 * 6);
    }

    #[test]
    fn elementwise() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Mat2x3::splat(1);
        assert_eq!(a + b, Matrix::from_rows([[2, 3, 4], [5, 6, 7]]));
        assert_eq!(a - b, Matrix::from_rows([[0, 1, 2], [3, 4, 5]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2, -3], [-4, -5, -6]]));

        let mut c = a;
        c += a;
        c -= b;
        assert_eq!(c, Matrix::from_rows([[1, 3, 5], [7, 9, 11]]));
        // `a` is untouched by the compound operations on its copy.
        assert_eq!(a[(0, 0)], 1);
    }

    #[test]
    fn scalar() {
        let a = Mat2::from_rows([[1u32, 2], [3, 4]]);
        assert_eq!(a * 3, Matrix::from_rows([[3, 6], [9, 12]]));

        let mut b = a;
        b *= 0;
        assert_eq!(b, Mat2::<u32>::ZERO);
    }

    #[test]
    fn approx_comparisons() {
        let a = Mat2::from_rows([[0.1f64, 0.2], [0.3, 0.4]]);
        let sum = (0..10).fold(Mat2::<f64>::ZERO, |acc, _| acc + a * 0.1);
        assert_relative_eq!(sum, a, epsilon = 1e-12);
        assert_ulps_eq!(a * 2.0, a + a);
    }
}
