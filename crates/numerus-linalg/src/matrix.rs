use std::{array, fmt};

use crate::{Number, One, Zero};

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

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The dimensions are part of the type, so adding a 2x3 matrix to a 3x2 matrix, or multiplying
/// matrices whose inner dimensions differ, is rejected by the compiler.
///
/// # Construction
///
/// - [`Matrix::ZERO`] and the [`Default`] implementation create a matrix filled with zeroes
///   (or default values, respectively).
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays.
/// - [`Matrix::splat`] copies a single value into every element.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::identity`] and [`Matrix::from_diagonal`] are available.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*. Indices are 0-based.
///
/// ```
/// # use numerus_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Square Matrices
///
/// Operations that only make sense when `R` equals `C` (like [`Matrix::trace`]) are defined in a
/// separate `impl` block on `Matrix<T, N, N>`. They simply don't exist on non-square matrices:
///
/// ```compile_fail
/// # use numerus_linalg::*;
/// let mat = Matrix::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// mat.trace();
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows.
    pub const ROWS: usize = R;
    /// The number of columns.
    pub const COLUMNS: usize = C;

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 4);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
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
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Mat2x3::splat(7);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [7, 7, 7],
    ///     [7, 7, 7],
    /// ]));
    /// ```
    pub fn splat(elem: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(|_, _| elem.clone())
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are produced in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
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
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
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
    pub fn transpose(self) -> Matrix<T, C, R> {
        // Each new row pulls the next element out of every old row, in order.
        let mut rows = self.0.map(|row| row.into_iter());
        Matrix(array::from_fn(|_| {
            array::from_fn(|r| rows[r].next().expect("row shorter than column count"))
        }))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[T; C]> + '_ {
        self.0.iter()
    }

    /// Returns a reference to the underlying row arrays.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Consumes the matrix and returns its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.0
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat * Mat2::identity(), mat);
    /// ```
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal(diag: [T; N]) -> Self
    where
        T: Zero,
    {
        let mut diag = diag.map(Some);
        Self::from_fn(|row, col| {
            if row == col {
                diag[row].take().unwrap_or(T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Returns the elements on the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> [T; N]
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// The sum starts out with the top-left element. A 0x0 matrix has a trace of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numerus_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3::<f32>::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N)
            .map(|i| self[(i, i)])
            .reduce(|acc, elem| acc + elem)
            .unwrap_or(T::ZERO)
    }

    /// Returns whether the matrix is equal to its transpose.
    pub fn is_symmetric(&self) -> bool
    where
        T: PartialEq,
    {
        (0..N).all(|row| (0..row).all(|col| self[(row, col)] == self[(col, row)]))
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keeps each row on one line, even with `{:#?}`.
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a [T; C]);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(FormatRow))
            .finish()
    }
}

/// Prints one bracketed row per line.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            if r != 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, elem) in row.iter().enumerate() {
                if col != 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(elem, f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn zero_and_default() {
        assert_eq!(Mat2x3::<i64>::ZERO, Mat2x3::<i64>::default());
        assert_eq!(Mat2x3::<i64>::ZERO, Mat2x3::<i64>::splat(0));
        assert!(Mat3::<u8>::ZERO.rows().flatten().all(|&e| e == 0));
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
        assert!(mat.is_symmetric());
        assert!(!Matrix::from_rows([[1, 2], [3, 4]]).is_symmetric());
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(mat.to_string(), "[0, 1]\n[2, 3]");
    }

    #[test]
    fn trace_of_broadcast_with_diagonal() {
        let mut mat = Mat3::<i64>::splat(0);
        for i in 0..3 {
            mat[(i, i)] = 1;
        }
        assert_eq!(mat.trace(), 3);
        assert_eq!(mat, Mat3::<i64>::identity());
    }

    #[test]
    fn trace_edge_sizes() {
        assert_eq!(Matrix::<i32, 0, 0>::ZERO.trace(), 0);
        assert_eq!(Mat1::from_rows([[-9]]).trace(), -9);
        assert_eq!(Mat2::from_rows([[1.5, 100.0], [-7.0, 2.5]]).trace(), 4.0);
    }

    #[test]
    fn transpose_twice() {
        let mat: Mat3x4<u32> = Matrix::from_fn(|r, c| (r * 4 + c) as u32);
        let back = mat.transpose().transpose();
        assert_eq!(back, mat);
    }

    #[test]
    fn transpose_moves_non_copy_elements() {
        let mat = Matrix::from_rows([
            [String::from("a"), String::from("b")],
            [String::from("c"), String::from("d")],
        ]);
        let t = mat.transpose();
        assert_eq!(t[(0, 1)], "c");
        assert_eq!(t[(1, 0)], "b");
    }

    #[test]
    fn checked_access() {
        let mut mat = Mat2x3::from_rows([[0, 1, 2], [3, 4, 5]]);
        if let Some(elem) = mat.get_mut(1, 0) {
            *elem = 999;
        }
        assert!(mat.get_mut(0, 3).is_none());
        assert_eq!(mat.into_rows(), [[0, 1, 2], [999, 4, 5]]);
    }

    #[test]
    fn pod() {
        let mat = Mat2::from_rows([[1u32, 2], [3, 4]]);
        let words: [u32; 4] = bytemuck::cast(mat);
        assert_eq!(words, [1, 2, 3, 4]);
        assert_eq!(bytemuck::bytes_of(&mat).len(), 16);
    }
}
