//! The fixed-dimension matrix container.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use densa_linalg::{Buffer, MatrixError, Result};
use densa_scalar::Scalar;

use crate::policies::DefaultPolicies;

/// An `M`×`N` matrix of `T` whose algorithms are chosen by the policy bundle `P`.
///
/// Storage is an inline `[[T; N]; M]` array. Shapes are part of the type, so
/// elementwise operations only accept equal shapes and products only accept
/// matching inner dimensions. Both dimensions must be non-zero; a zero
/// dimension is rejected when the constructor is instantiated.
pub struct Matrix<T, const M: usize, const N: usize, P = DefaultPolicies> {
    data: [[T; N]; M],
    policies: PhantomData<fn() -> P>,
}

impl<T, const M: usize, const N: usize, P> Matrix<T, M, N, P> {
    const NON_EMPTY: () = assert!(M > 0 && N > 0, "matrix dimensions must be non-zero");

    /// Creates a matrix from row arrays.
    #[must_use]
    pub fn new(data: [[T; N]; M]) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data,
            policies: PhantomData,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn num_rows(&self) -> usize {
        M
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn num_cols(&self) -> usize {
        N
    }

    /// Returns a reference to the entry at (row, col), if in bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the entry at (row, col), if in bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns a row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= M`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T; N] {
        &self.data[row]
    }

    /// Returns the rows as arrays.
    #[must_use]
    pub fn as_array(&self) -> &[[T; N]; M] {
        &self.data
    }

    /// Consumes the matrix, returning its rows.
    #[must_use]
    pub fn into_array(self) -> [[T; N]; M] {
        self.data
    }
}

impl<T: Copy, const M: usize, const N: usize, P> Matrix<T, M, N, P> {
    /// Creates a matrix from a collection of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] unless there are exactly `M` rows of
    /// length `N`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_buffer(&Buffer::from_rows(rows)?)
    }

    /// Creates a matrix from a buffer of the same shape.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] if the buffer is not `M`×`N`.
    pub fn from_buffer(buffer: &Buffer<T>) -> Result<Self> {
        if buffer.shape() != (M, N) {
            return Err(MatrixError::InvalidDimensions {
                expected: (M, N),
                got: buffer.shape(),
            });
        }
        Ok(Self::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| buffer[(i, j)])
        })))
    }

    /// Copies the entries into a [`Buffer`].
    #[must_use]
    pub fn to_buffer(&self) -> Buffer<T> {
        Buffer::from_fn(M, N, |i, j| self.data[i][j])
    }

    /// Copies the entries into a collection of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.iter().map(|row| row.to_vec()).collect()
    }

    /// Returns a column.
    ///
    /// # Panics
    ///
    /// Panics if `col >= N`.
    #[must_use]
    pub fn col(&self, col: usize) -> [T; M] {
        std::array::from_fn(|i| self.data[i][col])
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Matrix<T, N, M, P> {
        Matrix::new(std::array::from_fn(|j| std::array::from_fn(|i| self.data[i][j])))
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U, M, N, P> {
        Matrix::new(self.data.map(|row| row.map(&f)))
    }

    /// Combines corresponding entries of two matrices.
    #[must_use]
    pub fn zip_map<U, V>(&self, other: &Matrix<U, M, N, P>, f: impl Fn(T, U) -> V) -> Matrix<V, M, N, P>
    where
        U: Copy,
    {
        Matrix::new(std::array::from_fn(|i| {
            std::array::from_fn(|j| f(self.data[i][j], other.data[i][j]))
        }))
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> Matrix<T, M, N, P> {
    /// Creates the zero matrix.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new([[T::zero(); N]; M])
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.map(|v| -v)
    }

    /// Multiplies every entry by `factor`.
    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        self.map(|v| v * factor)
    }

    /// Elementwise product.
    #[must_use]
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }
}

impl<T: Copy, const M: usize, P> Matrix<T, M, 1, P> {
    /// Creates a column vector.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidDimensions`] if `values.len() != M`.
    pub fn from_column(values: Vec<T>) -> Result<Self> {
        Self::from_buffer(&Buffer::from_vec(values.len(), 1, values)?)
    }

    /// Returns the entries of a column vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().map(|row| row[0]).collect()
    }
}

impl<T: Scalar, const N: usize, P> Matrix<T, N, N, P> {
    /// Creates the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.data[i][i])
    }
}

impl<T: Clone, const M: usize, const N: usize, P> Clone for Matrix<T, M, N, P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            policies: PhantomData,
        }
    }
}

impl<T: Copy, const M: usize, const N: usize, P> Copy for Matrix<T, M, N, P> {}

impl<T: PartialEq, const M: usize, const N: usize, P> PartialEq for Matrix<T, M, N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: fmt::Debug, const M: usize, const N: usize, P> fmt::Debug for Matrix<T, M, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix").field("data", &self.data).finish()
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> Default for Matrix<T, M, N, P> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Rows on separate lines, entries separated by a single space.
impl<T: fmt::Display, const M: usize, const N: usize, P> fmt::Display for Matrix<T, M, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl<T, const M: usize, const N: usize, P> Index<(usize, usize)> for Matrix<T, M, N, P> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const M: usize, const N: usize, P> IndexMut<(usize, usize)> for Matrix<T, M, N, P> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T, const M: usize, const N: usize, P> From<[[T; N]; M]> for Matrix<T, M, N, P> {
    fn from(data: [[T; N]; M]) -> Self {
        Self::new(data)
    }
}

impl<T: Copy, const M: usize, const N: usize, P> TryFrom<Vec<Vec<T>>> for Matrix<T, M, N, P> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T: Copy, const M: usize, const N: usize, P> TryFrom<&Buffer<T>> for Matrix<T, M, N, P> {
    type Error = MatrixError;

    fn try_from(buffer: &Buffer<T>) -> Result<Self> {
        Self::from_buffer(buffer)
    }
}
