//! Dense row-major buffer.
//!
//! `Buffer` is the interchange format between the fixed-size matrix
//! container and every strategy: rows of uniform length, stored contiguously.

use std::ops::{Add, Index, IndexMut, Sub};

use densa_scalar::Scalar;

use crate::error::{MatrixError, Result};

/// Dense rectangular buffer stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer<T> {
    /// Entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T> Buffer<T> {
    /// Creates a buffer from a collection of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(MatrixError::InvalidDimensions {
                expected: (num_rows, num_cols),
                got: (num_rows, bad.len()),
            });
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a buffer from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimensions`] if `data.len() != num_rows * num_cols`.
    pub fn from_vec(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != num_rows * num_cols {
            return Err(MatrixError::InvalidDimensions {
                expected: (num_rows, num_cols),
                got: (1, data.len()),
            });
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a buffer whose entry at (row, col) is `f(row, col)`.
    pub fn from_fn(num_rows: usize, num_cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for i in 0..num_rows {
            for j in 0..num_cols {
                data.push(f(i, j));
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the buffer is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the side length of a square buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] otherwise.
    pub fn square_size(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.num_rows)
        } else {
            Err(MatrixError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.num_rows).map(move |row| self.row(row))
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Swaps two columns in-place.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for row in 0..self.num_rows {
            let start = row * self.num_cols;
            self.data.swap(start + i, start + j);
        }
    }
}

impl<T: Copy> Buffer<T> {
    /// Converts back into a collection of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows).map(|row| self[(row, col)]).collect()
    }

    /// Sets a column from a slice.
    pub fn set_col(&mut self, col: usize, values: &[T]) {
        assert_eq!(values.len(), self.num_rows);
        for (row, &val) in values.iter().enumerate() {
            self[(row, col)] = val;
        }
    }

    /// Returns the transpose of the buffer.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)]);
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Copies the `size`×`size` block whose top-left corner is (row, col).
    #[must_use]
    pub fn block(&self, row: usize, col: usize, size: usize) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for i in row..row + size {
            data.extend_from_slice(&self.row(i)[col..col + size]);
        }
        Self {
            data,
            num_rows: size,
            num_cols: size,
        }
    }

    /// Writes `block` into this buffer with its top-left corner at (row, col).
    pub fn set_block(&mut self, row: usize, col: usize, block: &Self) {
        for i in 0..block.num_rows {
            self.row_mut(row + i)[col..col + block.num_cols].copy_from_slice(block.row(i));
        }
    }

    /// Returns the buffer with row `skip_row` and column `skip_col` removed.
    #[must_use]
    pub fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let data: Vec<T> = self
            .rows()
            .enumerate()
            .filter(|&(i, _)| i != skip_row)
            .flat_map(|(_, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != skip_col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Self {
            data,
            num_rows: self.num_rows.saturating_sub(1),
            num_cols: self.num_cols.saturating_sub(1),
        }
    }
}

impl<T: Scalar> Buffer<T> {
    /// Creates a new buffer filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity buffer.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Creates an `n`×1 column buffer.
    #[must_use]
    pub fn column(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            num_rows: values.len(),
            num_cols: 1,
        }
    }

    /// Matrix-vector multiply: y = A * x.
    #[must_use]
    pub fn mv(&self, x: &[T]) -> Vec<T> {
        assert_eq!(x.len(), self.num_cols);
        self.rows()
            .map(|row| {
                row.iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect()
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: T) {
        for k in 0..self.num_cols {
            let val = self[(source, k)] * scale;
            self[(target, k)] += val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: T) {
        for v in self.row_mut(row) {
            *v *= scale;
        }
    }
}

impl<T> Index<(usize, usize)> for Buffer<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Buffer<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: Scalar> Add for &Buffer<T> {
    type Output = Buffer<T>;

    fn add(self, other: Self) -> Buffer<T> {
        assert_eq!(self.shape(), other.shape());

        Buffer {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a + b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar> Sub for &Buffer<T> {
    type Output = Buffer<T>;

    fn sub(self, other: Self) -> Buffer<T> {
        assert_eq!(self.shape(), other.shape());

        Buffer {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Buffer<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
