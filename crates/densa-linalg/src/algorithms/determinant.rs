//! Determinant strategies.

use densa_scalar::{Real, Scalar};
use log::trace;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::traits::DeterminantPolicy;

/// Recursive cofactor expansion along the first row.
///
/// O(N!), intended for small matrices. Works over any [`Scalar`], so integer
/// matrices get exact determinants.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaplaceExpansion;

/// Gaussian elimination with partial pivoting.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianDeterminant;

impl<T: Scalar> DeterminantPolicy<T> for LaplaceExpansion {
    fn determinant(a: &Buffer<T>) -> Result<T> {
        a.square_size()?;
        Ok(cofactor_expansion(a))
    }
}

impl<T: Real> DeterminantPolicy<T> for GaussianDeterminant {
    fn determinant(a: &Buffer<T>) -> Result<T> {
        let n = a.square_size()?;
        let mut m = a.clone();
        let mut det = T::one();

        for col in 0..n {
            let pivot_row = partial_pivot_row(&m, col, col);
            if m[(pivot_row, col)].is_zero() {
                trace!("zero pivot in column {col}, determinant is zero");
                return Ok(T::zero());
            }

            if pivot_row != col {
                m.swap_rows(col, pivot_row);
                det = -det;
            }

            let pivot = m[(col, col)];
            det *= pivot;

            for row in col + 1..n {
                let factor = m[(row, col)] / pivot;
                if !factor.is_zero() {
                    m.add_scaled_row(row, col, -factor);
                }
            }
        }

        Ok(det)
    }
}

/// Determinant by cofactor expansion; the caller guarantees a square buffer.
///
/// An empty buffer has determinant one.
pub fn cofactor_expansion<T: Scalar>(m: &Buffer<T>) -> T {
    match m.num_rows() {
        0 => T::one(),
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => (0..n).fold(T::zero(), |det, col| {
            let entry = m[(0, col)];
            if entry.is_zero() {
                det
            } else {
                det + T::alternating_sign(col) * entry * cofactor_expansion(&m.minor(0, col))
            }
        }),
    }
}

/// Row index in `from..` holding the largest magnitude in column `col`.
///
/// Ties keep the earliest row.
pub(crate) fn partial_pivot_row<T: Real>(m: &Buffer<T>, col: usize, from: usize) -> usize {
    let mut max_row = from;
    for row in from + 1..m.num_rows() {
        if m[(row, col)].abs() > m[(max_row, col)].abs() {
            max_row = row;
        }
    }
    max_row
}
