//! LU factorization strategies.
//!
//! - [`Doolittle`]: unit diagonal on `L`, no pivoting
//! - [`Crout`]: unit diagonal on `U`, no pivoting
//! - [`FullPivoting`]: Gaussian elimination with row and column swaps
//!
//! The non-pivoting variants divide by whatever pivot they meet. A zero
//! pivot is not reported; the factors then contain non-finite entries.

use densa_scalar::Real;
use log::trace;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::traits::{LuFactors, LuPolicy};

/// Doolittle factorization.
#[derive(Clone, Copy, Debug, Default)]
pub struct Doolittle;

/// Crout factorization.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crout;

/// Gaussian elimination with complete pivoting.
///
/// Produces `P_row · A · P_col = L · U` with unit-diagonal `L`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullPivoting;

fn identity_permutation(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn unpivoted<T>(l: Buffer<T>, u: Buffer<T>) -> LuFactors<T> {
    let n = l.num_rows();
    LuFactors {
        l,
        u,
        row_permutation: identity_permutation(n),
        col_permutation: identity_permutation(n),
    }
}

impl<T: Real> LuPolicy<T> for Doolittle {
    fn factor(a: &Buffer<T>) -> Result<LuFactors<T>> {
        let n = a.square_size()?;
        let mut l = Buffer::zeros(n, n);
        let mut u = Buffer::zeros(n, n);

        for i in 0..n {
            for k in i..n {
                let sum = (0..i).fold(T::zero(), |acc, j| acc + l[(i, j)] * u[(j, k)]);
                u[(i, k)] = a[(i, k)] - sum;
            }

            l[(i, i)] = T::one();
            for k in i + 1..n {
                let sum = (0..i).fold(T::zero(), |acc, j| acc + l[(k, j)] * u[(j, i)]);
                l[(k, i)] = (a[(k, i)] - sum) / u[(i, i)];
            }
        }

        Ok(unpivoted(l, u))
    }
}

impl<T: Real> LuPolicy<T> for Crout {
    fn factor(a: &Buffer<T>) -> Result<LuFactors<T>> {
        let n = a.square_size()?;
        let mut l = Buffer::zeros(n, n);
        let mut u = Buffer::zeros(n, n);

        for j in 0..n {
            for i in j..n {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * u[(k, j)]);
                l[(i, j)] = a[(i, j)] - sum;
            }

            u[(j, j)] = T::one();
            for i in j + 1..n {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(j, k)] * u[(k, i)]);
                u[(j, i)] = (a[(j, i)] - sum) / l[(j, j)];
            }
        }

        Ok(unpivoted(l, u))
    }
}

impl<T: Real> LuPolicy<T> for FullPivoting {
    fn factor(a: &Buffer<T>) -> Result<LuFactors<T>> {
        let n = a.square_size()?;
        let mut u = a.clone();
        let mut l = Buffer::identity(n);
        let mut row_permutation = identity_permutation(n);
        let mut col_permutation = identity_permutation(n);

        for k in 0..n {
            let (pivot_row, pivot_col) = largest_in_trailing_block(&u, k);
            if u[(pivot_row, pivot_col)].is_zero() {
                trace!("full pivoting: trailing block at {k} is zero");
                break;
            }

            if pivot_row != k {
                u.swap_rows(k, pivot_row);
                row_permutation.swap(k, pivot_row);
                // Multipliers already computed travel with their rows.
                for j in 0..k {
                    let tmp = l[(k, j)];
                    l[(k, j)] = l[(pivot_row, j)];
                    l[(pivot_row, j)] = tmp;
                }
            }
            if pivot_col != k {
                u.swap_cols(k, pivot_col);
                col_permutation.swap(k, pivot_col);
            }

            let pivot = u[(k, k)];
            for i in k + 1..n {
                let factor = u[(i, k)] / pivot;
                l[(i, k)] = factor;
                if !factor.is_zero() {
                    u.add_scaled_row(i, k, -factor);
                }
                // Exact zero below the pivot.
                u[(i, k)] = T::zero();
            }
        }

        Ok(LuFactors {
            l,
            u,
            row_permutation,
            col_permutation,
        })
    }
}

/// Position of the largest-magnitude entry in `m[k.., k..]`.
fn largest_in_trailing_block<T: Real>(m: &Buffer<T>, k: usize) -> (usize, usize) {
    let n = m.num_rows();
    let mut best = (k, k);
    for i in k..n {
        for j in k..n {
            if m[(i, j)].abs() > m[best].abs() {
                best = (i, j);
            }
        }
    }
    best
}
