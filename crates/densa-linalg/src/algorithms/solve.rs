//! Direct and factorization-based linear solvers.
//!
//! - [`GaussianSolver`]: elimination with partial pivoting on `[A | b]`
//! - [`LuSolver`]: Doolittle factors, then two triangular solves
//! - [`CholeskySolver`]: strict iterative Cholesky, then `L` and `Lᵗ` solves
//! - [`QrSolver`]: modified Gram-Schmidt, `y = Qᵗb`, then `Rx = y`

use densa_scalar::Real;
use log::debug;

use super::cholesky::IterativeCholesky;
use super::determinant::partial_pivot_row;
use super::lu::Doolittle;
use super::qr::ModifiedGramSchmidt;
use crate::buffer::Buffer;
use crate::config::CholeskyMode;
use crate::error::{MatrixError, Result};
use crate::traits::{CholeskyPolicy, DirectSolver, LuPolicy, QrFactors, QrPolicy};

/// Pivots smaller than this in magnitude make [`GaussianSolver`] give up.
pub const PIVOT_TOLERANCE: f64 = 1e-9;

/// Gaussian elimination with partial pivoting and back-substitution.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussianSolver;

/// Solves through a Doolittle LU factorization.
///
/// No pivoting: a zero pivot yields non-finite entries rather than an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct LuSolver;

/// Solves a symmetric positive-definite system through Cholesky.
#[derive(Clone, Copy, Debug, Default)]
pub struct CholeskySolver;

/// Solves through a modified Gram-Schmidt QR factorization.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrSolver;

/// Checks that `a` is square and `b` matches it, returning the size.
pub(crate) fn check_system<T>(a: &Buffer<T>, b: &[T]) -> Result<usize> {
    let n = a.square_size()?;
    if b.len() == n {
        Ok(n)
    } else {
        Err(MatrixError::DimensionMismatch {
            op: "solve",
            lhs: a.shape(),
            rhs: (b.len(), 1),
        })
    }
}

/// Solves `L·y = b` for lower-triangular `L`.
pub fn forward_substitution<T: Real>(l: &Buffer<T>, b: &[T]) -> Vec<T> {
    let n = b.len();
    let mut y = vec![T::zero(); n];
    for i in 0..n {
        let sum = (0..i).fold(T::zero(), |acc, j| acc + l[(i, j)] * y[j]);
        y[i] = (b[i] - sum) / l[(i, i)];
    }
    y
}

/// Solves `U·x = y` for upper-triangular `U`.
pub fn back_substitution<T: Real>(u: &Buffer<T>, y: &[T]) -> Vec<T> {
    let n = y.len();
    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let sum = (i + 1..n).fold(T::zero(), |acc, j| acc + u[(i, j)] * x[j]);
        x[i] = (y[i] - sum) / u[(i, i)];
    }
    x
}

impl<T: Real> DirectSolver<T> for GaussianSolver {
    fn solve(a: &Buffer<T>, b: &[T]) -> Result<Vec<T>> {
        let n = check_system(a, b)?;
        let tolerance = T::constant(PIVOT_TOLERANCE);
        let mut m = a.clone();
        let mut rhs = b.to_vec();

        for col in 0..n {
            let pivot_row = partial_pivot_row(&m, col, col);
            if m[(pivot_row, col)].abs() < tolerance {
                debug!("gaussian solver: pivot below tolerance in column {col}");
                return Err(MatrixError::Singular {
                    context: "pivot below tolerance",
                });
            }
            m.swap_rows(col, pivot_row);
            rhs.swap(col, pivot_row);

            let pivot = m[(col, col)];
            for row in col + 1..n {
                let factor = m[(row, col)] / pivot;
                if factor.is_zero() {
                    continue;
                }
                m.add_scaled_row(row, col, -factor);
                let delta = factor * rhs[col];
                rhs[row] -= delta;
            }
        }

        Ok(back_substitution(&m, &rhs))
    }
}

impl<T: Real> DirectSolver<T> for LuSolver {
    fn solve(a: &Buffer<T>, b: &[T]) -> Result<Vec<T>> {
        check_system(a, b)?;
        let lu = Doolittle::factor(a)?;
        let y = forward_substitution(&lu.l, b);
        Ok(back_substitution(&lu.u, &y))
    }
}

impl<T: Real> DirectSolver<T> for CholeskySolver {
    fn solve(a: &Buffer<T>, b: &[T]) -> Result<Vec<T>> {
        check_system(a, b)?;
        let l = IterativeCholesky::factor(a, CholeskyMode::Strict)?;
        let y = forward_substitution(&l, b);
        Ok(back_substitution(&l.transpose(), &y))
    }
}

impl<T: Real> DirectSolver<T> for QrSolver {
    fn solve(a: &Buffer<T>, b: &[T]) -> Result<Vec<T>> {
        let n = check_system(a, b)?;
        let QrFactors { q, r } = ModifiedGramSchmidt::factor(a)?;

        if (0..n).any(|i| r[(i, i)].is_zero()) {
            return Err(MatrixError::Singular {
                context: "zero on the diagonal of R",
            });
        }

        let y = q.transpose().mv(b);
        Ok(back_substitution(&r, &y))
    }
}
