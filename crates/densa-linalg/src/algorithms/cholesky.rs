//! Cholesky factorization strategies.
//!
//! Both strategies read only the lower triangle of the input and return the
//! lower-triangular factor `L` with `L · Lᵗ = A`.

use densa_scalar::Real;
use log::warn;

use crate::buffer::Buffer;
use crate::config::CholeskyMode;
use crate::error::{MatrixError, Result};
use crate::traits::CholeskyPolicy;

/// Column-by-column Cholesky–Banachiewicz factorization.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeCholesky;

/// Block-recursive factorization.
///
/// Factors the leading half, solves for the off-diagonal block, then
/// recurses on the Schur complement of the trailing half.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveCholesky;

/// Square root of a diagonal radicand, subject to the domain mode.
struct DiagonalRoot {
    mode: CholeskyMode,
    warned: bool,
}

impl DiagonalRoot {
    fn new(mode: CholeskyMode) -> Self {
        Self {
            mode,
            warned: false,
        }
    }

    fn sqrt<T: Real>(&mut self, radicand: T, index: usize) -> Result<T> {
        // NaN fails this comparison too.
        if radicand > T::zero() {
            return Ok(radicand.sqrt());
        }
        let value = radicand.to_f64().unwrap_or(f64::NAN);
        match self.mode {
            CholeskyMode::Strict => Err(MatrixError::NotPositiveDefinite { index, value }),
            CholeskyMode::Lenient => {
                if !self.warned {
                    warn!("cholesky: non-positive radicand {value} at diagonal {index}");
                    self.warned = true;
                }
                Ok(radicand.sqrt())
            }
        }
    }
}

impl<T: Real> CholeskyPolicy<T> for IterativeCholesky {
    fn factor(a: &Buffer<T>, mode: CholeskyMode) -> Result<Buffer<T>> {
        let n = a.square_size()?;
        let mut root = DiagonalRoot::new(mode);
        let mut l: Buffer<T> = Buffer::zeros(n, n);

        for j in 0..n {
            let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(j, k)].squared());
            l[(j, j)] = root.sqrt(a[(j, j)] - sum, j)?;

            for i in j + 1..n {
                let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
                l[(i, j)] = (a[(i, j)] - sum) / l[(j, j)];
            }
        }

        Ok(l)
    }
}

impl<T: Real> CholeskyPolicy<T> for RecursiveCholesky {
    fn factor(a: &Buffer<T>, mode: CholeskyMode) -> Result<Buffer<T>> {
        let n = a.square_size()?;
        let mut root = DiagonalRoot::new(mode);
        let mut schur = a.clone();
        let mut l: Buffer<T> = Buffer::zeros(n, n);
        factor_block(&mut schur, &mut l, 0, n, &mut root)?;
        Ok(l)
    }
}

/// Factors the diagonal block `[start, start + size)` of `schur` into `l`.
///
/// `schur` holds the input with the contributions of all preceding columns
/// already subtracted from this block.
fn factor_block<T: Real>(
    schur: &mut Buffer<T>,
    l: &mut Buffer<T>,
    start: usize,
    size: usize,
    root: &mut DiagonalRoot,
) -> Result<()> {
    match size {
        0 => return Ok(()),
        1 => {
            l[(start, start)] = root.sqrt(schur[(start, start)], start)?;
            return Ok(());
        }
        _ => {}
    }

    let half = size / 2;
    let mid = start + half;
    let end = start + size;

    factor_block(schur, l, start, half, root)?;

    // L21 = A21 · L11⁻ᵗ
    for i in mid..end {
        for j in start..mid {
            let sum = (start..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
            l[(i, j)] = (schur[(i, j)] - sum) / l[(j, j)];
        }
    }

    // A22 -= L21 · L21ᵗ, lower triangle only.
    for i in mid..end {
        for j in mid..=i {
            let update = (start..mid).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
            schur[(i, j)] -= update;
        }
    }

    factor_block(schur, l, mid, size - half, root)
}
