//! Strategy traits.
//!
//! Every algorithm family is a trait with associated functions; each
//! concrete algorithm is a unit type implementing it. A strategy only ever
//! sees [`Buffer`]s, so it can be swapped without touching the container
//! that dispatches to it.
//!
//! Strategies copy their inputs before mutating and never retain them.

use densa_scalar::{Real, Scalar};

use crate::buffer::Buffer;
use crate::config::{CholeskyMode, IterativeConfig, PowerIterationConfig};
use crate::error::Result;

/// Matrix-matrix multiplication.
pub trait MultiplicationPolicy<T: Scalar> {
    /// Computes `a * b`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the inner dimensions differ; quadrant-based
    /// strategies additionally reject non-square or non-power-of-two sizes.
    fn multiply(a: &Buffer<T>, b: &Buffer<T>) -> Result<Buffer<T>>;
}

/// Determinant of a square matrix.
pub trait DeterminantPolicy<T: Scalar> {
    /// Computes `det(a)`.
    ///
    /// # Errors
    ///
    /// `NotSquare` for rectangular input.
    fn determinant(a: &Buffer<T>) -> Result<T>;
}

/// Inverse of a square matrix.
pub trait InversionPolicy<T: Real> {
    /// Computes `a⁻¹`.
    ///
    /// # Errors
    ///
    /// `NotSquare` for rectangular input, `Singular` if no inverse exists.
    fn invert(a: &Buffer<T>) -> Result<Buffer<T>>;
}

/// LU factorization with optional row and column pivoting.
#[derive(Clone, Debug, PartialEq)]
pub struct LuFactors<T> {
    /// Lower-triangular factor.
    pub l: Buffer<T>,
    /// Upper-triangular factor.
    pub u: Buffer<T>,
    /// `row_permutation[i]` is the original row now at position `i`.
    pub row_permutation: Vec<usize>,
    /// `col_permutation[j]` is the original column now at position `j`.
    pub col_permutation: Vec<usize>,
}

impl<T: Real> LuFactors<T> {
    /// Applies the recorded permutations to `a`, giving `P_row · A · P_col`.
    #[must_use]
    pub fn permute(&self, a: &Buffer<T>) -> Buffer<T> {
        let n = self.row_permutation.len();
        let mut out = Buffer::zeros(n, n);
        for (i, &src_row) in self.row_permutation.iter().enumerate() {
            for (j, &src_col) in self.col_permutation.iter().enumerate() {
                out[(i, j)] = a[(src_row, src_col)];
            }
        }
        out
    }
}

/// LU factorization strategy.
pub trait LuPolicy<T: Real> {
    /// Factors `a` into `L` and `U`.
    ///
    /// # Errors
    ///
    /// `NotSquare` for rectangular input.
    fn factor(a: &Buffer<T>) -> Result<LuFactors<T>>;
}

/// QR factorization result.
#[derive(Clone, Debug, PartialEq)]
pub struct QrFactors<T> {
    /// Factor with orthonormal columns.
    pub q: Buffer<T>,
    /// Upper-triangular factor.
    pub r: Buffer<T>,
}

/// QR factorization strategy.
///
/// Gram-Schmidt variants return a thin `Q` (m×n) and `R` (n×n); reflection
/// and rotation variants return a full `Q` (m×m) and `R` (m×n).
pub trait QrPolicy<T: Real> {
    /// Factors `a` into `Q` and `R`.
    ///
    /// # Errors
    ///
    /// Strategy specific; none of the provided strategies fail on finite input.
    fn factor(a: &Buffer<T>) -> Result<QrFactors<T>>;
}

/// Cholesky factorization strategy.
///
/// The input must be symmetric positive-definite. Symmetry is not checked;
/// only the lower triangle is read.
pub trait CholeskyPolicy<T: Real> {
    /// Returns the lower-triangular `L` with `L · Lᵗ = a`.
    ///
    /// # Errors
    ///
    /// `NotSquare` for rectangular input; `NotPositiveDefinite` in
    /// [`CholeskyMode::Strict`] when a radicand is not positive.
    fn factor(a: &Buffer<T>, mode: CholeskyMode) -> Result<Buffer<T>>;
}

/// Estimate of the dominant eigenpair.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenEstimate<T> {
    /// Estimated dominant eigenvalue magnitude.
    pub value: T,
    /// Unit-norm estimate of the corresponding eigenvector.
    pub vector: Vec<T>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the tolerance was met.
    pub converged: bool,
}

/// Dominant-eigenvalue strategy.
pub trait EigenvaluePolicy<T: Real> {
    /// Estimates the dominant eigenpair of `a`.
    ///
    /// # Errors
    ///
    /// `NotSquare`; `NoConvergence` only when the config requires convergence.
    fn dominant(a: &Buffer<T>, config: &PowerIterationConfig<T>) -> Result<EigenEstimate<T>>;
}

/// Direct or factorization-based linear solver.
pub trait DirectSolver<T: Real> {
    /// Solves `a · x = b`.
    ///
    /// # Errors
    ///
    /// Shape errors, plus strategy-specific singularity errors.
    fn solve(a: &Buffer<T>, b: &[T]) -> Result<Vec<T>>;
}

/// Outcome of an iterative solve.
#[derive(Clone, Debug, PartialEq)]
pub struct IterativeSolution<T> {
    /// The last iterate.
    pub solution: Vec<T>,
    /// Sweeps performed.
    pub iterations: usize,
    /// L1 change of the final sweep.
    pub change: T,
    /// Whether the tolerance was met.
    pub converged: bool,
}

/// Fixed-point iterative linear solver.
pub trait IterativeSolver<T: Real> {
    /// Iterates towards the solution of `a · x = b` from the zero vector.
    ///
    /// # Errors
    ///
    /// Shape errors; `NoConvergence` only when the config requires convergence.
    fn solve(a: &Buffer<T>, b: &[T], config: &IterativeConfig<T>) -> Result<IterativeSolution<T>>;
}
