//! Error types for matrix operations.

use thiserror::Error;

/// Result type alias using [`MatrixError`].
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors that can occur in matrix operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MatrixError {
    /// A source collection does not have the required shape.
    #[error("invalid dimensions: expected {expected:?}, got {got:?}")]
    InvalidDimensions {
        /// Required (rows, cols).
        expected: (usize, usize),
        /// Actual (rows, cols). For ragged input `got.1` is the first
        /// offending row length.
        got: (usize, usize),
    },

    /// Operand shapes are incompatible for a binary operation.
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name.
        op: &'static str,
        /// Left operand (rows, cols).
        lhs: (usize, usize),
        /// Right operand (rows, cols).
        rhs: (usize, usize),
    },

    /// A square matrix is required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A recursive quadrant strategy received a size that is not a power of two.
    #[error("size {size} is not a power of two")]
    PowerOfTwoRequired {
        /// The offending size.
        size: usize,
    },

    /// Singular or near-singular matrix.
    #[error("singular matrix: {context}")]
    Singular {
        /// Where the singularity was detected.
        context: &'static str,
    },

    /// A Cholesky radicand was not positive.
    #[error("matrix is not positive-definite: radicand {value} at diagonal {index}")]
    NotPositiveDefinite {
        /// Diagonal index of the failing step.
        index: usize,
        /// The radicand, converted to `f64`.
        value: f64,
    },

    /// An iterative method exhausted its iteration budget.
    #[error("no convergence after {iterations} iterations (last change {change})")]
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
        /// L1 change of the final iteration, converted to `f64`.
        change: f64,
    },
}

impl MatrixError {
    /// Returns true for the singular-matrix family of failures.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        matches!(self, MatrixError::Singular { .. })
    }
}
