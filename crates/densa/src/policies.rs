//! Policy bundles.
//!
//! A policy bundle is a type naming one strategy per operation. A
//! [`Matrix`](crate::Matrix) dispatches every algorithmic operation to the
//! strategy its bundle names; operations whose strategy does not implement
//! the matching trait simply do not exist for that matrix type.
//!
//! ```
//! use densa::linalg::{
//!     ClassicalAdjoint, GaussSeidel, GaussianDeterminant, GaussianSolver, Givens,
//!     IterativeCholesky, LuSolver, PowerIteration, Crout, Strassen,
//! };
//! use densa::{Matrix, Policies};
//!
//! struct Fast;
//!
//! impl Policies for Fast {
//!     type Determinant = GaussianDeterminant;
//!     type Inversion = ClassicalAdjoint;
//!     type Multiplication = Strassen;
//!     type Lu = Crout;
//!     type Qr = Givens;
//!     type Cholesky = IterativeCholesky;
//!     type Eigenvalue = PowerIteration;
//!     type Solver = GaussianSolver;
//!     type DecompositionSolver = LuSolver;
//!     type IterativeSolver = GaussSeidel;
//! }
//!
//! let m: Matrix<f64, 2, 2, Fast> = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(m.determinant().unwrap(), -2.0);
//! ```

use densa_linalg::{
    ClassicalAdjoint, Doolittle, GaussSeidel, GaussianSolver, Householder, IterativeCholesky,
    LaplaceExpansion, PowerIteration, QrSolver, StandardMultiplication,
};

/// One strategy type per matrix operation.
///
/// The associated types are unconstrained here; each operation on
/// [`Matrix`](crate::Matrix) states the trait its strategy must implement.
pub trait Policies {
    /// Strategy for `determinant`.
    type Determinant;
    /// Strategy for `inverse`.
    type Inversion;
    /// Strategy for `multiply` and `*`.
    type Multiplication;
    /// Strategy for `lu_decomposition` and `lu_factors`.
    type Lu;
    /// Strategy for `qr_factors`, `qr_decomposition` and `orthogonalize`.
    type Qr;
    /// Strategy for `cholesky_decomposition`.
    type Cholesky;
    /// Strategy for `dominant_eigenvalue` and `eigen_estimate`.
    type Eigenvalue;
    /// Strategy for `solve`.
    type Solver;
    /// Strategy for `solve_with_decompose`.
    type DecompositionSolver;
    /// Strategy for `solve_iteratively`.
    type IterativeSolver;
}

/// The bundle used when a matrix type names none.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPolicies;

impl Policies for DefaultPolicies {
    type Determinant = LaplaceExpansion;
    type Inversion = ClassicalAdjoint;
    type Multiplication = StandardMultiplication;
    type Lu = Doolittle;
    type Qr = Householder;
    type Cholesky = IterativeCholesky;
    type Eigenvalue = PowerIteration;
    type Solver = GaussianSolver;
    type DecompositionSolver = QrSolver;
    type IterativeSolver = GaussSeidel;
}
