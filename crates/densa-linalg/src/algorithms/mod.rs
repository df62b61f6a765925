//! Strategy implementations.
//!
//! This module contains one file per algorithm family:
//! - Multiplication: schoolbook, divide-and-conquer, Strassen
//! - Determinant: cofactor expansion, Gaussian elimination
//! - Inversion: Gauss-Jordan, classical adjoint
//! - LU: Doolittle, Crout, full pivoting
//! - QR: classical and modified Gram-Schmidt, Householder, Givens
//! - Cholesky: iterative and block-recursive
//! - Dominant eigenvalue: power iteration
//! - Linear systems: direct, factorization-based and stationary iterative solvers

pub mod cholesky;
pub mod determinant;
pub mod eigen;
pub mod inverse;
pub mod iterative;
pub mod lu;
pub mod multiplication;
pub mod qr;
pub mod solve;

pub use cholesky::{IterativeCholesky, RecursiveCholesky};
pub use determinant::{GaussianDeterminant, LaplaceExpansion};
pub use eigen::PowerIteration;
pub use inverse::{ClassicalAdjoint, GaussJordan};
pub use iterative::{GaussSeidel, Jacobi};
pub use lu::{Crout, Doolittle, FullPivoting};
pub use multiplication::{DivideAndConquer, StandardMultiplication, Strassen};
pub use qr::{Givens, GramSchmidt, Householder, ModifiedGramSchmidt};
pub use solve::{CholeskySolver, GaussianSolver, LuSolver, QrSolver};
