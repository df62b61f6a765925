//! # densa-linalg
//!
//! Dense linear-algebra strategies behind the `densa` matrix container.
//!
//! This crate provides:
//! - [`Buffer`], the row-major interchange buffer every strategy works on
//! - One trait per algorithm family (see [`traits`])
//! - Interchangeable strategies for each family (see [`algorithms`])
//! - [`MatrixError`] and the configuration types for iterative and
//!   domain-checked strategies
//!
//! ## Strategy Selection
//!
//! Strategies are zero-sized types with associated functions, chosen at
//! compile time:
//!
//! ```
//! use densa_linalg::{Buffer, DeterminantPolicy, GaussianDeterminant, LaplaceExpansion};
//!
//! let m = Buffer::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(LaplaceExpansion::determinant(&m).unwrap(), -2.0);
//! assert_eq!(GaussianDeterminant::determinant(&m).unwrap(), -2.0);
//! ```
//!
//! All strategies are single-threaded and copy their input before mutating.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]

pub mod algorithms;
pub mod buffer;
pub mod config;
pub mod error;
pub mod traits;

pub use algorithms::{
    CholeskySolver, ClassicalAdjoint, Crout, DivideAndConquer, Doolittle, FullPivoting,
    GaussJordan, GaussSeidel, GaussianDeterminant, GaussianSolver, Givens, GramSchmidt,
    Householder, IterativeCholesky, Jacobi, LaplaceExpansion, LuSolver, ModifiedGramSchmidt,
    PowerIteration, QrSolver, RecursiveCholesky, StandardMultiplication, Strassen,
};
pub use buffer::Buffer;
pub use config::{CholeskyMode, IterativeConfig, PowerIterationConfig};
pub use error::{MatrixError, Result};
pub use traits::{
    CholeskyPolicy, DeterminantPolicy, DirectSolver, EigenEstimate, EigenvaluePolicy,
    InversionPolicy, IterativeSolution, IterativeSolver, LuFactors, LuPolicy,
    MultiplicationPolicy, QrFactors, QrPolicy,
};

#[cfg(test)]
mod proptests;
