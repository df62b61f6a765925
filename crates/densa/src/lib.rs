//! # densa
//!
//! Fixed-dimension dense matrices with interchangeable algorithm policies.
//!
//! This crate provides:
//! - [`Matrix<T, M, N, P>`](Matrix): an `M`×`N` matrix stored inline, whose
//!   shape is checked by the type system
//! - [`Policies`]: a bundle naming one strategy per operation
//! - [`DefaultPolicies`]: cofactor determinant, adjugate inverse, schoolbook
//!   product, Doolittle LU, Householder QR, iterative Cholesky, power
//!   iteration, Gaussian, QR and Gauss-Seidel solvers
//!
//! ## Example
//!
//! ```
//! use densa::prelude::*;
//!
//! let a: Matrix<f64, 2, 2> = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(a.determinant().unwrap(), -2.0);
//! assert_eq!(a.transpose().to_string(), "1 3\n2 4");
//!
//! let b = Matrix::from_column(vec![5.0, 6.0]).unwrap();
//! let x = a.solve(&b).unwrap();
//! assert!((x[(0, 0)] + 4.0).abs() < 1e-12);
//! assert!((x[(1, 0)] - 4.5).abs() < 1e-12);
//! ```
//!
//! Operations whose strategy cannot handle the element type are absent
//! rather than failing at run time: an integer matrix has a determinant
//! under [`DefaultPolicies`] but no inverse.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod algebra;
mod matrix;
mod ops;
pub mod policies;

pub use densa_linalg as linalg;
pub use densa_linalg::{MatrixError, Result};
pub use densa_scalar::{Real, Scalar};
pub use matrix::Matrix;
pub use policies::{DefaultPolicies, Policies};

/// Common imports.
pub mod prelude {
    pub use crate::linalg::{
        Buffer, CholeskyMode, EigenEstimate, IterativeConfig, IterativeSolution, LuFactors,
        PowerIterationConfig, QrFactors,
    };
    pub use crate::{DefaultPolicies, Matrix, MatrixError, Policies, Real, Scalar};
}

#[cfg(test)]
mod proptests;
