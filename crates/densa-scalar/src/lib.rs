//! # densa-scalar
//!
//! Element-type capabilities for densa matrices.
//!
//! This crate provides:
//! - `Scalar`: what every matrix container operation needs (ring arithmetic,
//!   copy semantics, equality)
//! - `Real`: what the numerical strategies need on top of that (ordering,
//!   absolute value, square roots, float constants)
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Scalar   (i32, i64, f32, f64, ...)
//!  └── Real   (f32, f64)
//! ```
//!
//! Both traits are blanket-implemented, so any type satisfying the
//! `num-traits` bounds participates automatically.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

pub use traits::{Real, Scalar};
