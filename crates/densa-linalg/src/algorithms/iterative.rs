//! Stationary iterative solvers.
//!
//! Both start from the zero vector and stop once the L1 change between
//! successive iterates falls below the configured tolerance. There is no
//! divergence check; convergence is guaranteed for strictly diagonally
//! dominant systems.

use densa_scalar::Real;
use log::debug;

use super::solve::check_system;
use crate::buffer::Buffer;
use crate::config::IterativeConfig;
use crate::error::{MatrixError, Result};
use crate::traits::{IterativeSolution, IterativeSolver};

/// Jacobi iteration: every component is updated from the previous iterate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jacobi;

/// Gauss-Seidel iteration: components already updated in this sweep are used
/// immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussSeidel;

impl<T: Real> IterativeSolver<T> for Jacobi {
    fn solve(a: &Buffer<T>, b: &[T], config: &IterativeConfig<T>) -> Result<IterativeSolution<T>> {
        iterate(a, b, config, "jacobi", |a, b, x| {
            let previous = x.to_vec();
            for i in 0..x.len() {
                let off_diagonal = (0..x.len())
                    .filter(|&j| j != i)
                    .fold(T::zero(), |acc, j| acc + a[(i, j)] * previous[j]);
                x[i] = (b[i] - off_diagonal) / a[(i, i)];
            }
            l1_distance(x, &previous)
        })
    }
}

impl<T: Real> IterativeSolver<T> for GaussSeidel {
    fn solve(a: &Buffer<T>, b: &[T], config: &IterativeConfig<T>) -> Result<IterativeSolution<T>> {
        iterate(a, b, config, "gauss-seidel", |a, b, x| {
            let previous = x.to_vec();
            for i in 0..x.len() {
                let off_diagonal = (0..x.len())
                    .filter(|&j| j != i)
                    .fold(T::zero(), |acc, j| acc + a[(i, j)] * x[j]);
                x[i] = (b[i] - off_diagonal) / a[(i, i)];
            }
            l1_distance(x, &previous)
        })
    }
}

fn l1_distance<T: Real>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y).abs())
}

/// Drives `sweep` until the change it reports drops below the tolerance.
fn iterate<T, F>(
    a: &Buffer<T>,
    b: &[T],
    config: &IterativeConfig<T>,
    name: &str,
    mut sweep: F,
) -> Result<IterativeSolution<T>>
where
    T: Real,
    F: FnMut(&Buffer<T>, &[T], &mut [T]) -> T,
{
    let n = check_system(a, b)?;
    let mut x = vec![T::zero(); n];
    let mut change = T::infinity();

    for iteration in 1..=config.max_iterations {
        change = sweep(a, b, &mut x);
        if change < config.tolerance {
            debug!("{name} converged after {iteration} sweeps");
            return Ok(IterativeSolution {
                solution: x,
                iterations: iteration,
                change,
                converged: true,
            });
        }
    }

    debug!("{name} did not converge in {} sweeps", config.max_iterations);
    if config.require_convergence {
        return Err(MatrixError::NoConvergence {
            iterations: config.max_iterations,
            change: change.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(IterativeSolution {
        solution: x,
        iterations: config.max_iterations,
        change,
        converged: false,
    })
}
