//! Dominant-eigenvalue estimation.

use densa_scalar::Real;
use log::{debug, trace};

use crate::buffer::Buffer;
use crate::config::PowerIterationConfig;
use crate::error::{MatrixError, Result};
use crate::traits::{EigenEstimate, EigenvaluePolicy};

/// Power iteration from the normalized all-ones vector.
///
/// The estimate is the Euclidean norm of `A·x`, i.e. the magnitude of the
/// dominant eigenvalue. A negative dominant eigenvalue flips the iterate's
/// sign on every step, so such runs report `converged == false` even though
/// the value itself settles.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerIteration;

impl<T: Real> EigenvaluePolicy<T> for PowerIteration {
    fn dominant(a: &Buffer<T>, config: &PowerIterationConfig<T>) -> Result<EigenEstimate<T>> {
        let n = a.square_size()?;
        if n == 0 {
            return Ok(EigenEstimate {
                value: T::zero(),
                vector: Vec::new(),
                iterations: 0,
                converged: true,
            });
        }

        let start = T::one() / T::from_usize(n).unwrap_or_else(T::one).sqrt();
        let mut x = vec![start; n];
        let mut value = T::zero();
        let mut change = T::infinity();

        for iteration in 1..=config.max_iterations {
            let y = a.mv(&x);
            let length = y.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt();
            if length.is_zero() {
                trace!("power iteration: A·x vanished at iteration {iteration}");
                return Ok(EigenEstimate {
                    value: T::zero(),
                    vector: x,
                    iterations: iteration,
                    converged: true,
                });
            }

            let next: Vec<T> = y.iter().map(|&v| v / length).collect();
            change = next
                .iter()
                .zip(&x)
                .fold(T::zero(), |acc, (&new, &old)| acc + (new - old).abs());
            x = next;
            value = length;

            if change < config.tolerance {
                debug!("power iteration converged after {iteration} iterations");
                return Ok(EigenEstimate {
                    value,
                    vector: x,
                    iterations: iteration,
                    converged: true,
                });
            }
        }

        debug!(
            "power iteration stopped after {} iterations without converging",
            config.max_iterations
        );
        if config.require_convergence {
            return Err(MatrixError::NoConvergence {
                iterations: config.max_iterations,
                change: change.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(EigenEstimate {
            value,
            vector: x,
            iterations: config.max_iterations,
            converged: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_diagonal() {
        let a: Buffer<f64> = Buffer::from_rows(vec![
            vec![5.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap();
        let est = PowerIteration::dominant(&a, &PowerIterationConfig::default()).unwrap();
        assert!(est.converged);
        assert_abs_diff_eq!(est.value, 5.0, epsilon = 1e-8);
        assert_abs_diff_eq!(est.vector[0].abs(), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_symmetric() {
        // Eigenvalues 3 and 1.
        let a: Buffer<f64> = Buffer::from_rows(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
        let est = PowerIteration::dominant(&a, &PowerIterationConfig::default()).unwrap();
        assert_abs_diff_eq!(est.value, 3.0, epsilon = 1e-9);
        let norm: f64 = est.vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_abs_diff_eq!(norm, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_matrix() {
        let a: Buffer<f64> = Buffer::zeros(3, 3);
        let est = PowerIteration::dominant(&a, &PowerIterationConfig::default()).unwrap();
        assert_eq!(est.value, 0.0);
        assert_eq!(est.iterations, 1);
        assert!(est.vector.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_best_effort_and_strict() {
        // Negative dominant eigenvalue: the iterate keeps flipping sign.
        let a: Buffer<f64> = Buffer::from_rows(vec![vec![-4.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let config = PowerIterationConfig::new(1e-10, 50);

        let est = PowerIteration::dominant(&a, &config).unwrap();
        assert!(!est.converged);
        assert_eq!(est.iterations, 50);
        assert_abs_diff_eq!(est.value, 4.0, epsilon = 1e-6);

        let err = PowerIteration::dominant(&a, &config.strict()).unwrap_err();
        assert!(matches!(err, MatrixError::NoConvergence { iterations: 50, .. }));
    }

    #[test]
    fn test_rectangular_rejected() {
        let a: Buffer<f64> = Buffer::zeros(2, 3);
        assert!(PowerIteration::dominant(&a, &PowerIterationConfig::default()).is_err());
    }
}
