//! Configuration for iterative and domain-checked strategies.

use densa_scalar::Real;

/// Configuration for the Jacobi and Gauss-Seidel solvers.
#[derive(Clone, Debug, PartialEq)]
pub struct IterativeConfig<T> {
    /// Stop once the L1 change between successive iterates drops below this.
    pub tolerance: T,
    /// Maximum number of sweeps.
    pub max_iterations: usize,
    /// Fail with `NoConvergence` instead of returning the last iterate.
    pub require_convergence: bool,
}

impl<T: Real> IterativeConfig<T> {
    /// Creates a lenient configuration with the given stopping criteria.
    #[must_use]
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            require_convergence: false,
        }
    }

    /// Returns this configuration with `require_convergence` set.
    #[must_use]
    pub fn strict(self) -> Self {
        Self {
            require_convergence: true,
            ..self
        }
    }
}

impl<T: Real> Default for IterativeConfig<T> {
    fn default() -> Self {
        Self::new(T::constant(1e-7), 1000)
    }
}

/// Configuration for power iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerIterationConfig<T> {
    /// Stop once the L1 change between successive unit vectors drops below this.
    pub tolerance: T,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Fail with `NoConvergence` instead of returning the best-effort estimate.
    pub require_convergence: bool,
}

impl<T: Real> PowerIterationConfig<T> {
    /// Creates a lenient configuration with the given stopping criteria.
    #[must_use]
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            require_convergence: false,
        }
    }

    /// Returns this configuration with `require_convergence` set.
    #[must_use]
    pub fn strict(self) -> Self {
        Self {
            require_convergence: true,
            ..self
        }
    }
}

impl<T: Real> Default for PowerIterationConfig<T> {
    fn default() -> Self {
        Self::new(T::constant(1e-10), 1000)
    }
}

/// How Cholesky strategies treat a non-positive radicand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CholeskyMode {
    /// Fail with `NotPositiveDefinite`.
    #[default]
    Strict,
    /// Take the square root anyway; the NaN propagates through the factor.
    Lenient,
}
