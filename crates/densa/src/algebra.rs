//! Operations dispatched to the policy bundle.
//!
//! Each method converts the matrix to a [`Buffer`](densa_linalg::Buffer), hands it to the strategy
//! named by `P` and rebuilds a matrix from the result. A method is available
//! only when its strategy implements the matching trait for `T`.

use log::warn;

use densa_linalg::{
    CholeskyMode, CholeskyPolicy, DeterminantPolicy, DirectSolver, EigenEstimate,
    EigenvaluePolicy, InversionPolicy, IterativeConfig, IterativeSolution, IterativeSolver,
    LuFactors, LuPolicy, MultiplicationPolicy, PowerIterationConfig, QrFactors, QrPolicy, Result,
};
use densa_scalar::{Real, Scalar};

use crate::matrix::Matrix;
use crate::policies::Policies;

impl<T, const M: usize, const N: usize, P> Matrix<T, M, N, P>
where
    T: Scalar,
    P: Policies,
{
    /// Matrix product through the bundle's multiplication strategy.
    ///
    /// # Errors
    ///
    /// Whatever the strategy rejects; the quadrant strategies require
    /// square power-of-two operands.
    pub fn multiply<const K: usize>(&self, rhs: &Matrix<T, N, K, P>) -> Result<Matrix<T, M, K, P>>
    where
        P::Multiplication: MultiplicationPolicy<T>,
    {
        let product = <P::Multiplication as MultiplicationPolicy<T>>::multiply(
            &self.to_buffer(),
            &rhs.to_buffer(),
        )?;
        Matrix::from_buffer(&product)
    }
}

impl<T, const M: usize, const N: usize, P> Matrix<T, M, N, P>
where
    T: Real,
    P: Policies,
{
    /// QR factorization of a matrix of any shape, as buffers.
    ///
    /// The factor shapes depend on the strategy: Gram-Schmidt variants give
    /// `Q` as `M`×`N`, reflection and rotation variants give `Q` as `M`×`M`.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn qr_factors(&self) -> Result<QrFactors<T>>
    where
        P::Qr: QrPolicy<T>,
    {
        <P::Qr as QrPolicy<T>>::factor(&self.to_buffer())
    }
}

impl<T, const N: usize, P> Matrix<T, N, N, P>
where
    T: Scalar,
    P: Policies,
{
    /// Determinant through the bundle's determinant strategy.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn determinant(&self) -> Result<T>
    where
        P::Determinant: DeterminantPolicy<T>,
    {
        <P::Determinant as DeterminantPolicy<T>>::determinant(&self.to_buffer())
    }
}

impl<T, const N: usize, P> Matrix<T, N, N, P>
where
    T: Real,
    P: Policies,
{
    /// Inverse through the bundle's inversion strategy.
    ///
    /// # Errors
    ///
    /// `Singular` if the matrix has no inverse.
    pub fn inverse(&self) -> Result<Self>
    where
        P::Inversion: InversionPolicy<T>,
    {
        Self::from_buffer(&<P::Inversion as InversionPolicy<T>>::invert(&self.to_buffer())?)
    }

    /// LU factors including the pivoting permutations.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn lu_factors(&self) -> Result<LuFactors<T>>
    where
        P::Lu: LuPolicy<T>,
    {
        <P::Lu as LuPolicy<T>>::factor(&self.to_buffer())
    }

    /// Returns `(L, U)`.
    ///
    /// For a pivoting strategy the product equals the permuted matrix; use
    /// [`lu_factors`](Self::lu_factors) to get the permutations.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn lu_decomposition(&self) -> Result<(Self, Self)>
    where
        P::Lu: LuPolicy<T>,
    {
        let LuFactors { l, u, .. } = self.lu_factors()?;
        Ok((Self::from_buffer(&l)?, Self::from_buffer(&u)?))
    }

    /// Returns `(Q, R)`.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn qr_decomposition(&self) -> Result<(Self, Self)>
    where
        P::Qr: QrPolicy<T>,
    {
        let QrFactors { q, r } = self.qr_factors()?;
        Ok((Self::from_buffer(&q)?, Self::from_buffer(&r)?))
    }

    /// Returns the orthogonal factor `Q` of the QR factorization.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn orthogonalize(&self) -> Result<Self>
    where
        P::Qr: QrPolicy<T>,
    {
        Self::from_buffer(&self.qr_factors()?.q)
    }

    /// Lower-triangular Cholesky factor, rejecting indefinite input.
    ///
    /// # Errors
    ///
    /// `NotPositiveDefinite` when a radicand is not positive.
    pub fn cholesky_decomposition(&self) -> Result<Self>
    where
        P::Cholesky: CholeskyPolicy<T>,
    {
        self.cholesky_with_mode(CholeskyMode::Strict)
    }

    /// Lower-triangular Cholesky factor with the given domain handling.
    ///
    /// # Errors
    ///
    /// `NotPositiveDefinite` in [`CholeskyMode::Strict`].
    pub fn cholesky_with_mode(&self, mode: CholeskyMode) -> Result<Self>
    where
        P::Cholesky: CholeskyPolicy<T>,
    {
        Self::from_buffer(&<P::Cholesky as CholeskyPolicy<T>>::factor(&self.to_buffer(), mode)?)
    }

    /// Estimated magnitude of the dominant eigenvalue with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn dominant_eigenvalue(&self) -> Result<T>
    where
        P::Eigenvalue: EigenvaluePolicy<T>,
    {
        let estimate = self.eigen_estimate(&PowerIterationConfig::default())?;
        if !estimate.converged {
            warn!(
                "dominant eigenvalue did not converge in {} iterations",
                estimate.iterations
            );
        }
        Ok(estimate.value)
    }

    /// Full dominant eigenpair estimate.
    ///
    /// # Errors
    ///
    /// `NoConvergence` when `config.require_convergence` is set and the
    /// tolerance is not met.
    pub fn eigen_estimate(&self, config: &PowerIterationConfig<T>) -> Result<EigenEstimate<T>>
    where
        P::Eigenvalue: EigenvaluePolicy<T>,
    {
        <P::Eigenvalue as EigenvaluePolicy<T>>::dominant(&self.to_buffer(), config)
    }

    /// Solves `self · x = b` with the bundle's direct solver.
    ///
    /// # Errors
    ///
    /// `Singular` for a (near-)singular system.
    pub fn solve(&self, b: &Matrix<T, N, 1, P>) -> Result<Matrix<T, N, 1, P>>
    where
        P::Solver: DirectSolver<T>,
    {
        let x = <P::Solver as DirectSolver<T>>::solve(&self.to_buffer(), &b.to_vec())?;
        Matrix::from_column(x)
    }

    /// Solves `self · x = b` with the bundle's factorization-based solver.
    ///
    /// # Errors
    ///
    /// Whatever the strategy reports.
    pub fn solve_with_decompose(&self, b: &Matrix<T, N, 1, P>) -> Result<Matrix<T, N, 1, P>>
    where
        P::DecompositionSolver: DirectSolver<T>,
    {
        let x =
            <P::DecompositionSolver as DirectSolver<T>>::solve(&self.to_buffer(), &b.to_vec())?;
        Matrix::from_column(x)
    }

    /// Iteratively solves `self · x = b`, returning the last iterate.
    ///
    /// A run that stops at `max_iterations` is logged, not reported.
    ///
    /// # Errors
    ///
    /// Only shape errors from the strategy.
    pub fn solve_iteratively(
        &self,
        b: &Matrix<T, N, 1, P>,
        tolerance: T,
        max_iterations: usize,
    ) -> Result<Matrix<T, N, 1, P>>
    where
        P::IterativeSolver: IterativeSolver<T>,
    {
        let config = IterativeConfig::new(tolerance, max_iterations);
        let report = self.solve_iteratively_with(b, &config)?;
        if !report.converged {
            warn!(
                "iterative solve stopped after {} sweeps without converging",
                report.iterations
            );
        }
        Matrix::from_column(report.solution)
    }

    /// Iteratively solves `self · x = b` under `config`.
    ///
    /// # Errors
    ///
    /// `NoConvergence` when `config.require_convergence` is set and the
    /// tolerance is not met.
    pub fn solve_iteratively_with(
        &self,
        b: &Matrix<T, N, 1, P>,
        config: &IterativeConfig<T>,
    ) -> Result<IterativeSolution<T>>
    where
        P::IterativeSolver: IterativeSolver<T>,
    {
        <P::IterativeSolver as IterativeSolver<T>>::solve(&self.to_buffer(), &b.to_vec(), config)
    }
}

