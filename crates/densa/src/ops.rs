//! Arithmetic operators.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use densa_linalg::MultiplicationPolicy;
use densa_scalar::Scalar;

use crate::matrix::Matrix;
use crate::policies::Policies;

impl<T: Scalar, const M: usize, const N: usize, P> Add for Matrix<T, M, N, P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> Sub for Matrix<T, M, N, P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> AddAssign for Matrix<T, M, N, P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> SubAssign for Matrix<T, M, N, P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize, P> Neg for Matrix<T, M, N, P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

/// Matrix product through the bundle's multiplication strategy.
///
/// # Panics
///
/// Panics if the strategy rejects the operands, e.g. a quadrant strategy on
/// a size that is not a power of two. Use [`Matrix::multiply`] to handle
/// that case.
impl<T, const M: usize, const N: usize, const K: usize, P> Mul<Matrix<T, N, K, P>>
    for Matrix<T, M, N, P>
where
    T: Scalar,
    P: Policies,
    P::Multiplication: MultiplicationPolicy<T>,
{
    type Output = Matrix<T, M, K, P>;

    fn mul(self, rhs: Matrix<T, N, K, P>) -> Self::Output {
        match self.multiply(&rhs) {
            Ok(product) => product,
            Err(err) => panic!("matrix multiplication failed: {err}"),
        }
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize, P> Mul<$t> for Matrix<$t, M, N, P> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self {
                    self.scale(rhs)
                }
            }

            impl<const M: usize, const N: usize, P> Mul<Matrix<$t, M, N, P>> for $t {
                type Output = Matrix<$t, M, N, P>;

                fn mul(self, rhs: Matrix<$t, M, N, P>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, f32, f64);
