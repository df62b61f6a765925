//! Inversion strategies.

use densa_scalar::Real;
use log::debug;

use super::determinant::{cofactor_expansion, partial_pivot_row};
use crate::buffer::Buffer;
use crate::error::{MatrixError, Result};
use crate::traits::InversionPolicy;

/// Gauss-Jordan reduction of the augmented buffer `[A | I]`.
///
/// Rows are only swapped when the diagonal entry is exactly zero; the
/// replacement is the largest-magnitude entry below it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussJordan;

/// Inverse via the adjugate: `A⁻¹ = adj(A) / det(A)`.
///
/// Every cofactor is a cofactor-expansion determinant, so the cost grows
/// factorially. Keep this to matrices of size six to eight at most.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicalAdjoint;

impl<T: Real> InversionPolicy<T> for GaussJordan {
    fn invert(a: &Buffer<T>) -> Result<Buffer<T>> {
        let n = a.square_size()?;

        let mut aug = Buffer::zeros(n, 2 * n);
        for i in 0..n {
            aug.row_mut(i)[..n].copy_from_slice(a.row(i));
            aug[(i, n + i)] = T::one();
        }

        for col in 0..n {
            if aug[(col, col)].is_zero() {
                let pivot_row = partial_pivot_row(&aug, col, col);
                if aug[(pivot_row, col)].is_zero() {
                    debug!("gauss-jordan: no pivot in column {col}");
                    return Err(MatrixError::Singular {
                        context: "gauss-jordan elimination found no pivot",
                    });
                }
                aug.swap_rows(col, pivot_row);
            }

            let pivot = aug[(col, col)];
            aug.scale_row(col, T::one() / pivot);

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[(row, col)];
                if !factor.is_zero() {
                    aug.add_scaled_row(row, col, -factor);
                }
            }
        }

        let mut inverse = Buffer::zeros(n, n);
        for i in 0..n {
            inverse.row_mut(i).copy_from_slice(&aug.row(i)[n..]);
        }
        Ok(inverse)
    }
}

impl<T: Real> InversionPolicy<T> for ClassicalAdjoint {
    fn invert(a: &Buffer<T>) -> Result<Buffer<T>> {
        let n = a.square_size()?;

        let det = cofactor_expansion(a);
        if det.is_zero() {
            return Err(MatrixError::Singular {
                context: "determinant is zero",
            });
        }

        // adj(A)[j][i] = cofactor(i, j)
        let mut adjugate = Buffer::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let cofactor = T::alternating_sign(i + j) * cofactor_expansion(&a.minor(i, j));
                adjugate[(j, i)] = cofactor;
            }
        }

        Ok(adjugate.scale(T::one() / det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::multiplication::schoolbook_mul;
    use approx::assert_abs_diff_eq;

    fn assert_identity(m: &Buffer<f64>) {
        let n = m.num_rows();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m[(i, j)], expected, epsilon = 1e-10);
            }
        }
    }

    fn sample() -> Buffer<f64> {
        Buffer::from_rows(vec![
            vec![4.0, 7.0, 2.0],
            vec![3.0, 6.0, 1.0],
            vec![2.0, 5.0, 3.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_two_by_two() {
        let m: Buffer<f64> = Buffer::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let expected = [[-2.0, 1.0], [1.5, -0.5]];
        for inv in [GaussJordan::invert(&m).unwrap(), ClassicalAdjoint::invert(&m).unwrap()] {
            for i in 0..2 {
                for j in 0..2 {
                    assert_abs_diff_eq!(inv[(i, j)], expected[i][j], epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_product_is_identity() {
        let a = sample();
        assert_identity(&schoolbook_mul(&a, &GaussJordan::invert(&a).unwrap()));
        assert_identity(&schoolbook_mul(&a, &ClassicalAdjoint::invert(&a).unwrap()));
    }

    #[test]
    fn test_zero_diagonal_needs_swap() {
        let a: Buffer<f64> = Buffer::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, -3.0, 8.0],
        ])
        .unwrap();
        assert_identity(&schoolbook_mul(&a, &GaussJordan::invert(&a).unwrap()));
    }

    #[test]
    fn test_one_by_one() {
        let a = Buffer::column(&[4.0]);
        assert_eq!(ClassicalAdjoint::invert(&a).unwrap()[(0, 0)], 0.25);
        assert_eq!(GaussJordan::invert(&a).unwrap()[(0, 0)], 0.25);
    }

    #[test]
    fn test_singular() {
        let a: Buffer<f64> = Buffer::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert!(GaussJordan::invert(&a).unwrap_err().is_singular());
        assert!(ClassicalAdjoint::invert(&a).unwrap_err().is_singular());

        let zero_row: Buffer<f64> = Buffer::from_rows(vec![vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
        assert!(GaussJordan::invert(&zero_row).unwrap_err().is_singular());
    }
}
