//! QR factorization strategies.
//!
//! - [`GramSchmidt`]: classical, projections against the original columns
//! - [`ModifiedGramSchmidt`]: projections against the updated columns
//! - [`Householder`]: accumulated reflections, full `Q`
//! - [`Givens`]: bottom-up plane rotations, full `Q`
//!
//! Gram-Schmidt variants return a thin factorization. A column with zero
//! norm is left unnormalized, so `Q` is not orthonormal for rank-deficient
//! input.

use densa_scalar::Real;
use log::trace;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::traits::{QrFactors, QrPolicy};

/// Classical Gram-Schmidt orthogonalization.
#[derive(Clone, Copy, Debug, Default)]
pub struct GramSchmidt;

/// Modified Gram-Schmidt orthogonalization.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifiedGramSchmidt;

/// Householder reflections.
///
/// Performs at most `min(cols, rows - 1)` reflections; a single-row input
/// gives `Q = [1]` and `R = A`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Householder;

/// Givens rotations, zeroing each column from the bottom up.
#[derive(Clone, Copy, Debug, Default)]
pub struct Givens;

fn dot<T: Real>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

fn norm<T: Real>(v: &[T]) -> T {
    dot(v, v).sqrt()
}

impl<T: Real> QrPolicy<T> for GramSchmidt {
    fn factor(a: &Buffer<T>) -> Result<QrFactors<T>> {
        let (m, n) = a.shape();
        let mut q = Buffer::zeros(m, n);
        let mut r = Buffer::zeros(n, n);

        for j in 0..n {
            let column = a.col(j);
            let mut v = column.clone();
            for i in 0..j {
                let qi = q.col(i);
                let proj = dot(&qi, &column);
                r[(i, j)] = proj;
                for (vk, qk) in v.iter_mut().zip(&qi) {
                    *vk -= proj * *qk;
                }
            }
            r[(j, j)] = norm(&v);
            q.set_col(j, &normalized(v, r[(j, j)]));
        }

        Ok(QrFactors { q, r })
    }
}

impl<T: Real> QrPolicy<T> for ModifiedGramSchmidt {
    fn factor(a: &Buffer<T>) -> Result<QrFactors<T>> {
        let (m, n) = a.shape();
        let mut columns: Vec<Vec<T>> = (0..n).map(|j| a.col(j)).collect();
        let mut q = Buffer::zeros(m, n);
        let mut r = Buffer::zeros(n, n);

        for i in 0..n {
            r[(i, i)] = norm(&columns[i]);
            let qi = normalized(columns[i].clone(), r[(i, i)]);
            for j in i + 1..n {
                let proj = dot(&qi, &columns[j]);
                r[(i, j)] = proj;
                for (vk, qk) in columns[j].iter_mut().zip(&qi) {
                    *vk -= proj * *qk;
                }
            }
            q.set_col(i, &qi);
        }

        Ok(QrFactors { q, r })
    }
}

fn normalized<T: Real>(mut v: Vec<T>, length: T) -> Vec<T> {
    if length.is_zero() {
        trace!("gram-schmidt: zero-norm column left unnormalized");
        return v;
    }
    for x in &mut v {
        *x /= length;
    }
    v
}

impl<T: Real> QrPolicy<T> for Householder {
    fn factor(a: &Buffer<T>) -> Result<QrFactors<T>> {
        let (m, n) = a.shape();
        let mut r = a.clone();
        // Accumulates H_k ⋯ H_1, which is Qᵗ.
        let mut qt = Buffer::identity(m);

        for k in 0..n.min(m.saturating_sub(1)) {
            let mut v: Vec<T> = (k..m).map(|i| r[(i, k)]).collect();
            let x_norm = norm(&v);
            if x_norm.is_zero() {
                continue;
            }

            let sign = if v[0] < T::zero() { -T::one() } else { T::one() };
            v[0] += sign * x_norm;
            let v_norm = norm(&v);
            for x in &mut v {
                *x /= v_norm;
            }

            reflect(&mut r, &v, k, k..n);
            reflect(&mut qt, &v, k, 0..m);
            for i in k + 1..m {
                r[(i, k)] = T::zero();
            }
        }

        Ok(QrFactors {
            q: qt.transpose(),
            r,
        })
    }
}

/// Applies `I - 2vvᵗ` to rows `offset..` of `m`, restricted to `cols`.
fn reflect<T: Real>(m: &mut Buffer<T>, v: &[T], offset: usize, cols: std::ops::Range<usize>) {
    let two = T::two();
    for j in cols {
        let projection = v
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (i, &vi)| acc + vi * m[(offset + i, j)]);
        for (i, &vi) in v.iter().enumerate() {
            m[(offset + i, j)] -= two * vi * projection;
        }
    }
}

impl<T: Real> QrPolicy<T> for Givens {
    fn factor(a: &Buffer<T>) -> Result<QrFactors<T>> {
        let (m, n) = a.shape();
        let mut r = a.clone();
        let mut qt = Buffer::identity(m);

        for j in 0..n {
            for i in (j + 1..m).rev() {
                let below = r[(i, j)];
                if below.is_zero() {
                    continue;
                }
                let above = r[(i - 1, j)];
                let hypot = above.hypot(below);
                let c = above / hypot;
                let s = -below / hypot;

                rotate(&mut r, i, c, s);
                rotate(&mut qt, i, c, s);
                r[(i, j)] = T::zero();
            }
        }

        Ok(QrFactors {
            q: qt.transpose(),
            r,
        })
    }
}

/// Rotates rows `i - 1` and `i` of `m` in place.
fn rotate<T: Real>(m: &mut Buffer<T>, i: usize, c: T, s: T) {
    for k in 0..m.num_cols() {
        let upper = m[(i - 1, k)];
        let lower = m[(i, k)];
        m[(i - 1, k)] = c * upper - s * lower;
        m[(i, k)] = s * upper + c * lower;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::multiplication::schoolbook_mul;
    use approx::assert_abs_diff_eq;

    fn square() -> Buffer<f64> {
        Buffer::from_rows(vec![
            vec![12.0, -51.0, 4.0],
            vec![6.0, 167.0, -68.0],
            vec![-4.0, 24.0, -41.0],
        ])
        .unwrap()
    }

    fn tall() -> Buffer<f64> {
        Buffer::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            vec![5.0, 6.0],
            vec![7.0, 9.0],
        ])
        .unwrap()
    }

    fn assert_close(a: &Buffer<f64>, b: &Buffer<f64>) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    fn check<P: QrPolicy<f64>>(a: &Buffer<f64>) {
        let QrFactors { q, r } = P::factor(a).unwrap();
        assert_close(&schoolbook_mul(&q, &r), a);

        let qtq = schoolbook_mul(&q.transpose(), &q);
        assert_close(&qtq, &Buffer::identity(q.num_cols()));

        for i in 0..r.num_rows() {
            for j in 0..i.min(r.num_cols()) {
                assert_abs_diff_eq!(r[(i, j)], 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_all_variants_square() {
        check::<GramSchmidt>(&square());
        check::<ModifiedGramSchmidt>(&square());
        check::<Householder>(&square());
        check::<Givens>(&square());
    }

    #[test]
    fn test_all_variants_tall() {
        check::<GramSchmidt>(&tall());
        check::<ModifiedGramSchmidt>(&tall());
        check::<Householder>(&tall());
        check::<Givens>(&tall());
    }

    #[test]
    fn test_shapes() {
        let thin = GramSchmidt::factor(&tall()).unwrap();
        assert_eq!(thin.q.shape(), (4, 2));
        assert_eq!(thin.r.shape(), (2, 2));

        let full = Householder::factor(&tall()).unwrap();
        assert_eq!(full.q.shape(), (4, 4));
        assert_eq!(full.r.shape(), (4, 2));
    }

    #[test]
    fn test_full_r_is_exactly_upper_triangular() {
        let wide: Buffer<f64> =
            Buffer::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        for a in [wide, tall(), square()] {
            for r in [Householder::factor(&a).unwrap().r, Givens::factor(&a).unwrap().r] {
                for i in 0..r.num_rows() {
                    for j in 0..i.min(r.num_cols()) {
                        assert_eq!(r[(i, j)], 0.0, "entry ({i}, {j})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_householder_single_row() {
        let a: Buffer<f64> = Buffer::from_rows(vec![vec![3.0, -1.0, 2.0]]).unwrap();
        let QrFactors { q, r } = Householder::factor(&a).unwrap();
        assert_eq!(q.to_rows(), vec![vec![1.0]]);
        assert_eq!(r, a);
    }

    #[test]
    fn test_zero_column_left_unnormalized() {
        let a: Buffer<f64> = Buffer::from_rows(vec![vec![1.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let QrFactors { q, r } = ModifiedGramSchmidt::factor(&a).unwrap();
        assert_eq!(r[(1, 1)], 0.0);
        assert_eq!(q.col(1), vec![0.0, 0.0]);
        assert!(q.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_gram_schmidt_positive_diagonal() {
        let QrFactors { r, .. } = GramSchmidt::factor(&square()).unwrap();
        assert_abs_diff_eq!(r[(0, 0)], 14.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[(1, 1)], 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r[(2, 2)], 35.0, epsilon = 1e-9);
    }
}
