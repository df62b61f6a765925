//! Property-based tests for the strategy families.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::multiplication::schoolbook_mul;
    use crate::{
        Buffer, CholeskyMode, CholeskyPolicy, CholeskySolver, ClassicalAdjoint, Crout,
        DeterminantPolicy, DirectSolver, DivideAndConquer, Doolittle, FullPivoting, GaussJordan,
        GaussSeidel, GaussianDeterminant, GaussianSolver, Givens, GramSchmidt, Householder,
        InversionPolicy, IterativeCholesky, IterativeConfig, IterativeSolver, LaplaceExpansion,
        LuPolicy, LuSolver, ModifiedGramSchmidt, MultiplicationPolicy, QrFactors, QrPolicy,
        QrSolver, RecursiveCholesky, StandardMultiplication, Strassen,
    };

    // Small integer entries keep products exact in i64.
    fn int_square(n: usize) -> impl Strategy<Value = Buffer<i64>> {
        prop::collection::vec(-9i64..=9, n * n)
            .prop_map(move |data| Buffer::from_vec(n, n, data).unwrap())
    }

    fn real_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Buffer<f64>> {
        prop::collection::vec(-10.0f64..10.0, rows * cols)
            .prop_map(move |data| Buffer::from_vec(rows, cols, data).unwrap())
    }

    // Strictly diagonally dominant, hence non-singular.
    fn dominant(n: usize) -> impl Strategy<Value = Buffer<f64>> {
        real_matrix(n, n).prop_map(move |mut m| {
            for i in 0..n {
                let off: f64 = (0..n).filter(|&j| j != i).map(|j| m[(i, j)].abs()).sum();
                m[(i, i)] = off + 1.0 + m[(i, i)].abs();
            }
            m
        })
    }

    // Mᵗ·M + n·I is symmetric positive-definite.
    fn spd(n: usize) -> impl Strategy<Value = Buffer<f64>> {
        real_matrix(n, n).prop_map(move |m| {
            let mut a = schoolbook_mul(&m.transpose(), &m);
            for i in 0..n {
                a[(i, i)] += n as f64;
            }
            a
        })
    }

    fn sized<S, F>(build: F) -> impl Strategy<Value = S::Value>
    where
        S: Strategy,
        F: Fn(usize) -> S + 'static,
    {
        (1usize..=6).prop_flat_map(build)
    }

    // Product of the row norms bounds |det| and scales the rounding error.
    fn hadamard_bound(m: &Buffer<f64>) -> f64 {
        m.rows()
            .map(|row| row.iter().map(|v| v * v).sum::<f64>().sqrt())
            .product::<f64>()
            .max(1.0)
    }

    fn max_abs_diff(a: &Buffer<f64>, b: &Buffer<f64>) -> f64 {
        a.as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    proptest! {
        #[test]
        fn multiplication_strategies_agree(
            (a, b) in (0u32..4).prop_flat_map(|k| {
                let n = 1usize << k;
                (int_square(n), int_square(n))
            })
        ) {
            let expected = StandardMultiplication::multiply(&a, &b).unwrap();
            prop_assert_eq!(DivideAndConquer::multiply(&a, &b).unwrap(), expected.clone());
            prop_assert_eq!(Strassen::multiply(&a, &b).unwrap(), expected);
        }

        #[test]
        fn transpose_is_involution(m in (1usize..6, 1usize..6).prop_flat_map(|(r, c)| real_matrix(r, c))) {
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn integer_determinants_agree_with_transpose(m in (1usize..5).prop_flat_map(int_square)) {
            prop_assert_eq!(
                LaplaceExpansion::determinant(&m).unwrap(),
                LaplaceExpansion::determinant(&m.transpose()).unwrap()
            );
        }

        #[test]
        fn determinant_strategies_agree(m in sized(|n| real_matrix(n, n))) {
            let laplace = LaplaceExpansion::determinant(&m).unwrap();
            let gauss = GaussianDeterminant::determinant(&m).unwrap();
            prop_assert!((laplace - gauss).abs() <= 1e-9 * hadamard_bound(&m));
        }

        #[test]
        fn inverses_are_inverses(m in sized(dominant)) {
            let id = Buffer::identity(m.num_rows());
            let gj = GaussJordan::invert(&m).unwrap();
            let adj = ClassicalAdjoint::invert(&m).unwrap();
            prop_assert!(max_abs_diff(&schoolbook_mul(&m, &gj), &id) < 1e-9);
            prop_assert!(max_abs_diff(&schoolbook_mul(&m, &adj), &id) < 1e-9);
        }

        #[test]
        fn lu_reconstructs(m in sized(dominant)) {
            for lu in [
                Doolittle::factor(&m).unwrap(),
                Crout::factor(&m).unwrap(),
                FullPivoting::factor(&m).unwrap(),
            ] {
                let product = schoolbook_mul(&lu.l, &lu.u);
                prop_assert!(max_abs_diff(&product, &lu.permute(&m)) < 1e-9);
            }
        }

        #[test]
        fn qr_reconstructs(m in sized(dominant)) {
            for QrFactors { q, r } in [
                GramSchmidt::factor(&m).unwrap(),
                ModifiedGramSchmidt::factor(&m).unwrap(),
                Householder::factor(&m).unwrap(),
                Givens::factor(&m).unwrap(),
            ] {
                prop_assert!(max_abs_diff(&schoolbook_mul(&q, &r), &m) < 1e-9);
                let qtq = schoolbook_mul(&q.transpose(), &q);
                prop_assert!(max_abs_diff(&qtq, &Buffer::identity(q.num_cols())) < 1e-9);
            }
        }

        #[test]
        fn cholesky_variants_agree(a in sized(spd)) {
            let iterative = IterativeCholesky::factor(&a, CholeskyMode::Strict).unwrap();
            let recursive = RecursiveCholesky::factor(&a, CholeskyMode::Strict).unwrap();
            prop_assert!(max_abs_diff(&schoolbook_mul(&iterative, &iterative.transpose()), &a) < 1e-8);
            prop_assert!(max_abs_diff(&iterative, &recursive) < 1e-9);
        }

        #[test]
        fn direct_solvers_satisfy_system(
            (a, b) in sized(spd).prop_flat_map(|a| {
                let n = a.num_rows();
                (Just(a), prop::collection::vec(-10.0f64..10.0, n))
            })
        ) {
            for x in [
                GaussianSolver::solve(&a, &b).unwrap(),
                LuSolver::solve(&a, &b).unwrap(),
                CholeskySolver::solve(&a, &b).unwrap(),
                QrSolver::solve(&a, &b).unwrap(),
            ] {
                for (ax, bi) in a.mv(&x).iter().zip(&b) {
                    prop_assert!((ax - bi).abs() < 1e-7);
                }
            }
        }

        #[test]
        fn gauss_seidel_converges_on_dominant(
            (a, b) in sized(dominant).prop_flat_map(|a| {
                let n = a.num_rows();
                (Just(a), prop::collection::vec(-10.0f64..10.0, n))
            })
        ) {
            let report = GaussSeidel::solve(&a, &b, &IterativeConfig::new(1e-12, 10_000)).unwrap();
            prop_assert!(report.converged);
            for (ax, bi) in a.mv(&report.solution).iter().zip(&b) {
                prop_assert!((ax - bi).abs() < 1e-8);
            }
        }
    }
}
