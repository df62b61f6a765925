//! Property-based tests for the matrix container.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Matrix;

    fn small_int() -> impl Strategy<Value = i64> {
        -20i64..=20
    }

    fn int_matrix<const M: usize, const N: usize>() -> impl Strategy<Value = Matrix<i64, M, N>> {
        prop::collection::vec(small_int(), M * N).prop_map(|data| {
            let rows = data.chunks(N).map(<[i64]>::to_vec).collect();
            Matrix::from_rows(rows).unwrap()
        })
    }

    proptest! {
        #[test]
        fn transpose_is_involution(a in int_matrix::<3, 5>()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn addition_commutes(a in int_matrix::<3, 4>(), b in int_matrix::<3, 4>()) {
            prop_assert_eq!(a + b, b + a);
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn product_transpose(a in int_matrix::<2, 3>(), b in int_matrix::<3, 4>()) {
            prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        }

        #[test]
        fn product_associates(
            a in int_matrix::<2, 3>(),
            b in int_matrix::<3, 3>(),
            c in int_matrix::<3, 2>(),
        ) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn scaling_distributes(a in int_matrix::<4, 2>(), b in int_matrix::<4, 2>(), k in small_int()) {
            prop_assert_eq!((a + b).scale(k), a.scale(k) + b.scale(k));
            prop_assert_eq!(a.hadamard(&b), b.hadamard(&a));
        }

        #[test]
        fn determinant_is_multiplicative(a in int_matrix::<3, 3>(), b in int_matrix::<3, 3>()) {
            prop_assert_eq!(
                (a * b).determinant().unwrap(),
                a.determinant().unwrap() * b.determinant().unwrap()
            );
        }

        #[test]
        fn trace_of_product_commutes(a in int_matrix::<3, 4>(), b in int_matrix::<4, 3>()) {
            prop_assert_eq!((a * b).trace(), (b * a).trace());
        }
    }
}
