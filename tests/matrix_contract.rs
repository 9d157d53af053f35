//! Property tests for the matrix algebra and softmax contracts.

use proptest::prelude::*;
use tejer::nn::functional::softmax;
use tejer::Matrix;

/// A matrix with 1..5 rows and cols and bounded entries.
fn arb_matrix() -> impl Strategy<Value = Matrix<f32>> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-100.0f32..100.0, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("vec sized to r*c"))
    })
}

/// Two matrices of the same shape.
fn arb_matrix_pair() -> impl Strategy<Value = (Matrix<f32>, Matrix<f32>)> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        let cells = proptest::collection::vec(-100.0f32..100.0, rows * cols);
        (cells.clone(), cells).prop_map(move |(a, b)| {
            (
                Matrix::from_vec(rows, cols, a).expect("vec sized to r*c"),
                Matrix::from_vec(rows, cols, b).expect("vec sized to r*c"),
            )
        })
    })
}

fn assert_close(a: &Matrix<f32>, b: &Matrix<f32>, tol: f32) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).abs() <= tol, "{x} vs {y} differ by more than {tol}");
    }
}

proptest! {
    #[test]
    fn add_is_commutative((a, b) in arb_matrix_pair()) {
        let ab = a.add(&b).expect("same shape");
        let ba = b.add(&a).expect("same shape");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn add_is_associative_within_tolerance(
        (a, b) in arb_matrix_pair(),
        k in -10.0f32..10.0,
    ) {
        let (rows, cols) = a.shape();
        let c = Matrix::filled(rows, cols, k);
        let left = a.add(&b).expect("same shape").add(&c).expect("same shape");
        let right = a.add(&b.add(&c).expect("same shape")).expect("same shape");
        assert_close(&left, &right, 1e-3);
    }

    #[test]
    fn transpose_is_an_involution(a in arb_matrix()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn matmul_identity_is_a_no_op(a in arb_matrix()) {
        let prod = a.matmul(&Matrix::eye(a.n_cols())).expect("cols match eye size");
        assert_close(&prod, &a, 1e-4);
    }

    #[test]
    fn matmul_shape_is_rows_by_cols(
        (m, k, n) in (1usize..5, 1usize..5, 1usize..5),
    ) {
        let a = Matrix::zeros(m, k);
        let b = Matrix::zeros(k, n);
        let c = a.matmul(&b).expect("inner dimensions match");
        prop_assert_eq!(c.shape(), (m, n));
    }

    #[test]
    fn mismatched_matmul_never_yields_output(
        (m, k, n) in (1usize..5, 1usize..5, 1usize..5),
    ) {
        let a = Matrix::zeros(m, k);
        let b = Matrix::zeros(k + 1, n);
        prop_assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn softmax_rows_are_distributions(a in arb_matrix()) {
        let s = softmax(&a);
        for i in 0..s.n_rows() {
            let row = s.row(i);
            prop_assert!(row.iter().all(|&p| p >= 0.0));
            let sum: f32 = row.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-5, "row {} sums to {}", i, sum);
        }
    }

    #[test]
    fn softmax_is_shift_invariant(a in arb_matrix(), shift in -50.0f32..50.0) {
        let (rows, cols) = a.shape();
        let shifted = a.add(&Matrix::filled(rows, cols, shift)).expect("same shape");
        // f32 rounding in the shift itself perturbs the logits slightly
        assert_close(&softmax(&a), &softmax(&shifted), 1e-4);
    }
}
