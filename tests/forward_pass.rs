//! End-to-end forward passes through the public API.

use tejer::prelude::*;

#[test]
fn layer_forward_maps_batch_to_output_width() {
    let mut layer = Layer::<3, 2>::with_seed(Some(42));

    let single = Matrix::from_vec(1, 3, vec![1.0_f32, 2.0, 3.0]).expect("valid 1x3");
    assert_eq!(layer.forward(&single).expect("width is 3").shape(), (1, 2));

    let batch = Matrix::from_fn(4, 3, |i, j| (i * 3 + j) as f32);
    assert_eq!(layer.forward(&batch).expect("width is 3").shape(), (4, 2));
}

#[test]
fn network_forward_threads_batch_through_chain() {
    let mut net = Network::new(Layer::<4, 8>::with_seed(Some(1)))
        .then(Layer::<8, 8>::with_seed(Some(2)))
        .then(Layer::<8, 3>::with_seed(Some(3)));

    let batch = Matrix::from_fn(2, 4, |i, j| (i + j) as f32 * 0.5);
    let out = net.forward(&batch).expect("batch width is 4");
    assert_eq!(out.shape(), (2, 3));
}

#[test]
fn softmax_head_produces_row_distributions() {
    let mut net = Network::new(Layer::<4, 8, Relu>::with_seed(Some(5)))
        .then(Layer::<8, 3, Softmax>::with_seed(Some(6)));

    let batch = Matrix::from_fn(3, 4, |i, j| (i * 4 + j) as f32 * 0.25);
    let out = net.forward(&batch).expect("batch width is 4");

    for i in 0..3 {
        let row = out.row(i);
        let sum: f32 = row.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "row {i} sums to {sum}");
        assert!(row.iter().all(|&p| p >= 0.0), "row {i} has a negative entry");
    }
}

#[test]
fn argmax_picks_predicted_class() {
    let mut net = Network::new(Layer::<4, 3, Softmax>::with_seed(Some(9)));
    let sample = Matrix::from_vec(1, 4, vec![0.1_f32, 0.2, 0.3, 0.4]).expect("valid 1x4");
    let probs = net.forward(&sample).expect("width is 4");

    let class = probs.argmax().expect("probabilities are non-empty");
    assert!(class < 3);
}

#[test]
fn wrong_input_width_is_a_dimension_mismatch() {
    let mut net =
        Network::new(Layer::<4, 8>::with_seed(Some(1))).then(Layer::<8, 3>::with_seed(Some(2)));

    let err = net
        .forward(&Matrix::zeros(1, 7))
        .expect_err("7 columns cannot enter a width-4 chain");
    assert!(matches!(err, TejerError::DimensionMismatch { .. }));
}
