//! Functional interface for activation operations.
//!
//! Stateless functions that mirror the module-based activations. Every
//! function takes a matrix and returns a fresh matrix of identical shape;
//! [`softmax`] normalizes per row, the rest apply per element.
//!
//! The `*_derivative` functions return the local gradient and exist for a
//! future training extension; nothing in the forward path consumes them.

use crate::primitives::Matrix;

/// ReLU activation: max(0, x), element-wise.
#[must_use]
pub fn relu(x: &Matrix<f32>) -> Matrix<f32> {
    map(x, |v| v.max(0.0))
}

/// ReLU local gradient: 1 where x > 0, else 0.
#[must_use]
pub fn relu_derivative(x: &Matrix<f32>) -> Matrix<f32> {
    map(x, |v| if v > 0.0 { 1.0 } else { 0.0 })
}

/// Sigmoid activation: 1 / (1 + exp(-x)), element-wise.
#[must_use]
pub fn sigmoid(x: &Matrix<f32>) -> Matrix<f32> {
    map(x, sigmoid_scalar)
}

/// Sigmoid local gradient: s * (1 - s) where s = sigmoid(x).
#[must_use]
pub fn sigmoid_derivative(x: &Matrix<f32>) -> Matrix<f32> {
    map(x, |v| {
        let s = sigmoid_scalar(v);
        s * (1.0 - s)
    })
}

/// Scalar sigmoid for non-matrix contexts.
#[inline]
#[must_use]
pub fn sigmoid_scalar(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Softmax over each row: subtract the row maximum, exponentiate,
/// normalize by the row sum.
///
/// Each output row is a probability distribution: non-negative entries
/// summing to 1. The max subtraction keeps exp finite for large inputs.
#[must_use]
pub fn softmax(x: &Matrix<f32>) -> Matrix<f32> {
    let (rows, cols) = x.shape();
    let mut result = Matrix::zeros(rows, cols);
    for i in 0..rows {
        let row = x.row(i);
        let max = row.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let exp: Vec<f32> = row.iter().map(|&v| (v - max).exp()).collect();
        let sum: f32 = exp.iter().sum();
        for (j, &e) in exp.iter().enumerate() {
            result.set(i, j, e / sum);
        }
    }
    result
}

fn map(x: &Matrix<f32>, f: impl Fn(f32) -> f32) -> Matrix<f32> {
    let (rows, cols) = x.shape();
    Matrix::from_fn(rows, cols, |i, j| f(x.get(i, j)))
}
