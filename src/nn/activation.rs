//! Activation function modules.
//!
//! These zero-sized types wrap the functions in [`functional`](super::functional)
//! so a [`Layer`](super::Layer) can be parametrized over which transform it
//! applies. A layer depends only on the [`Activation::apply`] capability,
//! never on a specific activation's identity.

use super::functional;
use crate::primitives::Matrix;

/// A pure transform from a matrix to a matrix of identical shape.
///
/// `apply` is an associated function rather than a method: activations
/// carry no state, and the layer dispatches through the type parameter at
/// zero runtime cost.
pub trait Activation {
    /// Applies the transform, per element (or per row for [`Softmax`]).
    fn apply(x: &Matrix<f32>) -> Matrix<f32>;
}

/// Rectified Linear Unit: max(0, x).
#[derive(Debug, Clone, Copy, Default)]
pub struct Relu;

impl Activation for Relu {
    fn apply(x: &Matrix<f32>) -> Matrix<f32> {
        functional::relu(x)
    }
}

/// Sigmoid: 1 / (1 + exp(-x)). Maps inputs to (0, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn apply(x: &Matrix<f32>) -> Matrix<f32> {
        functional::sigmoid(x)
    }
}

/// Row-wise softmax. Converts each row of logits to probabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl Activation for Softmax {
    fn apply(x: &Matrix<f32>) -> Matrix<f32> {
        functional::softmax(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relu_module_matches_functional() {
        let x = Matrix::from_vec(1, 3, vec![-1.0_f32, 0.0, 2.0]).expect("valid");
        assert_eq!(Relu::apply(&x), functional::relu(&x));
    }

    #[test]
    fn test_activations_preserve_shape() {
        let x = Matrix::zeros(4, 3);
        assert_eq!(Relu::apply(&x).shape(), (4, 3));
        assert_eq!(Sigmoid::apply(&x).shape(), (4, 3));
        assert_eq!(Softmax::apply(&x).shape(), (4, 3));
    }

    #[test]
    fn test_softmax_module_rows_are_distributions() {
        let x = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 0.0, 0.0, 0.0]).expect("valid");
        let y = Softmax::apply(&x);
        for i in 0..2 {
            let sum: f32 = y.row(i).iter().sum();
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }
}
