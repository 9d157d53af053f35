//! Statically shaped affine + activation layer.

use std::marker::PhantomData;

use super::activation::{Activation, Relu};
use super::init::he_normal;
use crate::error::Result;
use crate::primitives::Matrix;

/// One affine-plus-activation stage: `A::apply(input * W + b)`.
///
/// Both widths are const generics, so the weight shape `IN x OUT` and
/// bias shape `1 x OUT` are fixed at the type level and never change
/// after construction. The batch size is the only runtime dimension:
/// forward maps a `(batch x IN)` matrix to `(batch x OUT)`.
///
/// Each forward call caches its input and output for a future training
/// extension; the caches are overwritten unconditionally on every call.
///
/// # Example
///
/// ```
/// use tejer::nn::Layer;
/// use tejer::Matrix;
///
/// let mut layer = Layer::<3, 2>::with_seed(Some(42));
/// let input = Matrix::zeros(1, 3);
/// let output = layer.forward(&input).expect("input width matches IN");
/// assert_eq!(output.shape(), (1, 2));
/// ```
pub struct Layer<const IN: usize, const OUT: usize, A: Activation = Relu> {
    weights: Matrix<f32>,
    bias: Matrix<f32>,
    last_input: Option<Matrix<f32>>,
    last_output: Option<Matrix<f32>>,
    activation: PhantomData<A>,
}

impl<const IN: usize, const OUT: usize, A: Activation> Layer<IN, OUT, A> {
    /// Input width, as a compile-time constant.
    pub const INPUT_SIZE: usize = IN;

    /// Output width, as a compile-time constant.
    pub const OUTPUT_SIZE: usize = OUT;

    /// Create a layer with entropy-seeded He weights and zero bias.
    ///
    /// Weights are nondeterministic; use [`Layer::with_seed`] for
    /// reproducible construction.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Create a layer with a specific random seed.
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            weights: he_normal(IN, OUT, 1.0, seed),
            bias: Matrix::zeros(1, OUT),
            last_input: None,
            last_output: None,
            activation: PhantomData,
        }
    }

    /// Push a `(batch x IN)` matrix through the layer.
    ///
    /// Computes `A::apply(input * W + b)` and caches both sides of the
    /// call. The batch dimension passes through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `input.n_cols() != IN` — the one
    /// runtime shape check, since batch width is not known at compile
    /// time.
    pub fn forward(&mut self, input: &Matrix<f32>) -> Result<Matrix<f32>> {
        let output = A::apply(&input.matmul(&self.weights)?.add_bias(&self.bias)?);
        self.last_input = Some(input.clone());
        self.last_output = Some(output.clone());
        Ok(output)
    }

    /// The `IN x OUT` weight matrix.
    #[must_use]
    pub fn weights(&self) -> &Matrix<f32> {
        &self.weights
    }

    /// Mutable access to the weights (for a training extension).
    pub fn weights_mut(&mut self) -> &mut Matrix<f32> {
        &mut self.weights
    }

    /// The `1 x OUT` bias row.
    #[must_use]
    pub fn bias(&self) -> &Matrix<f32> {
        &self.bias
    }

    /// Mutable access to the bias (for a training extension).
    pub fn bias_mut(&mut self) -> &mut Matrix<f32> {
        &mut self.bias
    }

    /// Input of the most recent forward call, if any.
    #[must_use]
    pub fn last_input(&self) -> Option<&Matrix<f32>> {
        self.last_input.as_ref()
    }

    /// Output of the most recent forward call, if any.
    #[must_use]
    pub fn last_output(&self) -> Option<&Matrix<f32>> {
        self.last_output.as_ref()
    }
}

impl<const IN: usize, const OUT: usize, A: Activation> Default for Layer<IN, OUT, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const IN: usize, const OUT: usize, A: Activation> std::fmt::Debug for Layer<IN, OUT, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("input_size", &IN)
            .field("output_size", &OUT)
            .finish_non_exhaustive()
    }
}
