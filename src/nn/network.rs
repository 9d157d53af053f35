//! Statically validated layer chains.
//!
//! A [`Network`] is built one layer at a time with [`Network::then`]. The
//! next layer's input width is the same const parameter as the network's
//! current output width, so a chain whose adjacent widths disagree never
//! type-checks — there is no runtime counterpart to that error.

use super::activation::Activation;
use super::layer::Layer;
use crate::error::Result;
use crate::primitives::Matrix;

/// Anything that can push a batch matrix through itself.
pub trait Forward {
    /// Maps a `(batch x in)` matrix to a `(batch x out)` matrix.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the input width disagrees with the
    /// stage's expected width.
    fn forward(&mut self, input: &Matrix<f32>) -> Result<Matrix<f32>>;
}

impl<const IN: usize, const OUT: usize, A: Activation> Forward for Layer<IN, OUT, A> {
    fn forward(&mut self, input: &Matrix<f32>) -> Result<Matrix<f32>> {
        Layer::forward(self, input)
    }
}

/// Two stages run in sequence; the composition node of a [`Network`].
#[derive(Debug)]
pub struct Chain<F, S> {
    first: F,
    second: S,
}

impl<F: Forward, S: Forward> Forward for Chain<F, S> {
    fn forward(&mut self, input: &Matrix<f32>) -> Result<Matrix<f32>> {
        let mid = self.first.forward(input)?;
        self.second.forward(&mid)
    }
}

/// An ordered chain of layers mapping `(batch x IN)` to `(batch x OUT)`.
///
/// The stage tree `S` grows as layers are appended; `IN` and `OUT` track
/// the chain's outer widths at the type level.
///
/// # Example
///
/// ```
/// use tejer::prelude::*;
///
/// let mut net = Network::new(Layer::<4, 8>::with_seed(Some(1)))
///     .then(Layer::<8, 8>::with_seed(Some(2)))
///     .then(Layer::<8, 3>::with_seed(Some(3)));
///
/// let out = net.forward(&Matrix::zeros(2, 4)).expect("batch width is 4");
/// assert_eq!(out.shape(), (2, 3));
/// ```
#[derive(Debug)]
pub struct Network<const IN: usize, const OUT: usize, S> {
    stages: S,
}

impl<const IN: usize, const OUT: usize, A: Activation> Network<IN, OUT, Layer<IN, OUT, A>> {
    /// Start a chain from its first layer.
    #[must_use]
    pub fn new(first: Layer<IN, OUT, A>) -> Self {
        Self { stages: first }
    }
}

impl<const IN: usize, const OUT: usize, S: Forward> Network<IN, OUT, S> {
    /// Append a layer whose input width equals the chain's current output
    /// width.
    ///
    /// The width constraint is part of the signature: `next` must be a
    /// `Layer<OUT, NEXT, _>`, so a mismatched chain fails to compile.
    ///
    /// ```compile_fail
    /// use tejer::prelude::*;
    ///
    /// // 8 != 5: rejected by the compiler
    /// let net = Network::new(Layer::<4, 8>::with_seed(Some(1)))
    ///     .then(Layer::<5, 3>::with_seed(Some(2)));
    /// ```
    #[must_use]
    pub fn then<const NEXT: usize, A: Activation>(
        self,
        next: Layer<OUT, NEXT, A>,
    ) -> Network<IN, NEXT, Chain<S, Layer<OUT, NEXT, A>>> {
        Network {
            stages: Chain {
                first: self.stages,
                second: next,
            },
        }
    }

    /// Thread a `(batch x IN)` matrix through every layer in order.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `input.n_cols() != IN`, surfaced by
    /// the first layer's matmul. Every other join was already verified at
    /// compile time.
    pub fn forward(&mut self, input: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.stages.forward(input)
    }
}
