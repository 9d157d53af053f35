//! Weight initialization.
//!
//! He-style initialization keyed off fan-in (He et al., 2015), which keeps
//! activation variance stable through ReLU stacks. The generator is owned
//! by the call: pass a seed for reproducible weights, `None` for entropy.
//!
//! # References
//!
//! - He, K., et al. (2015). Delving deep into rectifiers: Surpassing
//!   human-level performance on `ImageNet` classification. ICCV.

use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// He normal initialization.
///
/// Samples every element from N(0, std) where std = scale * sqrt(2 / rows).
/// With weights laid out (fan-in x fan-out), `rows` is the fan-in.
///
/// # Example
///
/// ```
/// use tejer::nn::he_normal;
///
/// let w = he_normal(784, 128, 1.0, Some(42));
/// assert_eq!(w.shape(), (784, 128));
/// ```
#[must_use]
pub fn he_normal(rows: usize, cols: usize, scale: f32, seed: Option<u64>) -> Matrix<f32> {
    let std = scale * (2.0 / rows as f32).sqrt();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Box-Muller transform for normal samples
    Matrix::from_fn(rows, cols, |_, _| {
        let u1: f32 = rng.gen_range(0.0001_f32..1.0_f32);
        let u2: f32 = rng.gen_range(0.0_f32..1.0_f32);
        let z = (-2.0_f32 * u1.ln()).sqrt() * (2.0_f32 * std::f32::consts::PI * u2).cos();
        std * z
    })
}
