//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use tejer::prelude::*;
//! ```

pub use crate::error::{Result, TejerError};
pub use crate::nn::{Activation, Forward, Layer, Network, Relu, Sigmoid, Softmax};
pub use crate::primitives::Matrix;
