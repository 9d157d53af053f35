//! Tejer: minimal feed-forward neural network engine in pure Rust.
//!
//! Tejer provides a dense f32 matrix type, a small family of activation
//! functions, and statically shaped layers that can be chained into a
//! network whose adjacent widths are verified at compile time.
//!
//! # Quick Start
//!
//! ```
//! use tejer::prelude::*;
//!
//! // 4 features -> 8 hidden -> 8 hidden -> 3 classes
//! let mut net = Network::new(Layer::<4, 8>::with_seed(Some(7)))
//!     .then(Layer::<8, 8>::with_seed(Some(8)))
//!     .then(Layer::<8, 3, Softmax>::with_seed(Some(9)));
//!
//! // Two samples per batch
//! let batch = Matrix::zeros(2, 4);
//! let out = net.forward(&batch).expect("batch width matches first layer");
//! assert_eq!(out.shape(), (2, 3));
//! ```
//!
//! A chain whose widths do not telescope is rejected by the compiler; see
//! [`nn::Network::then`].
//!
//! # Modules
//!
//! - [`primitives`]: the dense row-major [`Matrix`] type
//! - [`nn`]: activation functions, weight initialization, [`nn::Layer`],
//!   and [`nn::Network`]
//! - [`error`]: the crate error type

pub mod error;
pub mod nn;
pub mod prelude;
pub mod primitives;

pub use error::{Result, TejerError};
pub use primitives::Matrix;
