//! Feed-forward neural network building blocks.
//!
//! The module is organized around two small contracts:
//!
//! - [`Activation`]: a pure `Matrix -> Matrix` transform a [`Layer`] is
//!   parametrized by ([`Relu`], [`Sigmoid`], [`Softmax`])
//! - [`Forward`]: anything that can push a batch matrix through itself,
//!   implemented by [`Layer`] and composed by [`Network`]
//!
//! Layer widths are const generics, so a [`Network`] whose adjacent
//! widths do not telescope is rejected at compile time.
//!
//! # References
//!
//! - He, K., et al. (2015). Delving deep into rectifiers. ICCV.

mod activation;
pub mod functional;
mod init;
mod layer;
mod network;

pub use activation::{Activation, Relu, Sigmoid, Softmax};
pub use init::he_normal;
pub use layer::Layer;
pub use network::{Chain, Forward, Network};
