//! Core compute primitive (Matrix).
//!
//! Everything else in the crate is built on this one dense 2D type.

mod matrix;

pub use matrix::Matrix;
