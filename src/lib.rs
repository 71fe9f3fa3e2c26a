//! sigproc-rs: numeric signal processing primitives for Rust.
//!
//! This crate provides three independent components:
//!
//! - [`fft`]: forward and inverse 1-D discrete Fourier transforms for
//!   arbitrary sequence lengths, with batched application along the rows or
//!   columns of a matrix.
//! - [`extrapolate`]: border-aware extrapolation of 1-D and 2-D buffers with
//!   a closed set of boundary policies.
//! - [`quantize`]: uniform and table-driven quantization of unsigned-integer
//!   signals into level indices.

pub mod data;
pub mod error;
pub mod extrapolate;
pub mod fft;
pub mod quantize;

pub use data::{Axis, Matrix};
pub use error::SignalError;
pub use extrapolate::BorderType;
pub use fft::Direction;
