//! Forward and inverse 1-D discrete Fourier transforms.
//!
//! Sequences of arbitrary length are supported; the engine picks a
//! mixed-radix decomposition and falls back to a direct DFT for prime
//! lengths. Matrix variants apply the 1-D transform independently along the
//! rows or columns of a [`Matrix`], batching rows across threads.
//!
//! Output follows the standard layout: DC term first, then ascending
//! frequency, with the aliased negative frequencies in the upper half. The
//! inverse transform is scaled by `1/N`, so `ifft(fft(x)) == x` up to
//! floating-point rounding.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use sigproc_rs::fft::{fft, ifft};
//!
//! let x = vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, -1.0)];
//! let spectrum = fft(&x).unwrap();
//! let back = ifft(&spectrum).unwrap();
//! assert!((back[0] - x[0]).norm() < 1e-12);
//! ```

mod kernel;
mod plan;

pub use plan::{Fft1d, Ifft1d};

use num_complex::Complex64;
use rayon::prelude::*;

use crate::data::{Axis, Matrix};
use crate::error::SignalError;

/// Transform direction.
///
/// `Forward` uses the negative-exponent DFT kernel; `Inverse` uses the
/// positive exponent and scales the result by `1/N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

impl Direction {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

// =============================================================================
// 1-D transforms
// =============================================================================

/// Forward 1-D DFT.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] for an empty input.
pub fn fft(input: &[Complex64]) -> Result<Vec<Complex64>, SignalError> {
    ensure_non_empty(input.len())?;
    Ok(lane_transform(input, Direction::Forward))
}

/// Forward 1-D DFT into a caller-provided buffer.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] for an empty input and
/// [`SignalError::InvalidShape`] when `output.len() != input.len()`.
pub fn fft_into(input: &[Complex64], output: &mut [Complex64]) -> Result<(), SignalError> {
    transform_into(input, output, Direction::Forward)
}

/// Inverse 1-D DFT, scaled by `1/N`.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] for an empty input.
pub fn ifft(input: &[Complex64]) -> Result<Vec<Complex64>, SignalError> {
    ensure_non_empty(input.len())?;
    Ok(lane_transform(input, Direction::Inverse))
}

/// Inverse 1-D DFT into a caller-provided buffer.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] for an empty input and
/// [`SignalError::InvalidShape`] when `output.len() != input.len()`.
pub fn ifft_into(input: &[Complex64], output: &mut [Complex64]) -> Result<(), SignalError> {
    transform_into(input, output, Direction::Inverse)
}

/// Forward 1-D DFT of a real-valued sequence.
///
/// Convenience wrapper that widens the input to complex; the full `N`-point
/// spectrum is returned (conjugate-symmetric for real inputs).
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] for an empty input.
pub fn fft_real(input: &[f64]) -> Result<Vec<Complex64>, SignalError> {
    ensure_non_empty(input.len())?;
    let widened: Vec<Complex64> = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    Ok(lane_transform(&widened, Direction::Forward))
}

// =============================================================================
// Batched matrix transforms
// =============================================================================

/// Forward DFT applied independently along `axis` of a matrix.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] when either dimension is zero.
pub fn fft_matrix(input: &Matrix<Complex64>, axis: Axis) -> Result<Matrix<Complex64>, SignalError> {
    let mut output = Matrix::zeros(input.rows(), input.cols());
    transform_matrix_into(input, &mut output, axis, Direction::Forward)?;
    Ok(output)
}

/// Forward DFT along `axis` into a caller-provided matrix of the same shape.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] when either dimension is zero and
/// [`SignalError::InvalidShape`] when the shapes differ.
pub fn fft_matrix_into(
    input: &Matrix<Complex64>,
    output: &mut Matrix<Complex64>,
    axis: Axis,
) -> Result<(), SignalError> {
    transform_matrix_into(input, output, axis, Direction::Forward)
}

/// Inverse DFT applied independently along `axis` of a matrix.
///
/// Each lane is scaled by the reciprocal of its own length.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] when either dimension is zero.
pub fn ifft_matrix(
    input: &Matrix<Complex64>,
    axis: Axis,
) -> Result<Matrix<Complex64>, SignalError> {
    let mut output = Matrix::zeros(input.rows(), input.cols());
    transform_matrix_into(input, &mut output, axis, Direction::Inverse)?;
    Ok(output)
}

/// Inverse DFT along `axis` into a caller-provided matrix of the same shape.
///
/// # Errors
///
/// Returns [`SignalError::InvalidLength`] when either dimension is zero and
/// [`SignalError::InvalidShape`] when the shapes differ.
pub fn ifft_matrix_into(
    input: &Matrix<Complex64>,
    output: &mut Matrix<Complex64>,
    axis: Axis,
) -> Result<(), SignalError> {
    transform_matrix_into(input, output, axis, Direction::Inverse)
}

// =============================================================================
// Internals
// =============================================================================

#[inline]
fn ensure_non_empty(len: usize) -> Result<(), SignalError> {
    if len == 0 {
        return Err(SignalError::InvalidLength);
    }
    Ok(())
}

/// Transform one lane, applying the inverse normalization when needed.
fn lane_transform(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let mut out = kernel::transform_unscaled(input, direction.sign());
    if direction == Direction::Inverse {
        let scale = 1.0 / input.len() as f64;
        for value in &mut out {
            *value *= scale;
        }
    }
    out
}

fn transform_into(
    input: &[Complex64],
    output: &mut [Complex64],
    direction: Direction,
) -> Result<(), SignalError> {
    ensure_non_empty(input.len())?;
    if output.len() != input.len() {
        return Err(SignalError::InvalidShape {
            expected: vec![input.len()],
            actual: vec![output.len()],
        });
    }
    output.copy_from_slice(&lane_transform(input, direction));
    Ok(())
}

fn transform_matrix_into(
    input: &Matrix<Complex64>,
    output: &mut Matrix<Complex64>,
    axis: Axis,
    direction: Direction,
) -> Result<(), SignalError> {
    let (rows, cols) = input.shape();
    if rows == 0 || cols == 0 {
        return Err(SignalError::InvalidLength);
    }
    if output.shape() != input.shape() {
        return Err(SignalError::InvalidShape {
            expected: vec![rows, cols],
            actual: vec![output.rows(), output.cols()],
        });
    }

    match axis {
        Axis::Rows => {
            output
                .as_mut_slice()
                .par_chunks_mut(cols)
                .zip(input.as_slice().par_chunks(cols))
                .for_each(|(out_row, in_row)| {
                    out_row.copy_from_slice(&lane_transform(in_row, direction));
                });
        }
        Axis::Columns => {
            // Columns are strided, so lanes are gathered into a scratch
            // buffer and scattered back after the transform.
            let mut scratch = vec![Complex64::new(0.0, 0.0); rows];
            for col in 0..cols {
                input.copy_col(col, &mut scratch);
                let transformed = lane_transform(&scratch, direction);
                output.write_col(col, &transformed);
            }
        }
    }
    Ok(())
}
