//! Length-bound transform functors.
//!
//! [`Fft1d`] and [`Ifft1d`] fix the sequence length at construction and then
//! apply the transform repeatedly through [`process`](Fft1d::process). They
//! hold no other state, so a single functor may be shared freely across
//! threads.

use num_complex::Complex64;

use crate::error::SignalError;
use crate::fft::{fft_into, ifft_into};

/// Forward DFT functor for sequences of a fixed length.
///
/// # Example
///
/// ```
/// use num_complex::Complex64;
/// use sigproc_rs::fft::Fft1d;
///
/// let op = Fft1d::new(4).unwrap();
/// let input = vec![Complex64::new(1.0, 0.0); 4];
/// let mut output = vec![Complex64::new(0.0, 0.0); 4];
/// op.process(&input, &mut output).unwrap();
/// assert!((output[0].re - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fft1d {
    len: usize,
}

impl Fft1d {
    /// Create a forward transform for sequences of `len` samples.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidLength`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, SignalError> {
        if len == 0 {
            return Err(SignalError::InvalidLength);
        }
        Ok(Self { len })
    }

    /// The fixed sequence length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Transform `input` into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidShape`] when either buffer's length
    /// differs from the planned length.
    pub fn process(
        &self,
        input: &[Complex64],
        output: &mut [Complex64],
    ) -> Result<(), SignalError> {
        self.check(input.len())?;
        fft_into(input, output)
    }

    #[inline]
    fn check(&self, actual: usize) -> Result<(), SignalError> {
        if actual != self.len {
            return Err(SignalError::InvalidShape {
                expected: vec![self.len],
                actual: vec![actual],
            });
        }
        Ok(())
    }
}

/// Inverse DFT functor for sequences of a fixed length.
///
/// Output is scaled by `1/len`, so chaining [`Fft1d`] and [`Ifft1d`] of the
/// same length recovers the original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ifft1d {
    len: usize,
}

impl Ifft1d {
    /// Create an inverse transform for sequences of `len` samples.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidLength`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, SignalError> {
        if len == 0 {
            return Err(SignalError::InvalidLength);
        }
        Ok(Self { len })
    }

    /// The fixed sequence length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Transform `input` into `output`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidShape`] when either buffer's length
    /// differs from the planned length.
    pub fn process(
        &self,
        input: &[Complex64],
        output: &mut [Complex64],
    ) -> Result<(), SignalError> {
        if input.len() != self.len {
            return Err(SignalError::InvalidShape {
                expected: vec![self.len],
                actual: vec![input.len()],
            });
        }
        ifft_into(input, output)
    }
}
