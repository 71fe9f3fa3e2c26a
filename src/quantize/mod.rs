//! Quantization of unsigned-integer signals into level indices.
//!
//! [`Quantization`] is a functor holding a sorted table of level thresholds:
//! each table entry is the lower boundary of one quantization level. A table
//! of `[0, 5, 10]` quantizes values `0..=4` to level 0, `5..=9` to level 1
//! and everything from 10 up to level 2. Input values are clamped to
//! `[min_level, max_level]` before lookup, so out-of-range samples land in
//! the first or last level.
//!
//! Three constructions are supported: uniform partitioning of a value range,
//! uniform partitioning with Matlab-style rounding of the boundaries, and an
//! explicit user table. Level indices are always returned as `u32`.

use num_traits::{PrimInt, Unsigned};

use crate::data::Matrix;
use crate::error::SignalError;

/// Signal quantizer mapping samples to level indices.
///
/// # Example
///
/// ```
/// use sigproc_rs::quantize::Quantization;
///
/// let q = Quantization::<u8>::with_table(vec![0, 5, 10]).unwrap();
/// assert_eq!(q.quantization_level(4), 0);
/// assert_eq!(q.quantization_level(5), 1);
/// assert_eq!(q.quantization_level(200), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantization<T> {
    thresholds: Vec<T>,
    min_level: T,
    max_level: T,
}

impl<T> Quantization<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    /// Uniform quantization of `[min, max]` into `num_levels` levels.
    ///
    /// Level boundaries advance by `⌊(max - min + 1) / num_levels⌋`.
    ///
    /// # Errors
    ///
    /// - [`SignalError::InvalidRange`] when `min > max`.
    /// - [`SignalError::InvalidLevels`] when `num_levels` is zero or exceeds
    ///   the number of representable values in `[min, max]`.
    pub fn uniform(num_levels: usize, min: T, max: T) -> Result<Self, SignalError> {
        let range = check_range(num_levels, min, max)?;

        let step = range / num_levels as u64;
        // The cast only fails for a single level spanning the full dtype
        // range, in which case the step is never used.
        let step = T::from(step).unwrap_or_else(T::zero);

        let mut thresholds = Vec::with_capacity(num_levels);
        let mut level = min;
        for i in 0..num_levels {
            thresholds.push(level);
            if i + 1 < num_levels {
                level = level + step;
            }
        }
        Ok(Self {
            thresholds,
            min_level: min,
            max_level: max,
        })
    }

    /// Uniform quantization with Matlab-convention rounding.
    ///
    /// The first boundary is `min`; boundary `i` sits at
    /// `min + round((i - ½) · (max - min) / (num_levels - 1))`, reproducing
    /// Matlab's rounded uniform quantizer.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Quantization::uniform`].
    pub fn uniform_rounding(num_levels: usize, min: T, max: T) -> Result<Self, SignalError> {
        check_range(num_levels, min, max)?;

        let min_u: u64 = min.into();
        let span = (max.into() - min_u) as f64;
        let mut thresholds = Vec::with_capacity(num_levels);
        thresholds.push(min);
        for i in 1..num_levels {
            let boundary = (i as f64 - 0.5) * span / (num_levels - 1) as f64;
            // boundary < span, so the sum always fits the dtype.
            let value = min_u + boundary.round() as u64;
            thresholds.push(T::from(value).unwrap_or(max));
        }
        Ok(Self {
            thresholds,
            min_level: min,
            max_level: max,
        })
    }

    /// Quantization by an explicit table of level lower boundaries.
    ///
    /// `min_level` becomes the first threshold and `max_level` the dtype
    /// maximum, matching the table semantics of the uniform constructors.
    ///
    /// # Errors
    ///
    /// - [`SignalError::EmptyTable`] for an empty table.
    /// - [`SignalError::InvalidRange`] when the table is not strictly
    ///   increasing.
    pub fn with_table(table: Vec<T>) -> Result<Self, SignalError> {
        let Some(&first) = table.first() else {
            return Err(SignalError::EmptyTable);
        };
        if table.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SignalError::InvalidRange);
        }
        Ok(Self {
            thresholds: table,
            min_level: first,
            max_level: T::max_value(),
        })
    }

    /// One level per representable value of the dtype.
    ///
    /// `u8` gets 256 levels, `u16` gets 65536; quantization becomes the
    /// identity mapping. This is also the [`Default`] construction.
    pub fn full_range() -> Self {
        let min = T::min_value();
        let max = T::max_value();
        let levels = (max.into() - min.into() + 1) as usize;
        // Bounds are the dtype bounds, so the checks cannot fail.
        Self::uniform(levels, min, max).unwrap_or(Self {
            thresholds: vec![min],
            min_level: min,
            max_level: max,
        })
    }

    /// Number of quantization levels.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.thresholds.len()
    }

    /// The level lower boundaries, ascending.
    #[inline]
    pub fn thresholds(&self) -> &[T] {
        &self.thresholds
    }

    /// Values at or below this are quantized into the lowest level.
    #[inline]
    pub fn min_level(&self) -> T {
        self.min_level
    }

    /// Values above this are quantized into the highest level.
    #[inline]
    pub fn max_level(&self) -> T {
        self.max_level
    }

    /// Level index for a single sample.
    ///
    /// The sample is clamped to `[min_level, max_level]` first, then mapped
    /// to the index of the last threshold not exceeding it.
    pub fn quantization_level(&self, value: T) -> u32 {
        let clamped = value.max(self.min_level).min(self.max_level);
        let above = self.thresholds.partition_point(|&t| t <= clamped);
        // `clamped >= min_level >= thresholds[0]`, so `above >= 1`.
        above.saturating_sub(1) as u32
    }

    /// Quantize a 1-D signal element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidShape`] when the buffer lengths differ.
    pub fn quantize(&self, input: &[T], output: &mut [u32]) -> Result<(), SignalError> {
        if input.len() != output.len() {
            return Err(SignalError::InvalidShape {
                expected: vec![input.len()],
                actual: vec![output.len()],
            });
        }
        for (dst, &src) in output.iter_mut().zip(input) {
            *dst = self.quantization_level(src);
        }
        Ok(())
    }

    /// Quantize a 2-D signal element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidShape`] when the shapes differ.
    pub fn quantize_matrix(
        &self,
        input: &Matrix<T>,
        output: &mut Matrix<u32>,
    ) -> Result<(), SignalError> {
        if input.shape() != output.shape() {
            return Err(SignalError::InvalidShape {
                expected: vec![input.rows(), input.cols()],
                actual: vec![output.rows(), output.cols()],
            });
        }
        for (dst, &src) in output.as_mut_slice().iter_mut().zip(input.as_slice()) {
            *dst = self.quantization_level(src);
        }
        Ok(())
    }
}

impl<T> Default for Quantization<T>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    fn default() -> Self {
        Self::full_range()
    }
}

fn check_range<T>(num_levels: usize, min: T, max: T) -> Result<u64, SignalError>
where
    T: PrimInt + Unsigned + Into<u64>,
{
    if min > max {
        return Err(SignalError::InvalidRange);
    }
    let range = max.into() - min.into() + 1;
    if num_levels == 0 || num_levels as u64 > range {
        return Err(SignalError::InvalidLevels {
            requested: num_levels,
            range: range as usize,
        });
    }
    Ok(range)
}
