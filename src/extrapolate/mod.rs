//! Border-aware extrapolation of 1-D and 2-D buffers.
//!
//! Given a source buffer embedded in a larger destination, these operations
//! fill the destination's margin according to a boundary policy. The source
//! occupies the centered sub-region of the destination
//! (`offset = (dst - src) / 2` per axis, floored) and is never written to;
//! callers place the source content there before extrapolating.
//!
//! The policy set is closed: every consumer matches [`BorderType`]
//! exhaustively, so adding a policy is a compile-time-visible change.
//!
//! # Example
//!
//! ```
//! use sigproc_rs::extrapolate::extrapolate_nearest;
//!
//! let src = [1.0, 2.0, 3.0];
//! let mut dst = [0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0];
//! extrapolate_nearest(&src, &mut dst).unwrap();
//! assert_eq!(dst, [1.0, 1.0, 1.0, 2.0, 3.0, 3.0, 3.0]);
//! ```

use num_traits::Zero;

use crate::data::Matrix;
use crate::error::SignalError;

/// Boundary policy for extrapolation.
///
/// `Constant` takes its scalar through the separate `constant` argument of
/// [`extrapolate`]; the pairing is validated strictly
/// ([`SignalError::MissingConstant`] / [`SignalError::UnexpectedConstant`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderType {
    /// Fill the margin with zeros.
    Zero,
    /// Repeat the closest source sample.
    NearestNeighbour,
    /// Wrap around periodically.
    Circular,
    /// Reflect off the boundaries without repeating the edge sample.
    Mirror,
    /// Fill the margin with a caller-supplied scalar.
    Constant,
}

// =============================================================================
// 1-D extrapolation
// =============================================================================

/// Fill the margin of `dst` around the centered copy of `src`.
///
/// Only margin cells are written; the source sub-region of `dst` is left
/// untouched.
///
/// # Errors
///
/// - [`SignalError::MissingConstant`] / [`SignalError::UnexpectedConstant`]
///   when the payload does not match the policy.
/// - [`SignalError::InvalidLength`] when `src` is empty.
/// - [`SignalError::InvalidShape`] when `dst` is shorter than `src`.
pub fn extrapolate<T>(
    src: &[T],
    dst: &mut [T],
    border: BorderType,
    constant: Option<T>,
) -> Result<(), SignalError>
where
    T: Copy + Zero,
{
    let fill = resolve_fill(border, constant)?;
    if src.is_empty() {
        return Err(SignalError::InvalidLength);
    }
    if dst.len() < src.len() {
        return Err(SignalError::InvalidShape {
            expected: vec![src.len()],
            actual: vec![dst.len()],
        });
    }

    let n = src.len();
    let offset = (dst.len() - n) / 2;
    for i in (0..offset).chain(offset + n..dst.len()) {
        let k = i as isize - offset as isize;
        dst[i] = match &fill {
            Fill::Scalar(value) => *value,
            Fill::Index(map) => src[map(k, n)],
        };
    }
    Ok(())
}

/// [`extrapolate`] with [`BorderType::Zero`].
pub fn extrapolate_zero<T: Copy + Zero>(src: &[T], dst: &mut [T]) -> Result<(), SignalError> {
    extrapolate(src, dst, BorderType::Zero, None)
}

/// [`extrapolate`] with [`BorderType::NearestNeighbour`].
pub fn extrapolate_nearest<T: Copy + Zero>(src: &[T], dst: &mut [T]) -> Result<(), SignalError> {
    extrapolate(src, dst, BorderType::NearestNeighbour, None)
}

/// [`extrapolate`] with [`BorderType::Circular`].
pub fn extrapolate_circular<T: Copy + Zero>(src: &[T], dst: &mut [T]) -> Result<(), SignalError> {
    extrapolate(src, dst, BorderType::Circular, None)
}

/// [`extrapolate`] with [`BorderType::Mirror`].
pub fn extrapolate_mirror<T: Copy + Zero>(src: &[T], dst: &mut [T]) -> Result<(), SignalError> {
    extrapolate(src, dst, BorderType::Mirror, None)
}

/// [`extrapolate`] with [`BorderType::Constant`] and the given scalar.
pub fn extrapolate_constant<T: Copy + Zero>(
    src: &[T],
    dst: &mut [T],
    constant: T,
) -> Result<(), SignalError> {
    extrapolate(src, dst, BorderType::Constant, Some(constant))
}

// =============================================================================
// 2-D extrapolation
// =============================================================================

/// Fill the margin of a destination matrix around the centered copy of `src`.
///
/// The index-based policies (`NearestNeighbour`, `Circular`, `Mirror`) apply
/// as the outer product of the two 1-D rules: every margin cell `(i, j)`
/// reads `src[map_row(i)][map_col(j)]`. `Zero` and `Constant` fill the whole
/// margin, corners included, with the scalar.
///
/// # Errors
///
/// Same taxonomy as [`extrapolate`]; `InvalidShape` when `dst` is smaller
/// than `src` along either axis.
pub fn extrapolate_matrix<T>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
    border: BorderType,
    constant: Option<T>,
) -> Result<(), SignalError>
where
    T: Copy + Zero,
{
    let fill = resolve_fill(border, constant)?;
    let (src_rows, src_cols) = src.shape();
    if src_rows == 0 || src_cols == 0 {
        return Err(SignalError::InvalidLength);
    }
    if dst.rows() < src_rows || dst.cols() < src_cols {
        return Err(SignalError::InvalidShape {
            expected: vec![src_rows, src_cols],
            actual: vec![dst.rows(), dst.cols()],
        });
    }

    let row_off = (dst.rows() - src_rows) / 2;
    let col_off = (dst.cols() - src_cols) / 2;
    for i in 0..dst.rows() {
        let kr = i as isize - row_off as isize;
        let row_inside = kr >= 0 && (kr as usize) < src_rows;
        for j in 0..dst.cols() {
            let kc = j as isize - col_off as isize;
            let col_inside = kc >= 0 && (kc as usize) < src_cols;
            if row_inside && col_inside {
                continue;
            }
            let value = match &fill {
                Fill::Scalar(value) => *value,
                Fill::Index(map) => src.row_slice(map(kr, src_rows))[map(kc, src_cols)],
            };
            dst.row_slice_mut(i)[j] = value;
        }
    }
    Ok(())
}

/// [`extrapolate_matrix`] with [`BorderType::Zero`].
pub fn extrapolate_matrix_zero<T: Copy + Zero>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
) -> Result<(), SignalError> {
    extrapolate_matrix(src, dst, BorderType::Zero, None)
}

/// [`extrapolate_matrix`] with [`BorderType::NearestNeighbour`].
pub fn extrapolate_matrix_nearest<T: Copy + Zero>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
) -> Result<(), SignalError> {
    extrapolate_matrix(src, dst, BorderType::NearestNeighbour, None)
}

/// [`extrapolate_matrix`] with [`BorderType::Circular`].
pub fn extrapolate_matrix_circular<T: Copy + Zero>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
) -> Result<(), SignalError> {
    extrapolate_matrix(src, dst, BorderType::Circular, None)
}

/// [`extrapolate_matrix`] with [`BorderType::Mirror`].
pub fn extrapolate_matrix_mirror<T: Copy + Zero>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
) -> Result<(), SignalError> {
    extrapolate_matrix(src, dst, BorderType::Mirror, None)
}

/// [`extrapolate_matrix`] with [`BorderType::Constant`] and the given scalar.
pub fn extrapolate_matrix_constant<T: Copy + Zero>(
    src: &Matrix<T>,
    dst: &mut Matrix<T>,
    constant: T,
) -> Result<(), SignalError> {
    extrapolate_matrix(src, dst, BorderType::Constant, Some(constant))
}

// =============================================================================
// Fill rules
// =============================================================================

/// Resolved fill behaviour: either a scalar or a per-axis index map.
enum Fill<T> {
    Scalar(T),
    Index(fn(isize, usize) -> usize),
}

fn resolve_fill<T: Zero>(
    border: BorderType,
    constant: Option<T>,
) -> Result<Fill<T>, SignalError> {
    match (border, constant) {
        (BorderType::Constant, Some(value)) => Ok(Fill::Scalar(value)),
        (BorderType::Constant, None) => Err(SignalError::MissingConstant),
        (_, Some(_)) => Err(SignalError::UnexpectedConstant),
        (BorderType::Zero, None) => Ok(Fill::Scalar(T::zero())),
        (BorderType::NearestNeighbour, None) => Ok(Fill::Index(clamp_index)),
        (BorderType::Circular, None) => Ok(Fill::Index(wrap_index)),
        (BorderType::Mirror, None) => Ok(Fill::Index(reflect_index)),
    }
}

/// Nearest neighbour: clamp into `[0, n)`.
#[inline]
fn clamp_index(k: isize, n: usize) -> usize {
    k.clamp(0, n as isize - 1) as usize
}

/// Circular: wrap around, always non-negative.
#[inline]
fn wrap_index(k: isize, n: usize) -> usize {
    k.rem_euclid(n as isize) as usize
}

/// Mirror: reflect off both boundaries without repeating the edge sample
/// (period `2n - 2`).
#[inline]
fn reflect_index(k: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n as isize - 1);
    let mut m = k.rem_euclid(period);
    if m >= n as isize {
        m = period - m;
    }
    m as usize
}
