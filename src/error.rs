//! Shared error type for all signal-processing operations.

/// Errors reported by transforms, extrapolation and quantization.
///
/// Every failure is a caller-side precondition violation: the operations are
/// pure functions, so nothing is retried or partially applied. Buffers are
/// never modified before validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// A sequence or matrix dimension was zero.
    #[error("invalid length: buffers must contain at least one sample per dimension")]
    InvalidLength,

    /// An output buffer does not match the required shape.
    ///
    /// For 1-D operations the shapes hold a single extent; for 2-D
    /// operations they hold `[rows, cols]`.
    #[error("invalid shape: expected {expected:?}, got {actual:?}")]
    InvalidShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// `BorderType::Constant` was selected without supplying the constant.
    #[error("missing constant: BorderType::Constant requires a scalar payload")]
    MissingConstant,

    /// A constant payload was supplied for a border type that takes none.
    #[error("unexpected constant: only BorderType::Constant accepts a scalar payload")]
    UnexpectedConstant,

    /// Requested quantization level count is zero or exceeds the value range.
    #[error("invalid level count: {requested} levels cannot partition a range of {range} values")]
    InvalidLevels { requested: usize, range: usize },

    /// Quantization bounds are inverted or thresholds are not increasing.
    #[error("invalid range: quantization bounds/thresholds must be strictly increasing")]
    InvalidRange,

    /// A user-supplied quantization table was empty.
    #[error("empty table: quantization requires at least one threshold")]
    EmptyTable,
}
