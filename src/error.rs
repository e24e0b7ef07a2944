//! Error types for lineal operations.
//!
//! Every failure is a local validation error surfaced synchronously to
//! the caller. There are no retries and no partial results.

use std::fmt;

/// Main error type for lineal operations.
///
/// Carries enough context to report which sizes or indices were
/// involved in the failed operation.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "3".to_string(),
///     actual: "4".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinealError {
    /// Construction from a collection with no entries.
    EmptyInput,

    /// Matrix rows of inconsistent length. The first row sets the
    /// expected column count.
    RaggedRows {
        /// Zero-based index of the offending row
        row: usize,
        /// Column count set by the first row
        expected: usize,
        /// Column count actually found
        got: usize,
    },

    /// Element-wise binary operation between operands of different size.
    DimensionMismatch {
        /// Size of the left operand (length, or `RxC` for matrices)
        expected: String,
        /// Size of the right operand
        actual: String,
    },

    /// Matrix multiplication with incompatible inner dimensions.
    IncompatibleDimensions {
        /// Shape of the left operand as `RxC`
        left: String,
        /// Shape of the right operand as `RxC`
        right: String,
    },

    /// Index outside the valid bounds, after negative wraparound where
    /// the access supports it.
    IndexOutOfRange {
        /// The index as given by the caller
        index: isize,
        /// Number of valid positions
        len: usize,
    },

    /// Conversion to a vector requires a single-row or single-column
    /// matrix.
    NotVectorConvertible {
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// Conversion to a scalar requires exactly one entry.
    NotScalarConvertible {
        /// Size of the value (length, or `RxC` for matrices)
        size: String,
    },

    /// A parameter outside the operation's domain.
    InvalidArgument {
        /// Human-readable description of the violated requirement
        reason: &'static str,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "input must have at least one entry")
            }
            Self::RaggedRows { row, expected, got } => {
                write!(
                    f,
                    "ragged rows: row {row} has {got} entries, expected {expected}"
                )
            }
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            Self::IncompatibleDimensions { left, right } => {
                write!(
                    f,
                    "incompatible dimensions for multiplication: {left} and {right}"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::NotVectorConvertible { rows, cols } => {
                write!(
                    f,
                    "cannot convert a {rows}x{cols} matrix to a vector: one dimension must be 1"
                )
            }
            Self::NotScalarConvertible { size } => {
                write!(
                    f,
                    "cannot convert a value of size {size} to a scalar: exactly one entry required"
                )
            }
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl std::error::Error for LinealError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinealError>;
