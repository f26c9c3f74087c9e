use std::error::Error;
use std::fmt;

/// Custom error type for vector operation failures
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Two operands disagree on length.
    LengthMismatch { left: usize, right: usize },
    /// The operation is undefined on an empty vector.
    EmptyVector,
    /// The vector holds fewer values than the operation needs.
    InsufficientData { len: usize, required: usize },
    /// A quantile probability falls outside the accepted range.
    QuantileOutOfRange { p: f64 },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { left, right } => write!(
                f,
                "Vectors must have equal length (left has {}, right has {})",
                left, right
            ),
            VectorError::EmptyVector => write!(f, "Operation requires a non-empty vector"),
            VectorError::InsufficientData { len, required } => write!(
                f,
                "Operation requires at least {} values, but the vector has {}",
                required, len
            ),
            VectorError::QuantileOutOfRange { p } => write!(
                f,
                "Quantile probability {} is outside the accepted range",
                p
            ),
        }
    }
}

impl Error for VectorError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VectorError>;
