//! Range error types.

use thiserror::Error;

/// Result type for range operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised by interval arithmetic.
///
/// Both variants name the offending parameter so a failed LUT generation
/// can be traced back to the argument that caused it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// An interval has its minimum above its maximum (or a NaN bound).
    #[error("invalid {what} range: [{min}, {max}] (minimum must not exceed maximum)")]
    InvalidRange {
        /// Which interval was rejected.
        what: &'static str,
        /// Minimum value
        min: f64,
        /// Maximum value
        max: f64,
    },

    /// An interval has zero width, so mapping through it would divide by zero.
    #[error("degenerate {what} range: both bounds are {value}")]
    DegenerateRange {
        /// Which interval was rejected.
        what: &'static str,
        /// The shared bound.
        value: f64,
    },
}

/// Checks that `[min, max]` is ordered. NaN bounds are rejected.
pub(crate) fn check_ordered(what: &'static str, min: f64, max: f64) -> MathResult<()> {
    if min <= max {
        Ok(())
    } else {
        Err(MathError::InvalidRange { what, min, max })
    }
}
