//! LUT error types.

use fc_color::ColorError;
use fc_math::MathError;
use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur during LUT generation.
///
/// Any error aborts the whole generation; no partial record sequence is
/// ever returned.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// Invalid or degenerate range.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Colormap could not be resolved or is malformed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    /// True for an interval with its minimum above its maximum.
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            LutError::Math(MathError::InvalidRange { .. })
                | LutError::Color(ColorError::Math(MathError::InvalidRange { .. }))
        )
    }

    /// True for a zero-width interval or duplicate coordinates.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            LutError::Math(MathError::DegenerateRange { .. })
                | LutError::Color(ColorError::Math(MathError::DegenerateRange { .. }))
        )
    }

    /// True for a malformed colormap definition.
    pub fn is_invalid_colormap(&self) -> bool {
        matches!(self, LutError::Color(ColorError::InvalidColormap { .. }))
    }
}
