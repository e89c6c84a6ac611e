//! Error types for colormap operations.

use fc_math::MathError;
use thiserror::Error;

/// Colormap error.
///
/// Covers malformed colormap definitions (built in code, converted from
/// exposure values, or loaded from disk) and preset lookups.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Colormap definition is malformed.
    #[error("invalid colormap '{name}': {reason}")]
    InvalidColormap {
        /// Colormap name or source path.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No built-in colormap with this name.
    #[error("unknown {kind} '{name}' (available: {available})")]
    UnknownPreset {
        /// Registry that was searched ("colormap" or "EV colormap").
        kind: &'static str,
        /// Requested name.
        name: String,
        /// Comma separated list of registered names.
        available: String,
    },

    /// Range error while placing exposure values on a colormap.
    #[error(transparent)]
    Math(#[from] MathError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ColorError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColormap {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for colormap operations.
pub type ColorResult<T> = Result<T, ColorError>;
