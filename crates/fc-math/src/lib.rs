//! # fc-math
//!
//! Scalar math for false color LUT generation.
//!
//! - [`map_to_range`] - Linear remap between intervals with optional clipping
//! - [`map_to_colormap_range`] - Re-centers normalized luminance so mid-grey
//!   lands on the colormap center
//! - [`normalize_value`] / [`ExposureRange`] - Clamped log2-domain
//!   normalization of linear luminance onto `[0, 1]`
//!
//! # Usage
//!
//! ```rust
//! use fc_math::{map_to_range, map_to_colormap_range, ExposureRange};
//!
//! assert_eq!(map_to_range(5.0, 0.0, 10.0, 0.0, 100.0, true).unwrap(), 50.0);
//!
//! let range = ExposureRange::default();
//! let grey = range.normalize(0.18);
//! assert_eq!(map_to_colormap_range(grey, &range).unwrap(), 0.5);
//! ```
//!
//! # Dependencies
//!
//! - [`fc-core`] - Mid-grey constant
//! - [`thiserror`] - Error handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod exposure;
mod range;

pub use error::{MathError, MathResult};
pub use exposure::{normalize_value, ExposureRange, DEFAULT_EXPONENT_MAX, DEFAULT_EXPONENT_MIN};
pub use range::{map_to_colormap_range, map_to_range};
