//! Grid parameters shared by both sampling strategies.

use crate::{LutError, LutResult};
use fc_math::{ExposureRange, MathError, DEFAULT_EXPONENT_MAX, DEFAULT_EXPONENT_MIN};
use tracing::warn;

/// Default number of samples per axis.
pub const DEFAULT_CUBE_SIZE: usize = 65;

/// Shape of the sampled cube and the luminance domain it covers.
///
/// # Example
///
/// ```rust
/// use fc_lut::GridParams;
///
/// let params = GridParams::default().with_cube_size(33);
/// assert_eq!(params.cube_size, 33);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Samples per axis; the cube holds `cube_size^3` cells.
    pub cube_size: usize,
    /// Exponents bounding the log2 luminance domain.
    pub input_range: ExposureRange,
    /// Exponents inside which luminance maps smoothly onto the colormap.
    /// Below and above it, the colormap endpoints are used.
    pub unclipped_range: (f64, f64),
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cube_size: DEFAULT_CUBE_SIZE,
            input_range: ExposureRange::default(),
            unclipped_range: (DEFAULT_EXPONENT_MIN, DEFAULT_EXPONENT_MAX),
        }
    }
}

impl GridParams {
    /// Sets the number of samples per axis.
    pub fn with_cube_size(mut self, cube_size: usize) -> Self {
        self.cube_size = cube_size;
        self
    }

    /// Sets the input domain. The unclipped range is left untouched.
    pub fn with_input_range(mut self, range: ExposureRange) -> Self {
        self.input_range = range;
        self
    }

    /// Sets the unclipped exponent range.
    pub fn with_unclipped_range(mut self, min: f64, max: f64) -> Self {
        self.unclipped_range = (min, max);
        self
    }

    /// Number of cells in the cube, `cube_size^3`.
    pub fn cell_count(&self) -> LutResult<usize> {
        cube_cells(self.cube_size)
    }

    /// Checks the cube size and the unclipped range ordering.
    pub fn validate(&self) -> LutResult<()> {
        if self.cube_size < 2 {
            return Err(LutError::InvalidSize(format!(
                "cube size must be at least 2, got {}",
                self.cube_size
            )));
        }
        self.cell_count()?;

        let (min, max) = self.unclipped_range;
        if min.is_nan() || max.is_nan() || min > max {
            return Err(MathError::InvalidRange {
                what: "unclipped exposure",
                min,
                max,
            }
            .into());
        }
        if min < self.input_range.min() || max > self.input_range.max() {
            warn!(
                unclipped_min = min,
                unclipped_max = max,
                input_min = self.input_range.min(),
                input_max = self.input_range.max(),
                "unclipped range extends beyond the input range"
            );
        }
        Ok(())
    }
}

/// `size^3`, or [`LutError::InvalidSize`] when it does not fit in `usize`.
pub(crate) fn cube_cells(size: usize) -> LutResult<usize> {
    size.checked_mul(size)
        .and_then(|n| n.checked_mul(size))
        .ok_or_else(|| LutError::InvalidSize(format!("cube size {} is too large", size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_domain() {
        let params = GridParams::default();
        assert_eq!(params.cube_size, 65);
        assert_eq!(params.input_range, ExposureRange::default());
        assert_eq!(params.unclipped_range, (DEFAULT_EXPONENT_MIN, DEFAULT_EXPONENT_MAX));
        params.validate().unwrap();
    }

    #[test]
    fn rejects_tiny_cubes() {
        for size in [0, 1] {
            let err = GridParams::default().with_cube_size(size).validate().unwrap_err();
            assert!(matches!(err, LutError::InvalidSize(_)));
        }
    }

    #[test]
    fn rejects_cubes_that_overflow() {
        for size in [5_000_000, 1 << 22, usize::MAX] {
            let err = GridParams::default().with_cube_size(size).validate().unwrap_err();
            assert!(matches!(err, LutError::InvalidSize(_)), "size {}", size);
        }
        assert_eq!(GridParams::default().cell_count().unwrap(), 65 * 65 * 65);
    }

    #[test]
    fn rejects_reversed_unclipped_range() {
        let err = GridParams::default()
            .with_unclipped_range(2.0, -2.0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_range());
    }
}
