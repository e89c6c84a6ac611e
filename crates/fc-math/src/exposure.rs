//! Exposure-domain normalization.
//!
//! False color LUTs index colormaps by the log2 of scene luminance. An
//! [`ExposureRange`] fixes the pair of exponents that bound that domain;
//! [`normalize_value`] projects a linear luminance value onto `[0, 1]`
//! through it.
//!
//! The default range covers 10 stops below and 6.5 stops above mid-grey:
//!
//! ```text
//! log2(0.18) - 10.0 = -12.473931189
//! log2(0.18) +  6.5 =   4.026068812
//! ```

use crate::error::{check_ordered, MathError, MathResult};

/// Lower exponent of the default input range (mid-grey minus 10 stops).
pub const DEFAULT_EXPONENT_MIN: f64 = -12.473931189;

/// Upper exponent of the default input range (mid-grey plus 6.5 stops).
pub const DEFAULT_EXPONENT_MAX: f64 = 4.026068812;

/// Projects linear luminance `y` onto `[0, 1]` in the log2 domain.
///
/// Computes `(log2(y) - exp_min) / (exp_max - exp_min)` clamped to
/// `[0, 1]`. Non-positive (and NaN) luminance maps to `0.0`, positive
/// infinity to `1.0`, so the result is finite for every `y` as long as
/// both exponents are finite and `exp_min < exp_max`.
///
/// Prefer [`ExposureRange::normalize`], which carries a validated range.
#[inline]
pub fn normalize_value(y: f64, exp_min: f64, exp_max: f64) -> f64 {
    if y.is_nan() || y <= 0.0 {
        return 0.0;
    }
    let t = (y.log2() - exp_min) / (exp_max - exp_min);
    t.clamp(0.0, 1.0)
}

/// Ordered pair of log2 exponents bounding the luminance domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureRange {
    min: f64,
    max: f64,
}

impl ExposureRange {
    /// Creates a range from two exponents.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidRange`] if `min > max` or a bound is not finite.
    /// - [`MathError::DegenerateRange`] if `min == max`.
    pub fn new(min: f64, max: f64) -> MathResult<Self> {
        check_ordered("exposure", min, max)?;
        if !min.is_finite() || !max.is_finite() {
            return Err(MathError::InvalidRange {
                what: "exposure",
                min,
                max,
            });
        }
        if min == max {
            return Err(MathError::DegenerateRange {
                what: "exposure",
                value: min,
            });
        }
        Ok(Self { min, max })
    }

    /// Lower exponent.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper exponent.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range in stops.
    #[inline]
    pub fn stops(&self) -> f64 {
        self.max - self.min
    }

    /// Normalizes linear luminance through this range.
    #[inline]
    pub fn normalize(&self, y: f64) -> f64 {
        normalize_value(y, self.min, self.max)
    }

    /// Normalizes the luminance `2^exponent`.
    #[inline]
    pub fn normalize_exponent(&self, exponent: f64) -> f64 {
        self.normalize(exponent.exp2())
    }
}

impl Default for ExposureRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_EXPONENT_MIN,
            max: DEFAULT_EXPONENT_MAX,
        }
    }
}
