//! Interval remapping.
//!
//! The two functions here are the only places where luminance is rescaled
//! between intervals. Both validate their intervals before computing, so a
//! bad range is reported as an error instead of leaking infinities or NaNs
//! into a LUT.

use crate::error::{check_ordered, MathError, MathResult};
use crate::ExposureRange;
use fc_core::MIDDLE_GREY;

/// Maps `x` linearly from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// With `clip` set, `x` is first clamped into the input interval and the
/// result is guaranteed to lie within the output interval. Without it,
/// values outside the input interval extrapolate.
///
/// # Errors
///
/// - [`MathError::InvalidRange`] if either interval has `min > max`.
/// - [`MathError::DegenerateRange`] if `in_min == in_max`.
///
/// # Example
///
/// ```rust
/// use fc_math::{map_to_range, MathError};
///
/// assert_eq!(map_to_range(5.0, 0.0, 10.0, 0.0, 100.0, true).unwrap(), 50.0);
/// assert_eq!(map_to_range(-5.0, 0.0, 10.0, 0.0, 100.0, true).unwrap(), 0.0);
/// assert!(matches!(
///     map_to_range(0.0, 0.0, 0.0, 0.0, 1.0, true),
///     Err(MathError::DegenerateRange { .. })
/// ));
/// ```
pub fn map_to_range(
    x: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clip: bool,
) -> MathResult<f64> {
    check_ordered("input", in_min, in_max)?;
    check_ordered("output", out_min, out_max)?;
    if in_min == in_max {
        return Err(MathError::DegenerateRange {
            what: "input",
            value: in_min,
        });
    }

    let x = if clip { in_max.min(in_min.max(x)) } else { x };
    let mapped = out_min + ((x - in_min) * (out_max - out_min)) / (in_max - in_min);

    // Rounding in the division can overshoot the output bounds by an ulp.
    Ok(if clip {
        mapped.clamp(out_min, out_max)
    } else {
        mapped
    })
}

/// Re-centers a normalized luminance value so mid-grey lands on `0.5`.
///
/// `x` is a value already normalized onto `[0, 1]` through `range`. The
/// position of mid-grey in that domain becomes the center of a symmetric
/// window whose half-width is the larger of the two distances to the
/// domain edges. Mapping that window onto `[0, 1]` keeps every input
/// representable; the colormap's far end on the shorter side goes unused.
///
/// No clipping is applied: for `x` in `[0, 1]` the result is already in
/// `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use fc_math::{map_to_colormap_range, ExposureRange};
///
/// let range = ExposureRange::default();
/// let grey = range.normalize(0.18);
/// assert_eq!(map_to_colormap_range(grey, &range).unwrap(), 0.5);
/// ```
pub fn map_to_colormap_range(x: f64, range: &ExposureRange) -> MathResult<f64> {
    let center = range.normalize(MIDDLE_GREY);

    let distance_a = center;
    let distance_b = 1.0 - center;
    let half_width = distance_a.max(distance_b);

    map_to_range(x, center - half_width, center + half_width, 0.0, 1.0, false)
}
