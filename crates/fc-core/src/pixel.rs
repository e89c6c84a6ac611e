//! RGB triples and luminance.
//!
//! Colors are plain `[f64; 3]` arrays. Components are conceptually in
//! `[0.0, 1.0]` but are never clamped here; colormap data may overshoot
//! slightly and the LUT writer emits whatever it is given.
//!
//! # Used By
//!
//! - `fc-math` - mid-grey anchor for exposure normalization
//! - `fc-color` - colormap control points
//! - `fc-lut` - per-cell luminance and output colors

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the standard luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f64; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Scene-referred reflectance of nominal mid-grey.
///
/// Exposure values are expressed in stops relative to this value.
pub const MIDDLE_GREY: f64 = 0.18;

/// An RGB triple `[R, G, B]`.
pub type Rgb = [f64; 3];

/// Relative luminance of an RGB triple using Rec.709 weights.
///
/// The weights are non-negative and sum to one, so the result is monotonic
/// in every channel and `relative_luminance([v, v, v]) == v` up to rounding.
///
/// # Example
/// ```
/// use fc_core::relative_luminance;
/// let y = relative_luminance([0.5, 0.3, 0.2]);
/// // 0.5 * 0.2126 + 0.3 * 0.7152 + 0.2 * 0.0722 = 0.3353
/// assert!((y - 0.3353).abs() < 1e-12);
/// ```
#[inline]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// Per-channel linear blend from `a` to `b`.
///
/// Returns `a` at `factor = 0.0` and `b` at `factor = 1.0`. The factor is
/// not clamped.
#[inline]
pub fn interpolate(a: Rgb, b: Rgb, factor: f64) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * factor,
        a[1] + (b[1] - a[1]) * factor,
        a[2] + (b[2] - a[2]) * factor,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn luma_weights_sum_to_one() {
        assert_abs_diff_eq!(REC709_LUMA.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn grey_keeps_its_value() {
        assert_abs_diff_eq!(relative_luminance([0.18, 0.18, 0.18]), 0.18, epsilon = 1e-12);
        assert_eq!(relative_luminance([0.0, 0.0, 0.0]), 0.0);
        assert_abs_diff_eq!(relative_luminance([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn green_dominates() {
        let r = relative_luminance([1.0, 0.0, 0.0]);
        let g = relative_luminance([0.0, 1.0, 0.0]);
        let b = relative_luminance([0.0, 0.0, 1.0]);
        assert!(g > r && r > b);
    }

    #[test]
    fn interpolate_endpoints_and_middle() {
        let a = [0.0, 0.2, 1.0];
        let b = [1.0, 0.4, 0.0];
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);
        let mid = interpolate(a, b, 0.5);
        assert_abs_diff_eq!(mid[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[1], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(mid[2], 0.5, epsilon = 1e-12);
    }
}
