//! Continuous colormaps.
//!
//! A [`Colormap`] is an ordered list of RGB control points spread evenly
//! across `[0, 1]`. Lookups interpolate linearly between the two enclosing
//! control points.

use crate::{ColorError, ColorResult};
use fc_core::{interpolate, Rgb};
use std::fmt;

/// Continuous colormap over `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use fc_color::Colormap;
///
/// let cmap = Colormap::new("ramp", vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.0]]).unwrap();
/// assert_eq!(cmap.get_color(0.5), [0.5, 0.25, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    colors: Vec<Rgb>,
}

impl Colormap {
    /// Creates a colormap from at least two finite control points.
    pub fn new(name: impl Into<String>, colors: Vec<Rgb>) -> ColorResult<Self> {
        let name = name.into();
        if colors.len() < 2 {
            return Err(ColorError::invalid(
                name,
                format!("need at least 2 control points, got {}", colors.len()),
            ));
        }
        if let Some(idx) = colors
            .iter()
            .position(|rgb| rgb.iter().any(|c| !c.is_finite()))
        {
            return Err(ColorError::invalid(
                name,
                format!("control point {} is not finite: {:?}", idx, colors[idx]),
            ));
        }
        Ok(Self { name, colors })
    }

    /// Builds a colormap from a static table known to be valid.
    pub(crate) fn from_table(name: &str, colors: &[Rgb]) -> Self {
        debug_assert!(colors.len() >= 2);
        Self {
            name: name.to_string(),
            colors: colors.to_vec(),
        }
    }

    /// Colormap name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Control points in order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of control points.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a colormap holds at least two control points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Evaluates the colormap at `t`.
    ///
    /// `t` is clamped to `[0, 1]` (NaN evaluates as `0.0`). The endpoints
    /// return the first and last control points exactly.
    pub fn get_color(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.colors.len() - 1;
        let pos = t * last as f64;
        let idx = pos.floor() as usize;
        if idx >= last {
            return self.colors[last];
        }
        let factor = pos - idx as f64;
        if factor == 0.0 {
            return self.colors[idx];
        }
        interpolate(self.colors[idx], self.colors[idx + 1], factor)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = [", self.name)?;
        for rgb in &self.colors {
            writeln!(f, "    [{:.6}, {:.6}, {:.6}],", rgb[0], rgb[1], rgb[2])?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn three_stop() -> Colormap {
        Colormap::new(
            "rgb",
            vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        )
        .unwrap()
    }

    #[test]
    fn endpoints_are_exact() {
        let cmap = Colormap::new("odd", vec![[0.1, 0.2, 0.3], [0.3, 0.7, 0.9]]).unwrap();
        assert_eq!(cmap.get_color(0.0), [0.1, 0.2, 0.3]);
        assert_eq!(cmap.get_color(1.0), [0.3, 0.7, 0.9]);
    }

    #[test]
    fn hits_inner_control_point() {
        assert_eq!(three_stop().get_color(0.5), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn interpolates_between_neighbors() {
        let c = three_stop().get_color(0.25);
        assert_abs_diff_eq!(c[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let cmap = three_stop();
        assert_eq!(cmap.get_color(-3.0), cmap.get_color(0.0));
        assert_eq!(cmap.get_color(7.5), cmap.get_color(1.0));
        assert_eq!(cmap.get_color(f64::NAN), cmap.get_color(0.0));
    }

    #[test]
    fn rejects_short_or_non_finite_tables() {
        assert!(matches!(
            Colormap::new("one", vec![[0.0, 0.0, 0.0]]),
            Err(ColorError::InvalidColormap { .. })
        ));
        assert!(matches!(
            Colormap::new("nan", vec![[0.0, 0.0, 0.0], [f64::NAN, 0.0, 0.0]]),
            Err(ColorError::InvalidColormap { .. })
        ));
    }

    #[test]
    fn display_lists_control_points() {
        let text = three_stop().to_string();
        assert!(text.starts_with("rgb = ["));
        assert!(text.contains("[0.000000, 1.000000, 0.000000],"));
        assert!(text.ends_with(']'));
    }
}
