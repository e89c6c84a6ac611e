//! Exposure-indexed color points.
//!
//! EV colormaps are lists of [`ColorPoint`]s whose coordinate starts out as
//! an exposure value (stops relative to mid-grey). The LUT sampler builds a
//! normalized copy of the list and interpolates between neighboring points.

use crate::Colormap;
use fc_core::Rgb;
use std::fmt;
use std::sync::Arc;

/// Color carried by a [`ColorPoint`].
#[derive(Debug, Clone, PartialEq)]
pub enum PointColor {
    /// Same color at every position.
    Solid(Rgb),
    /// Samples a continuous colormap at the queried position.
    Gradient(Arc<Colormap>),
}

impl PointColor {
    /// Resolves the color at normalized position `y`.
    #[inline]
    pub fn get_color(&self, y: f64) -> Rgb {
        match self {
            PointColor::Solid(rgb) => *rgb,
            PointColor::Gradient(cmap) => cmap.get_color(y),
        }
    }
}

/// A color anchored at a coordinate.
///
/// The coordinate is an exposure value in preset and converted colormaps,
/// and a normalized position in `[0, 1]` once the sampler has placed the
/// point in the luminance domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPoint {
    /// Exposure value, or normalized position after placement.
    pub coordinate: f64,
    /// Color at this point.
    pub color: PointColor,
}

impl ColorPoint {
    /// Creates a point with a constant color.
    pub fn new(coordinate: f64, rgb: Rgb) -> Self {
        Self {
            coordinate,
            color: PointColor::Solid(rgb),
        }
    }

    /// Creates a point that samples `colormap` at the queried position.
    pub fn gradient(coordinate: f64, colormap: Arc<Colormap>) -> Self {
        Self {
            coordinate,
            color: PointColor::Gradient(colormap),
        }
    }

    /// Returns a copy moved to `coordinate`.
    pub fn with_coordinate(&self, coordinate: f64) -> Self {
        Self {
            coordinate,
            color: self.color.clone(),
        }
    }

    /// Resolves the color at normalized position `y`.
    #[inline]
    pub fn get_color(&self, y: f64) -> Rgb {
        self.color.get_color(y)
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.color {
            PointColor::Solid(rgb) => write!(
                f,
                "ColorPoint({:+.4}, [{:.6}, {:.6}, {:.6}])",
                self.coordinate, rgb[0], rgb[1], rgb[2]
            ),
            PointColor::Gradient(cmap) => {
                write!(f, "ColorPoint({:+.4}, gradient {})", self.coordinate, cmap.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_ignores_position() {
        let p = ColorPoint::new(-2.0, [0.2, 0.4, 0.6]);
        assert_eq!(p.get_color(0.0), [0.2, 0.4, 0.6]);
        assert_eq!(p.get_color(0.9), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn gradient_follows_position() {
        let cmap = Arc::new(Colormap::new("grey", vec![[0.0; 3], [1.0; 3]]).unwrap());
        let p = ColorPoint::gradient(0.0, cmap);
        assert_eq!(p.get_color(0.25), [0.25; 3]);
        assert_eq!(p.get_color(1.0), [1.0; 3]);
    }

    #[test]
    fn with_coordinate_keeps_color() {
        let p = ColorPoint::new(3.0, [1.0, 0.0, 0.0]);
        let moved = p.with_coordinate(0.75);
        assert_eq!(moved.coordinate, 0.75);
        assert_eq!(moved.color, p.color);
        assert_eq!(p.coordinate, 3.0);
    }

    #[test]
    fn display_shows_ev_and_color() {
        let p = ColorPoint::new(-1.5, [1.0, 0.5, 0.0]);
        assert_eq!(p.to_string(), "ColorPoint(-1.5000, [1.000000, 0.500000, 0.000000])");
    }
}
