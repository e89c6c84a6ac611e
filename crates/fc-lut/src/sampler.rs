//! Cube sampling.
//!
//! Both strategies walk the same `size^3` grid. Each cell's normalized RGB
//! is reduced to Rec.709 luminance `y`, which already lives in the
//! normalized log2 domain of the LUT input, and `y` is turned into a
//! color:
//!
//! - [`generate_from_colormap`] samples a continuous colormap, clipping
//!   to its endpoints outside the unclipped exposure range.
//! - [`generate_from_evs`] interpolates between exposure value points.
//!
//! The red axis is split across the rayon pool. Slices are gathered back
//! in index order, so the output does not depend on the pool size.

use crate::{GridParams, LutRecord, LutResult, SpiLut};
use fc_color::{ColorError, ColorPoint, Colormap};
use fc_core::{interpolate, relative_luminance, Rgb, MIDDLE_GREY};
use fc_math::{map_to_colormap_range, ExposureRange, MathError};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Samples every grid cell through `color_at(y)`.
fn sample_grid<F>(size: usize, color_at: F) -> LutResult<SpiLut>
where
    F: Fn(f64) -> LutResult<Rgb> + Sync,
{
    let scale = (size - 1) as f64;

    let slices = (0..size)
        .into_par_iter()
        .map(|r| {
            let mut slice = Vec::with_capacity(size * size);
            for g in 0..size {
                for b in 0..size {
                    let rgb = [r as f64 / scale, g as f64 / scale, b as f64 / scale];
                    let color = color_at(relative_luminance(rgb))?;
                    slice.push(LutRecord {
                        index: [r, g, b],
                        color,
                    });
                }
            }
            Ok(slice)
        })
        .collect::<LutResult<Vec<Vec<LutRecord>>>>()?;

    SpiLut::from_records(size, slices.into_iter().flatten().collect())
}

/// Continuous colormap lookup with endpoint clipping.
#[derive(Debug, Clone)]
pub struct ColormapSampler<'a> {
    colormap: &'a Colormap,
    input_range: ExposureRange,
    low_clip: f64,
    high_clip: f64,
    centered: bool,
}

impl<'a> ColormapSampler<'a> {
    /// Computes the clip thresholds for `params`.
    pub fn new(colormap: &'a Colormap, params: &GridParams, centered: bool) -> Self {
        let (lo, hi) = params.unclipped_range;
        let input_range = params.input_range;
        Self {
            colormap,
            input_range,
            low_clip: input_range.normalize_exponent(lo),
            high_clip: input_range.normalize_exponent(hi),
            centered,
        }
    }

    /// Normalized luminance below which the first colormap color is used.
    #[inline]
    pub fn low_clip(&self) -> f64 {
        self.low_clip
    }

    /// Normalized luminance above which the last colormap color is used.
    #[inline]
    pub fn high_clip(&self) -> f64 {
        self.high_clip
    }

    /// Color for normalized luminance `y`.
    pub fn color_at(&self, y: f64) -> LutResult<Rgb> {
        if y < self.low_clip {
            return Ok(self.colormap.get_color(0.0));
        }
        if y > self.high_clip {
            return Ok(self.colormap.get_color(1.0));
        }
        let t = if self.centered {
            map_to_colormap_range(y, &self.input_range)?
        } else {
            y
        };
        Ok(self.colormap.get_color(t))
    }
}

/// Generates a false color cube from a continuous colormap.
///
/// With `centered`, mid-grey lands on the middle of the colormap.
///
/// # Example
///
/// ```rust
/// use fc_lut::{generate_from_colormap, GridParams};
/// use fc_color::ColormapRegistry;
///
/// let magma = ColormapRegistry::global().colormap("magma").unwrap();
/// let params = GridParams::default().with_cube_size(5);
/// let lut = generate_from_colormap(magma, &params, false).unwrap();
/// assert_eq!(lut.records().len(), 125);
/// ```
pub fn generate_from_colormap(
    colormap: &Colormap,
    params: &GridParams,
    centered: bool,
) -> LutResult<SpiLut> {
    params.validate()?;
    let sampler = ColormapSampler::new(colormap, params, centered);
    debug!(
        colormap = colormap.name(),
        size = params.cube_size,
        input_min = params.input_range.min(),
        stops = params.input_range.stops(),
        low_clip = sampler.low_clip(),
        high_clip = sampler.high_clip(),
        centered,
        "sampling continuous colormap"
    );
    sample_grid(params.cube_size, |y| sampler.color_at(y))
}

/// Places exposure value points in the normalized luminance domain.
///
/// Points are sorted by EV, and each coordinate becomes
/// `range.normalize(2^ev * 0.18)`. The input is left untouched.
///
/// # Errors
///
/// - [`ColorError::InvalidColormap`] for an empty list or a non-finite EV.
/// - [`MathError::DegenerateRange`] when two points share a normalized
///   coordinate, including EVs clamped together at either end of the range.
pub fn normalize_ev_colormap(
    points: &[ColorPoint],
    range: &ExposureRange,
) -> LutResult<Vec<ColorPoint>> {
    if points.is_empty() {
        return Err(ColorError::InvalidColormap {
            name: "EV colormap".into(),
            reason: "no color points".into(),
        }
        .into());
    }
    if let Some(p) = points.iter().find(|p| !p.coordinate.is_finite()) {
        return Err(ColorError::InvalidColormap {
            name: "EV colormap".into(),
            reason: format!("exposure value {} is not finite", p.coordinate),
        }
        .into());
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.coordinate.total_cmp(&b.coordinate));

    let placed: Vec<ColorPoint> = sorted
        .iter()
        .map(|p| p.with_coordinate(range.normalize(p.coordinate.exp2() * MIDDLE_GREY)))
        .collect();

    for (i, pair) in placed.windows(2).enumerate() {
        if pair[0].coordinate == pair[1].coordinate {
            debug!(
                ev_left = sorted[i].coordinate,
                ev_right = sorted[i + 1].coordinate,
                "exposure values collapse onto one coordinate"
            );
            return Err(MathError::DegenerateRange {
                what: "normalized EV coordinate",
                value: pair[0].coordinate,
            }
            .into());
        }
        trace!(
            ev_left = sorted[i].coordinate,
            ev_right = sorted[i + 1].coordinate,
            left = pair[0].coordinate,
            right = pair[1].coordinate,
            "EV interval"
        );
    }
    Ok(placed)
}

/// Piecewise linear lookup over normalized EV points.
#[derive(Debug, Clone)]
pub struct EvSampler {
    points: Vec<ColorPoint>,
    coordinates: Vec<f64>,
}

impl EvSampler {
    /// Normalizes `points` into `range`.
    pub fn new(points: &[ColorPoint], range: &ExposureRange) -> LutResult<Self> {
        let points = normalize_ev_colormap(points, range)?;
        let coordinates = points.iter().map(|p| p.coordinate).collect();
        Ok(Self {
            points,
            coordinates,
        })
    }

    /// Points with normalized coordinates, ascending.
    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }

    /// Color for normalized luminance `y`.
    pub fn color_at(&self, y: f64) -> Rgb {
        // first coordinate strictly greater than y
        let right = self.coordinates.partition_point(|&c| c <= y);
        if right == 0 {
            return self.points[0].get_color(y);
        }
        if right == self.points.len() {
            return self.points[right - 1].get_color(y);
        }

        let (l, r) = (&self.points[right - 1], &self.points[right]);
        let factor = (y - l.coordinate) / (r.coordinate - l.coordinate);
        interpolate(l.get_color(y), r.get_color(y), factor)
    }
}

/// Generates a false color cube from exposure value points.
///
/// `points` may come in any order; their coordinates are EVs relative to
/// mid-grey. Only the cube size and input range of `params` apply.
pub fn generate_from_evs(points: &[ColorPoint], params: &GridParams) -> LutResult<SpiLut> {
    params.validate()?;
    let sampler = EvSampler::new(points, &params.input_range)?;
    debug!(
        points = points.len(),
        size = params.cube_size,
        input_min = params.input_range.min(),
        stops = params.input_range.stops(),
        "sampling EV colormap"
    );
    sample_grid(params.cube_size, |y| Ok(sampler.color_at(y)))
}
