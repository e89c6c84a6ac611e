//! Conversion of continuous colormaps into exposure value blocks.
//!
//! Given a list of exposure values, each value is assigned a position on
//! the colormap and receives the color found there. Placing pairs of close
//! exposure values (e.g. `-0.1, 0.1`) produces sharp transitions between
//! otherwise constant color segments once the points are sampled.
//!
//! # Policies
//!
//! | Policy        | Position of EV `e` (sorted list `e_0..e_n-1`)            |
//! |---------------|----------------------------------------------------------|
//! | `Equidistant` | `i / (n - 1)`, by rank                                   |
//! | `Centered`    | `0.5 + e / (2 * max(abs(e_0), abs(e_n-1)))`              |
//! | `Stretched`   | `0.5 - 0.5 * e / e_0` below 0, `0.5 + 0.5 * e / e_n-1` above |

use crate::{ColorError, ColorPoint, ColorResult, Colormap};
use fc_math::MathError;
use std::fmt;
use tracing::trace;

/// How exposure values are placed on a colormap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPolicy {
    /// Evenly spaced samples by rank, ignoring the EV magnitudes.
    Equidistant,
    /// EV 0 on the colormap center, one uniform scale for both halves.
    ///
    /// The shorter half leaves the corresponding end of the colormap unused.
    Centered,
    /// EV 0 on the colormap center, each half scaled to reach its edge.
    Stretched,
}

impl BlockPolicy {
    /// Colormap positions for an ascending list of exposure values.
    fn positions(self, evs: &[f64]) -> ColorResult<Vec<f64>> {
        let n = evs.len();
        let first = evs[0];
        let last = evs[n - 1];

        let positions = match self {
            BlockPolicy::Equidistant => {
                if n == 1 {
                    vec![0.5]
                } else {
                    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
                }
            }
            BlockPolicy::Centered => {
                let scale = first.abs().max(last.abs());
                if scale == 0.0 {
                    return Err(MathError::DegenerateRange {
                        what: "exposure value",
                        value: 0.0,
                    }
                    .into());
                }
                evs.iter().map(|ev| 0.5 + ev / (2.0 * scale)).collect()
            }
            BlockPolicy::Stretched => evs
                .iter()
                .map(|&ev| {
                    if ev < 0.0 {
                        0.5 - 0.5 * ev / first
                    } else if ev > 0.0 {
                        0.5 + 0.5 * ev / last
                    } else {
                        0.5
                    }
                })
                .collect(),
        };
        Ok(positions)
    }
}

impl fmt::Display for BlockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockPolicy::Equidistant => "equidistant",
            BlockPolicy::Centered => "centered",
            BlockPolicy::Stretched => "stretched",
        };
        f.write_str(name)
    }
}

/// Samples `colormap` at the positions `policy` assigns to `exposure_values`.
///
/// Returns one solid [`ColorPoint`] per exposure value, sorted by EV.
///
/// # Errors
///
/// - [`ColorError::InvalidColormap`] for an empty or non-finite EV list.
/// - [`ColorError::Math`] for `Centered` when every EV is zero.
///
/// # Example
///
/// ```rust
/// use fc_color::{colormap_to_ev_blocks, BlockPolicy, Colormap};
///
/// let cmap = Colormap::new("ramp", vec![[0.0; 3], [1.0; 3]]).unwrap();
/// let blocks = colormap_to_ev_blocks(&cmap, &[4.0, -2.0, 0.0], BlockPolicy::Centered).unwrap();
/// assert_eq!(blocks[0].coordinate, -2.0);
/// assert_eq!(blocks[1].get_color(0.0), [0.5; 3]);
/// ```
pub fn colormap_to_ev_blocks(
    colormap: &Colormap,
    exposure_values: &[f64],
    policy: BlockPolicy,
) -> ColorResult<Vec<ColorPoint>> {
    if exposure_values.is_empty() {
        return Err(ColorError::invalid(
            colormap.name(),
            format!("no exposure values given for {} blocks", policy),
        ));
    }
    if let Some(ev) = exposure_values.iter().find(|ev| !ev.is_finite()) {
        return Err(ColorError::invalid(
            colormap.name(),
            format!("exposure value {} is not finite", ev),
        ));
    }

    let mut evs = exposure_values.to_vec();
    evs.sort_by(f64::total_cmp);

    let positions = policy.positions(&evs)?;
    trace!(colormap = colormap.name(), %policy, ?positions, "placed exposure values");

    Ok(evs
        .iter()
        .zip(positions)
        .map(|(&ev, t)| ColorPoint::new(ev, colormap.get_color(t)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp() -> Colormap {
        Colormap::new("ramp", vec![[0.0; 3], [1.0; 3]]).unwrap()
    }

    fn greys(points: &[ColorPoint]) -> Vec<f64> {
        points.iter().map(|p| p.get_color(0.0)[0]).collect()
    }

    #[test]
    fn equidistant_uses_rank() {
        let evs = [5.0, -10.0, 0.0, 1.0, -1.0];
        let blocks = colormap_to_ev_blocks(&ramp(), &evs, BlockPolicy::Equidistant).unwrap();
        let evs: Vec<f64> = blocks.iter().map(|p| p.coordinate).collect();
        assert_eq!(evs, vec![-10.0, -1.0, 0.0, 1.0, 5.0]);
        assert_eq!(greys(&blocks), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn equidistant_single_value_takes_center() {
        let blocks = colormap_to_ev_blocks(&ramp(), &[2.0], BlockPolicy::Equidistant).unwrap();
        assert_eq!(greys(&blocks), vec![0.5]);
    }

    #[test]
    fn centered_scales_uniformly() {
        let evs = [-10.0, -5.0, 0.0, 5.0];
        let blocks = colormap_to_ev_blocks(&ramp(), &evs, BlockPolicy::Centered).unwrap();
        let g = greys(&blocks);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[1], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(g[2], 0.5, epsilon = 1e-12);
        // Upper half is shorter and stops before the colormap end.
        assert_abs_diff_eq!(g[3], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn centered_rejects_all_zero() {
        let err = colormap_to_ev_blocks(&ramp(), &[0.0, 0.0], BlockPolicy::Centered).unwrap_err();
        assert!(matches!(err, ColorError::Math(MathError::DegenerateRange { .. })));
    }

    #[test]
    fn stretched_reaches_both_edges() {
        let evs = [-10.0, -5.0, 0.0, 2.5, 5.0];
        let blocks = colormap_to_ev_blocks(&ramp(), &evs, BlockPolicy::Stretched).unwrap();
        let g = greys(&blocks);
        assert_abs_diff_eq!(g[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g[1], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(g[2], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g[3], 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(g[4], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn stretched_one_sided() {
        let evs = [1.0, 2.0, 4.0];
        let blocks = colormap_to_ev_blocks(&ramp(), &evs, BlockPolicy::Stretched).unwrap();
        let g = greys(&blocks);
        assert_abs_diff_eq!(g[0], 0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(g[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert!(matches!(
            colormap_to_ev_blocks(&ramp(), &[], BlockPolicy::Stretched),
            Err(ColorError::InvalidColormap { .. })
        ));
        assert!(matches!(
            colormap_to_ev_blocks(&ramp(), &[0.0, f64::INFINITY], BlockPolicy::Equidistant),
            Err(ColorError::InvalidColormap { .. })
        ));
    }
}
