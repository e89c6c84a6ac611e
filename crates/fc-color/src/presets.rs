//! Built-in colormaps and EV colormaps.
//!
//! The registry uses a singleton pattern via [`ColormapRegistry::global()`].
//! It is built once on first access and never mutated afterwards, so the
//! same preset data can back any number of LUT generations.
//!
//! # Example
//!
//! ```rust
//! use fc_color::ColormapRegistry;
//!
//! let registry = ColormapRegistry::global();
//! let viridis = registry.colormap("viridis").unwrap();
//! assert_eq!(viridis.name(), "viridis");
//!
//! for name in registry.ev_colormap_names() {
//!     println!("EV colormap: {}", name);
//! }
//! ```

use crate::{ColorError, ColorPoint, ColorResult, Colormap};
use fc_core::Rgb;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

const VIRIDIS: &[Rgb] = &[
    [0.267004, 0.004874, 0.329415],
    [0.282623, 0.140926, 0.457517],
    [0.253935, 0.265254, 0.529983],
    [0.206756, 0.371758, 0.553117],
    [0.163625, 0.471133, 0.558148],
    [0.127568, 0.566949, 0.550556],
    [0.134692, 0.658636, 0.517649],
    [0.266941, 0.748751, 0.440573],
    [0.477504, 0.821444, 0.318195],
    [0.741388, 0.873449, 0.149561],
    [0.993248, 0.906157, 0.143936],
];

const MAGMA: &[Rgb] = &[
    [0.001462, 0.000466, 0.013866],
    [0.078815, 0.054184, 0.211667],
    [0.232077, 0.059889, 0.437695],
    [0.390384, 0.100379, 0.501864],
    [0.550287, 0.161158, 0.505719],
    [0.716387, 0.214982, 0.475290],
    [0.868793, 0.287728, 0.409303],
    [0.967671, 0.439703, 0.359810],
    [0.994738, 0.624350, 0.427397],
    [0.987053, 0.991438, 0.749504],
];

const GRAYSCALE: &[Rgb] = &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const HEAT: &[Rgb] = &[
    [0.0, 0.0, 0.0],
    [0.6, 0.0, 0.0],
    [1.0, 0.35, 0.0],
    [1.0, 0.85, 0.1],
    [1.0, 1.0, 1.0],
];

// Exposure zones, EV relative to mid-grey. Close pairs give hard edges.
const FALSE_COLOR: &[(f64, Rgb)] = &[
    (-10.0, [0.45, 0.0, 0.55]),
    (-6.51, [0.45, 0.0, 0.55]),
    (-6.5, [0.0, 0.25, 1.0]),
    (-3.51, [0.0, 0.25, 1.0]),
    (-3.5, [0.35, 0.35, 0.35]),
    (-0.51, [0.35, 0.35, 0.35]),
    (-0.5, [0.0, 0.8, 0.2]),
    (0.5, [0.0, 0.8, 0.2]),
    (0.51, [0.6, 0.6, 0.6]),
    (2.49, [0.6, 0.6, 0.6]),
    (2.5, [1.0, 0.6, 0.7]),
    (3.49, [1.0, 0.6, 0.7]),
    (3.5, [1.0, 0.9, 0.0]),
    (5.99, [1.0, 0.9, 0.0]),
    (6.0, [1.0, 0.0, 0.0]),
    (6.5, [1.0, 0.0, 0.0]),
];

// One color per stop, blended linearly between stops.
const STOPS: &[(f64, Rgb)] = &[
    (-8.0, [0.2, 0.0, 0.4]),
    (-6.0, [0.0, 0.0, 0.9]),
    (-4.0, [0.0, 0.6, 0.9]),
    (-2.0, [0.0, 0.7, 0.3]),
    (0.0, [0.5, 0.5, 0.5]),
    (2.0, [0.9, 0.8, 0.0]),
    (4.0, [1.0, 0.45, 0.0]),
    (6.0, [1.0, 0.0, 0.0]),
];

/// Central registry of built-in colormaps.
///
/// Continuous colormaps are used directly or converted to blocks; EV
/// colormaps hold points whose coordinates are exposure values.
pub struct ColormapRegistry {
    colormaps: BTreeMap<&'static str, Colormap>,
    ev_colormaps: BTreeMap<&'static str, Vec<ColorPoint>>,
}

impl ColormapRegistry {
    /// Returns the global registry instance with built-in presets.
    pub fn global() -> &'static ColormapRegistry {
        static INSTANCE: OnceLock<ColormapRegistry> = OnceLock::new();
        INSTANCE.get_or_init(ColormapRegistry::builtin)
    }

    fn builtin() -> Self {
        let mut colormaps = BTreeMap::new();
        for (name, table) in [
            ("viridis", VIRIDIS),
            ("magma", MAGMA),
            ("grayscale", GRAYSCALE),
            ("heat", HEAT),
        ] {
            colormaps.insert(name, Colormap::from_table(name, table));
        }

        let mut ev_colormaps = BTreeMap::new();
        ev_colormaps.insert("false_color", solid_points(FALSE_COLOR));
        ev_colormaps.insert("stops", solid_points(STOPS));
        ev_colormaps.insert("clip_warning", clip_warning(&colormaps["grayscale"]));

        Self {
            colormaps,
            ev_colormaps,
        }
    }

    /// Looks up a continuous colormap.
    pub fn colormap(&self, name: &str) -> ColorResult<&Colormap> {
        self.colormaps
            .get(name)
            .ok_or_else(|| unknown("colormap", name, self.colormap_names()))
    }

    /// Looks up an EV colormap.
    pub fn ev_colormap(&self, name: &str) -> ColorResult<&[ColorPoint]> {
        self.ev_colormaps
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown("EV colormap", name, self.ev_colormap_names()))
    }

    /// Names of continuous colormaps, sorted.
    pub fn colormap_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colormaps.keys().copied()
    }

    /// Names of EV colormaps, sorted.
    pub fn ev_colormap_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ev_colormaps.keys().copied()
    }
}

fn solid_points(table: &[(f64, Rgb)]) -> Vec<ColorPoint> {
    table.iter().map(|&(ev, rgb)| ColorPoint::new(ev, rgb)).collect()
}

/// Grey ramp following scene luminance, blue when crushed, red when clipped.
fn clip_warning(grayscale: &Colormap) -> Vec<ColorPoint> {
    let ramp = Arc::new(grayscale.clone());
    vec![
        ColorPoint::new(-10.0, [0.0, 0.0, 1.0]),
        ColorPoint::new(-7.01, [0.0, 0.0, 1.0]),
        ColorPoint::gradient(-7.0, Arc::clone(&ramp)),
        ColorPoint::gradient(5.0, ramp),
        ColorPoint::new(5.01, [1.0, 0.0, 0.0]),
        ColorPoint::new(6.5, [1.0, 0.0, 0.0]),
    ]
}

fn unknown<'a>(kind: &'static str, name: &str, names: impl Iterator<Item = &'a str>) -> ColorError {
    ColorError::UnknownPreset {
        kind,
        name: name.to_string(),
        available: names.collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_presets_sorted() {
        let registry = ColormapRegistry::global();
        let names: Vec<_> = registry.colormap_names().collect();
        assert_eq!(names, vec!["grayscale", "heat", "magma", "viridis"]);
        let ev_names: Vec<_> = registry.ev_colormap_names().collect();
        assert_eq!(ev_names, vec!["clip_warning", "false_color", "stops"]);
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = ColormapRegistry::global().colormap("jet").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("jet"));
        assert!(msg.contains("viridis"));
    }

    #[test]
    fn preset_tables_are_valid_colormaps() {
        let registry = ColormapRegistry::global();
        for name in registry.colormap_names() {
            let cmap = registry.colormap(name).unwrap();
            assert!(Colormap::new(name, cmap.colors().to_vec()).is_ok());
        }
    }

    #[test]
    fn ev_presets_have_unique_sorted_evs_inside_default_range() {
        let registry = ColormapRegistry::global();
        for name in registry.ev_colormap_names() {
            let points = registry.ev_colormap(name).unwrap();
            for pair in points.windows(2) {
                assert!(pair[0].coordinate < pair[1].coordinate, "{name}");
            }
            for p in points {
                assert!((-10.0..=6.5).contains(&p.coordinate), "{name}: {}", p.coordinate);
            }
        }
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(ColormapRegistry::global(), ColormapRegistry::global()));
    }
}
