//! Where a table's colors come from, and the job that renders it.
//!
//! A [`LutJob`] names an output table, a [`ColormapSource`] and the grid
//! parameters. Sources are resolved to either a continuous colormap or
//! a list of EV points, then sampled with the matching strategy.

use crate::{generate_from_colormap, generate_from_evs, GridParams, LutResult, SpiLut};
use fc_color::{
    colormap_to_ev_blocks, load_colormap, BlockPolicy, ColorPoint, Colormap, ColormapRegistry,
};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// File extension of generated tables.
pub const SPI3D_EXTENSION: &str = "spi3d";

/// Conversion of a continuous colormap into constant EV blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpec {
    /// How exposure values are placed on the colormap.
    pub policy: BlockPolicy,
    /// Exposure values, in stops relative to mid-grey. Any order.
    pub exposure_values: Vec<f64>,
}

impl BlockSpec {
    /// Creates a block conversion.
    pub fn new(policy: BlockPolicy, exposure_values: Vec<f64>) -> Self {
        Self {
            policy,
            exposure_values,
        }
    }
}

/// Origin of the colors for one table.
#[derive(Debug, Clone, PartialEq)]
pub enum ColormapSource {
    /// Built-in continuous colormap.
    Preset(String),
    /// Built-in continuous colormap converted to EV blocks.
    PresetBlocks {
        /// Registered colormap name.
        name: String,
        /// Block conversion.
        blocks: BlockSpec,
    },
    /// Colormap file (viscm script or YAML).
    Loaded(PathBuf),
    /// Colormap file converted to EV blocks.
    LoadedBlocks {
        /// Colormap file.
        path: PathBuf,
        /// Block conversion.
        blocks: BlockSpec,
    },
    /// Built-in EV colormap.
    EvPreset(String),
}

/// Colors ready for sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedColormap {
    /// Sampled with [`generate_from_colormap`].
    Continuous(Colormap),
    /// Sampled with [`generate_from_evs`].
    Blocks(Vec<ColorPoint>),
}

impl fmt::Display for ResolvedColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedColormap::Continuous(cmap) => write!(f, "{}", cmap),
            ResolvedColormap::Blocks(points) => {
                writeln!(f, "[")?;
                for p in points {
                    writeln!(f, "    {},", p)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl ColormapSource {
    /// Looks up, loads or converts the colormap.
    pub fn resolve(&self) -> LutResult<ResolvedColormap> {
        let registry = ColormapRegistry::global();
        let resolved = match self {
            ColormapSource::Preset(name) => {
                ResolvedColormap::Continuous(registry.colormap(name)?.clone())
            }
            ColormapSource::PresetBlocks { name, blocks } => {
                let cmap = registry.colormap(name)?;
                ResolvedColormap::Blocks(to_blocks(cmap, blocks)?)
            }
            ColormapSource::Loaded(path) => ResolvedColormap::Continuous(load_colormap(path)?),
            ColormapSource::LoadedBlocks { path, blocks } => {
                let cmap = load_colormap(path)?;
                ResolvedColormap::Blocks(to_blocks(&cmap, blocks)?)
            }
            ColormapSource::EvPreset(name) => {
                ResolvedColormap::Blocks(registry.ev_colormap(name)?.to_vec())
            }
        };
        Ok(resolved)
    }
}

fn to_blocks(cmap: &Colormap, blocks: &BlockSpec) -> LutResult<Vec<ColorPoint>> {
    Ok(colormap_to_ev_blocks(
        cmap,
        &blocks.exposure_values,
        blocks.policy,
    )?)
}

/// One table to render.
///
/// # Example
///
/// ```rust
/// use fc_lut::{ColormapSource, GridParams, LutJob};
///
/// let job = LutJob::new("viridis_centered", ColormapSource::Preset("viridis".into()))
///     .with_params(GridParams::default().with_cube_size(9))
///     .with_centered(true);
/// assert_eq!(job.file_name(), "viridis_centered.spi3d");
/// let lut = job.generate().unwrap();
/// assert_eq!(lut.size(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LutJob {
    /// Output name, also the file stem.
    pub name: String,
    /// Where the colors come from.
    pub source: ColormapSource,
    /// Grid shape and luminance domain.
    pub params: GridParams,
    /// Center mid-grey on continuous colormaps. Ignored for blocks.
    pub centered: bool,
}

impl LutJob {
    /// Creates a job with default grid parameters, not centered.
    pub fn new(name: impl Into<String>, source: ColormapSource) -> Self {
        Self {
            name: name.into(),
            source,
            params: GridParams::default(),
            centered: false,
        }
    }

    /// Sets the grid parameters.
    pub fn with_params(mut self, params: GridParams) -> Self {
        self.params = params;
        self
    }

    /// Sets mid-grey centering.
    pub fn with_centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Output file name: the job name with a `.spi3d` extension.
    pub fn file_name(&self) -> String {
        let suffix = format!(".{}", SPI3D_EXTENSION);
        if self.name.ends_with(&suffix) {
            self.name.clone()
        } else {
            format!("{}{}", self.name, suffix)
        }
    }

    /// Resolves the source.
    pub fn resolve(&self) -> LutResult<ResolvedColormap> {
        self.source.resolve()
    }

    /// Resolves the source and samples the cube.
    pub fn generate(&self) -> LutResult<SpiLut> {
        let resolved = self.resolve()?;
        self.generate_resolved(&resolved)
    }

    /// Samples the cube from an already resolved colormap.
    pub fn generate_resolved(&self, resolved: &ResolvedColormap) -> LutResult<SpiLut> {
        debug!(job = %self.name, "generating");
        match resolved {
            ResolvedColormap::Continuous(cmap) => {
                generate_from_colormap(cmap, &self.params, self.centered)
            }
            ResolvedColormap::Blocks(points) => generate_from_evs(points, &self.params),
        }
    }
}

/// One job per built-in table: every continuous colormap, not centered,
/// then every EV colormap.
pub fn preset_jobs(params: &GridParams) -> Vec<LutJob> {
    let registry = ColormapRegistry::global();
    let continuous = registry
        .colormap_names()
        .map(|name| LutJob::new(name, ColormapSource::Preset(name.into())));
    let ev = registry
        .ev_colormap_names()
        .map(|name| LutJob::new(name, ColormapSource::EvPreset(name.into())));
    continuous
        .chain(ev)
        .map(|job| job.with_params(*params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GridParams {
        GridParams::default().with_cube_size(3)
    }

    #[test]
    fn file_name_appends_extension_once() {
        let job = LutJob::new("a", ColormapSource::Preset("viridis".into()));
        assert_eq!(job.file_name(), "a.spi3d");
        let job = LutJob::new("b.spi3d", ColormapSource::Preset("viridis".into()));
        assert_eq!(job.file_name(), "b.spi3d");
    }

    #[test]
    fn preset_resolves_continuous() {
        let resolved = ColormapSource::Preset("heat".into()).resolve().unwrap();
        match resolved {
            ResolvedColormap::Continuous(c) => assert_eq!(c.name(), "heat"),
            other => panic!("expected continuous, got {:?}", other),
        }
    }

    #[test]
    fn preset_blocks_resolve_sorted() {
        let source = ColormapSource::PresetBlocks {
            name: "grayscale".into(),
            blocks: BlockSpec::new(BlockPolicy::Stretched, vec![4.0, -8.0, 0.0]),
        };
        match source.resolve().unwrap() {
            ResolvedColormap::Blocks(points) => {
                let evs: Vec<f64> = points.iter().map(|p| p.coordinate).collect();
                assert_eq!(evs, vec![-8.0, 0.0, 4.0]);
                assert_eq!(points[0].get_color(0.0), [0.0; 3]);
                assert_eq!(points[2].get_color(0.0), [1.0; 3]);
            }
            other => panic!("expected blocks, got {:?}", other),
        }
    }

    #[test]
    fn loaded_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ice.yaml");
        std::fs::write(&path, "colors: [[0, 0, 1], [1, 1, 1]]").unwrap();

        let job = LutJob::new("ice", ColormapSource::Loaded(path.clone())).with_params(small());
        let lut = job.generate().unwrap();
        assert_eq!(lut.record(0, 0, 0).color, [0.0, 0.0, 1.0]);

        let blocks = ColormapSource::LoadedBlocks {
            path,
            blocks: BlockSpec::new(BlockPolicy::Equidistant, vec![-2.0, 2.0]),
        };
        let job = LutJob::new("ice_blocks", blocks).with_params(small());
        let lut = job.generate().unwrap();
        assert_eq!(lut.record(0, 0, 0).color, [0.0, 0.0, 1.0]);
        assert_eq!(lut.record(2, 2, 2).color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn unknown_preset_is_invalid_colormap_source() {
        let err = LutJob::new("x", ColormapSource::EvPreset("nope".into()))
            .generate()
            .unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ColormapSource::Loaded("/nonexistent/cmap.py".into())
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            crate::LutError::Color(fc_color::ColorError::Io(_))
        ));
    }

    #[test]
    fn centered_flag_changes_output() {
        let source = ColormapSource::Preset("viridis".into());
        let plain = LutJob::new("v", source.clone()).with_params(small());
        let centered = plain.clone().with_centered(true);
        assert_ne!(plain.generate().unwrap(), centered.generate().unwrap());
    }

    #[test]
    fn preset_jobs_cover_registry() {
        let jobs = preset_jobs(&small());
        let registry = ColormapRegistry::global();
        let expected = registry.colormap_names().count() + registry.ev_colormap_names().count();
        assert_eq!(jobs.len(), expected);
        assert!(jobs.iter().all(|j| !j.centered && j.params.cube_size == 3));
        for job in &jobs {
            job.generate().unwrap();
        }
    }

    #[test]
    fn blocks_display_one_point_per_line() {
        let resolved = ResolvedColormap::Blocks(vec![
            ColorPoint::new(-1.0, [0.0; 3]),
            ColorPoint::new(1.0, [1.0; 3]),
        ]);
        let text = resolved.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("ColorPoint(-1.0000"));
    }
}
