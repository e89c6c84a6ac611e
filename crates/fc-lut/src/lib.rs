//! # fc-lut
//!
//! False color 3D LUT generation.
//!
//! Every cell of an RGB cube is reduced to its luminance, which is mapped
//! onto a colormap. The result is written as an SPI3D table.
//!
//! # Strategies
//!
//! - [`generate_from_colormap`] - Continuous colormap, clipped to its
//!   endpoints outside the unclipped exposure range, optionally centered
//!   on mid-grey
//! - [`generate_from_evs`] - Exposure value points, blended linearly
//!
//! # Jobs
//!
//! [`LutJob`] ties an output name to a [`ColormapSource`] (preset, file,
//! block conversion, EV preset) and dispatches to the right strategy.
//! [`preset_jobs`] lists one job per built-in table.
//!
//! # Usage
//!
//! ```rust
//! use fc_lut::{write_spi3d_to, ColormapSource, GridParams, LutJob};
//!
//! let job = LutJob::new("false_color", ColormapSource::EvPreset("false_color".into()))
//!     .with_params(GridParams::default().with_cube_size(17));
//! let lut = job.generate().unwrap();
//!
//! let mut out = Vec::new();
//! write_spi3d_to(&mut out, &lut).unwrap();
//! assert!(out.starts_with(b"SPILUT 1.0\n3 3\n17 17 17\n"));
//! ```
//!
//! # Dependencies
//!
//! - [`fc-core`] - Luminance and interpolation
//! - [`fc-math`] - Exposure normalization and range mapping
//! - [`fc-color`] - Colormaps and presets
//! - [`rayon`] - Parallel sampling
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `fc-cli` - `fclut` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod job;
mod params;
mod sampler;
pub mod spi;

pub use error::{LutError, LutResult};
pub use job::{preset_jobs, BlockSpec, ColormapSource, LutJob, ResolvedColormap, SPI3D_EXTENSION};
pub use params::{GridParams, DEFAULT_CUBE_SIZE};
pub use sampler::{
    generate_from_colormap, generate_from_evs, normalize_ev_colormap, ColormapSampler, EvSampler,
};
pub use spi::{write_spi3d, write_spi3d_to, LutRecord, SpiLut};
