//! # fc-color
//!
//! Colormaps for false color LUT generation.
//!
//! - [`Colormap`] - Continuous colormap sampled over `[0, 1]`
//! - [`ColorPoint`] / [`PointColor`] - Exposure-indexed color points
//! - [`colormap_to_ev_blocks`] / [`BlockPolicy`] - Turn a continuous
//!   colormap into exposure value blocks
//! - [`ColormapRegistry`] - Built-in colormaps and EV colormaps
//! - [`load_colormap`] - viscm scripts and YAML colormap files
//!
//! # Architecture
//!
//! ```text
//!              fc-color
//!                  |
//!         +--------+--------+
//!         |                 |
//!      fc-math              |
//!         |                 |
//!         +--------+--------+
//!                  |
//!               fc-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fc_color::{colormap_to_ev_blocks, BlockPolicy, ColormapRegistry};
//!
//! let registry = ColormapRegistry::global();
//! let magma = registry.colormap("magma").unwrap();
//!
//! let evs = [-6.0, -0.1, 0.1, 6.0];
//! let blocks = colormap_to_ev_blocks(magma, &evs, BlockPolicy::Stretched).unwrap();
//! assert_eq!(blocks.len(), 4);
//! assert_eq!(blocks[0].get_color(0.0), magma.get_color(0.0));
//! ```
//!
//! # Dependencies
//!
//! - [`fc-core`] - RGB triples
//! - [`fc-math`] - Range errors
//! - [`serde_yaml`] / [`regex`] - Colormap file parsing
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod blocks;
mod colormap;
mod error;
mod point;
pub mod loader;
pub mod presets;

pub use blocks::{colormap_to_ev_blocks, BlockPolicy};
pub use colormap::Colormap;
pub use error::{ColorError, ColorResult};
pub use loader::load_colormap;
pub use point::{ColorPoint, PointColor};
pub use presets::ColormapRegistry;
