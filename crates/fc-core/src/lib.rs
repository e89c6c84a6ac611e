//! # fc-core
//!
//! Core color types for false color LUT generation.
//!
//! This crate provides the foundational pieces shared by every other crate
//! in the workspace:
//!
//! - [`Rgb`] - Linear RGB triple in double precision
//! - [`relative_luminance`] - Rec.709 weighted luminance
//! - [`interpolate`] - Per-channel linear blend between two colors
//! - [`MIDDLE_GREY`] - Scene reflectance used as the exposure anchor
//!
//! ## Crate Structure
//!
//! ```text
//! fc-core (this crate)
//!    ^
//!    |
//!    +-- fc-math (range mapping, exposure normalization)
//!    +-- fc-color (colormaps, presets, loaders)
//!    +-- fc-lut (cube sampling, SPI3D output)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pixel;

pub use pixel::{
    interpolate, relative_luminance, Rgb, MIDDLE_GREY, REC709_LUMA, REC709_LUMA_B,
    REC709_LUMA_G, REC709_LUMA_R,
};
