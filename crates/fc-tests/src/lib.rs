//! Integration tests for the false color LUT crates.
//!
//! End-to-end checks across fc-math, fc-color and fc-lut: generated
//! tables are hashed with SHA-256 so regressions and nondeterminism show
//! up as digest mismatches.

use fc_lut::SpiLut;
use sha2::{Digest, Sha256};

/// SHA-256 of the SPI3D text of `lut`, as lowercase hex.
pub fn lut_digest(lut: &SpiLut) -> String {
    let mut hasher = Sha256::new();
    for line in lut.lines() {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

/// SHA-256 of raw bytes, as lowercase hex.
pub fn bytes_digest(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
