//! Sony Pictures Imageworks 3D LUT output (SPI3D).
//!
//! False color tables are written as SPI3D text:
//!
//! ```text
//! SPILUT 1.0
//! 3 3
//! 65 65 65
//! 0 0 0 0.26700400 0.00487400 0.32941500
//! 0 1 0 0.26700400 0.00487400 0.32941500
//! ...
//! ```
//!
//! Records are emitted red-major (red outer, green middle, blue inner).
//! Each line lists the input indices as `red blue green`, followed by the
//! output color in `r g b` order with eight decimals. The swapped index
//! columns are what downstream color management tools expect for these
//! tables and must be kept as is.
//!
//! # References
//!
//! - [OpenColorIO SPI3D](https://opencolorio.readthedocs.io/en/latest/guides/authoring/luts.html)

use crate::params::cube_cells;
use crate::{LutError, LutResult};
use fc_core::Rgb;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// First header line of every SPI3D file.
pub const SPI3D_MAGIC: &str = "SPILUT 1.0";

/// Second header line: three input and three output channels.
pub const SPI3D_CHANNELS: &str = "3 3";

/// One sampled grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LutRecord {
    /// Grid position as `[red, green, blue]` indices.
    pub index: [usize; 3],
    /// Resolved output color.
    pub color: Rgb,
}

impl fmt::Display for LutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.index;
        write!(
            f,
            "{} {} {} {:.8} {:.8} {:.8}",
            r, b, g, self.color[0], self.color[1], self.color[2]
        )
    }
}

/// A fully sampled false color cube, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiLut {
    size: usize,
    records: Vec<LutRecord>,
}

impl SpiLut {
    /// Wraps `size^3` records in red-major order.
    pub fn from_records(size: usize, records: Vec<LutRecord>) -> LutResult<Self> {
        let expected = cube_cells(size)?;
        if size < 2 || records.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} records for size {}, got {}",
                expected,
                size,
                records.len()
            )));
        }
        Ok(Self { size, records })
    }

    /// Samples per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Records in output order.
    #[inline]
    pub fn records(&self) -> &[LutRecord] {
        &self.records
    }

    /// Record for grid position (r, g, b).
    #[inline]
    pub fn record(&self, r: usize, g: usize, b: usize) -> &LutRecord {
        &self.records[(r * self.size + g) * self.size + b]
    }

    /// The three header lines.
    pub fn header_lines(&self) -> [String; 3] {
        let n = self.size;
        [
            SPI3D_MAGIC.to_string(),
            SPI3D_CHANNELS.to_string(),
            format!("{} {} {}", n, n, n),
        ]
    }

    /// All lines of the file, header first, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.header_lines()
            .into_iter()
            .chain(self.records.iter().map(LutRecord::to_string))
    }
}

/// Writes an SPI3D file to disk.
///
/// # Example
///
/// ```rust,no_run
/// use fc_lut::{generate_from_colormap, write_spi3d, GridParams};
/// use fc_color::ColormapRegistry;
/// use std::path::Path;
///
/// let viridis = ColormapRegistry::global().colormap("viridis").unwrap();
/// let lut = generate_from_colormap(viridis, &GridParams::default(), true).unwrap();
/// write_spi3d(Path::new("viridis.spi3d"), &lut).unwrap();
/// ```
pub fn write_spi3d(path: &Path, lut: &SpiLut) -> LutResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    write_spi3d_to(writer, lut)
}

/// Writes SPI3D to any writer.
pub fn write_spi3d_to<W: Write>(mut writer: W, lut: &SpiLut) -> LutResult<()> {
    for line in lut.header_lines() {
        writeln!(writer, "{}", line)?;
    }
    for record in &lut.records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> SpiLut {
        let mut records = Vec::new();
        for r in 0..2 {
            for g in 0..2 {
                for b in 0..2 {
                    records.push(LutRecord {
                        index: [r, g, b],
                        color: [r as f64, g as f64 * 0.5, b as f64 / 3.0],
                    });
                }
            }
        }
        SpiLut::from_records(2, records).unwrap()
    }

    #[test]
    fn record_swaps_blue_and_green_indices() {
        let record = LutRecord {
            index: [1, 2, 3],
            color: [0.1, 0.2, 0.3],
        };
        assert_eq!(record.to_string(), "1 3 2 0.10000000 0.20000000 0.30000000");
    }

    #[test]
    fn writes_header_and_records() {
        let mut buf = Vec::new();
        write_spi3d_to(&mut buf, &tiny()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 8);
        assert_eq!(&lines[..3], &["SPILUT 1.0", "3 3", "2 2 2"]);
        assert_eq!(lines[3], "0 0 0 0.00000000 0.00000000 0.00000000");
        assert_eq!(lines[4], "0 1 0 0.00000000 0.00000000 0.33333333");
        assert_eq!(lines[5], "0 0 1 0.00000000 0.50000000 0.00000000");
        assert_eq!(lines[10], "1 1 1 1.00000000 0.50000000 0.33333333");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn lines_match_written_text() {
        let lut = tiny();
        let mut buf = Vec::new();
        write_spi3d_to(&mut buf, &lut).unwrap();
        let joined: String = lut.lines().map(|l| l + "\n").collect();
        assert_eq!(joined.as_bytes(), buf.as_slice());
    }

    #[test]
    fn record_lookup_is_red_major() {
        let lut = tiny();
        assert_eq!(lut.record(1, 0, 1).index, [1, 0, 1]);
        assert_eq!(lut.records()[5].index, [1, 0, 1]);
    }

    #[test]
    fn rejects_wrong_record_count() {
        assert!(matches!(
            SpiLut::from_records(3, vec![]),
            Err(LutError::InvalidSize(_))
        ));
        assert!(matches!(
            SpiLut::from_records(usize::MAX, vec![]),
            Err(LutError::InvalidSize(_))
        ));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.spi3d");
        write_spi3d(&path, &tiny()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("SPILUT 1.0\n3 3\n2 2 2\n"));
        assert_eq!(text.lines().count(), 11);
    }
}
