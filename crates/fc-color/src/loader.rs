//! Loading externally authored colormaps.
//!
//! Two formats are recognized by extension:
//!
//! - `.py` - colormap scripts saved by viscm, which carry the control
//!   points as a `cm_data = [[r, g, b], ...]` literal
//! - `.yaml` / `.yml` - a small document:
//!
//! ```yaml
//! name: cool_ramp      # optional, defaults to the file stem
//! colors:
//!   - [0.0, 0.0, 0.5]
//!   - [0.0, 1.0, 1.0]
//! ```

use crate::{ColorError, ColorResult, Colormap};
use fc_core::Rgb;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ColormapFile {
    name: Option<String>,
    colors: Vec<[f64; 3]>,
}

/// Loads a colormap from disk, choosing the parser by file extension.
///
/// # Errors
///
/// - [`ColorError::Io`] if the file cannot be read.
/// - [`ColorError::InvalidColormap`] for unknown extensions or malformed content.
pub fn load_colormap(path: &Path) -> ColorResult<Colormap> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("colormap");

    let cmap = match ext.as_str() {
        "py" => parse_viscm(stem, &std::fs::read_to_string(path)?),
        "yaml" | "yml" => parse_yaml(stem, &std::fs::read_to_string(path)?),
        _ => Err(ColorError::invalid(
            path.display().to_string(),
            format!("unsupported colormap format '.{}' (expected .py, .yaml or .yml)", ext),
        )),
    }?;

    debug!(
        path = %path.display(),
        name = cmap.name(),
        points = cmap.len(),
        "loaded colormap"
    );
    Ok(cmap)
}

/// Opening of the `cm_data = [` assignment.
const CM_DATA_START: &str = r"cm_data\s*=\s*\[";

/// One `[r, g, b]` row, optionally with a trailing comma.
const CM_DATA_TRIPLE: &str =
    r"\[\s*([^\[\],\s]+)\s*,\s*([^\[\],\s]+)\s*,\s*([^\[\],\s]+)\s*,?\s*\]";

/// Compiles `pattern` once; a compile failure is reported for `name`.
fn cached_regex<'a>(
    cell: &'a OnceLock<Result<Regex, regex::Error>>,
    pattern: &str,
    name: &str,
) -> ColorResult<&'a Regex> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| ColorError::invalid(name, format!("cm_data pattern: {}", e)))
}

/// Parses the `cm_data` list out of a viscm colormap script.
pub fn parse_viscm(name: &str, source: &str) -> ColorResult<Colormap> {
    static START: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    static TRIPLE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    let start = cached_regex(&START, CM_DATA_START, name)?;
    let triple = cached_regex(&TRIPLE, CM_DATA_TRIPLE, name)?;

    let open = start
        .find(source)
        .ok_or_else(|| ColorError::invalid(name, "no cm_data list found"))?;
    let body = bracketed(&source[open.end()..])
        .ok_or_else(|| ColorError::invalid(name, "cm_data list is not closed"))?;

    let colors = triple
        .captures_iter(body)
        .map(|caps| -> ColorResult<Rgb> {
            let mut rgb: Rgb = [0.0; 3];
            for (c, slot) in rgb.iter_mut().enumerate() {
                let text = &caps[c + 1];
                *slot = text.parse().map_err(|_| {
                    ColorError::invalid(name, format!("bad number '{}' in cm_data", text))
                })?;
            }
            Ok(rgb)
        })
        .collect::<ColorResult<Vec<Rgb>>>()?;

    Colormap::new(name, colors)
}

/// Parses a YAML colormap document. `default_name` is used when the
/// document has no `name`.
pub fn parse_yaml(default_name: &str, source: &str) -> ColorResult<Colormap> {
    let file: ColormapFile = serde_yaml::from_str(source)
        .map_err(|e| ColorError::invalid(default_name, e.to_string()))?;
    let name = file.name.unwrap_or_else(|| default_name.to_string());
    Colormap::new(name, file.colors)
}

/// Returns the text up to the bracket closing an already opened `[`.
fn bracketed(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (i, ch) in rest.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}
