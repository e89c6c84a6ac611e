//! CLI command implementations

pub mod generate;

use anyhow::{Context, Result};
use fc_lut::{write_spi3d, LutJob, ResolvedColormap};
use std::path::{Path, PathBuf};
use std::str::FromStr;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` overrides `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Comma separated exposure values, e.g. `-10, -2.5, 0, 2.5, 6.5`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureList(pub Vec<f64>);

impl FromStr for ExposureList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|item| {
                let item = item.trim();
                item.parse::<f64>()
                    .map_err(|_| format!("invalid exposure value '{}'", item))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ExposureList)
    }
}

/// Resolves, generates and writes one table into `out_dir`.
pub fn write_table(job: &LutJob, out_dir: &Path, test: bool) -> Result<PathBuf> {
    let resolved = job
        .resolve()
        .with_context(|| format!("Failed to resolve colormap for '{}'", job.name))?;

    if test {
        match &resolved {
            ResolvedColormap::Continuous(cmap) => println!("{}", cmap),
            ResolvedColormap::Blocks(_) => println!("{} = {}", job.name, resolved),
        }
    }

    let lut = job
        .generate_resolved(&resolved)
        .with_context(|| format!("Failed to generate LUT '{}'", job.name))?;

    let path = out_dir.join(job.file_name());
    write_spi3d(&path, &lut).with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), size = lut.size(), "wrote LUT");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exposure_lists() {
        let list: ExposureList = "-10.0, -9.99, 0,2.5 , 6.5".parse().unwrap();
        assert_eq!(list.0, vec![-10.0, -9.99, 0.0, 2.5, 6.5]);

        let single: ExposureList = "1".parse().unwrap();
        assert_eq!(single.0, vec![1.0]);
    }

    #[test]
    fn rejects_bad_exposure_lists() {
        let err = "-1, two, 3".parse::<ExposureList>().unwrap_err();
        assert!(err.contains("'two'"));
        assert!("".parse::<ExposureList>().is_err());
        assert!("1,,2".parse::<ExposureList>().is_err());
    }
}
