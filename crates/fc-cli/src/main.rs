//! fclut - False color LUT generator
//!
//! Writes SPI3D tables that map scene luminance to false colors.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::ExposureList;

#[derive(Parser, Debug)]
#[command(name = "fclut")]
#[command(author, version, about = "Generates false color SPI3D lookup tables")]
#[command(long_about = "
Generates false color lookup tables in the SPI3D format for color managed
viewers. Without a subcommand, every built-in colormap is rendered.

Examples:
  fclut -o luts                                   # All presets
  fclut -o luts colormap -n viridis --centered
  fclut -o luts colormap -n magma --blocks-stretched '-10,-2.5,0,2.5,6.5'
  fclut -o luts viscm -p mycmap.py -n mycmap --not-centered
  fclut -o luts ev-colormap -n false_color
  fclut -o luts -t ev-colormap -n stops           # Print the colormap too
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory for the generated LUTs
    #[arg(short, long)]
    output: PathBuf,

    /// Print the colormap(s) in use
    #[arg(short, long, global = true)]
    test: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Samples per cube axis
    #[arg(long, global = true, default_value_t = fc_lut::DEFAULT_CUBE_SIZE)]
    cube_size: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Use one of the built-in colormaps
    Colormap(ColormapArgs),

    /// Load a colormap file (viscm script or YAML)
    Viscm(ViscmArgs),

    /// Use one of the built-in exposure value colormaps
    #[command(name = "ev-colormap")]
    EvColormap(EvColormapArgs),
}

#[derive(Args, Debug)]
struct ColormapArgs {
    /// Name of the built-in colormap, also the output file name
    #[arg(short, long)]
    name: String,

    #[command(flatten)]
    mode: ModeArgs,
}

#[derive(Args, Debug)]
struct ViscmArgs {
    /// Path to the colormap file
    #[arg(short, long)]
    path: PathBuf,

    /// Output file name
    #[arg(short, long)]
    name: String,

    #[command(flatten)]
    mode: ModeArgs,
}

#[derive(Args, Debug)]
struct EvColormapArgs {
    /// Name of the built-in exposure value colormap
    #[arg(short, long)]
    name: String,
}

/// How a continuous colormap is laid over the exposure range.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ModeArgs {
    /// Smooth gradient with mid-grey on the colormap center
    #[arg(long)]
    centered: bool,

    /// Smooth gradient over the full colormap
    #[arg(long)]
    not_centered: bool,

    /// Constant color blocks sampled at equidistant colormap positions
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    blocks_equidistant: Option<ExposureList>,

    /// Constant color blocks with EV 0 on the colormap center, uniform scale
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    blocks_centered: Option<ExposureList>,

    /// Constant color blocks with EV 0 on the colormap center, halves stretched
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    blocks_stretched: Option<ExposureList>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    commands::generate::run(&cli)
}
