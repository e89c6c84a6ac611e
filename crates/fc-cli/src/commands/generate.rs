//! LUT generation command

use crate::{Cli, Commands, ModeArgs};
use anyhow::{Context, Result};
use fc_color::BlockPolicy;
use fc_lut::{preset_jobs, BlockSpec, ColormapSource, GridParams, LutJob};
use std::fs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(cli: &Cli) -> Result<()> {
    let params = GridParams::default().with_cube_size(cli.cube_size);
    let jobs = build_jobs(cli.command.as_ref(), params);
    debug!(jobs = jobs.len(), output = %cli.output.display(), "starting");

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("Failed to create output directory: {}", cli.output.display()))?;

    for job in &jobs {
        super::write_table(job, &cli.output, cli.test)?;
    }
    Ok(())
}

/// Jobs for the selected subcommand, or every preset without one.
fn build_jobs(command: Option<&Commands>, params: GridParams) -> Vec<LutJob> {
    let Some(command) = command else {
        return preset_jobs(&params);
    };

    let job = match command {
        Commands::Colormap(args) => {
            let source = match args.mode.blocks() {
                Some(blocks) => ColormapSource::PresetBlocks {
                    name: args.name.clone(),
                    blocks,
                },
                None => ColormapSource::Preset(args.name.clone()),
            };
            LutJob::new(&args.name, source).with_centered(args.mode.centered)
        }
        Commands::Viscm(args) => {
            let source = match args.mode.blocks() {
                Some(blocks) => ColormapSource::LoadedBlocks {
                    path: args.path.clone(),
                    blocks,
                },
                None => ColormapSource::Loaded(args.path.clone()),
            };
            LutJob::new(&args.name, source).with_centered(args.mode.centered)
        }
        Commands::EvColormap(args) => {
            LutJob::new(&args.name, ColormapSource::EvPreset(args.name.clone()))
        }
    };
    vec![job.with_params(params)]
}

impl ModeArgs {
    /// Block conversion, if a `--blocks-*` flag was given.
    fn blocks(&self) -> Option<BlockSpec> {
        let (policy, list) = if let Some(list) = &self.blocks_equidistant {
            (BlockPolicy::Equidistant, list)
        } else if let Some(list) = &self.blocks_centered {
            (BlockPolicy::Centered, list)
        } else if let Some(list) = &self.blocks_stretched {
            (BlockPolicy::Stretched, list)
        } else {
            return None;
        };
        Some(BlockSpec::new(policy, list.0.clone()))
    }
}
