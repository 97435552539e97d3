//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod convert;
mod probe;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::CliOverrides;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Skinup - upgrade 64x32 skins and backfill missing left limbs on 64x64 skins
#[derive(Parser)]
#[command(name = "skinup")]
#[command(about = "Skinup - normalize 64x32 and 64x64 skin PNGs to the modern layout")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a skin PNG or every skin PNG under a directory
    ///
    /// 64x32 skins are upgraded to 64x64 ({name}_converted.png).
    /// 64x64 skins with an empty left arm and left leg get them mirrored
    /// from the right side ({name}_fixed.png). Other sizes are skipped.
    Convert {
        /// Input .png file or directory (searched recursively)
        path: PathBuf,

        /// Output folder name used in directory mode (default: converted)
        #[arg(long, value_name = "NAME")]
        output_dir: Option<String>,

        /// Number of parallel jobs (default: available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Path to skinup.toml (default: search upward from the current directory)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Exit successfully even when some files failed to load or save
        #[arg(long)]
        no_fail_on_error: bool,
    },

    /// Inspect a skin: layout, limb model and whether it can be repaired
    Probe {
        /// Input .png file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { path, output_dir, jobs, config, no_fail_on_error } => {
            let overrides = CliOverrides {
                dir_name: output_dir,
                jobs,
                fail_on_error: no_fail_on_error.then_some(false),
            };
            convert::run_convert(&path, config.as_deref(), &overrides)
        }
        Commands::Probe { file, json } => probe::run_probe(&file, json),
    }
}
