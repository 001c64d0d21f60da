use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DiffConfig, Engine};

#[derive(Parser)]
#[command(
    name = "pixdiff",
    about = "Pixel-level image comparison for visual regression tests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create .pixdiff/config.toml with default settings
    Init {
        /// Engine to write into the template
        #[arg(long, value_enum, default_value_t = Engine::Exact)]
        engine: Engine,
        /// Overwrite existing config
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Compare two images and report whether they differ (exit 0/1)
    Compare {
        /// Reference image
        left: PathBuf,
        /// Current image
        right: PathBuf,
        /// Write the diff image here (format inferred from the extension)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Print the result as JSON instead of a verdict line
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        diff: DiffConfig,
    },
}
