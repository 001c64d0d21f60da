mod cli;
mod commands;
mod config;
mod report;

use std::path::Path;

use clap::Parser;
use config::ResolvedDiffConfig;
use tracing_subscriber::EnvFilter;

/// Exit code for usage, IO and decode errors (1 means "images differ").
const EXIT_ERROR: i32 = 2;

fn run(cli: cli::Cli) -> anyhow::Result<i32> {
    match cli.command {
        cli::Command::Init { engine, force } => {
            commands::init(Path::new("."), engine, force)?;
            Ok(0)
        }
        cli::Command::Compare {
            left,
            right,
            output,
            json,
            diff,
        } => {
            let config = ResolvedDiffConfig::new(&diff)?;
            commands::compare(&left, &right, output.as_deref(), json, &config)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pixdiff=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}
