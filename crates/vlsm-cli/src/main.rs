//! vlsm - Variable Length Subnet Mask calculator

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vlsm_cli::config::CliConfig;
use vlsm_cli::{output, Cli, Commands, Result};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    if !config.color {
        output::set_color(false);
    }

    // No command specified, fall back to the interactive calculator
    cli.command
        .unwrap_or(Commands::Interactive)
        .execute(&config)
}
