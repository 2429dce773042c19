//! CLI structure and argument parsing

use crate::commands::Commands;
use clap::Parser;
use std::path::PathBuf;

/// VLSM subnet calculator - split an IPv4 network into right-sized subnets
#[derive(Debug, Parser)]
#[command(name = "vlsm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}
