//! Command implementations

pub mod inspect;
pub mod interactive;
pub mod plan;

use crate::config::CliConfig;
use crate::Result;
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Allocate subnets for a list of host counts inside a base network
    Plan(plan::PlanArgs),

    /// Show addressing details of a single network
    Inspect(inspect::InspectArgs),

    /// Prompt for the network and host counts
    Interactive,
}

impl Commands {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Plan(args) => plan::execute(args, config),
            Commands::Inspect(args) => inspect::execute(args),
            Commands::Interactive => interactive::execute(config),
        }
    }
}
