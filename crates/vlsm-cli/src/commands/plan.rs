//! Plan command implementation

use crate::config::CliConfig;
use crate::export::ReportFormat;
use crate::{output, CliError, Result};
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vlsm_planner::{allocate, codec, Allocation};

#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    /// Base network, as "192.168.0.0/24" or "192.168.0.0 - 255.255.255.0"
    pub network: String,

    /// Usable hosts wanted in each subnet (space or comma separated)
    #[arg(required = true, value_delimiter = ',', allow_negative_numbers = true)]
    pub hosts: Vec<i64>,

    /// Output format (table, csv, json)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Also write the report to this file; .csv and .json pick the format
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: PlanArgs, config: &CliConfig) -> Result<()> {
    let base = codec::parse_network(&args.network)?;
    if let Some(path) = &args.output {
        check_output_path(path)?;
    }
    debug!(%base, hosts = ?args.hosts, "Planning subnets");

    let allocation = allocate(base, &args.hosts)?;

    let format = args.format.unwrap_or(config.default_format);
    print_report(&allocation, format, config.color)?;

    if let Some(path) = &args.output {
        let format = args
            .format
            .or_else(|| ReportFormat::from_path(path))
            .unwrap_or(ReportFormat::Table);
        export_report(&allocation, format, path)?;
    }

    Ok(())
}

/// Render a report to stdout
pub fn print_report(allocation: &Allocation, format: ReportFormat, color: bool) -> Result<()> {
    let report = format.exporter(color).export(allocation)?;
    output::report(&report);
    Ok(())
}

/// Render a report to a file, without color
pub fn export_report(allocation: &Allocation, format: ReportFormat, path: &Path) -> Result<()> {
    check_output_path(path)?;

    let report = format.exporter(false).export(allocation)?;
    std::fs::write(path, report)
        .with_context(|| format!("cannot write report to {}", path.display()))?;

    info!(path = %path.display(), ?format, "Report exported");
    output::done(&format!("Report written to '{}'", path.display()));
    Ok(())
}

fn check_output_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(CliError::InvalidArgument("output file name is empty".to_string()));
    }
    if path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "output path {} is a directory",
            path.display()
        )));
    }
    Ok(())
}
