//! Interactive subnet calculator using dialoguer
//!
//! Prompts for the base network and each host count, prints the plan as a
//! table and optionally exports it to a file.

use crate::commands::plan::{export_report, print_report};
use crate::config::CliConfig;
use crate::export::ReportFormat;
use crate::{output, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::path::PathBuf;
use vlsm_planner::{allocate, codec};

/// Check a base network entry, returning the message shown on rejection
pub fn validate_network(input: &str) -> std::result::Result<(), String> {
    codec::parse_network(input)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Check a host count entry; negative counts are refused at the prompt
pub fn validate_hosts(hosts: &i64) -> std::result::Result<(), String> {
    if *hosts < 0 {
        Err("Enter a non-negative number of hosts".to_string())
    } else {
        Ok(())
    }
}

pub fn execute(config: &CliConfig) -> Result<()> {
    let theme = ColorfulTheme::default();

    output::title("VLSM Subnet Calculator");

    let network: String = Input::with_theme(&theme)
        .with_prompt("Base network (e.g. 192.168.0.0/24 or 192.168.0.0 - 255.255.255.0)")
        .validate_with(|input: &String| validate_network(input))
        .interact_text()?;
    let base = codec::parse_network(&network)?;

    let count: usize = Input::with_theme(&theme)
        .with_prompt("Number of subnets")
        .validate_with(|count: &usize| {
            if *count == 0 {
                Err("Enter a positive number of subnets")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let mut hosts = Vec::with_capacity(count);
    for i in 1..=count {
        let requested: i64 = Input::with_theme(&theme)
            .with_prompt(format!("Hosts for subnet {}", i))
            .validate_with(validate_hosts)
            .interact_text()?;
        hosts.push(requested);
    }

    let allocation = allocate(base, &hosts)?;
    print_report(&allocation, ReportFormat::Table, config.color)?;

    let export = Confirm::with_theme(&theme)
        .with_prompt("Export the results to a file?")
        .default(false)
        .interact()?;

    if export {
        let filename: String = Input::with_theme(&theme)
            .with_prompt("File name (e.g. results.txt or results.csv)")
            .interact_text()?;
        let path = PathBuf::from(filename.trim());
        let format = ReportFormat::from_path(&path).unwrap_or(ReportFormat::Table);
        export_report(&allocation, format, &path)?;
    }

    Ok(())
}
