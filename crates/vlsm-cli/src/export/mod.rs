//! Report rendering for allocation results
//!
//! Every format shares the same per-outcome rows; only the table format
//! carries the base network header and the free-space trailer.

pub mod csv;
pub mod json;
pub mod table;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use self::table::TableExporter;

use crate::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vlsm_planner::{Allocation, FailureReason, Outcome};

/// Placeholder for fields that do not apply to a row
pub const NOT_APPLICABLE: &str = "N/A";

/// Trait for export formats
pub trait Exporter {
    fn export(&self, allocation: &Allocation) -> Result<String>;
}

/// Available report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}

impl ReportFormat {
    /// Infer the format from a file extension, if it names one
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            "txt" => Some(ReportFormat::Table),
            _ => None,
        }
    }

    /// Build the exporter for this format
    pub fn exporter(self, color: bool) -> Box<dyn Exporter> {
        match self {
            ReportFormat::Table => Box::new(TableExporter::new(color)),
            ReportFormat::Csv => Box::new(CsvExporter::new()),
            ReportFormat::Json => Box::new(JsonExporter::new()),
        }
    }
}

/// One rendered line of a report, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub number: usize,
    pub network: String,
    pub cidr: String,
    pub mask: String,
    pub mask_binary: String,
    pub range_start: String,
    pub range_end: String,
    pub broadcast: String,
    pub usable_hosts: u64,
    pub requested_hosts: i64,
    pub failure: Option<FailureReason>,
}

impl ReportRow {
    /// Column values as text
    pub fn fields(&self) -> [String; 10] {
        [
            self.number.to_string(),
            self.network.clone(),
            self.cidr.clone(),
            self.mask.clone(),
            self.mask_binary.clone(),
            self.range_start.clone(),
            self.range_end.clone(),
            self.broadcast.clone(),
            self.usable_hosts.to_string(),
            self.requested_hosts.to_string(),
        ]
    }
}

/// Rows for every outcome, numbered from 1 in report order
pub fn rows(allocation: &Allocation) -> Vec<ReportRow> {
    let na = || NOT_APPLICABLE.to_string();
    let or_na = |addr: Option<std::net::Ipv4Addr>| addr.map(|a| a.to_string()).unwrap_or_else(na);

    allocation
        .outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| match outcome {
            Outcome::Allocated(record) => ReportRow {
                number: i + 1,
                network: record.network.network().to_string(),
                cidr: format!("/{}", record.prefix_len()),
                mask: record.mask.to_string(),
                mask_binary: record.mask_binary.clone(),
                range_start: or_na(record.first_host),
                range_end: or_na(record.last_host),
                broadcast: record.broadcast.to_string(),
                usable_hosts: record.usable_hosts,
                requested_hosts: record.requested_hosts,
                failure: None,
            },
            Outcome::Failed(failure) => ReportRow {
                number: i + 1,
                network: failure_label(&failure.reason).to_string(),
                cidr: failure
                    .prefix_len
                    .map(|p| format!("/{p}"))
                    .unwrap_or_else(na),
                mask: na(),
                mask_binary: na(),
                range_start: na(),
                range_end: na(),
                broadcast: na(),
                usable_hosts: 0,
                requested_hosts: failure.requested_hosts,
                failure: Some(failure.reason),
            },
        })
        .collect()
}

/// Network column text for a failed request
pub fn failure_label(reason: &FailureReason) -> &'static str {
    match reason {
        FailureReason::Unsizable => "UNSIZABLE",
        FailureReason::NoSpace { .. } => "NO SPACE",
    }
}
