use super::{rows, Exporter};
use crate::{CliError, Result};
use csv::Writer;
use vlsm_planner::Allocation;

/// Column headers for CSV reports
pub const HEADER: [&str; 10] = [
    "Number",
    "Network",
    "CIDR",
    "MaskDecimal",
    "MaskBinary",
    "RangeStart",
    "RangeEnd",
    "Broadcast",
    "UsableHosts",
    "RequestedHosts",
];

/// Header-plus-rows CSV rendering, without header or trailer text
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn export(&self, allocation: &Allocation) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record(HEADER)?;
        for row in rows(allocation) {
            wtr.write_record(row.fields())?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| CliError::Serialization(format!("CSV writer error: {}", e)))?;
        String::from_utf8(data)
            .map_err(|e| CliError::Serialization(format!("UTF-8 conversion error: {}", e)))
    }
}
