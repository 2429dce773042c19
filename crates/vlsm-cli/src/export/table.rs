use super::{rows, Exporter};
use crate::{CliError, Result};
use comfy_table::{Cell, Color, Table};
use std::fmt::{self, Write};
use vlsm_planner::{Allocation, FailureReason};

const HEADER: [&str; 10] = [
    "#",
    "Network",
    "CIDR",
    "Mask (Dec)",
    "Mask (Bin)",
    "Range Start",
    "Range End",
    "Broadcast",
    "Usable Hosts",
    "Requested",
];

/// Human-readable report: base network summary, subnet table, notes and trailer
pub struct TableExporter {
    color: bool,
}

impl TableExporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn table(&self, allocation: &Allocation) -> Table {
        let mut table = Table::new();
        table.set_header(HEADER.to_vec());

        for row in rows(allocation) {
            let failed = row.failure.is_some();
            let cells = row.fields().into_iter().enumerate().map(|(column, text)| {
                let cell = Cell::new(text);
                match (self.color, failed, column) {
                    (true, true, 1) => cell.fg(Color::Red),
                    (true, false, 1) => cell.fg(Color::Green),
                    _ => cell,
                }
            });
            table.add_row(cells.collect::<Vec<_>>());
        }

        table
    }
}

impl TableExporter {
    fn render(&self, allocation: &Allocation, out: &mut String) -> fmt::Result {
        let base = allocation.base;

        writeln!(
            out,
            "VLSM plan for {}/{} (broadcast {}, {} addresses)\n",
            base.network(),
            base.prefix_len(),
            base.broadcast(),
            allocation.total_addresses()
        )?;
        writeln!(out, "{}", self.table(allocation))?;

        let notes: Vec<String> = rows(allocation)
            .into_iter()
            .filter_map(|row| {
                let reason = row.failure?;
                Some(match reason {
                    FailureReason::Unsizable => format!(
                        "  #{}: request for {} hosts cannot be sized, skipped",
                        row.number, row.requested_hosts
                    ),
                    FailureReason::NoSpace { remaining } => format!(
                        "  #{}: request for {} hosts ({}) does not fit, {} addresses remaining, skipped",
                        row.number, row.requested_hosts, row.cidr, remaining
                    ),
                })
            })
            .collect();
        if !notes.is_empty() {
            writeln!(out, "\nWarnings:")?;
            for note in notes {
                writeln!(out, "{note}")?;
            }
        }

        writeln!(out)?;
        match allocation.free {
            Some(free) => {
                writeln!(out, "Unused space: {} - {}", free.first, free.last)?;
                writeln!(out, "Unused addresses: {}", free.count)
            }
            None => writeln!(out, "The whole base network has been used."),
        }
    }
}

impl Exporter for TableExporter {
    fn export(&self, allocation: &Allocation) -> Result<String> {
        let mut out = String::new();
        self.render(allocation, &mut out)
            .map_err(|e| CliError::Serialization(format!("table render error: {}", e)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::Ipv4Net;
    use std::str::FromStr;
    use vlsm_planner::{FailureRecord, Outcome};

    fn allocation(base: &str, requests: &[i64]) -> Allocation {
        vlsm_planner::allocate(Ipv4Net::from_str(base).unwrap(), requests).unwrap()
    }

    #[test]
    fn test_table_export() {
        let report = TableExporter::new(false)
            .export(&allocation("192.168.1.0/24", &[50, 20, 10]))
            .unwrap();

        assert!(report.starts_with(
            "VLSM plan for 192.168.1.0/24 (broadcast 192.168.1.255, 256 addresses)"
        ));
        assert!(report.contains("Mask (Bin)"));
        assert!(report.contains("192.168.1.64"));
        assert!(report.contains("11111111.11111111.11111111.11110000"));
        assert!(report.contains("Unused space: 192.168.1.112 - 192.168.1.255"));
        assert!(report.contains("Unused addresses: 144"));
        assert!(!report.contains("Warnings"));
    }

    #[test]
    fn test_table_export_warnings() {
        let report = TableExporter::new(false)
            .export(&allocation("10.0.0.0/24", &[-4, 10]))
            .unwrap();

        assert!(report.contains("UNSIZABLE"));
        assert!(report.contains("#1: request for -4 hosts cannot be sized"));
    }

    #[test]
    fn test_table_export_no_space_note() {
        let mut plan = allocation("10.0.0.0/25", &[100]);
        plan.outcomes.push(Outcome::Failed(FailureRecord {
            input_index: 1,
            requested_hosts: 100,
            prefix_len: Some(25),
            reason: FailureReason::NoSpace { remaining: 0 },
        }));

        let report = TableExporter::new(false).export(&plan).unwrap();

        assert!(report.contains("NO SPACE"));
        assert!(report.contains(
            "#2: request for 100 hosts (/25) does not fit, 0 addresses remaining, skipped"
        ));
        assert!(report.contains("The whole base network has been used."));
    }

    #[test]
    fn test_table_export_fully_used() {
        let report = TableExporter::new(false)
            .export(&allocation("10.0.0.0/30", &[2]))
            .unwrap();

        assert!(report.contains("The whole base network has been used."));
        assert!(!report.contains("Unused space"));
    }
}
