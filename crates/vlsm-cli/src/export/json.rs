use super::Exporter;
use crate::Result;
use vlsm_planner::Allocation;

/// Pretty-printed JSON rendering of the whole allocation
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, allocation: &Allocation) -> Result<String> {
        Ok(serde_json::to_string_pretty(allocation)?)
    }
}
