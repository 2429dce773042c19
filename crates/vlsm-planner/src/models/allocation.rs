//! Result of one allocation run

use super::{FailureRecord, Outcome, SubnetRecord};
use crate::sizing;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Unused tail of the base network after packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
    /// Number of addresses in `first..=last`
    pub count: u64,
}

impl FreeRange {
    /// Free range from `cursor` up to `broadcast`, or `None` once the cursor has passed it
    pub(crate) fn from_cursor(cursor: u64, broadcast: u32) -> Option<Self> {
        if cursor > u64::from(broadcast) {
            return None;
        }
        // cursor <= broadcast here, so it fits in a u32
        let first = cursor as u32;
        Some(Self {
            first: Ipv4Addr::from(first),
            last: Ipv4Addr::from(broadcast),
            count: u64::from(broadcast) - cursor + 1,
        })
    }
}

/// Outcomes of allocating a list of host requests inside a base network
///
/// Outcomes are in packing order (largest block first), preceded by any
/// requests that could not be sized at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Network that was partitioned
    pub base: Ipv4Net,
    /// Per-request outcomes
    pub outcomes: Vec<Outcome>,
    /// Unused tail of the base network, `None` when fully used
    pub free: Option<FreeRange>,
}

impl Allocation {
    /// Successfully placed subnets, in packing order
    pub fn subnets(&self) -> impl Iterator<Item = &SubnetRecord> {
        self.outcomes.iter().filter_map(Outcome::as_subnet)
    }

    /// Requests that produced no subnet
    pub fn failures(&self) -> impl Iterator<Item = &FailureRecord> {
        self.outcomes.iter().filter_map(Outcome::as_failure)
    }

    /// Check if every request was satisfied
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_allocated)
    }

    /// Outcomes re-ordered to match the caller's input list
    pub fn by_input_order(&self) -> Vec<&Outcome> {
        let mut outcomes: Vec<&Outcome> = self.outcomes.iter().collect();
        outcomes.sort_by_key(|outcome| outcome.input_index());
        outcomes
    }

    /// Total addresses in the base network
    pub fn total_addresses(&self) -> u64 {
        sizing::block_size(self.base.prefix_len())
    }

    /// Addresses consumed by placed subnets
    pub fn allocated_addresses(&self) -> u64 {
        self.subnets().map(SubnetRecord::block_size).sum()
    }

    /// Check if the whole base network has been handed out
    pub fn is_fully_used(&self) -> bool {
        self.free.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FailureReason;
    use std::str::FromStr;

    fn sample() -> Allocation {
        let base = Ipv4Net::from_str("10.0.0.0/24").unwrap();
        Allocation {
            base,
            outcomes: vec![
                Outcome::Failed(FailureRecord {
                    input_index: 2,
                    requested_hosts: -1,
                    prefix_len: None,
                    reason: FailureReason::Unsizable,
                }),
                Outcome::Allocated(SubnetRecord::new(
                    1,
                    Ipv4Net::from_str("10.0.0.0/25").unwrap(),
                    100,
                )),
                Outcome::Allocated(SubnetRecord::new(
                    0,
                    Ipv4Net::from_str("10.0.0.128/28").unwrap(),
                    10,
                )),
            ],
            free: FreeRange::from_cursor(0x0A00_0090, 0x0A00_00FF),
        }
    }

    #[test]
    fn test_views() {
        let allocation = sample();

        assert_eq!(allocation.subnets().count(), 2);
        assert_eq!(allocation.failures().count(), 1);
        assert!(!allocation.is_complete());
        assert_eq!(allocation.total_addresses(), 256);
        assert_eq!(allocation.allocated_addresses(), 144);
    }

    #[test]
    fn test_by_input_order() {
        let allocation = sample();
        let requested: Vec<i64> = allocation
            .by_input_order()
            .iter()
            .map(|outcome| outcome.requested_hosts())
            .collect();
        assert_eq!(requested, vec![10, 100, -1]);
    }

    #[test]
    fn test_free_range() {
        let free = sample().free.unwrap();
        assert_eq!(free.first, Ipv4Addr::new(10, 0, 0, 144));
        assert_eq!(free.last, Ipv4Addr::new(10, 0, 0, 255));
        assert_eq!(free.count, 112);

        assert_eq!(FreeRange::from_cursor(0x0A00_0100, 0x0A00_00FF), None);
        // Cursor past the top of the address space
        assert_eq!(FreeRange::from_cursor(1 << 32, u32::MAX), None);
    }
}
