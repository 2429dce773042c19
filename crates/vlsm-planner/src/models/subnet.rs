//! Per-request allocation records

use crate::codec;
use crate::sizing;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

/// Number of usable hosts a caller asks for in one subnet.
///
/// Signed so that negative input can be carried through and reported.
pub type HostRequest = i64;

/// A subnet carved out of the base network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRecord {
    /// Position of the originating request in the caller's input
    pub input_index: usize,
    /// Subnet block (network address and prefix length)
    pub network: Ipv4Net,
    /// Dotted-decimal mask (e.g. 255.255.255.192)
    pub mask: Ipv4Addr,
    /// Dotted binary mask (e.g. 11111111.11111111.11111111.11000000)
    pub mask_binary: String,
    /// First usable host, absent when the block has no usable hosts
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, absent when the block has no usable hosts
    pub last_host: Option<Ipv4Addr>,
    /// Broadcast (last) address of the block
    pub broadcast: Ipv4Addr,
    /// Usable hosts in the block
    pub usable_hosts: u64,
    /// Host count originally requested
    pub requested_hosts: HostRequest,
}

impl SubnetRecord {
    /// Build the record for a block placed at `network`
    pub fn new(input_index: usize, network: Ipv4Net, requested_hosts: HostRequest) -> Self {
        let prefix_len = network.prefix_len();
        let usable_hosts = sizing::usable_hosts(prefix_len);
        let start = u32::from(network.network());
        let end = u32::from(network.broadcast());

        let (first_host, last_host) = if usable_hosts > 0 {
            (
                Some(Ipv4Addr::from(start + 1)),
                Some(Ipv4Addr::from(end - 1)),
            )
        } else {
            (None, None)
        };

        Self {
            input_index,
            network,
            mask: network.netmask(),
            mask_binary: codec::format_binary(u32::from(network.netmask())),
            first_host,
            last_host,
            broadcast: network.broadcast(),
            usable_hosts,
            requested_hosts,
        }
    }

    /// Prefix length of the block
    pub fn prefix_len(&self) -> u8 {
        self.network.prefix_len()
    }

    /// Number of addresses in the block
    pub fn block_size(&self) -> u64 {
        sizing::block_size(self.prefix_len())
    }

    /// Address range covered by the block, network to broadcast
    pub fn range(&self) -> RangeInclusive<u32> {
        u32::from(self.network.network())..=u32::from(self.broadcast)
    }

    /// Check if an address falls inside this block
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.network.contains(&ip)
    }
}

/// Why a request produced no subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// No prefix length can hold the request
    Unsizable,
    /// The sized block does not fit in what is left of the base network
    NoSpace {
        /// Free addresses left when the request was considered
        remaining: u64,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Unsizable => write!(f, "unsizable"),
            FailureReason::NoSpace { remaining } => {
                write!(f, "no space ({remaining} addresses remaining)")
            }
        }
    }
}

/// A request that could not be satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Position of the originating request in the caller's input
    pub input_index: usize,
    /// Host count originally requested
    pub requested_hosts: HostRequest,
    /// Prefix length the request was sized to, if sizing succeeded
    pub prefix_len: Option<u8>,
    /// Failure reason
    pub reason: FailureReason,
}

/// Result of one request: a subnet or a failure marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Allocated(SubnetRecord),
    Failed(FailureRecord),
}

impl Outcome {
    /// Position of the originating request in the caller's input
    pub fn input_index(&self) -> usize {
        match self {
            Outcome::Allocated(record) => record.input_index,
            Outcome::Failed(failure) => failure.input_index,
        }
    }

    /// Host count originally requested
    pub fn requested_hosts(&self) -> HostRequest {
        match self {
            Outcome::Allocated(record) => record.requested_hosts,
            Outcome::Failed(failure) => failure.requested_hosts,
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self, Outcome::Allocated(_))
    }

    pub fn as_subnet(&self) -> Option<&SubnetRecord> {
        match self {
            Outcome::Allocated(record) => Some(record),
            Outcome::Failed(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&FailureRecord> {
        match self {
            Outcome::Allocated(_) => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }
}
