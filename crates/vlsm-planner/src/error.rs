//! Error types for VLSM planning

use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Planner errors
///
/// Only [`Error::InvalidBaseNetwork`] and [`Error::InsufficientCapacity`] abort an
/// allocation run. Requests that cannot be sized or placed are reported inline
/// as [`crate::models::FailureRecord`]s instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Codec errors
    #[error("Malformed IPv4 address: {0:?}")]
    MalformedAddress(String),

    #[error("Subnet mask {0} is not contiguous")]
    NonContiguousMask(Ipv4Addr),

    #[error("Invalid prefix length /{0}, must be between 0 and 32")]
    InvalidPrefixLength(u8),

    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    // Sizing errors
    #[error("Invalid host count {0}, must not be negative")]
    InvalidHostCount(i64),

    // Allocation errors
    #[error("{supplied} is not a network address, the network for this prefix is {corrected}")]
    InvalidBaseNetwork {
        supplied: Ipv4Net,
        corrected: Ipv4Net,
    },

    #[error("Requested address space ({requested}) exceeds the base network capacity ({available})")]
    InsufficientCapacity {
        requested: u64,
        available: u64,
        /// Host counts whose single block is larger than the whole base network
        oversized: Vec<i64>,
    },
}

impl From<ipnet::PrefixLenError> for Error {
    fn from(e: ipnet::PrefixLenError) -> Self {
        Error::InvalidCidr(e.to_string())
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(e: std::net::AddrParseError) -> Self {
        Error::InvalidCidr(e.to_string())
    }
}
