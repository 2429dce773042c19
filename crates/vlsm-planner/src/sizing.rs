//! Subnet sizing rule
//!
//! Maps a usable-host requirement to the smallest prefix whose block holds
//! it, reserving the network and broadcast addresses.

use crate::{Error, Result};

/// Number of addresses in a block of the given prefix length (`2^(32 - prefix)`)
pub fn block_size(prefix_len: u8) -> u64 {
    1u64 << (32 - u32::from(prefix_len.min(32)))
}

/// Usable hosts in a block: everything but network and broadcast, or 0 for /31 and /32
pub fn usable_hosts(prefix_len: u8) -> u64 {
    let size = block_size(prefix_len);
    if size > 2 {
        size - 2
    } else {
        0
    }
}

/// Smallest prefix length whose block can hold `requested` usable hosts.
///
/// A request for 0 hosts maps to a /32 point allocation. Otherwise the block
/// needs `requested + 2` addresses, so the host part needs as many bits as it
/// takes to represent `requested + 1`. Results below /0 clamp to /0.
pub fn hosts_to_prefix(requested: i64) -> Result<u8> {
    if requested < 0 {
        return Err(Error::InvalidHostCount(requested));
    }
    if requested == 0 {
        return Ok(32);
    }

    let host_bits = u64::BITS - (requested as u64 + 1).leading_zeros();
    Ok(32u32.saturating_sub(host_bits) as u8)
}
