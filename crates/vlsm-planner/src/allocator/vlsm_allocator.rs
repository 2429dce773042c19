//! Best-fit-descending VLSM allocator
//!
//! Sizes every host request, checks that their blocks fit the base network in
//! total, then places them back to back from the base address, largest block
//! first. Because blocks are powers of two placed in descending size order,
//! every placement lands on a boundary aligned to its own size.

use crate::models::{
    Allocation, FailureReason, FailureRecord, FreeRange, HostRequest, Outcome, SubnetRecord,
};
use crate::{sizing, Error, Result};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use tracing::{debug, info, instrument, warn};

/// Trait for planning subnets inside a base network
pub trait SubnetPlanner: Send + Sync {
    /// Network being partitioned
    fn base(&self) -> Ipv4Net;

    /// Total addresses in the base network
    fn capacity(&self) -> u64;

    /// Allocate one subnet per host request
    fn plan(&self, requests: &[HostRequest]) -> Result<Allocation>;
}

/// A request that survived the sizing pass
#[derive(Debug, Clone, Copy)]
struct SizedRequest {
    input_index: usize,
    requested_hosts: HostRequest,
    prefix_len: u8,
}

/// Where one sized request lands relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Placed { network: Ipv4Net, next_cursor: u64 },
    NoSpace { remaining: u64 },
}

/// Place `request` at `cursor`, refusing blocks that would run past `broadcast`
///
/// The cursor is left untouched on `NoSpace`.
fn place(cursor: u64, broadcast: u64, request: &SizedRequest) -> Result<Placement> {
    let size = sizing::block_size(request.prefix_len);
    let candidate_broadcast = cursor + size - 1;

    if cursor > broadcast || candidate_broadcast > broadcast {
        return Ok(Placement::NoSpace {
            remaining: (broadcast + 1).saturating_sub(cursor),
        });
    }

    debug_assert_eq!(cursor % size, 0, "block must be aligned to its size");

    // cursor <= broadcast <= u32::MAX here
    let network = Ipv4Net::new(Ipv4Addr::from(cursor as u32), request.prefix_len)?;
    Ok(Placement::Placed {
        network,
        next_cursor: cursor + size,
    })
}

/// VLSM allocator for a specific base network
///
/// Holds no state between runs; the allocation cursor lives only inside
/// [`VlsmAllocator::allocate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlsmAllocator {
    base: Ipv4Net,
}

impl VlsmAllocator {
    /// Create an allocator for `base`
    ///
    /// Fails with [`Error::InvalidBaseNetwork`] when the address has host bits
    /// set under its prefix.
    pub fn new(base: Ipv4Net) -> Result<Self> {
        if base.addr() != base.network() {
            return Err(Error::InvalidBaseNetwork {
                supplied: base,
                corrected: base.trunc(),
            });
        }
        Ok(Self { base })
    }

    /// Get the base network
    pub fn base(&self) -> Ipv4Net {
        self.base
    }

    /// Total addresses in the base network
    pub fn capacity(&self) -> u64 {
        sizing::block_size(self.base.prefix_len())
    }

    fn network_start(&self) -> u64 {
        u64::from(u32::from(self.base.network()))
    }

    fn broadcast(&self) -> u64 {
        u64::from(u32::from(self.base.broadcast()))
    }

    /// Allocate one subnet per request
    ///
    /// Returns an error only for whole-run failures
    /// ([`Error::InsufficientCapacity`]); requests that cannot be sized or
    /// placed come back as [`Outcome::Failed`].
    #[instrument(skip(self, requests), fields(base = %self.base, requests = requests.len()))]
    pub fn allocate(&self, requests: &[HostRequest]) -> Result<Allocation> {
        let (mut outcomes, mut sized) = Self::size_requests(requests);

        self.check_capacity(&sized)?;

        // Larger blocks (shorter prefixes) first; stable, so ties keep input order
        sized.sort_by_key(|request| request.prefix_len);

        let broadcast = self.broadcast();
        let mut cursor = self.network_start();

        for request in sized {
            match place(cursor, broadcast, &request)? {
                Placement::Placed {
                    network,
                    next_cursor,
                } => {
                    debug!(
                        subnet = %network,
                        requested = request.requested_hosts,
                        "Allocated subnet"
                    );
                    outcomes.push(Outcome::Allocated(SubnetRecord::new(
                        request.input_index,
                        network,
                        request.requested_hosts,
                    )));
                    cursor = next_cursor;
                }
                Placement::NoSpace { remaining } => {
                    warn!(
                        requested = request.requested_hosts,
                        prefix_len = request.prefix_len,
                        remaining,
                        "Subnet does not fit in remaining space"
                    );
                    outcomes.push(Outcome::Failed(FailureRecord {
                        input_index: request.input_index,
                        requested_hosts: request.requested_hosts,
                        prefix_len: Some(request.prefix_len),
                        reason: FailureReason::NoSpace { remaining },
                    }));
                }
            }
        }

        let free = FreeRange::from_cursor(cursor, self.base.broadcast().into());
        let allocation = Allocation {
            base: self.base,
            outcomes,
            free,
        };

        info!(
            allocated = allocation.subnets().count(),
            failed = allocation.failures().count(),
            free = free.map(|range| range.count).unwrap_or(0),
            "Allocation complete"
        );

        Ok(allocation)
    }

    /// Split requests into sized ones and `Unsizable` failures
    fn size_requests(requests: &[HostRequest]) -> (Vec<Outcome>, Vec<SizedRequest>) {
        let mut failures = Vec::new();
        let mut sized = Vec::with_capacity(requests.len());

        for (input_index, &requested_hosts) in requests.iter().enumerate() {
            match sizing::hosts_to_prefix(requested_hosts) {
                // The clamped /0 cannot hold more than 2^32 - 2 hosts
                Ok(prefix_len) if sizing::usable_hosts(prefix_len) >= requested_hosts as u64 => {
                    sized.push(SizedRequest {
                        input_index,
                        requested_hosts,
                        prefix_len,
                    });
                }
                result => {
                    warn!(requested = requested_hosts, "Request cannot be sized, skipping");
                    failures.push(Outcome::Failed(FailureRecord {
                        input_index,
                        requested_hosts,
                        prefix_len: result.ok(),
                        reason: FailureReason::Unsizable,
                    }));
                }
            }
        }

        (failures, sized)
    }

    /// Reject the whole run when the blocks cannot fit in total
    fn check_capacity(&self, sized: &[SizedRequest]) -> Result<()> {
        let available = self.capacity();
        let requested = sized
            .iter()
            .map(|request| sizing::block_size(request.prefix_len))
            .fold(0u64, u64::saturating_add);

        if requested > available {
            let oversized = sized
                .iter()
                .filter(|request| sizing::block_size(request.prefix_len) > available)
                .map(|request| request.requested_hosts)
                .collect();
            return Err(Error::InsufficientCapacity {
                requested,
                available,
                oversized,
            });
        }

        Ok(())
    }
}

impl SubnetPlanner for VlsmAllocator {
    fn base(&self) -> Ipv4Net {
        self.base
    }

    fn capacity(&self) -> u64 {
        VlsmAllocator::capacity(self)
    }

    fn plan(&self, requests: &[HostRequest]) -> Result<Allocation> {
        self.allocate(requests)
    }
}

/// Allocate `requests` inside `base` in one call
pub fn allocate(base: Ipv4Net, requests: &[HostRequest]) -> Result<Allocation> {
    VlsmAllocator::new(base)?.allocate(requests)
}
