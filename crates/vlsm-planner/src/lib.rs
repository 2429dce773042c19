//! VLSM Planner
//!
//! Partitions an IPv4 base network into variable-length subnets sized for a
//! list of host requests:
//! - Address, mask and prefix conversions
//! - Minimal prefix sizing for a usable-host count
//! - Best-fit-descending packing with capacity validation
//!
//! Requests that cannot be satisfied are reported alongside the successful
//! allocations instead of aborting the run.

pub mod allocator;
pub mod codec;
pub mod error;
pub mod models;
pub mod sizing;

// Re-export core types
pub use allocator::{allocate, SubnetPlanner, VlsmAllocator};
pub use error::{Error, Result};
pub use models::{
    Allocation, FailureReason, FailureRecord, FreeRange, HostRequest, Outcome, SubnetRecord,
};
