//! VLSM allocation
//!
//! Packs sized host requests into a base network, largest block first,
//! reporting a subnet or a failure marker for every request.

mod vlsm_allocator;

pub use vlsm_allocator::{allocate, SubnetPlanner, VlsmAllocator};
