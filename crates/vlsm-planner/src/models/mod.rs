//! Data models for VLSM planning

mod allocation;
mod subnet;

pub use allocation::{Allocation, FreeRange};
pub use subnet::{FailureReason, FailureRecord, HostRequest, Outcome, SubnetRecord};
