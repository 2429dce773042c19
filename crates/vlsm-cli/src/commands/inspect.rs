//! Inspect command implementation

use crate::{output, Result};
use clap::Args;
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;
use vlsm_planner::{codec, sizing};

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Network, as "192.168.0.0/24" or "192.168.0.0 - 255.255.255.0"
    pub network: String,
}

/// Addressing details of one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network: Ipv4Net,
    pub first_host: Option<String>,
    pub last_host: Option<String>,
    pub mask_binary: String,
    pub total_addresses: u64,
    pub usable_hosts: u64,
}

impl NetworkSummary {
    pub fn new(network: Ipv4Net) -> Self {
        let network = network.trunc();
        let usable_hosts = sizing::usable_hosts(network.prefix_len());
        let (first_host, last_host) = if usable_hosts > 0 {
            let start = u32::from(network.network());
            let end = u32::from(network.broadcast());
            (
                Some(Ipv4Addr::from(start + 1).to_string()),
                Some(Ipv4Addr::from(end - 1).to_string()),
            )
        } else {
            (None, None)
        };

        Self {
            network,
            first_host,
            last_host,
            mask_binary: codec::format_binary(network.netmask().into()),
            total_addresses: sizing::block_size(network.prefix_len()),
            usable_hosts,
        }
    }
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let supplied = codec::parse_network(&args.network)?;
    if supplied.addr() != supplied.network() {
        output::warn(&format!(
            "{} has host bits set, showing network {}",
            supplied,
            supplied.trunc()
        ));
    }

    let summary = NetworkSummary::new(supplied);
    let na = || "N/A".to_string();

    output::title(&summary.network.to_string());
    output::field("Network", &summary.network.network().to_string());
    output::field("Broadcast", &summary.network.broadcast().to_string());
    output::field("Prefix", &format!("/{}", summary.network.prefix_len()));
    output::field("Mask (Dec)", &summary.network.netmask().to_string());
    output::field("Mask (Bin)", &summary.mask_binary);
    output::field("First Host", &summary.first_host.clone().unwrap_or_else(na));
    output::field("Last Host", &summary.last_host.clone().unwrap_or_else(na));
    output::field("Total Addresses", &summary.total_addresses.to_string());
    output::field("Usable Hosts", &summary.usable_hosts.to_string());

    Ok(())
}
