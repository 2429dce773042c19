//! IPv4 address and mask codec
//!
//! Converts between the textual and numeric forms used by the planner:
//! - dotted-decimal text <-> `u32` addresses
//! - `u32` -> dotted binary (`11111111.11111111.11111111.00000000`)
//! - contiguous masks <-> CIDR prefix lengths
//! - `a.b.c.d/N` and `a.b.c.d - m.m.m.m` base network notation

use crate::{Error, Result};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Separator between address and decimal mask in `a.b.c.d - m.m.m.m` notation
pub const MASK_SEPARATOR: &str = " - ";

/// Parse a dotted-decimal IPv4 address into its `u32` value.
///
/// Exactly four `.`-separated octets are required, each a plain decimal
/// number in `0..=255`. Leading zeros are accepted (`010` is `10`), signs and
/// empty octets are not.
pub fn parse_address(text: &str) -> Result<u32> {
    let malformed = || Error::MalformedAddress(text.to_string());

    let octets: Vec<&str> = text.trim().split('.').collect();
    if octets.len() != 4 {
        return Err(malformed());
    }

    let mut value = 0u32;
    for octet in octets {
        if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let octet: u8 = octet.parse().map_err(|_| malformed())?;
        value = (value << 8) | u32::from(octet);
    }

    Ok(value)
}

/// Render a `u32` address as four decimal octets.
pub fn format_address(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Render a `u32` as 32 bits, most significant first, in four dotted groups of 8.
pub fn format_binary(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Convert a contiguous mask into its prefix length.
pub fn mask_to_prefix(mask: u32) -> Result<u8> {
    let ones = mask.leading_ones();
    // Every bit after the leading ones must be zero
    if ones < 32 && mask << ones != 0 {
        return Err(Error::NonContiguousMask(Ipv4Addr::from(mask)));
    }
    Ok(ones as u8)
}

/// Convert a prefix length in `0..=32` into its mask.
pub fn prefix_to_mask(prefix_len: u8) -> Result<u32> {
    match prefix_len {
        0 => Ok(0),
        1..=32 => Ok(u32::MAX << (32 - u32::from(prefix_len))),
        _ => Err(Error::InvalidPrefixLength(prefix_len)),
    }
}

/// Parse a base network written as `a.b.c.d/N` or `a.b.c.d - m.m.m.m`.
///
/// Host bits in the address are preserved; the allocator decides whether
/// they are acceptable.
pub fn parse_network(text: &str) -> Result<Ipv4Net> {
    let text = text.trim();

    let (addr, prefix_len) = if let Some((addr, prefix)) = text.split_once('/') {
        let prefix = prefix.trim();
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCidr(format!(
                "prefix length {prefix:?} is not a number"
            )));
        }
        let prefix_len: u8 = prefix
            .parse()
            .map_err(|_| Error::InvalidCidr(format!("prefix length {prefix} is out of range")))?;
        (parse_address(addr)?, prefix_len)
    } else if let Some((addr, mask)) = text.split_once(MASK_SEPARATOR) {
        (parse_address(addr)?, mask_to_prefix(parse_address(mask)?)?)
    } else {
        return Err(Error::InvalidCidr(format!(
            "{text:?} is neither 'address/prefix' nor 'address - mask'"
        )));
    };

    if prefix_len > 32 {
        return Err(Error::InvalidPrefixLength(prefix_len));
    }

    Ok(Ipv4Net::new(Ipv4Addr::from(addr), prefix_len)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("192.168.1.1").unwrap(), 0xC0A8_0101);
        assert_eq!(parse_address("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_address("255.255.255.255").unwrap(), u32::MAX);
        assert_eq!(parse_address("  10.0.0.1 ").unwrap(), 0x0A00_0001);
    }

    #[test]
    fn test_parse_address_normalizes_octets() {
        let addr = parse_address("192.168.001.010").unwrap();
        assert_eq!(format_address(addr), "192.168.1.10");
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        for text in [
            "",
            "10.0.0",
            "10.0.0.0.0",
            "10.0.0.256",
            "10.0.-1.0",
            "10.0.+1.0",
            "10..0.1",
            "a.b.c.d",
            "10.0.0.1x",
            "10.0. 0.1",
        ] {
            assert!(
                matches!(parse_address(text), Err(Error::MalformedAddress(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_address_round_trip() {
        for text in ["0.0.0.0", "10.100.0.1", "172.16.254.3", "255.255.255.255"] {
            assert_eq!(format_address(parse_address(text).unwrap()), text);
        }
    }

    #[test]
    fn test_format_binary() {
        assert_eq!(
            format_binary(0xFFFF_FF00),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            format_binary(0xFFFF_FFE0),
            "11111111.11111111.11111111.11100000"
        );
        assert_eq!(
            format_binary(0),
            "00000000.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_mask_prefix_round_trip() {
        for prefix in 0..=32u8 {
            let mask = prefix_to_mask(prefix).unwrap();
            assert_eq!(mask_to_prefix(mask).unwrap(), prefix);
            assert_eq!(mask.count_ones(), u32::from(prefix));
        }
    }

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(0).unwrap(), 0);
        assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFF_FF00);
        assert_eq!(prefix_to_mask(32).unwrap(), u32::MAX);
        assert_eq!(prefix_to_mask(33), Err(Error::InvalidPrefixLength(33)));
    }

    #[test]
    fn test_non_contiguous_mask() {
        let mask = parse_address("255.0.255.0").unwrap();
        assert_eq!(
            mask_to_prefix(mask),
            Err(Error::NonContiguousMask(Ipv4Addr::new(255, 0, 255, 0)))
        );
        assert!(mask_to_prefix(0x0000_0001).is_err());
        assert!(mask_to_prefix(0x7FFF_FFFF).is_err());
    }

    #[test]
    fn test_parse_network_cidr() {
        let net = parse_network("192.168.0.0/24").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(net.prefix_len(), 24);
    }

    #[test]
    fn test_parse_network_mask() {
        let net = parse_network("192.168.0.0 - 255.255.255.0").unwrap();
        assert_eq!(net.to_string(), "192.168.0.0/24");

        let net = parse_network("10.0.0.0 - 0.0.0.0").unwrap();
        assert_eq!(net.prefix_len(), 0);
    }

    #[test]
    fn test_parse_network_keeps_host_bits() {
        let net = parse_network("192.168.1.5/24").unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(192, 168, 1, 5));
        assert_eq!(net.network(), Ipv4Addr::new(192, 168, 1, 0));
    }

    #[test]
    fn test_parse_network_errors() {
        assert_eq!(
            parse_network("10.0.0.0/33"),
            Err(Error::InvalidPrefixLength(33))
        );
        assert!(matches!(
            parse_network("10.0.0.0/abc"),
            Err(Error::InvalidCidr(_))
        ));
        assert!(matches!(
            parse_network("10.0.0.0/999"),
            Err(Error::InvalidCidr(_))
        ));
        assert!(matches!(
            parse_network("10.0.0.0"),
            Err(Error::InvalidCidr(_))
        ));
        assert!(matches!(
            parse_network("10.0.0.0 - 255.0.255.0"),
            Err(Error::NonContiguousMask(_))
        ));
        assert!(matches!(
            parse_network("10.0.0/8"),
            Err(Error::MalformedAddress(_))
        ));
    }
}
