//! Syntax checks for network primitives.
//!
//! Pure parsing only: nothing here resolves host names or touches the network.

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use ipnet::IpNet;

use crate::error::AddressError;

/// Validate an IPv4 or IPv6 address literal.
pub fn validate_ip_address(text: &str) -> Result<IpAddr, AddressError> {
    IpAddr::from_str(text.trim()).map_err(|_| AddressError::IpAddress)
}

/// Validate `address/prefix` notation.
///
/// Host bits beyond the prefix are tolerated and masked off, so
/// `192.168.1.5/24` yields the network `192.168.1.0/24`.
pub fn validate_cidr(text: &str) -> Result<IpNet, AddressError> {
    IpNet::from_str(text.trim())
        .map(|net| net.trunc())
        .map_err(|_| AddressError::Cidr)
}

/// Validate an IPv4 subnet mask and return its prefix length.
///
/// Accepts a dotted-quad mask with contiguous leading ones
/// (`255.255.255.0`) or a bare prefix length (`24`).
pub fn validate_subnet_mask(text: &str) -> Result<u8, AddressError> {
    let text = text.trim();

    if let Ok(prefix) = text.parse::<u8>() {
        return if prefix <= 32 {
            Ok(prefix)
        } else {
            Err(AddressError::SubnetMask)
        };
    }

    let mask = u32::from(Ipv4Addr::from_str(text).map_err(|_| AddressError::SubnetMask)?);
    if mask.leading_ones() + mask.trailing_zeros() == 32 {
        Ok(mask.leading_ones() as u8)
    } else {
        Err(AddressError::SubnetMask)
    }
}

/// Two CIDR blocks overlap iff one contains the other.
pub fn networks_overlap(a: &IpNet, b: &IpNet) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_address_families() {
        assert!(validate_ip_address("192.168.1.10").is_ok());
        assert!(validate_ip_address("fe80::1").is_ok());
        assert!(validate_ip_address("::").is_ok());
    }

    #[test]
    fn test_ip_address_rejects_hostnames() {
        assert_eq!(
            validate_ip_address("dc01.contoso.com"),
            Err(AddressError::IpAddress)
        );
        assert!(validate_ip_address("256.1.1.1").is_err());
        assert!(validate_ip_address("").is_err());
    }

    #[test]
    fn test_cidr_prefix_range() {
        assert!(validate_cidr("10.0.0.0/24").is_ok());
        assert!(validate_cidr("10.0.0.0/32").is_ok());
        assert_eq!(validate_cidr("10.0.0.0/33"), Err(AddressError::Cidr));
        assert!(validate_cidr("2001:db8::/128").is_ok());
        assert!(validate_cidr("2001:db8::/129").is_err());
    }

    #[test]
    fn test_cidr_rejects_garbage() {
        assert!(validate_cidr("not-an-ip/24").is_err());
        assert!(validate_cidr("10.0.0.0").is_err());
        assert!(validate_cidr("10.0.0.0/").is_err());
    }

    #[test]
    fn test_cidr_masks_host_bits() {
        let net = validate_cidr("192.168.1.5/24").unwrap();
        assert_eq!(net.to_string(), "192.168.1.0/24");
    }

    #[test]
    fn test_subnet_mask() {
        assert_eq!(validate_subnet_mask("255.255.255.0"), Ok(24));
        assert_eq!(validate_subnet_mask("255.255.254.0"), Ok(23));
        assert_eq!(validate_subnet_mask("0.0.0.0"), Ok(0));
        assert_eq!(validate_subnet_mask("255.255.255.255"), Ok(32));
        assert_eq!(validate_subnet_mask("16"), Ok(16));
    }

    #[test]
    fn test_subnet_mask_rejects_non_contiguous() {
        assert_eq!(
            validate_subnet_mask("255.0.255.0"),
            Err(AddressError::SubnetMask)
        );
        assert!(validate_subnet_mask("33").is_err());
        assert!(validate_subnet_mask("255.255.255").is_err());
    }

    #[test]
    fn test_overlap_accounts_for_prefix() {
        let wide = validate_cidr("10.0.0.0/24").unwrap();
        let narrow = validate_cidr("10.0.0.128/25").unwrap();
        let other = validate_cidr("10.1.0.0/24").unwrap();
        assert!(networks_overlap(&wide, &narrow));
        assert!(networks_overlap(&narrow, &wide));
        assert!(!networks_overlap(&wide, &other));
    }

    #[test]
    fn test_overlap_across_families_is_false() {
        let v4 = validate_cidr("0.0.0.0/0").unwrap();
        let v6 = validate_cidr("::/0").unwrap();
        assert!(!networks_overlap(&v4, &v6));
    }
}
