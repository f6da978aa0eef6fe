//! Network configuration validation.
//!
//! Checks the three core networks (management, live migration, VM), flags
//! overlapping address ranges across every configured segment, and adds
//! best-practice recommendations for NIC dedication and traffic separation.
//!
//! Segments without a CIDR are treated as not yet configured and are skipped
//! by both the syntax and the overlap checks. This keeps partially filled
//! forms quiet but also means an unconfigured network is never compared.

mod nic;
mod types;

pub use nic::{validate_nic_speed_requirements, LinkSpeed};
pub use types::{NetworkAdapter, NetworkConfig, NetworkSegment, MAX_VLAN_ID};

use ipnet::IpNet;

use crate::address::{self, networks_overlap};
use crate::diagnostics::Diagnostics;

const REQUIRED_NETWORKS: [&str; 3] = ["management_network", "migration_network", "vm_network"];

/// Validate the network subtree.
pub fn validate_network_configuration(config: &NetworkConfig) -> Diagnostics {
    let mut result = Diagnostics::new();

    let required = [
        &config.management_network,
        &config.migration_network,
        &config.vm_network,
    ];
    for (field, segment) in REQUIRED_NETWORKS.iter().zip(required) {
        if segment.is_none() {
            result.error(format!("Missing required network configuration: {field}"));
        }
    }
    if !result.is_valid() {
        tracing::debug!(errors = result.errors().len(), "network configuration incomplete");
        return result;
    }

    for (field, segment) in REQUIRED_NETWORKS.iter().zip(required) {
        let Some(cidr) = segment.as_ref().and_then(|s| s.cidr.as_deref()) else {
            continue;
        };
        if let Err(e) = address::validate_cidr(cidr) {
            result.error(format!("{} CIDR invalid: {e}", display_name(field)));
        }
    }

    check_overlaps(config, &mut result);

    for (label, segment) in config.segments() {
        check_segment_details(label, segment, &mut result);
    }

    if let Some(hosts) = config.hyper_v_hosts {
        if hosts < 2 {
            result.warn(format!(
                "{hosts} Hyper-V host(s) configured; a failover cluster needs at least 2"
            ));
        }
    }

    if !config.dedicated_nics.unwrap_or(false) {
        result.recommend(
            "Use dedicated NICs for different network types (management, migration, VM)",
        );
    }
    if !config.ipsec.unwrap_or(false) {
        result.recommend("Enable IPsec on the Live Migration network for encrypted data transfer");
    }
    if !config.separate_networks.unwrap_or(false) {
        result.recommend(
            "Use separate physical networks for management, VM traffic, and live migration",
        );
    }

    tracing::debug!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "network configuration validated"
    );
    result
}

/// Report every unordered pair of overlapping segments once.
fn check_overlaps(config: &NetworkConfig, result: &mut Diagnostics) {
    // Malformed CIDRs were already reported for the core networks; extra
    // segments with bad syntax simply drop out of the comparison.
    let networks: Vec<(&str, IpNet)> = config
        .segments()
        .into_iter()
        .filter_map(|(label, segment)| segment.network().ok().flatten().map(|net| (label, net)))
        .collect();

    for (i, (label_a, net_a)) in networks.iter().enumerate() {
        for (label_b, net_b) in &networks[i + 1..] {
            if networks_overlap(net_a, net_b) {
                tracing::trace!(%net_a, %net_b, "overlapping networks");
                result.warn(format!(
                    "Network overlap detected between {label_a} and {label_b}"
                ));
            }
        }
    }
}

fn check_segment_details(label: &str, segment: &NetworkSegment, result: &mut Diagnostics) {
    let name = display_name(label);

    if let Some(vlan) = segment.vlan {
        if vlan < 0 || vlan > i64::from(MAX_VLAN_ID) {
            result.warn(format!(
                "{name} VLAN {vlan} is outside the valid range 0-{MAX_VLAN_ID}"
            ));
        }
    }

    if let Some(gateway) = segment.gateway() {
        match address::validate_ip_address(gateway) {
            Err(e) => result.warn(format!("{name} gateway '{gateway}': {e}")),
            Ok(ip) => {
                if let Ok(Some(net)) = segment.network() {
                    if !net.contains(&ip) {
                        result.warn(format!("{name} gateway {ip} is outside {net}"));
                    }
                }
            }
        }
    }

    if let Some(dns) = segment.dns() {
        if let Err(e) = address::validate_ip_address(dns) {
            result.warn(format!("{name} DNS server '{dns}': {e}"));
        }
    }
}

fn display_name(label: &str) -> String {
    match label {
        "management_network" => "Management network".to_string(),
        "migration_network" => "Migration network".to_string(),
        "vm_network" => "VM network".to_string(),
        "cluster_network" => "Cluster network".to_string(),
        "storage_network" => "Storage network".to_string(),
        other => {
            let spaced = other.replace('_', " ");
            let mut chars = spaced.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => spaced,
            }
        }
    }
}
