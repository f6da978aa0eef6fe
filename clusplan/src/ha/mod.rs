//! High-availability validation and sizing.

mod account;
mod estimate;
mod types;

pub use account::validate_service_account;
pub use estimate::{
    estimate_ha_requirements, HaEstimate, MAX_ESTIMATE_NODES, LinkRequirement, NetworkRequirement,
    ServerRequirement, StorageRequirement, VolumeRequirement,
};
pub use types::{ClusterSpec, HaConfig, QuorumType, WitnessType};

use crate::address;
use crate::diagnostics::Diagnostics;
use types::present;

/// Smallest cluster that can fail over.
pub const MIN_CLUSTER_NODES: u32 = 2;
/// Above this node count a performance warning is raised. Not a hard limit.
pub const LARGE_CLUSTER_NODES: u32 = 64;

/// Validate the high-availability subtree.
pub fn validate_ha_configuration(config: &HaConfig) -> Diagnostics {
    let mut result = Diagnostics::new();

    if config.enabled.is_none() {
        result.error("Missing required high availability configuration: enabled");
    }
    if config.cluster.is_none() {
        result.error("Missing required high availability configuration: cluster");
    }
    let (Some(enabled), Some(cluster)) = (config.enabled, &config.cluster) else {
        tracing::debug!(errors = result.errors().len(), "HA configuration incomplete");
        return result;
    };

    if enabled {
        check_cluster(cluster, &mut result);
    }

    if config.use_vmm.unwrap_or(false) {
        check_vmm(config, &mut result);
    }

    if !enabled {
        result.recommend("Enable high availability for production VMM environments");
    }
    if cluster.node_count.is_some_and(|n| n < 3) {
        result.recommend("Add additional nodes to the cluster for better availability");
    }

    tracing::debug!(
        valid = result.is_valid(),
        enabled,
        node_count = cluster.node_count,
        "HA configuration validated"
    );
    result
}

fn check_cluster(cluster: &ClusterSpec, result: &mut Diagnostics) {
    let required = [
        ("name", cluster.name.is_some()),
        ("node_count", cluster.node_count.is_some()),
        ("quorum_type", cluster.quorum_type.is_some()),
        ("witness_type", cluster.witness_type.is_some()),
    ];
    for (field, set) in required {
        if !set {
            result.error(format!("Missing required cluster configuration: {field}"));
        }
    }

    if let Some(node_count) = cluster.node_count {
        if node_count < MIN_CLUSTER_NODES {
            result.error(format!(
                "Cluster requires at least {MIN_CLUSTER_NODES} nodes"
            ));
        } else if node_count > LARGE_CLUSTER_NODES {
            result.warn(format!(
                "Cluster with {node_count} nodes exceeds {LARGE_CLUSTER_NODES}; expect performance and management overhead"
            ));
        }
    }

    if let Some(quorum_type) = &cluster.quorum_type {
        if !quorum_type.is_standard() {
            result.warn(format!(
                "Quorum type '{quorum_type}' is not a standard quorum type"
            ));
        }
    }

    if let Some(witness_type) = &cluster.witness_type {
        if !witness_type.is_standard() {
            result.warn(format!(
                "Witness type '{witness_type}' is not a standard witness type"
            ));
        }
        if witness_type.needs_resource() && present(&cluster.witness_resource).is_none() {
            result.warn("Witness resource should be specified for the selected witness type");
        }
    }

    if let Some(ip) = present(&cluster.ip) {
        if let Err(e) = address::validate_ip_address(ip) {
            result.warn(format!("Cluster IP address '{ip}': {e}"));
        }
    }
}

fn check_vmm(config: &HaConfig, result: &mut Diagnostics) {
    match present(&config.vmm_service_account) {
        None => result.error("VMM service account must be specified when VMM is used"),
        Some(account) => {
            if !account.contains('\\') && !account.contains('@') {
                result.warn(
                    "VMM service account should be in domain\\username or username@domain format",
                );
            }
        }
    }

    let library_ha = config.library_ha.unwrap_or(false);
    if library_ha && present(&config.library_share).is_none() {
        result.warn("High availability library share should be specified");
    }

    if !config.vmm_db_ha.unwrap_or(false) {
        result.recommend("Configure high availability for the VMM database");
    }
    if !config.dkm_enabled.unwrap_or(false) {
        result.recommend("Configure Distributed Key Management for HA VMM environments");
    }
    if !library_ha {
        result.recommend("Configure highly available VMM library");
    }
}
