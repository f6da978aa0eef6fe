//! Resource sizing for a highly available cluster.
//!
//! Figures are fixed demonstration values. The per-node CPU and memory
//! formulas alternate between even and odd node indices and are kept exactly
//! as written so estimates are reproducible.

use serde::Serialize;

use crate::error::{Error, Result};

/// Largest cluster the estimator will size.
pub const MAX_ESTIMATE_NODES: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerRequirement {
    pub name: String,
    pub cpu_cores: u32,
    pub memory_gb: u32,
    pub os_disk_gb: u32,
    pub network_adapters: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeRequirement {
    pub name: String,
    pub size_gb: u64,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageRequirement {
    pub quorum_disk_gb: u64,
    pub csv_volumes: Vec<VolumeRequirement>,
    pub witness_type: String,
    pub mpio_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRequirement {
    pub bandwidth: String,
    pub redundant: bool,
}

impl LinkRequirement {
    fn redundant(bandwidth: &str) -> Self {
        Self {
            bandwidth: bandwidth.to_string(),
            redundant: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRequirement {
    pub dedicated_networks: bool,
    pub management_network: LinkRequirement,
    pub cluster_network: LinkRequirement,
    pub live_migration_network: LinkRequirement,
    pub vm_network: LinkRequirement,
}

/// Suggested hardware for an HA deployment. Advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HaEstimate {
    pub servers: Vec<ServerRequirement>,
    pub storage: StorageRequirement,
    pub network: NetworkRequirement,
    pub recommendations: Vec<String>,
}

const STANDING_RECOMMENDATIONS: [&str; 7] = [
    "Use identical hardware for all cluster nodes",
    "Configure at least two separate networks for cluster communication",
    "Enable redundant networking for all communication types",
    "Use a dedicated disk or file share for the cluster quorum witness",
    "Plan for N+1 capacity to handle node failures",
    "Test failover scenarios regularly",
    "Document failover procedures for administrators",
];

fn server_for_index(i: u32) -> ServerRequirement {
    ServerRequirement {
        name: format!("Node{}", i + 1),
        cpu_cores: u32::max(8, 4 * (i % 2 + 1)),
        memory_gb: u32::max(16, 8 * (i % 2 + 2)),
        os_disk_gb: 100,
        network_adapters: 4,
    }
}

/// Estimate per-node, storage and network requirements for `node_count` nodes.
pub fn estimate_ha_requirements(node_count: u32) -> Result<HaEstimate> {
    if node_count < 2 {
        return Err(Error::validation(
            "node_count",
            format!("a cluster needs at least 2 nodes, got {node_count}"),
        ));
    }

    if node_count > MAX_ESTIMATE_NODES {
        return Err(Error::validation(
            "node_count",
            format!("cannot size more than {MAX_ESTIMATE_NODES} nodes, got {node_count}"),
        ));
    }

    let servers = (0..node_count).map(server_for_index).collect();

    let storage = StorageRequirement {
        quorum_disk_gb: 1,
        csv_volumes: (1..=2)
            .map(|n| VolumeRequirement {
                name: format!("CSV{n}"),
                size_gb: 500,
                purpose: "VM Storage".to_string(),
            })
            .collect(),
        witness_type: "Disk".to_string(),
        mpio_required: true,
    };

    let network = NetworkRequirement {
        dedicated_networks: true,
        management_network: LinkRequirement::redundant("1 Gbps"),
        cluster_network: LinkRequirement::redundant("10 Gbps"),
        live_migration_network: LinkRequirement::redundant("10 Gbps"),
        vm_network: LinkRequirement::redundant("10 Gbps"),
    };

    tracing::debug!(node_count, "HA requirements estimated");

    Ok(HaEstimate {
        servers,
        storage,
        network,
        recommendations: STANDING_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
    })
}
