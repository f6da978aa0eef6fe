//! Network configuration subtree.

use std::collections::BTreeMap;

use ipnet::IpNet;
use serde::{Deserialize, Serialize};

use crate::address;
use crate::error::{Error, Result};

/// Highest assignable 802.1Q VLAN ID.
pub const MAX_VLAN_ID: u32 = 4095;

/// One logical network (management, migration, VM, ...).
///
/// A segment without a `cidr` counts as "not yet configured": it is neither
/// validated nor compared for overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Signed so out-of-range input reaches validation as a warning.
    pub vlan: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<String>,
}

impl NetworkSegment {
    pub fn with_cidr(cidr: impl Into<String>) -> Self {
        Self {
            cidr: Some(cidr.into()),
            ..Self::default()
        }
    }

    /// Parsed network, `None` when no CIDR has been entered.
    pub fn network(&self) -> Result<Option<IpNet>> {
        match self.cidr.as_deref() {
            None => Ok(None),
            Some(cidr) => address::validate_cidr(cidr)
                .map(Some)
                .map_err(|source| Error::InvalidAddress {
                    value: cidr.to_string(),
                    source,
                }),
        }
    }

    /// Gateway with blank input treated as unset.
    pub fn gateway(&self) -> Option<&str> {
        non_blank(self.gateway.as_deref())
    }

    /// DNS server with blank input treated as unset.
    pub fn dns(&self) -> Option<&str> {
        non_blank(self.dns.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Network subtree of a deployment plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub management_network: Option<NetworkSegment>,
    #[serde(default)]
    pub migration_network: Option<NetworkSegment>,
    #[serde(default)]
    pub vm_network: Option<NetworkSegment>,
    #[serde(default)]
    pub cluster_network: Option<NetworkSegment>,
    #[serde(default)]
    pub storage_network: Option<NetworkSegment>,
    /// Any further named networks, compared for overlap with the rest.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_networks: BTreeMap<String, NetworkSegment>,
    #[serde(default)]
    pub dedicated_nics: Option<bool>,
    #[serde(default)]
    pub ipsec: Option<bool>,
    #[serde(default)]
    pub separate_networks: Option<bool>,
    #[serde(default)]
    pub hyper_v_hosts: Option<u32>,
    /// Physical NIC assignments, checked by the NIC speed validator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adapters: Vec<NetworkAdapter>,
}

impl NetworkConfig {
    /// Every present segment with its field label, in declaration order.
    pub fn segments(&self) -> Vec<(&str, &NetworkSegment)> {
        let fixed = [
            ("management_network", &self.management_network),
            ("migration_network", &self.migration_network),
            ("vm_network", &self.vm_network),
            ("cluster_network", &self.cluster_network),
            ("storage_network", &self.storage_network),
        ];

        fixed
            .into_iter()
            .filter_map(|(label, segment)| segment.as_ref().map(|s| (label, s)))
            .chain(
                self.additional_networks
                    .iter()
                    .map(|(label, segment)| (label.as_str(), segment)),
            )
            .collect()
    }
}

/// Physical adapter assignment used by the NIC speed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAdapter {
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub network_type: String,
    /// Link speed as entered, e.g. `"10 Gbps"`.
    pub speed: String,
    #[serde(default)]
    pub teaming: bool,
}

impl NetworkAdapter {
    pub fn new(
        server: impl Into<String>,
        network_type: impl Into<String>,
        speed: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            name: None,
            network_type: network_type.into(),
            speed: speed.into(),
            teaming: false,
        }
    }
}
