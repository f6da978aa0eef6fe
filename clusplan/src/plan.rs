//! Whole-plan validation across every configuration domain.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::ha::{validate_ha_configuration, HaConfig};
use crate::network::{validate_network_configuration, validate_nic_speed_requirements, NetworkConfig};
use crate::security::{validate_security_configuration, SecurityConfig};
use crate::storage::{validate_storage_configuration, StorageConfig, StorageType};

/// Host inventory shared by the domain subtrees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareContext {
    #[serde(default)]
    pub host_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_names: Vec<String>,
}

/// A complete deployment plan. Every domain is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub network: Option<NetworkConfig>,
    #[serde(default)]
    pub storage: Option<StorageConfig>,
    #[serde(default)]
    pub security: Option<SecurityConfig>,
    #[serde(default)]
    pub ha: Option<HaConfig>,
    #[serde(default)]
    pub hardware: Option<HardwareContext>,
}

impl PlanConfig {
    fn host_count(&self) -> Option<u32> {
        self.hardware.as_ref().and_then(|hardware| {
            hardware.host_count.or_else(|| {
                let named = hardware.server_names.len();
                (named > 0).then(|| u32::try_from(named).unwrap_or(u32::MAX))
            })
        })
    }

    fn is_s2d(&self) -> bool {
        self.storage
            .as_ref()
            .and_then(|storage| storage.storage_type.as_ref())
            .is_some_and(|storage_type| *storage_type == StorageType::S2d)
    }
}

/// Per-domain results. Domains absent from the plan are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Diagnostics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic: Option<Diagnostics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<Diagnostics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Diagnostics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ha: Option<Diagnostics>,
}

impl PlanReport {
    /// Present domains with their label, in report order.
    pub fn sections(&self) -> Vec<(&'static str, &Diagnostics)> {
        [
            ("network", &self.network),
            ("nic", &self.nic),
            ("storage", &self.storage),
            ("security", &self.security),
            ("ha", &self.ha),
        ]
        .into_iter()
        .filter_map(|(label, diagnostics)| diagnostics.as_ref().map(|d| (label, d)))
        .collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.sections()
            .iter()
            .any(|(_, diagnostics)| !diagnostics.warnings().is_empty())
    }
}

/// Run every validator that has a subtree to look at.
///
/// Host counts missing from the network and storage subtrees are taken from
/// `hardware`. An empty plan is valid with no sections.
pub fn validate_plan(plan: &PlanConfig) -> PlanReport {
    let host_count = plan.host_count();

    let network = plan.network.as_ref().map(|network| {
        let mut network = network.clone();
        network.hyper_v_hosts = network.hyper_v_hosts.or(host_count);
        validate_network_configuration(&network)
    });

    let nic = plan
        .network
        .as_ref()
        .filter(|network| !network.adapters.is_empty())
        .map(|network| validate_nic_speed_requirements(&network.adapters, plan.is_s2d()));

    let storage = plan.storage.as_ref().map(|storage| {
        let mut storage = storage.clone();
        storage.host_count = storage.host_count.or(host_count);
        validate_storage_configuration(&storage)
    });

    let security = plan.security.as_ref().map(validate_security_configuration);
    let ha = plan.ha.as_ref().map(validate_ha_configuration);

    let mut report = PlanReport {
        valid: true,
        network,
        nic,
        storage,
        security,
        ha,
    };
    report.valid = report
        .sections()
        .iter()
        .all(|(_, diagnostics)| diagnostics.is_valid());

    tracing::debug!(
        valid = report.valid,
        sections = report.sections().len(),
        "plan validated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{NetworkAdapter, NetworkSegment};
    use crate::storage::{CsvVolume, QuorumDisk};

    fn network() -> NetworkConfig {
        NetworkConfig {
            management_network: Some(NetworkSegment::with_cidr("10.0.1.0/24")),
            migration_network: Some(NetworkSegment::with_cidr("10.0.2.0/24")),
            vm_network: Some(NetworkSegment::with_cidr("10.0.3.0/24")),
            dedicated_nics: Some(true),
            ipsec: Some(true),
            separate_networks: Some(true),
            ..NetworkConfig::default()
        }
    }

    #[test]
    fn test_empty_plan_is_valid() {
        let report = validate_plan(&PlanConfig::default());
        assert!(report.valid);
        assert!(report.sections().is_empty());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_host_count_from_hardware() {
        let plan = PlanConfig {
            network: Some(network()),
            hardware: Some(HardwareContext {
                host_count: Some(1),
                server_names: Vec::new(),
            }),
            ..PlanConfig::default()
        };
        let report = validate_plan(&plan);
        let network = report.network.unwrap();
        assert!(network.is_valid());
        assert_eq!(network.warnings().len(), 1);
    }

    #[test]
    fn test_explicit_host_count_wins() {
        let mut config = network();
        config.hyper_v_hosts = Some(4);
        let plan = PlanConfig {
            network: Some(config),
            hardware: Some(HardwareContext {
                host_count: Some(1),
                server_names: Vec::new(),
            }),
            ..PlanConfig::default()
        };
        assert!(validate_plan(&plan).network.unwrap().is_clean());
    }

    #[test]
    fn test_server_names_imply_host_count() {
        let plan = PlanConfig {
            network: Some(network()),
            hardware: Some(HardwareContext {
                host_count: None,
                server_names: vec!["HV01".to_string()],
            }),
            ..PlanConfig::default()
        };
        assert_eq!(validate_plan(&plan).network.unwrap().warnings().len(), 1);
    }

    #[test]
    fn test_storage_sees_host_count() {
        let storage = StorageConfig {
            storage_type: Some(StorageType::San),
            csv_volumes: Some(vec![
                CsvVolume::new(1000, "VM Storage 1"),
                CsvVolume::new(1000, "VM Storage 2"),
            ]),
            quorum_disk: Some(QuorumDisk { size_gb: Some(1) }),
            mpio_enabled: Some(true),
            redundancy: Some("Mirror".to_string()),
            ..StorageConfig::default()
        };
        let plan = PlanConfig {
            storage: Some(storage.clone()),
            hardware: Some(HardwareContext {
                host_count: Some(4),
                server_names: Vec::new(),
            }),
            ..PlanConfig::default()
        };
        let report = validate_plan(&plan);
        assert_eq!(
            report.storage.unwrap().recommendations(),
            ["Configure at least one CSV volume per host (4 hosts) for balanced resource allocation"]
        );

        let alone = PlanConfig {
            storage: Some(storage),
            ..PlanConfig::default()
        };
        assert!(validate_plan(&alone).storage.unwrap().is_clean());
    }

    #[test]
    fn test_nic_check_uses_storage_type() {
        let mut config = network();
        config.adapters = vec![
            NetworkAdapter::new("HV01", "Live Migration", "10 Gbps"),
            NetworkAdapter::new("HV01", "Live Migration", "10 Gbps"),
        ];
        let plan = PlanConfig {
            network: Some(config),
            storage: Some(StorageConfig {
                storage_type: Some(StorageType::S2d),
                ..StorageConfig::default()
            }),
            ..PlanConfig::default()
        };
        let report = validate_plan(&plan);
        let nic = report.nic.unwrap();
        assert!(nic.warnings().iter().any(|w| w.contains("25 Gbps")));
        assert!(!report.valid, "storage subtree is incomplete");
    }

    #[test]
    fn test_any_invalid_domain_fails_plan() {
        let plan = PlanConfig {
            network: Some(network()),
            ha: Some(HaConfig::default()),
            ..PlanConfig::default()
        };
        let report = validate_plan(&plan);
        assert!(report.network.as_ref().unwrap().is_valid());
        assert!(!report.valid);
        assert_eq!(report.sections().len(), 2);
    }
}
