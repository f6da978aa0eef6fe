//! High-availability configuration subtree.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Failover cluster quorum model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuorumType {
    NodeMajority,
    NodeAndDiskMajority,
    NodeAndFileShareMajority,
    NodeAndCloudWitness,
    Other(String),
}

impl QuorumType {
    pub fn is_standard(&self) -> bool {
        !matches!(self, QuorumType::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            QuorumType::NodeMajority => "NodeMajority",
            QuorumType::NodeAndDiskMajority => "NodeAndDiskMajority",
            QuorumType::NodeAndFileShareMajority => "NodeAndFileShareMajority",
            QuorumType::NodeAndCloudWitness => "NodeAndCloudWitness",
            QuorumType::Other(value) => value,
        }
    }
}

impl From<String> for QuorumType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NodeMajority" => QuorumType::NodeMajority,
            "NodeAndDiskMajority" => QuorumType::NodeAndDiskMajority,
            "NodeAndFileShareMajority" => QuorumType::NodeAndFileShareMajority,
            "NodeAndCloudWitness" => QuorumType::NodeAndCloudWitness,
            _ => QuorumType::Other(value),
        }
    }
}

impl From<&str> for QuorumType {
    fn from(value: &str) -> Self {
        QuorumType::from(value.to_string())
    }
}

impl From<QuorumType> for String {
    fn from(value: QuorumType) -> Self {
        match value {
            QuorumType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuorumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource used to break ties during a partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WitnessType {
    DiskWitness,
    FileShareWitness,
    CloudWitness,
    /// No witness configured. Accepted as input but not a standard choice.
    None,
    Other(String),
}

impl WitnessType {
    pub fn is_standard(&self) -> bool {
        matches!(
            self,
            WitnessType::DiskWitness | WitnessType::FileShareWitness | WitnessType::CloudWitness
        )
    }

    /// Everything except [`WitnessType::None`] points at a resource.
    pub fn needs_resource(&self) -> bool {
        !matches!(self, WitnessType::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            WitnessType::DiskWitness => "DiskWitness",
            WitnessType::FileShareWitness => "FileShareWitness",
            WitnessType::CloudWitness => "CloudWitness",
            WitnessType::None => "None",
            WitnessType::Other(value) => value,
        }
    }
}

impl From<String> for WitnessType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DiskWitness" => WitnessType::DiskWitness,
            "FileShareWitness" => WitnessType::FileShareWitness,
            "CloudWitness" => WitnessType::CloudWitness,
            "None" => WitnessType::None,
            _ => WitnessType::Other(value),
        }
    }
}

impl From<&str> for WitnessType {
    fn from(value: &str) -> Self {
        WitnessType::from(value.to_string())
    }
}

impl From<WitnessType> for String {
    fn from(value: WitnessType) -> Self {
        match value {
            WitnessType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WitnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failover cluster definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    #[serde(default)]
    pub name: Option<String>,
    /// Cluster management IP address.
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub node_count: Option<u32>,
    #[serde(default)]
    pub quorum_type: Option<QuorumType>,
    #[serde(default)]
    pub witness_type: Option<WitnessType>,
    #[serde(default)]
    pub witness_resource: Option<String>,
}

/// High-availability subtree of a deployment plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub cluster: Option<ClusterSpec>,
    /// System Center VMM is deployed on top of the cluster.
    #[serde(default)]
    pub use_vmm: Option<bool>,
    #[serde(default)]
    pub vmm_service_account: Option<String>,
    #[serde(default)]
    pub library_ha: Option<bool>,
    #[serde(default)]
    pub library_share: Option<String>,
    #[serde(default)]
    pub dkm_enabled: Option<bool>,
    #[serde(default)]
    pub vmm_db_ha: Option<bool>,
}

/// Trimmed, non-empty string value.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
