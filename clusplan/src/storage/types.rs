//! Storage configuration subtree.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Backing storage technology for the cluster.
///
/// Unknown values are kept as [`StorageType::Other`] so a plan using them can
/// still be validated (they produce a warning).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StorageType {
    San,
    Smb,
    Local,
    Iscsi,
    FibreChannel,
    Nvme,
    /// Storage Spaces Direct (hyper-converged).
    S2d,
    Other(String),
}

impl StorageType {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, StorageType::Other(_))
    }

    /// Shared between all hosts (everything except local disks).
    pub fn is_shared(&self) -> bool {
        !matches!(self, StorageType::Local)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StorageType::San => "SAN",
            StorageType::Smb => "SMB",
            StorageType::Local => "Local",
            StorageType::Iscsi => "iSCSI",
            StorageType::FibreChannel => "FC",
            StorageType::Nvme => "NVMe",
            StorageType::S2d => "S2D",
            StorageType::Other(value) => value,
        }
    }
}

impl From<String> for StorageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SAN" => StorageType::San,
            "SMB" => StorageType::Smb,
            "Local" => StorageType::Local,
            "iSCSI" => StorageType::Iscsi,
            "FC" => StorageType::FibreChannel,
            "NVMe" => StorageType::Nvme,
            "S2D" | "Storage Spaces Direct (S2D)" => StorageType::S2d,
            _ => StorageType::Other(value),
        }
    }
}

impl From<&str> for StorageType {
    fn from(value: &str) -> Self {
        StorageType::from(value.to_string())
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        match value {
            StorageType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Cluster Shared Volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvVolume {
    #[serde(default)]
    pub size_gb: Option<u64>,
    #[serde(default)]
    pub purpose: Option<String>,
}

impl CsvVolume {
    pub fn new(size_gb: u64, purpose: impl Into<String>) -> Self {
        Self {
            size_gb: Some(size_gb),
            purpose: Some(purpose.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumDisk {
    #[serde(default)]
    pub size_gb: Option<u64>,
}

/// Storage subtree of a deployment plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub storage_type: Option<StorageType>,
    #[serde(default)]
    pub csv_volumes: Option<Vec<CsvVolume>>,
    #[serde(default)]
    pub quorum_disk: Option<QuorumDisk>,
    #[serde(default)]
    pub mpio_enabled: Option<bool>,
    #[serde(default)]
    pub shared_between_clusters: Option<bool>,
    /// Redundancy scheme as entered (`"Mirror"`, `"RAID 10"`, `"None"`, ...).
    #[serde(default)]
    pub redundancy: Option<String>,
    #[serde(default)]
    pub host_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_round_trip_names() {
        for name in ["SAN", "SMB", "Local", "iSCSI", "FC", "NVMe", "S2D"] {
            let parsed = StorageType::from(name);
            assert!(parsed.is_recognized(), "{name}");
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_storage_type_long_s2d_label() {
        assert_eq!(
            StorageType::from("Storage Spaces Direct (S2D)"),
            StorageType::S2d
        );
    }

    #[test]
    fn test_storage_type_unknown_is_kept() {
        let parsed = StorageType::from("Tape");
        assert_eq!(parsed, StorageType::Other("Tape".to_string()));
        assert!(!parsed.is_recognized());
        assert_eq!(String::from(parsed), "Tape");
    }

    #[test]
    fn test_storage_type_is_case_sensitive() {
        assert!(!StorageType::from("san").is_recognized());
    }

    #[test]
    fn test_deserialize_from_json() {
        let config: StorageConfig = serde_json::from_value(serde_json::json!({
            "storage_type": "iSCSI",
            "csv_volumes": [{"size_gb": 500, "purpose": "VMs"}, {}],
            "quorum_disk": {"size_gb": 1},
        }))
        .unwrap();
        assert_eq!(config.storage_type, Some(StorageType::Iscsi));
        let volumes = config.csv_volumes.unwrap();
        assert_eq!(volumes[0], CsvVolume::new(500, "VMs"));
        assert_eq!(volumes[1].size_gb, None);
        assert_eq!(config.mpio_enabled, None);
    }
}
