//! Storage configuration validation and sizing.

mod estimate;
mod types;

pub use estimate::{estimate_storage_needs, StorageEstimate, CSV_TARGET_MAX_GB, MAX_CSV_COUNT};
pub use types::{CsvVolume, QuorumDisk, StorageConfig, StorageType};

use crate::diagnostics::Diagnostics;

/// Smallest CSV volume size that does not draw a warning.
pub const MIN_CSV_SIZE_GB: u64 = 100;
/// Acceptable quorum disk size range, inclusive.
pub const QUORUM_SIZE_RANGE_GB: (u64, u64) = (1, 5);

/// Validate the storage subtree.
pub fn validate_storage_configuration(config: &StorageConfig) -> Diagnostics {
    let mut result = Diagnostics::new();

    if config.storage_type.is_none() {
        result.error("Missing required storage configuration: storage_type");
    }
    if config.csv_volumes.is_none() {
        result.error("Missing required storage configuration: csv_volumes");
    }
    if config.quorum_disk.is_none() {
        result.error("Missing required storage configuration: quorum_disk");
    }
    let (Some(storage_type), Some(csv_volumes), Some(quorum_disk)) = (
        &config.storage_type,
        &config.csv_volumes,
        &config.quorum_disk,
    ) else {
        tracing::debug!(errors = result.errors().len(), "storage configuration incomplete");
        return result;
    };

    if !storage_type.is_recognized() {
        result.warn(format!(
            "Storage type '{storage_type}' is not a common VMM storage type"
        ));
    }

    if csv_volumes.is_empty() {
        result.error("At least one CSV volume must be defined");
    }

    for (i, volume) in csv_volumes.iter().enumerate() {
        match volume.size_gb {
            None => result.warn(format!("CSV volume {} is missing size information", i + 1)),
            Some(size) if size < MIN_CSV_SIZE_GB => result.warn(format!(
                "CSV volume {} is smaller than recommended ({MIN_CSV_SIZE_GB} GB minimum)",
                i + 1
            )),
            Some(_) => {}
        }
    }

    let (min_quorum, max_quorum) = QUORUM_SIZE_RANGE_GB;
    match quorum_disk.size_gb {
        None => result.warn("Quorum disk is missing size information"),
        Some(size) if size < min_quorum || size > max_quorum => result.warn(format!(
            "Quorum disk size should be between {min_quorum} GB and {max_quorum} GB"
        )),
        Some(_) => {}
    }

    if !storage_type.is_shared() {
        result.recommend(
            "Local storage is not recommended for production VMM clusters. Consider using shared storage.",
        );
    }

    if config.redundancy.as_deref().unwrap_or("None") == "None" {
        result.recommend(
            "Implement storage redundancy (RAID, mirroring, etc.) for production environments",
        );
    }

    if csv_volumes.len() < 2 {
        result.recommend(
            "Consider using multiple CSV volumes for better performance and management",
        );
    }

    if let Some(hosts) = config.host_count {
        if (csv_volumes.len() as u64) < u64::from(hosts) {
            result.recommend(format!(
                "Configure at least one CSV volume per host ({hosts} hosts) for balanced resource allocation"
            ));
        }
    }

    if !config.mpio_enabled.unwrap_or(false) {
        result.recommend("Enable Multipath I/O (MPIO) for redundant storage connectivity");
    }

    if config.shared_between_clusters.unwrap_or(false) {
        result.warn("Storage should not be shared between different clusters");
    }

    tracing::debug!(
        valid = result.is_valid(),
        volumes = csv_volumes.len(),
        warnings = result.warnings().len(),
        "storage configuration validated"
    );
    result
}
