//! Storage sizing from VM count and average VM size.
//!
//! The rule is a planning placeholder, not vendor sizing guidance: 20% overhead
//! for configuration files and checkpoints, CSVs capped near 2 TB each, and an
//! extra growth buffer of 20% of the padded total.

use serde::Serialize;

use super::types::{CsvVolume, QuorumDisk};
use crate::error::{Error, Result};

/// Preferred upper bound for a single CSV, in GB.
pub const CSV_TARGET_MAX_GB: u64 = 2000;

const QUORUM_SIZE_GB: u64 = 1;
const MIN_CSV_COUNT: u64 = 2;
/// Largest layout the estimator will produce.
pub const MAX_CSV_COUNT: u64 = 10_000;

/// Suggested storage layout. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageEstimate {
    /// Raw VM storage, `vm_count * avg_vm_size_gb`.
    pub total_gb: u64,
    /// Total plus 20% overhead.
    pub with_overhead_gb: f64,
    /// Number of "VM Storage N" volumes (the growth buffer is extra).
    pub csv_count: u64,
    pub quorum_disk: QuorumDisk,
    pub csv_volumes: Vec<CsvVolume>,
    /// Human-readable derivation, one line per step.
    pub text: Vec<String>,
}

/// Estimate quorum and CSV sizes for `vm_count` VMs of `avg_vm_size_gb` each.
pub fn estimate_storage_needs(vm_count: u64, avg_vm_size_gb: u64) -> Result<StorageEstimate> {
    if vm_count == 0 {
        return Err(Error::validation("vm_count", "must be greater than 0"));
    }
    if avg_vm_size_gb == 0 {
        return Err(Error::validation("avg_vm_size_gb", "must be greater than 0"));
    }

    let total_gb = vm_count
        .checked_mul(avg_vm_size_gb)
        .ok_or_else(|| Error::validation("vm_count", "total storage overflows"))?;
    // Work in tenths of a GB so 1.2x and 0.2x stay exact.
    let overhead_tenths = total_gb
        .checked_mul(12)
        .ok_or_else(|| Error::validation("vm_count", "total storage overflows"))?;
    let with_overhead_gb = overhead_tenths as f64 / 10.0;

    let csv_count = MIN_CSV_COUNT.max(overhead_tenths / (CSV_TARGET_MAX_GB * 10) + 1);
    if csv_count > MAX_CSV_COUNT {
        return Err(Error::validation(
            "vm_count",
            format!("{csv_count} CSV volumes exceeds the {MAX_CSV_COUNT} volume limit"),
        ));
    }
    let csv_size_gb = overhead_tenths / (csv_count * 10);
    let growth_gb = overhead_tenths / 50;

    let mut csv_volumes: Vec<CsvVolume> = (1..=csv_count)
        .map(|n| CsvVolume::new(csv_size_gb, format!("VM Storage {n}")))
        .collect();
    csv_volumes.push(CsvVolume::new(growth_gb, "Growth buffer"));

    let text = vec![
        format!("Total VM storage required: {total_gb} GB"),
        format!("With 20% overhead: {with_overhead_gb:.0} GB"),
        format!("Recommended CSV count: {csv_count}"),
        format!(
            "Recommended CSV size: {:.0} GB each",
            with_overhead_gb / csv_count as f64
        ),
        "Consider implementing storage redundancy (RAID, mirroring)".to_string(),
        "Enable MPIO for redundant storage connectivity".to_string(),
    ];

    tracing::debug!(vm_count, avg_vm_size_gb, csv_count, "storage estimate computed");

    Ok(StorageEstimate {
        total_gb,
        with_overhead_gb,
        csv_count,
        quorum_disk: QuorumDisk {
            size_gb: Some(QUORUM_SIZE_GB),
        },
        csv_volumes,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_small_vms() {
        let estimate = estimate_storage_needs(20, 100).unwrap();
        assert_eq!(estimate.total_gb, 2000);
        assert_eq!(estimate.with_overhead_gb, 2400.0);
        assert_eq!(estimate.csv_count, 2);
        assert_eq!(estimate.quorum_disk.size_gb, Some(1));
        assert_eq!(
            estimate.csv_volumes,
            [
                CsvVolume::new(1200, "VM Storage 1"),
                CsvVolume::new(1200, "VM Storage 2"),
                CsvVolume::new(480, "Growth buffer"),
            ]
        );
    }

    #[test]
    fn test_minimum_two_volumes() {
        let estimate = estimate_storage_needs(1, 10).unwrap();
        assert_eq!(estimate.csv_count, 2);
        assert_eq!(estimate.csv_volumes[0].size_gb, Some(6));
        assert_eq!(estimate.csv_volumes[2].size_gb, Some(2));
    }

    #[test]
    fn test_large_plan_caps_volume_size() {
        // 100 * 100 = 10,000 GB -> 12,000 GB padded -> 7 volumes.
        let estimate = estimate_storage_needs(100, 100).unwrap();
        assert_eq!(estimate.csv_count, 7);
        assert_eq!(estimate.csv_volumes.len(), 8);
        assert_eq!(estimate.csv_volumes[0].size_gb, Some(1714));
        assert_eq!(estimate.csv_volumes[7].size_gb, Some(2400));
    }

    #[test]
    fn test_volume_limit() {
        // 16,665 TB padded to 19,998 TB is exactly 10,000 volumes.
        let estimate = estimate_storage_needs(16_665, 1000).unwrap();
        assert_eq!(estimate.csv_count, MAX_CSV_COUNT);

        assert!(matches!(
            estimate_storage_needs(16_667, 1000),
            Err(Error::Validation { field: "vm_count", .. })
        ));
        assert!(estimate_storage_needs(1_000_000_000, 1_000_000).is_err());
    }

    #[test]
    fn test_text_lines() {
        let estimate = estimate_storage_needs(20, 100).unwrap();
        assert_eq!(estimate.text.len(), 6);
        assert_eq!(estimate.text[0], "Total VM storage required: 2000 GB");
        assert_eq!(estimate.text[1], "With 20% overhead: 2400 GB");
        assert_eq!(estimate.text[2], "Recommended CSV count: 2");
        assert_eq!(estimate.text[3], "Recommended CSV size: 1200 GB each");
    }

    #[test]
    fn test_rejects_zero_inputs() {
        assert!(matches!(
            estimate_storage_needs(0, 100),
            Err(Error::Validation { field: "vm_count", .. })
        ));
        assert!(matches!(
            estimate_storage_needs(10, 0),
            Err(Error::Validation {
                field: "avg_vm_size_gb",
                ..
            })
        ));
    }
}
