//! # clusplan
//!
//! Validation and sizing engine for Hyper-V failover cluster deployment plans.
//!
//! Each configuration domain (network, storage, security, high availability)
//! has a pure validator that takes a typed subtree and returns
//! [`Diagnostics`]: blocking errors, warnings and best-practice
//! recommendations. Estimators turn a handful of sizing inputs into suggested
//! storage layouts and per-node hardware.
//!
//! ## Example
//!
//! ```
//! use clusplan::{validate_network_configuration, NetworkConfig, NetworkSegment};
//!
//! let config = NetworkConfig {
//!     management_network: Some(NetworkSegment::with_cidr("10.0.0.0/16")),
//!     migration_network: Some(NetworkSegment::with_cidr("10.0.1.0/24")),
//!     vm_network: Some(NetworkSegment::with_cidr("192.168.0.0/24")),
//!     ..NetworkConfig::default()
//! };
//!
//! let result = validate_network_configuration(&config);
//! assert!(result.is_valid());
//! assert_eq!(result.warnings().len(), 1);
//! ```
//!
//! Nothing here performs I/O. Loading plans from disk and rendering results
//! is left to the caller.

pub mod address;
pub mod diagnostics;
pub mod error;
pub mod ha;
pub mod network;
pub mod plan;
pub mod security;
pub mod storage;

pub use address::{networks_overlap, validate_cidr, validate_ip_address, validate_subnet_mask};
pub use diagnostics::{Diagnostics, Severity};
pub use error::{AddressError, Error, Result};
pub use ha::{
    estimate_ha_requirements, validate_ha_configuration, validate_service_account, ClusterSpec,
    HaConfig, HaEstimate, QuorumType, WitnessType,
};
pub use network::{
    validate_network_configuration, validate_nic_speed_requirements, LinkSpeed, NetworkAdapter,
    NetworkConfig, NetworkSegment,
};
pub use plan::{validate_plan, HardwareContext, PlanConfig, PlanReport};
pub use security::{
    security_recommendations, validate_admin_account, validate_security_configuration, DkmEntry,
    DkmSettings, PasswordPolicy, SecurityConfig, SecurityRecommendation,
};
pub use storage::{
    estimate_storage_needs, validate_storage_configuration, CsvVolume, QuorumDisk,
    StorageConfig, StorageEstimate, StorageType,
};
