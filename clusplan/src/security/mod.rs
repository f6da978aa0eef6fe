//! Security posture validation.
//!
//! Almost everything here is advisory. The one hard requirement is
//! Distributed Key Management with a named container: without it encrypted
//! data cannot be recovered after losing the management server.

mod account;
mod advice;
mod types;

pub use account::validate_admin_account;
pub use advice::{security_recommendations, Impact, SecurityRecommendation};
pub use types::{DkmEntry, DkmSettings, PasswordPolicy, SecurityConfig, Unrecognized};

use crate::diagnostics::Diagnostics;

/// Minimum password length before a warning is raised.
pub const MIN_PASSWORD_LENGTH: u32 = 12;

/// Validate the security subtree.
pub fn validate_security_configuration(config: &SecurityConfig) -> Diagnostics {
    let mut result = Diagnostics::new();

    let recommended = [
        ("host_hardening", config.host_hardening.is_some()),
        ("network_isolation", config.network_isolation.is_some()),
        ("dkm", config.dkm.is_some()),
    ];
    for (field, present) in recommended {
        if !present {
            result.warn(format!("Missing recommended security configuration: {field}"));
        }
    }

    if let Some(policy) = &config.password_policy {
        if policy.min_length.is_some_and(|len| len < MIN_PASSWORD_LENGTH) {
            result.warn(format!(
                "Password minimum length should be at least {MIN_PASSWORD_LENGTH} characters"
            ));
        }
        if policy.complexity == Some(false) {
            result.warn("Password complexity should be enabled");
        }
    }

    if !config.smb_encryption.unwrap_or(false) {
        result.recommend("Enable SMB 3.0 encryption for data protection");
    }
    if !config.ipsec_migration.unwrap_or(false) {
        result.recommend("Enable IPsec for Live Migration traffic");
    }

    match config.dkm.as_ref().and_then(DkmEntry::settings) {
        Some(settings) => {
            if settings.container_name().is_none() {
                result.error("DKM container name must be specified");
            }
        }
        None => result.error("Distributed Key Management (DKM) configuration is required"),
    }

    if !config.roles.unwrap_or(false) {
        result.recommend("Configure role-based access control (RBAC) for VMM management");
    }
    if !config.code_integrity.unwrap_or(false) {
        result.recommend("Enable code integrity policies for enhanced security");
    }
    if !config.host_hardening.unwrap_or(false) {
        result.recommend("Implement host hardening with minimal Windows Server installation");
    }
    if !config.update_policy.unwrap_or(false) {
        result.recommend("Establish a security update policy for all cluster components");
    }
    if !config.network_isolation.unwrap_or(false) {
        result.recommend("Implement network isolation for different traffic types");
    }

    tracing::debug!(
        valid = result.is_valid(),
        warnings = result.warnings().len(),
        recommendations = result.recommendations().len(),
        "security configuration validated"
    );
    result
}
