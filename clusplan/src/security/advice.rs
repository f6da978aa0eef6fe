//! Structured remediation guidance for disabled security controls.

use core::fmt;

use serde::Serialize;

use super::types::SecurityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Impact {
    High,
    Medium,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::High => write!(f, "High"),
            Impact::Medium => write!(f, "Medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityRecommendation {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub implementation: &'static str,
}

const HOST_HARDENING: SecurityRecommendation = SecurityRecommendation {
    category: "Host Security",
    title: "Implement host hardening",
    description: "Use minimal Windows Server installation to reduce attack surface.",
    impact: Impact::High,
    implementation: "Install only required roles and features. Use security templates.",
};

const NETWORK_ISOLATION: SecurityRecommendation = SecurityRecommendation {
    category: "Network Security",
    title: "Implement network isolation",
    description: "Separate networks for different traffic types.",
    impact: Impact::High,
    implementation: "Use VLANs or physical separation for management, VM, and migration traffic.",
};

const IPSEC_MIGRATION: SecurityRecommendation = SecurityRecommendation {
    category: "Network Security",
    title: "Enable IPsec for Live Migration",
    description: "Encrypt live migration traffic to protect VM data in transit.",
    impact: Impact::Medium,
    implementation: "Configure IPsec on the live migration network interfaces.",
};

const SMB_ENCRYPTION: SecurityRecommendation = SecurityRecommendation {
    category: "Data Security",
    title: "Enable SMB 3.0 encryption",
    description: "Encrypt SMB traffic for end-to-end data protection.",
    impact: Impact::Medium,
    implementation: "Configure SMB encryption on all file shares used by the cluster.",
};

const DKM: SecurityRecommendation = SecurityRecommendation {
    category: "Data Security",
    title: "Configure Distributed Key Management",
    description: "Securely store encryption keys in Active Directory.",
    impact: Impact::High,
    implementation: "Set up DKM container in Active Directory and configure VMM to use it.",
};

const RBAC: SecurityRecommendation = SecurityRecommendation {
    category: "Access Control",
    title: "Implement role-based access control",
    description: "Restrict access based on job responsibilities.",
    impact: Impact::High,
    implementation: "Define and assign appropriate VMM roles for different administrators.",
};

const CODE_INTEGRITY: SecurityRecommendation = SecurityRecommendation {
    category: "System Integrity",
    title: "Enable code integrity policies",
    description: "Prevent unauthorized code execution.",
    impact: Impact::Medium,
    implementation: "Configure code integrity policies on all hosts.",
};

const UPDATE_POLICY: SecurityRecommendation = SecurityRecommendation {
    category: "System Integrity",
    title: "Establish update policy",
    description: "Keep systems updated with security patches.",
    impact: Impact::High,
    implementation: "Define and implement a regular patching schedule for all components.",
};

/// One entry per disabled control, grouped host, network, data, access, integrity.
pub fn security_recommendations(config: &SecurityConfig) -> Vec<SecurityRecommendation> {
    let dkm_enabled = config.dkm.as_ref().is_some_and(|dkm| dkm.is_enabled());

    [
        (config.host_hardening, HOST_HARDENING),
        (config.network_isolation, NETWORK_ISOLATION),
        (config.ipsec_migration, IPSEC_MIGRATION),
        (config.smb_encryption, SMB_ENCRYPTION),
        (Some(dkm_enabled), DKM),
        (config.roles, RBAC),
        (config.code_integrity, CODE_INTEGRITY),
        (config.update_policy, UPDATE_POLICY),
    ]
    .into_iter()
    .filter(|(enabled, _)| !enabled.unwrap_or(false))
    .map(|(_, recommendation)| recommendation)
    .collect()
}
