//! Security configuration subtree.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Distributed Key Management settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DkmSettings {
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Directory container holding the encryption keys.
    #[serde(default)]
    pub container_name: Option<String>,
}

impl DkmSettings {
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            enabled: Some(true),
            container_name: Some(container_name.into()),
        }
    }

    /// Container name, blank input treated as unset.
    pub fn container_name(&self) -> Option<&str> {
        self.container_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Value found under the `dkm` key.
///
/// Forms sometimes store a bare toggle or label instead of the settings
/// object; those are kept so validation can reject them explicitly. Any
/// other shape (numbers, arrays) lands in [`DkmEntry::Malformed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DkmEntry {
    Settings(DkmSettings),
    Flag(bool),
    Label(String),
    Malformed(Unrecognized),
}

/// Placeholder for a value whose content is discarded. Serializes as null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrecognized;

impl<'de> Deserialize<'de> for Unrecognized {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer).map(|_| Unrecognized)
    }
}

impl Serialize for Unrecognized {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl DkmEntry {
    pub fn settings(&self) -> Option<&DkmSettings> {
        match self {
            DkmEntry::Settings(settings) => Some(settings),
            DkmEntry::Flag(_) | DkmEntry::Label(_) | DkmEntry::Malformed(_) => None,
        }
    }

    /// Whether DKM is switched on in any of the accepted shapes.
    pub fn is_enabled(&self) -> bool {
        match self {
            DkmEntry::Settings(settings) => settings.enabled.unwrap_or(true),
            DkmEntry::Flag(flag) => *flag,
            DkmEntry::Label(label) => !label.trim().is_empty(),
            DkmEntry::Malformed(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    #[serde(default)]
    pub min_length: Option<u32>,
    #[serde(default)]
    pub complexity: Option<bool>,
    #[serde(default)]
    pub expiration_days: Option<u32>,
    #[serde(default)]
    pub history: Option<u32>,
}

/// Security subtree of a deployment plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub host_hardening: Option<bool>,
    #[serde(default)]
    pub network_isolation: Option<bool>,
    #[serde(default)]
    pub ipsec_migration: Option<bool>,
    #[serde(default)]
    pub smb_encryption: Option<bool>,
    #[serde(default)]
    pub dkm: Option<DkmEntry>,
    #[serde(default)]
    pub code_integrity: Option<bool>,
    #[serde(default)]
    pub update_policy: Option<bool>,
    #[serde(default)]
    pub password_policy: Option<PasswordPolicy>,
    /// True when at least one RBAC role is defined.
    #[serde(default)]
    pub roles: Option<bool>,
}
