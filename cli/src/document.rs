//! Plan document loading.
//!
//! `.json` files are read as JSON. Anything else is treated as TOML.

use std::path::{Path, PathBuf};

use clusplan::PlanConfig;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read plan '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON plan: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML plan: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse plan text in the given format.
pub fn parse_plan(content: &str, format: DocumentFormat) -> Result<PlanConfig, DocumentError> {
    let plan = match format {
        DocumentFormat::Json => serde_json::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(plan)
}

/// Read and parse a plan document from disk.
pub fn load_plan(path: &Path) -> Result<PlanConfig, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DocumentFormat::from_path(path);
    tracing::debug!(?path, ?format, "loading plan");
    parse_plan(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("plan.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("PLAN.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("plan.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("plan")), DocumentFormat::Toml);
    }

    #[test]
    fn test_parse_toml_plan() {
        let content = r#"
            [hardware]
            host_count = 2

            [network.management_network]
            cidr = "10.0.0.0/24"
            vlan = 10

            [[network.adapters]]
            server = "HV01"
            network_type = "Management"
            speed = "10 Gbps"

            [storage]
            storage_type = "SMB"

            [[storage.csv_volumes]]
            size_gb = 500

            [ha.cluster]
            witness_type = "CloudWitness"
        "#;
        let plan = parse_plan(content, DocumentFormat::Toml).unwrap();
        let network = plan.network.unwrap();
        assert_eq!(network.management_network.unwrap().vlan, Some(10));
        assert_eq!(network.adapters.len(), 1);
        assert_eq!(plan.storage.unwrap().csv_volumes.unwrap().len(), 1);
        assert_eq!(plan.hardware.unwrap().host_count, Some(2));
        assert!(plan.ha.unwrap().enabled.is_none());
        assert!(plan.security.is_none());
    }

    #[test]
    fn test_parse_json_plan() {
        let plan = parse_plan(
            r#"{ "security": { "dkm": { "container_name": "CN=DKM" } } }"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert!(plan.security.unwrap().dkm.is_some());
        assert!(plan.network.is_none());
    }

    #[test]
    fn test_parse_errors_name_the_format() {
        let err = parse_plan("{", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON plan"));

        let err = parse_plan("[network", DocumentFormat::Toml).unwrap_err();
        assert!(err.to_string().starts_with("Invalid TOML plan"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_plan(Path::new("no/such/plan.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }
}
