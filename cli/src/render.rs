//! Text and JSON rendering of results.

use std::fmt::Write;

use clusplan::{Diagnostics, HaEstimate, PlanReport, Severity, StorageEstimate};
use serde::Serialize;
use text_colorizer::Colorize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Text { color: bool },
    Json,
}

fn severity_label(severity: Severity, color: bool) -> String {
    let label = severity.to_string();
    if !color {
        return label;
    }
    match severity {
        Severity::Error => label.red().to_string(),
        Severity::Warning => label.yellow().to_string(),
        Severity::Recommendation => label.blue().to_string(),
    }
}

fn verdict(valid: bool, color: bool) -> String {
    match (valid, color) {
        (true, true) => "valid".green().to_string(),
        (false, true) => "invalid".red().to_string(),
        (true, false) => "valid".to_string(),
        (false, false) => "invalid".to_string(),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// One heading line, then every finding indented beneath it.
pub fn diagnostics_text(title: &str, result: &Diagnostics, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{title}: {} ({}, {}, {})",
        verdict(result.is_valid(), color),
        plural(result.errors().len(), "error"),
        plural(result.warnings().len(), "warning"),
        plural(result.recommendations().len(), "recommendation"),
    );
    for (severity, message) in result.iter() {
        let _ = writeln!(out, "  {}: {message}", severity_label(severity, color));
    }
    out
}

pub fn report_text(report: &PlanReport, color: bool) -> String {
    let mut out = String::new();
    for (label, result) in report.sections() {
        out.push_str(&diagnostics_text(label, result, color));
    }
    let _ = writeln!(out, "plan: {}", verdict(report.valid, color));
    out
}

pub fn storage_estimate_text(estimate: &StorageEstimate) -> String {
    let mut out = String::new();
    for line in &estimate.text {
        let _ = writeln!(out, "{line}");
    }
    for volume in &estimate.csv_volumes {
        let _ = writeln!(
            out,
            "  {:<16} {:>8} GB",
            volume.purpose.as_deref().unwrap_or("-"),
            volume.size_gb.unwrap_or_default()
        );
    }
    out
}

pub fn ha_estimate_text(estimate: &HaEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Servers:");
    for server in &estimate.servers {
        let _ = writeln!(
            out,
            "  {:<8} {:>3} cores {:>4} GB RAM {:>4} GB OS disk {} NICs",
            server.name, server.cpu_cores, server.memory_gb, server.os_disk_gb, server.network_adapters
        );
    }

    let storage = &estimate.storage;
    let _ = writeln!(
        out,
        "Storage: {} GB quorum ({} witness), MPIO {}",
        storage.quorum_disk_gb,
        storage.witness_type,
        if storage.mpio_required { "required" } else { "optional" }
    );
    for volume in &storage.csv_volumes {
        let _ = writeln!(out, "  {} {} GB ({})", volume.name, volume.size_gb, volume.purpose);
    }

    let network = &estimate.network;
    let _ = writeln!(out, "Network:");
    for (name, link) in [
        ("management", &network.management_network),
        ("cluster", &network.cluster_network),
        ("live migration", &network.live_migration_network),
        ("vm", &network.vm_network),
    ] {
        let _ = writeln!(
            out,
            "  {name}: {}{}",
            link.bandwidth,
            if link.redundant { ", redundant" } else { "" }
        );
    }

    let _ = writeln!(out, "Recommendations:");
    for recommendation in &estimate.recommendations {
        let _ = writeln!(out, "  - {recommendation}");
    }
    out
}

pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|mut text| {
        text.push('\n');
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusplan::{estimate_ha_requirements, estimate_storage_needs, validate_service_account};

    #[test]
    fn test_plain_diagnostics() {
        let result = validate_service_account("svc_vmm");
        let text = diagnostics_text("account", &result, false);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("account: invalid (1 error, 0 warnings, 2 recommendations)")
        );
        assert!(lines.next().unwrap().starts_with("  error: "));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_colored_labels_wrap_plain_text() {
        let result = validate_service_account("svc_vmm");
        let text = diagnostics_text("account", &result, true);
        assert!(text.contains("invalid"));
        assert!(text.contains("Service account should be in"));
    }

    #[test]
    fn test_storage_estimate_text() {
        let estimate = estimate_storage_needs(20, 100).unwrap();
        let text = storage_estimate_text(&estimate);
        assert!(text.contains("VM Storage 2"));
        assert!(text.contains("480 GB"));
    }

    #[test]
    fn test_ha_estimate_text() {
        let estimate = estimate_ha_requirements(2).unwrap();
        let text = ha_estimate_text(&estimate);
        assert!(text.contains("Node2"));
        assert!(text.contains("live migration: 10 Gbps, redundant"));
        assert_eq!(text.matches("  - ").count(), 7);
    }

    #[test]
    fn test_json_is_newline_terminated() {
        let result = validate_service_account("CONTOSO\\svc_vmm");
        let text = json(&result).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["valid"], true);
    }
}
