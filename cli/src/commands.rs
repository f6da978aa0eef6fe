//! Command dispatch.
//!
//! Each command produces an [`Outcome`]: the rendered output plus enough
//! state for `main` to pick an exit code. Nothing here prints.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clusplan::{
    estimate_ha_requirements, estimate_storage_needs, validate_admin_account, validate_cidr,
    validate_ha_configuration, validate_ip_address, validate_network_configuration, validate_plan,
    validate_security_configuration, validate_service_account, validate_storage_configuration,
    validate_subnet_mask, Diagnostics, PlanConfig,
};
use serde_json::json;

use crate::args::{CheckCommand, Cli, Command, Domain, EstimateCommand};
use crate::config::{Config, OutputFormat, PolicyConfig};
use crate::document;
use crate::render::{self, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub valid: bool,
    pub has_warnings: bool,
}

impl Outcome {
    fn informational(output: String) -> Self {
        Self {
            output,
            valid: true,
            has_warnings: false,
        }
    }

    /// 0 when everything passed, 1 when the subject failed validation.
    pub fn exit_code(&self, policy: &PolicyConfig) -> u8 {
        if !self.valid || (policy.fail_on_warnings && self.has_warnings) {
            1
        } else {
            0
        }
    }
}

/// Output style for this run. Color is dropped when stdout is not a terminal.
pub fn style(cli: &Cli, config: &Config) -> Style {
    style_for(cli, config, std::io::stdout().is_terminal())
}

fn style_for(cli: &Cli, config: &Config, stdout_is_terminal: bool) -> Style {
    if cli.json || config.output.format == OutputFormat::Json {
        Style::Json
    } else {
        Style::Text {
            color: config.output.color && stdout_is_terminal,
        }
    }
}

pub fn run(cli: &Cli, config: &Config) -> Result<Outcome> {
    let style = style(cli, config);
    tracing::debug!(?style, "running command");

    match &cli.command {
        Command::Validate { plan, domain } => {
            let plan = document::load_plan(plan)?;
            validate(&plan, *domain, style)
        }
        Command::Account { account } => {
            diagnostics_outcome("account", &validate_service_account(account), style)
        }
        Command::Admin { username, password } => {
            diagnostics_outcome("admin", &validate_admin_account(username, password), style)
        }
        Command::Check(check) => Ok(check_address(check, style)),
        Command::Estimate(estimate) => run_estimate(estimate, style),
    }
}

fn validate(plan: &PlanConfig, domain: Domain, style: Style) -> Result<Outcome> {
    // A requested domain missing from the document is validated as empty so
    // the missing-field errors surface.
    let single = match domain {
        Domain::All => None,
        Domain::Network => Some(validate_network_configuration(
            &plan.network.clone().unwrap_or_default(),
        )),
        Domain::Storage => Some(validate_storage_configuration(
            &plan.storage.clone().unwrap_or_default(),
        )),
        Domain::Security => Some(validate_security_configuration(
            &plan.security.clone().unwrap_or_default(),
        )),
        Domain::Ha => Some(validate_ha_configuration(&plan.ha.clone().unwrap_or_default())),
    };

    if let Some(result) = single {
        let title = format!("{domain:?}").to_lowercase();
        return diagnostics_outcome(&title, &result, style);
    }

    let report = validate_plan(plan);
    let output = match style {
        Style::Json => render::json(&report).context("serializing plan report")?,
        Style::Text { color } => render::report_text(&report, color),
    };
    Ok(Outcome {
        output,
        valid: report.valid,
        has_warnings: report.has_warnings(),
    })
}

fn diagnostics_outcome(title: &str, result: &Diagnostics, style: Style) -> Result<Outcome> {
    let output = match style {
        Style::Json => render::json(result).context("serializing diagnostics")?,
        Style::Text { color } => render::diagnostics_text(title, result, color),
    };
    Ok(Outcome {
        output,
        valid: result.is_valid(),
        has_warnings: !result.warnings().is_empty(),
    })
}

fn check_address(check: &CheckCommand, style: Style) -> Outcome {
    let (value, normalized) = match check {
        CheckCommand::Ip { value } => (value, validate_ip_address(value).map(|ip| ip.to_string())),
        CheckCommand::Cidr { value } => (value, validate_cidr(value).map(|net| net.to_string())),
        CheckCommand::Mask { value } => (
            value,
            validate_subnet_mask(value).map(|prefix| format!("/{prefix}")),
        ),
    };
    let valid = normalized.is_ok();

    let output = match (style, normalized) {
        (Style::Json, Ok(normalized)) => {
            format!("{}\n", json!({ "value": value, "valid": true, "normalized": normalized }))
        }
        (Style::Json, Err(e)) => {
            format!("{}\n", json!({ "value": value, "valid": false, "error": e.to_string() }))
        }
        (Style::Text { .. }, Ok(normalized)) => format!("{value}: valid ({normalized})\n"),
        (Style::Text { .. }, Err(e)) => format!("{value}: {e}\n"),
    };

    Outcome {
        output,
        valid,
        has_warnings: false,
    }
}

fn run_estimate(estimate: &EstimateCommand, style: Style) -> Result<Outcome> {
    let output = match estimate {
        EstimateCommand::Storage { vms, avg_size_gb } => {
            let estimate = estimate_storage_needs(*vms, *avg_size_gb)?;
            match style {
                Style::Json => render::json(&estimate).context("serializing storage estimate")?,
                Style::Text { .. } => render::storage_estimate_text(&estimate),
            }
        }
        EstimateCommand::Ha { nodes } => {
            let estimate = estimate_ha_requirements(*nodes)?;
            match style {
                Style::Json => render::json(&estimate).context("serializing HA estimate")?,
                Style::Text { .. } => render::ha_estimate_text(&estimate),
            }
        }
    };
    Ok(Outcome::informational(output))
}
