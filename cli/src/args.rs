//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Validate and size Hyper-V failover cluster deployment plans.
#[derive(Parser, Debug)]
#[command(name = "clusplan", version, about)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Settings file.
    #[arg(long, global = true, default_value = "clusplan.toml")]
    pub config: PathBuf,

    /// Print JSON instead of text, whatever the settings file says.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a plan document (JSON or TOML).
    Validate {
        plan: PathBuf,

        /// Restrict validation to one domain.
        #[arg(long, value_enum, default_value_t = Domain::All)]
        domain: Domain,
    },

    /// Check a service account name (DOMAIN\user or user@domain).
    Account { account: String },

    /// Check administrator credentials.
    Admin {
        username: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    /// Check a single address literal.
    #[command(subcommand)]
    Check(CheckCommand),

    /// Produce sizing estimates.
    #[command(subcommand)]
    Estimate(EstimateCommand),
}

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// IPv4 or IPv6 address.
    Ip { value: String },
    /// address/prefix notation.
    Cidr { value: String },
    /// Dotted subnet mask or prefix length.
    Mask { value: String },
}

#[derive(Subcommand, Debug)]
pub enum EstimateCommand {
    /// CSV and quorum sizes for a VM population.
    Storage {
        #[arg(long)]
        vms: u64,

        #[arg(long = "avg-size-gb")]
        avg_size_gb: u64,
    },
    /// Per-node hardware for a cluster.
    Ha {
        #[arg(long)]
        nodes: u32,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    All,
    Network,
    Storage,
    Security,
    Ha,
}
