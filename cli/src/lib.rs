//! Command-line front end for the clusplan validation engine
//!
//! Provides:
//! - Plan document loading (JSON or TOML)
//! - Settings file handling
//! - Text and JSON rendering of diagnostics and estimates

pub mod args;
pub mod commands;
pub mod config;
pub mod document;
pub mod render;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use args::Cli;
pub use commands::{run, Outcome};
pub use config::Config;

/// Initialize tracing/logging with the given filter level
///
/// Logs go to stderr so they never mix with rendered results.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
