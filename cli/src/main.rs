//! clusplan: validate and size Hyper-V failover cluster deployment plans
//!
//! Settings are loaded from clusplan.toml in the working directory unless
//! `--config` points elsewhere.
//!
//! Exit codes: 0 passed, 1 failed validation, 2 usage or I/O error.

use std::process::ExitCode;

use clap::Parser;
use clusplan_cli::{init_tracing, run, Cli, Config};
use text_colorizer::Colorize;

const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red(), e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<u8> {
    let config = Config::load(&cli.config)?;

    init_tracing(&config.logging.level);
    tracing::debug!(config = ?cli.config, "settings loaded");

    let outcome = run(cli, &config)?;
    print!("{}", outcome.output);
    Ok(outcome.exit_code(&config.policy))
}
