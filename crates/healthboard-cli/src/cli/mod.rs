//! CLI for the healthboard status viewer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use healthboard_core::config;

use commands::{run_base_url, run_check, run_show};

/// Top-level CLI for the healthboard status viewer.
#[derive(Debug, Parser)]
#[command(name = "healthboard")]
#[command(about = "healthboard: API base-URL resolution and health status viewer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render the System Health status view.
    Show {
        /// Emit the view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved API base URL.
    BaseUrl {
        /// Also print which source supplied the value (primary variable, legacy alias, or built-in default).
        #[arg(long)]
        explain: bool,
    },

    /// Probe the deployment's health endpoint and print the report.
    Check {
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Override the endpoint path from config.toml (e.g. "/api/health/").
        #[arg(long, value_name = "PATH")]
        path: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Show { json } => run_show(json)?,
            CliCommand::BaseUrl { explain } => run_base_url(explain)?,
            CliCommand::Check { json, path } => run_check(&cfg, json, path.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
