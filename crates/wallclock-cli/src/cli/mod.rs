//! CLI for the wallclock time fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wallclock_core::config;

use commands::{run_check, run_endpoints, run_now, run_watch};

/// Top-level CLI for wallclock.
#[derive(Debug, Parser)]
#[command(name = "wallclock")]
#[command(about = "wallclock: remote time with retry, endpoint rotation, and local fallback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the time once and print the reading.
    Now,

    /// Poll the configured endpoints and print each reading until interrupted.
    Watch {
        /// Override the configured poll interval in seconds.
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// List the configured endpoints in rotation order.
    Endpoints,

    /// Probe a single endpoint URL once (no retry) and report the outcome.
    Check {
        /// Absolute URL of a time endpoint.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Now => run_now(&cfg).await?,
            CliCommand::Watch { interval } => run_watch(&cfg, interval).await?,
            CliCommand::Endpoints => run_endpoints(&cfg)?,
            CliCommand::Check { url } => run_check(&cfg, &url).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
