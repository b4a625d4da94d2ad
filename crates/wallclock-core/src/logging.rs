//! Logging setup.
//!
//! The `watch` loop can run for hours, so log lines go to an append-only
//! file in the XDG state dir rather than mixing with the readings on
//! stdout. If the state dir cannot be opened, logs land on stderr instead
//! of aborting the CLI.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Where log lines go: `~/.local/state/wallclock/wallclock.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let state_dir = xdg::BaseDirectories::with_prefix("wallclock")?.get_state_home();
    Ok(state_dir.join("wallclock.log"))
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,wallclock=debug"))
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging. Call once, before any spans or events.
///
/// Writes to the state-dir log file when it can be opened, serialized
/// through a mutex so loop ticks and command output never interleave;
/// otherwise logs go to stderr.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
            tracing::info!("logging to {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({err:#}); logging to stderr");
        }
    }
}
