//! Periodic fetch scheduler.
//!
//! A single interval timer drives fetch ticks. Each tick runs the blocking
//! fetch in `spawn_blocking` and is awaited before the next tick is armed,
//! so fetches never overlap and the clock state keeps a single writer.
//! Readings are delivered over an mpsc channel; the loop stops when the
//! stop flag is set or the receiver goes away. An in-flight fetch is not
//! forcibly cancelled, its result is simply dropped with the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use tokio::sync::mpsc;

use crate::clock::ClockState;
use crate::fetch::{self, FetchOptions};
use crate::retry::RetryPolicy;
use crate::sample::TimeReading;

/// Knobs for the poll loop, normally derived from the config file.
#[derive(Debug, Clone, Copy)]
pub struct SchedulerOptions {
    /// Time between fetch ticks.
    pub poll_interval: Duration,
    pub fetch: FetchOptions,
    pub retry: RetryPolicy,
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(30),
            fetch: FetchOptions::default(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Runs one fetch cycle against the current endpoint and folds the outcome
/// into the clock state. Always yields a reading (remote, cached, or local).
pub async fn sample_once(
    state: &mut ClockState,
    fetch_opts: FetchOptions,
    policy: RetryPolicy,
) -> Result<TimeReading> {
    let url = state.current_endpoint().to_string();
    tracing::debug!(endpoint = %url, "fetching time");
    let outcome = tokio::task::spawn_blocking(move || {
        fetch::fetch_time_with_retry(&url, fetch_opts, &policy)
    })
    .await
    .context("fetch task join")?;

    Ok(state.observe(outcome, Instant::now(), Local::now().naive_local()))
}

/// Drives periodic fetch ticks until `stop` is set or the receiver is
/// dropped. The first tick fires immediately.
pub async fn run_clock_loop(
    mut state: ClockState,
    opts: SchedulerOptions,
    tx: mpsc::Sender<TimeReading>,
    stop: Arc<AtomicBool>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(opts.poll_interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if stop.load(Ordering::Relaxed) {
            tracing::debug!("clock loop stopped");
            return Ok(());
        }
        let reading = sample_once(&mut state, opts.fetch, opts.retry).await?;
        if tx.send(reading).await.is_err() {
            tracing::debug!("reading receiver dropped; stopping clock loop");
            return Ok(());
        }
    }
}
