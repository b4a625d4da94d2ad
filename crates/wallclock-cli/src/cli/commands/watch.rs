//! `wallclock watch` – poll the endpoints and print each reading.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use wallclock_core::clock::ClockState;
use wallclock_core::config::WallclockConfig;
use wallclock_core::endpoints::EndpointList;
use wallclock_core::sample::TimeReading;
use wallclock_core::scheduler;

pub async fn run_watch(cfg: &WallclockConfig, interval_override: Option<u64>) -> Result<()> {
    let endpoints = EndpointList::new(cfg.endpoints.clone())?;
    let state = ClockState::new(endpoints, cfg.staleness());
    let mut opts = cfg.scheduler_options();
    if let Some(secs) = interval_override {
        opts.poll_interval = Duration::from_secs(secs.max(1));
    }
    tracing::info!(interval_secs = opts.poll_interval.as_secs(), "starting watch loop");

    let (tx, mut rx) = tokio::sync::mpsc::channel::<TimeReading>(16);
    let stop = Arc::new(AtomicBool::new(false));
    let loop_handle = tokio::spawn(scheduler::run_clock_loop(
        state,
        opts,
        tx,
        Arc::clone(&stop),
    ));

    loop {
        tokio::select! {
            reading = rx.recv() => {
                match reading {
                    Some(r) => println!("{r}"),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted; stopping watch loop");
                stop.store(true, Ordering::Relaxed);
                break;
            }
        }
    }

    // Don't wait out a 30s tick after ctrl-c; a fetch already in flight
    // finishes on the blocking pool and its result is dropped.
    loop_handle.abort();
    match loop_handle.await {
        Ok(res) => res?,
        Err(e) if e.is_cancelled() => {}
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
