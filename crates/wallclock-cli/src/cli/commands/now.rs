//! `wallclock now` – run one fetch cycle and print the reading.

use anyhow::Result;
use wallclock_core::clock::ClockState;
use wallclock_core::config::WallclockConfig;
use wallclock_core::endpoints::EndpointList;
use wallclock_core::scheduler;

pub async fn run_now(cfg: &WallclockConfig) -> Result<()> {
    let endpoints = EndpointList::new(cfg.endpoints.clone())?;
    let mut state = ClockState::new(endpoints, cfg.staleness());
    let reading =
        scheduler::sample_once(&mut state, cfg.fetch_options(), cfg.retry_policy()).await?;
    println!("{reading}");
    Ok(())
}
