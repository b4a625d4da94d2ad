//! `wallclock endpoints` – list configured endpoints in rotation order.

use anyhow::Result;
use wallclock_core::config::WallclockConfig;
use wallclock_core::endpoints::EndpointList;

pub fn run_endpoints(cfg: &WallclockConfig) -> Result<()> {
    let endpoints = EndpointList::new(cfg.endpoints.clone())?;
    println!("{:<4} {}", "POS", "URL");
    for (i, url) in endpoints.iter().enumerate() {
        println!("{:<4} {}", i, url);
    }
    Ok(())
}
