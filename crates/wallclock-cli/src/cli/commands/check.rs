//! `wallclock check <url>` – probe one endpoint and report the outcome.

use anyhow::Result;
use wallclock_core::config::WallclockConfig;
use wallclock_core::fetch;
use wallclock_core::retry::classify;

pub async fn run_check(cfg: &WallclockConfig, url: &str) -> Result<()> {
    let opts = cfg.fetch_options();
    let url_owned = url.to_string();
    let outcome =
        tokio::task::spawn_blocking(move || fetch::fetch_time(&url_owned, opts)).await?;

    match outcome {
        Ok(t) => println!("ok: {}", t.format("%H:%M:%S")),
        Err(e) => {
            let kind = classify(&e);
            println!("failed ({kind}): {e}");
        }
    }
    Ok(())
}
