use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::retry::RetryPolicy;
use crate::scheduler::SchedulerOptions;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay in seconds before the first retry (e.g. 0.5 = 500ms).
    pub initial_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_secs: 1.0,
            max_delay_secs: 10,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        // A hand-edited config can hold a negative, non-finite, or absurd
        // delay; substitute the built-in default instead of panicking.
        let initial_delay = Duration::try_from_secs_f64(self.initial_delay_secs)
            .unwrap_or_else(|_| {
                tracing::warn!(
                    initial_delay_secs = self.initial_delay_secs,
                    "unusable retry delay in config; using default"
                );
                RetryPolicy::default().initial_delay
            });
        RetryPolicy {
            max_retries: self.max_retries,
            initial_delay,
            max_delay: Duration::from_secs(self.max_delay_secs),
        }
    }
}

/// Global configuration loaded from `~/.config/wallclock/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallclockConfig {
    /// Remote time endpoints, tried in order with wrap-around rotation.
    pub endpoints: Vec<String>,
    /// Seconds between fetch ticks.
    pub poll_interval_secs: u64,
    /// Seconds a cached sample may stand in for a fresh remote value.
    pub staleness_secs: u64,
    /// TCP/TLS connect timeout per attempt, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout per attempt, in seconds.
    pub request_timeout_secs: u64,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for WallclockConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://worldtimeapi.org/api/timezone/Europe/London".to_string(),
                "https://timeapi.io/api/Time/current/zone?timeZone=Europe/London".to_string(),
            ],
            poll_interval_secs: 30,
            staleness_secs: 3600,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            retry: None,
        }
    }
}

impl WallclockConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn staleness(&self) -> Duration {
        Duration::from_secs(self.staleness_secs)
    }

    pub fn scheduler_options(&self) -> SchedulerOptions {
        SchedulerOptions {
            poll_interval: Duration::from_secs(self.poll_interval_secs.max(1)),
            fetch: self.fetch_options(),
            retry: self.retry_policy(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wallclock")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WallclockConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WallclockConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WallclockConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WallclockConfig::default();
        assert_eq!(cfg.endpoints.len(), 2);
        assert_eq!(cfg.poll_interval_secs, 30);
        assert_eq!(cfg.staleness_secs, 3600);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WallclockConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WallclockConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoints, cfg.endpoints);
        assert_eq!(parsed.poll_interval_secs, cfg.poll_interval_secs);
        assert_eq!(parsed.staleness_secs, cfg.staleness_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            endpoints = ["https://example.com/time"]
            poll_interval_secs = 60
            staleness_secs = 120
            connect_timeout_secs = 5
            request_timeout_secs = 15
        "#;
        let cfg: WallclockConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.endpoints, vec!["https://example.com/time".to_string()]);
        assert_eq!(cfg.poll_interval_secs, 60);
        assert_eq!(cfg.staleness_secs, 120);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_retry_section() {
        let toml = r#"
            endpoints = ["https://example.com/time"]
            poll_interval_secs = 30
            staleness_secs = 3600
            connect_timeout_secs = 10
            request_timeout_secs = 30

            [retry]
            max_retries = 5
            initial_delay_secs = 0.5
            max_delay_secs = 20
        "#;
        let cfg: WallclockConfig = toml::from_str(toml).unwrap();
        let retry = cfg.retry.as_ref().unwrap();
        assert_eq!(retry.max_retries, 5);
        assert!((retry.initial_delay_secs - 0.5).abs() < 1e-9);
        assert_eq!(retry.max_delay_secs, 20);

        let policy = cfg.retry_policy();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.initial_delay, Duration::from_millis(500));
        assert_eq!(policy.max_delay, Duration::from_secs(20));
    }

    #[test]
    fn unusable_retry_delays_fall_back_to_default() {
        for bad in [-1.0, f64::NAN, f64::INFINITY, 1e300] {
            let cfg = RetryConfig {
                max_retries: 2,
                initial_delay_secs: bad,
                max_delay_secs: 10,
            };
            let policy = cfg.to_policy();
            assert_eq!(policy.max_retries, 2);
            assert_eq!(policy.initial_delay, Duration::from_secs(1), "for {bad}");
        }
    }

    #[test]
    fn default_retry_policy_when_section_missing() {
        let cfg = WallclockConfig::default();
        let policy = cfg.retry_policy();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.initial_delay, Duration::from_secs(1));
        assert_eq!(policy.max_delay, Duration::from_secs(10));
    }
}
