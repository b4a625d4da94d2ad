//! Clock state: endpoint cursor, last good sample, and the fallback chain.
//!
//! All mutation happens through [`ClockState`], and the scheduler holds the
//! only reference, so the cursor and cache have a single writer. The
//! transition itself is pure in its inputs (`now`, `local_now`), which keeps
//! the fallback chain testable without a network or a real clock.

use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use crate::endpoints::EndpointList;
use crate::retry::{classify, FetchError};
use crate::sample::{TimeReading, TimeSample, TimeSource};

/// Default staleness window for the cached sample.
pub const DEFAULT_STALENESS: Duration = Duration::from_secs(3600);

/// Mutable state for the rotating-endpoint clock.
#[derive(Debug, Clone)]
pub struct ClockState {
    endpoints: EndpointList,
    last_good: Option<TimeSample>,
    staleness: Duration,
}

impl ClockState {
    pub fn new(endpoints: EndpointList, staleness: Duration) -> Self {
        Self {
            endpoints,
            last_good: None,
            staleness,
        }
    }

    /// The endpoint the next fetch should target.
    pub fn current_endpoint(&self) -> &str {
        self.endpoints.current()
    }

    pub fn endpoints(&self) -> &EndpointList {
        &self.endpoints
    }

    /// Mutable access for callers that manage the cursor themselves
    /// (tests, probes). Normal rotation happens inside [`observe`].
    ///
    /// [`observe`]: ClockState::observe
    pub fn endpoints_mut(&mut self) -> &mut EndpointList {
        &mut self.endpoints
    }

    pub fn last_good(&self) -> Option<&TimeSample> {
        self.last_good.as_ref()
    }

    /// Applies the outcome of one fetch cycle and produces the reading to
    /// display. Always returns some time value:
    ///
    /// - success: cache and show the remote timestamp;
    /// - failure after exhausted transient retries: rotate the endpoint
    ///   cursor, then fall back;
    /// - any failure: show the cached sample while it is inside the
    ///   staleness window, otherwise the local clock, marked as such.
    pub fn observe(
        &mut self,
        outcome: Result<NaiveDateTime, FetchError>,
        now: Instant,
        local_now: NaiveDateTime,
    ) -> TimeReading {
        match outcome {
            Ok(instant) => {
                self.last_good = Some(TimeSample::remote(instant, now));
                TimeReading::new(instant, TimeSource::Remote)
            }
            Err(e) => {
                let kind = classify(&e);
                if kind.is_transient() {
                    tracing::warn!(endpoint = self.endpoints.current(), %e, "endpoint unresponsive, rotating");
                    self.endpoints.advance();
                } else {
                    tracing::warn!(endpoint = self.endpoints.current(), %e, "time fetch failed");
                }
                self.fallback_reading(now, local_now)
            }
        }
    }

    fn fallback_reading(&self, now: Instant, local_now: NaiveDateTime) -> TimeReading {
        match &self.last_good {
            Some(sample) if sample.is_fresh(now, self.staleness) => {
                TimeReading::new(sample.instant, TimeSource::Cached)
            }
            _ => TimeReading::new(local_now, TimeSource::Local),
        }
    }
}
