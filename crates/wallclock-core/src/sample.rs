//! Time samples and their provenance.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

/// Where a displayed time value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// Fresh value from a remote endpoint.
    Remote,
    /// Last good remote value, re-displayed inside the staleness window.
    Cached,
    /// Device clock; shown only when no trustworthy remote value exists.
    Local,
}

impl fmt::Display for TimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSource::Remote => write!(f, "remote"),
            TimeSource::Cached => write!(f, "cached"),
            TimeSource::Local => write!(f, "local"),
        }
    }
}

/// A fetched (or substituted) time value plus when and where we got it.
#[derive(Debug, Clone, Copy)]
pub struct TimeSample {
    /// The timestamp carried by the value itself.
    pub instant: NaiveDateTime,
    /// Provenance of the value.
    pub source: TimeSource,
    /// When the fetch that produced it completed (monotonic).
    pub fetched_at: Instant,
}

impl TimeSample {
    pub fn remote(instant: NaiveDateTime, fetched_at: Instant) -> Self {
        Self {
            instant,
            source: TimeSource::Remote,
            fetched_at,
        }
    }

    /// True while the sample may still stand in for a fresh remote value.
    pub fn is_fresh(&self, now: Instant, staleness: Duration) -> bool {
        now.duration_since(self.fetched_at) < staleness
    }
}

/// A display-ready reading handed to consumers. `Cached` and `Local`
/// readings carry their marker so an unverified value is never presented as
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReading {
    /// Time of day, `HH:MM:SS`.
    pub display: String,
    pub source: TimeSource,
}

impl TimeReading {
    pub fn new(instant: NaiveDateTime, source: TimeSource) -> Self {
        Self {
            display: instant.format("%H:%M:%S").to_string(),
            source,
        }
    }
}

impl fmt::Display for TimeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            TimeSource::Remote => write!(f, "{}", self.display),
            TimeSource::Cached => write!(f, "{} (cached)", self.display),
            TimeSource::Local => write!(f, "{} (local)", self.display),
        }
    }
}
