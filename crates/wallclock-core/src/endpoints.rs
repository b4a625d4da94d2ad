//! Ordered list of remote time-service URLs with a rotating cursor.
//!
//! The cursor only moves on transient-failure exhaustion (see the clock
//! state machine); a successful fetch leaves it where it is, so a healthy
//! endpoint keeps serving until it misbehaves.

use anyhow::{bail, Context, Result};
use url::Url;

/// Non-empty, ordered endpoint list plus a wrapping cursor.
#[derive(Debug, Clone)]
pub struct EndpointList {
    urls: Vec<String>,
    cursor: usize,
}

impl EndpointList {
    /// Builds a list from absolute URLs. Fails on an empty list or on a URL
    /// that does not parse.
    pub fn new(urls: Vec<String>) -> Result<Self> {
        if urls.is_empty() {
            bail!("endpoint list must not be empty");
        }
        for u in &urls {
            Url::parse(u).with_context(|| format!("invalid endpoint URL: {u}"))?;
        }
        Ok(Self { urls, cursor: 0 })
    }

    /// The endpoint the next fetch should target.
    pub fn current(&self) -> &str {
        &self.urls[self.cursor]
    }

    /// Advances the cursor to the next endpoint, wrapping around.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.urls.len();
        tracing::debug!(cursor = self.cursor, endpoint = self.current(), "rotated endpoint");
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Always false; constructed lists are non-empty.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}
