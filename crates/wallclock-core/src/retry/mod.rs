//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, TLS handshake
//! failures) and exponential backoff decisions so that the fetch layer and
//! the scheduler share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::FetchError;
pub use policy::{backoff_delay, ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_sleep};
