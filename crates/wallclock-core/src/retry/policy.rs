use std::time::Duration;

/// High-level classification of an error for retry purposes.
///
/// Only `Timeout` and `TlsHandshake` are transient: they are retried within
/// one endpoint and, once exhausted, rotate the endpoint cursor. Everything
/// else propagates to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// TLS handshake with the server failed.
    TlsHandshake,
    /// Network-level failure (DNS, connection refused/reset). Not retried.
    Connection,
    /// HTTP response with a non-2xx status. Not retried.
    Http(u16),
    /// Response body did not contain a parseable timestamp. Not retried.
    Parse,
    /// Any other error.
    Other,
}

impl ErrorKind {
    /// True for errors that are expected to resolve on retry.
    pub fn is_transient(self) -> bool {
        matches!(self, ErrorKind::Timeout | ErrorKind::TlsHandshake)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::TlsHandshake => write!(f, "tls-handshake"),
            ErrorKind::Connection => write!(f, "connection"),
            ErrorKind::Http(code) => write!(f, "http {code}"),
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Other => write!(f, "other"),
        }
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy with a delay cap and no jitter.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each subsequent retry.
    pub initial_delay: Duration,
    /// Upper bound on the backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }
}

/// Delay before the `retry`-th retry (1-based): `initial * 2^(retry-1)`,
/// capped at `max_delay`. Pure so the schedule is testable without sleeping.
pub fn backoff_delay(policy: &RetryPolicy, retry: u32) -> Duration {
    let exp = 1u32 << retry.saturating_sub(1).min(20);
    let raw = policy.initial_delay.saturating_mul(exp);
    raw.min(policy.max_delay)
}

impl RetryPolicy {
    /// Decide whether to retry after the `retry`-th failure (1-based).
    pub fn decide(&self, retry: u32, kind: ErrorKind) -> RetryDecision {
        if retry > self.max_retries || !kind.is_transient() {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(backoff_delay(self, retry))
    }
}
