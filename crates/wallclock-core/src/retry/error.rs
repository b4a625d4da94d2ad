//! Fetch error type for retry classification.

use thiserror::Error;

/// Error returned by a single time fetch (curl failure, HTTP error, or an
/// unparseable body). Kept structured so we can classify and decide retries
/// before converting to anyhow at the application seam.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, TLS, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body held no timestamp in a recognized shape.
    #[error("unparseable time payload: {0}")]
    Parse(String),
}
