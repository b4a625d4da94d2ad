//! HTTP fetch of a remote time endpoint.
//!
//! Uses the curl crate (libcurl) to GET a configured absolute URL and parse
//! the JSON body into a timestamp. Blocking; the scheduler drives this from
//! `spawn_blocking`.

mod parse;

pub use parse::parse_time_body;

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::retry::{run_with_retry, FetchError, RetryPolicy};

/// Connection and request timeouts for one fetch attempt.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Performs one GET against `url` and parses the body into a timestamp.
///
/// Runs in the current thread; call from `spawn_blocking` if used from
/// async code.
pub fn fetch_time(url: &str, opts: FetchOptions) -> Result<NaiveDateTime, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.accept_encoding("")?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.request_timeout)?;

    let mut list = curl::easy::List::new();
    list.append("Accept: application/json")?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    let text = String::from_utf8(body)
        .map_err(|_| FetchError::Parse("response body is not UTF-8".to_string()))?;
    parse_time_body(&text)
}

/// Fetch with the retry policy applied: transient failures (timeout, TLS
/// handshake) are retried with backoff, everything else propagates unchanged.
pub fn fetch_time_with_retry(
    url: &str,
    opts: FetchOptions,
    policy: &RetryPolicy,
) -> Result<NaiveDateTime, FetchError> {
    run_with_retry(policy, || fetch_time(url, opts))
}
