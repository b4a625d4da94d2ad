//! Retry loop: run a closure until success or policy says stop.

use std::time::Duration;

use super::classify;
use super::error::FetchError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs a closure until it succeeds or the retry policy says to stop.
/// On a transient failure, sleeps for the backoff duration then tries again.
///
/// Sleeps block the calling thread; call from `spawn_blocking` when used
/// from async code.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, f: F) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    run_with_retry_sleep(policy, f, std::thread::sleep)
}

/// Like [`run_with_retry`] but with an injectable sleep, so tests can record
/// the backoff schedule instead of waiting it out.
pub fn run_with_retry_sleep<T, F, S>(
    policy: &RetryPolicy,
    mut f: F,
    mut sleep: S,
) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
    S: FnMut(Duration),
{
    let mut retry = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(retry, kind) {
                    RetryDecision::NoRetry => return Err(e),
                    RetryDecision::RetryAfter(d) => {
                        tracing::debug!(retry, delay_ms = d.as_millis() as u64, %e, "retrying fetch");
                        sleep(d);
                        retry += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout_policy() -> RetryPolicy {
        RetryPolicy::default()
    }

    #[test]
    fn succeeds_without_sleeping_on_first_try() {
        let mut slept = Vec::new();
        let r = run_with_retry_sleep(&timeout_policy(), || Ok::<_, FetchError>(42), |d| {
            slept.push(d)
        });
        assert_eq!(r.unwrap(), 42);
        assert!(slept.is_empty());
    }

    #[test]
    fn non_transient_error_propagates_without_retry() {
        let mut calls = 0u32;
        let mut slept = Vec::new();
        let r: Result<(), _> = run_with_retry_sleep(
            &timeout_policy(),
            || {
                calls += 1;
                Err(FetchError::Http(500))
            },
            |d| slept.push(d),
        );
        assert!(matches!(r, Err(FetchError::Http(500))));
        assert_eq!(calls, 1);
        assert!(slept.is_empty());
    }

    #[test]
    fn timeout_exhausts_retries_with_backoff_schedule() {
        // CURLE_OPERATION_TIMEDOUT
        let mut calls = 0u32;
        let mut slept = Vec::new();
        let r: Result<(), _> = run_with_retry_sleep(
            &timeout_policy(),
            || {
                calls += 1;
                Err(FetchError::Curl(curl::Error::new(28)))
            },
            |d| slept.push(d),
        );
        assert!(r.is_err());
        assert_eq!(calls, 4, "first attempt plus three retries");
        assert_eq!(
            slept,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
            ]
        );
    }

    #[test]
    fn parse_failure_is_not_retried() {
        let mut calls = 0u32;
        let r: Result<(), _> = run_with_retry_sleep(
            &timeout_policy(),
            || {
                calls += 1;
                Err(FetchError::Parse("bad".into()))
            },
            |_| {},
        );
        assert!(r.is_err());
        assert_eq!(calls, 1);
    }
}
