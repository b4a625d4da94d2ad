//! Classify curl errors and HTTP statuses into retry policy error kinds.

use super::error::FetchError;
use super::policy::ErrorKind;

/// Classify an HTTP status code. Statuses are never retried here; the
/// endpoints either answer or they don't, and a 4xx/5xx from a time API is
/// not a transient condition worth hammering.
pub fn classify_http_status(code: u32) -> ErrorKind {
    if (200..300).contains(&code) {
        ErrorKind::Other
    } else {
        ErrorKind::Http(code as u16)
    }
}

/// Classify a curl error. Timeouts and TLS handshake failures are transient;
/// DNS and connection-level failures are surfaced immediately.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_ssl_connect_error() {
        return ErrorKind::TlsHandshake;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a fetch error into an ErrorKind.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
        FetchError::Http(code) => classify_http_status(*code),
        FetchError::Parse(_) => ErrorKind::Parse,
    }
}
