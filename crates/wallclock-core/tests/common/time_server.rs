//! Minimal HTTP/1.1 server serving a fixed JSON time payload for
//! integration tests.
//!
//! Serves a single static body with a configurable status code. Request
//! contents are ignored beyond draining the request line and headers.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct TimeServerOptions {
    /// HTTP status code to answer with.
    pub status: u32,
    /// Body to serve (JSON for the happy path, garbage for parse tests).
    pub body: String,
}

impl Default for TimeServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            body: r#"{"datetime":"2024-01-01T12:00:00.000Z"}"#.to_string(),
        }
    }
}

/// Handle to a running server: its base URL and a served-request counter.
pub struct TimeServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TimeServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. The server runs until the
/// process exits.
pub fn start(opts: TimeServerOptions) -> TimeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let opts = opts.clone();
            thread::spawn(move || handle(stream, &opts));
        }
    });
    TimeServer {
        url: format!("http://127.0.0.1:{}/time", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, opts: &TimeServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    if matches!(stream.read(&mut buf), Ok(0) | Err(_)) {
        return;
    }
    let reason = match opts.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        reason,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}
