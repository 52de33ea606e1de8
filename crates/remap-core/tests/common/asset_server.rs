//! Minimal HTTP/1.1 server answering HEAD and GET for a fixed set of paths.
//!
//! Known paths get 200, everything else 404. Can reject HEAD with 405 (like
//! some CDNs do), answer 503 to the first N requests to exercise retries, and
//! redirect selected paths with 301.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct AssetServerOptions {
    /// If false, HEAD returns 405 so the client has to fall back to GET.
    pub head_allowed: bool,
    /// Number of initial requests answered with 503 regardless of path.
    pub unavailable_first: usize,
    /// `(from, to)` path pairs answered with a 301 pointing at `to`.
    pub redirects: &'static [(&'static str, &'static str)],
}

impl Default for AssetServerOptions {
    fn default() -> Self {
        Self {
            head_allowed: true,
            unavailable_first: 0,
            redirects: &[],
        }
    }
}

/// Handle to a running server.
pub struct AssetServer {
    /// Base URL ending in `/`, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl AssetServer {
    /// Total requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `paths` (e.g. "/uploads/a.jpg").
/// The server runs until the process exits.
pub fn start(paths: &[&str]) -> AssetServer {
    start_with_options(paths, AssetServerOptions::default())
}

pub fn start_with_options(paths: &[&str], opts: AssetServerOptions) -> AssetServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let known: Arc<HashSet<String>> = Arc::new(paths.iter().map(|p| p.to_string()).collect());
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let known = Arc::clone(&known);
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &known, &counter, opts));
        }
    });
    AssetServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    known: &HashSet<String>,
    counter: &AtomicUsize,
    opts: AssetServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    let seen = counter.fetch_add(1, Ordering::SeqCst);
    let redirect = opts
        .redirects
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to);
    let status = if seen < opts.unavailable_first {
        "503 Service Unavailable"
    } else if method.eq_ignore_ascii_case("HEAD") && !opts.head_allowed {
        "405 Method Not Allowed"
    } else if !method.eq_ignore_ascii_case("HEAD") && !method.eq_ignore_ascii_case("GET") {
        "405 Method Not Allowed"
    } else if redirect.is_some() {
        "301 Moved Permanently"
    } else if known.contains(path) {
        "200 OK"
    } else {
        "404 Not Found"
    };

    let body: &[u8] = if method.eq_ignore_ascii_case("GET") && status.starts_with("200") {
        b"asset"
    } else {
        b""
    };
    let location = match redirect {
        Some(to) if status.starts_with("301") => format!("Location: {}\r\n", to),
        _ => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        location,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
