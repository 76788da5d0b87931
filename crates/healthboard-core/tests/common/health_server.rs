//! Minimal HTTP/1.1 server serving a fixed health response for integration
//! tests. Responds to any path with the configured status and body.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct HealthServerOptions {
    /// HTTP status code for every response.
    pub status: u16,
    /// Response body (usually JSON).
    pub body: String,
    /// Content-Type header value.
    pub content_type: &'static str,
}

impl Default for HealthServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            body: r#"{"status": "healthy", "database": "healthy", "cache": "healthy"}"#
                .to_string(),
            content_type: "application/json",
        }
    }
}

/// Starts a server in a background thread. Returns the base URL with no
/// trailing slash (e.g. "http://127.0.0.1:12345"). The server runs until
/// the process exits.
pub fn start(opts: HealthServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &HealthServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let reason = match opts.status {
        200 => "OK",
        503 => "Service Unavailable",
        _ => "Response",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        reason,
        opts.content_type,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}
