//! Minimal HTTP/1.1 server standing in for the format-lookup endpoint.
//!
//! Answers every request with a fixed status and body and records what it
//! received so tests can assert on the request the client sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FetchServerOptions {
    /// Status line after "HTTP/1.1 ", e.g. "200 OK".
    pub status: &'static str,
    pub body: String,
    /// Sleep before answering (simulates a slow endpoint).
    pub delay: Option<Duration>,
}

impl Default for FetchServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            body: "{\"formats\": []}".to_string(),
            delay: None,
        }
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct FetchServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FetchServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Returns its `/fetch` endpoint URL.
/// The server runs until the process exits.
pub fn start(opts: FetchServerOptions) -> FetchServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &opts, &recorded));
        }
    });
    FetchServer {
        url: format!("http://127.0.0.1:{}/fetch", port),
        requests,
    }
}

/// A URL on which nothing is listening.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/fetch", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &FetchServerOptions,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    // Read headers, then as much body as Content-Length announces.
    let header_end = loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = header_value(&head, "content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }

    let mut request_line = head.lines().next().unwrap_or("").split_whitespace();
    let request = RecordedRequest {
        method: request_line.next().unwrap_or("").to_string(),
        path: request_line.next().unwrap_or("").to_string(),
        content_type: header_value(&head, "content-type"),
        body: String::from_utf8_lossy(&data[body_start.min(data.len())..]).to_string(),
    };
    recorded.lock().unwrap().push(request);

    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        opts.status,
        opts.body.len(),
        opts.body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim()
            .eq_ignore_ascii_case(name)
            .then(|| v.trim().to_string())
    })
}
