//! In-process HTTP service stub for end-to-end probe runs.
//!
//! Listens on an ephemeral local port, serves scripted responses in
//! order, and records every request it receives. Each response carries
//! `Connection: close`, so every check opens a fresh connection and the
//! accept loop stays single-threaded.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

/// One scripted HTTP response.
pub struct CannedResponse {
    status: u16,
    reason: &'static str,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    /// A JSON response with the given status line.
    pub fn json(status: u16, reason: &'static str, body: &serde_json::Value) -> Self {
        Self {
            status,
            reason,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// A plain-text response with the given status line.
    pub fn text(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

/// What the service saw on the wire for one request.
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// A scripted HTTP service running on a background thread.
pub struct TestService {
    base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl TestService {
    /// Spawns the service; it answers one connection per scripted
    /// response, then stops accepting.
    pub fn spawn(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let base_url = format!("http://{addr}");
        let handle = std::thread::spawn(move || serve(&listener, responses));

        Self { base_url, handle }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Waits for the service to drain its script and returns the
    /// requests it recorded.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("test service thread")
    }
}

fn serve(listener: &TcpListener, responses: Vec<CannedResponse>) -> Vec<RecordedRequest> {
    let mut recorded = Vec::new();

    for response in responses {
        let Ok((stream, _)) = listener.accept() else {
            break;
        };
        match handle_connection(stream, &response) {
            Ok(request) => recorded.push(request),
            Err(_) => break,
        }
    }

    recorded
}

fn handle_connection(
    stream: TcpStream,
    response: &CannedResponse,
) -> std::io::Result<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body)?;
    }

    let payload = response.body.as_bytes();
    let mut stream = reader.into_inner();
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.content_type,
        payload.len()
    )?;
    stream.write_all(payload)?;
    stream.flush()?;

    Ok(RecordedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
