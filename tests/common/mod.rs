//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mutual_relay::resilience::Pause;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// How the mock backend answers one request.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum Reply {
    /// Send a response with this status and body.
    Respond(u16, String),
    /// Read the request, then close the socket without answering.
    Drop,
    /// Read the request, then hold the socket open without answering.
    Hang,
    /// Declare a `Content-Length` of `declared` bytes, send only `body`, then
    /// close the socket.
    Truncated {
        status: u16,
        declared: usize,
        body: String,
    },
}

pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// Start a programmable mock backend on an ephemeral port.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(CapturedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        match f(request).await {
                            Reply::Respond(status, body) => {
                                write_response(&mut socket, status, body.len(), &body).await;
                            }
                            Reply::Truncated {
                                status,
                                declared,
                                body,
                            } => {
                                write_response(&mut socket, status, declared, &body).await;
                            }
                            Reply::Drop => drop(socket),
                            Reply::Hang => {
                                tokio::time::sleep(Duration::from_secs(60)).await;
                                drop(socket);
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that plays `replies` in order, repeating the last one,
/// and records every request it receives.
pub async fn start_scripted_backend(replies: Vec<Reply>) -> (SocketAddr, Captured) {
    assert!(!replies.is_empty());
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let replies = Arc::new(replies);
    let log = captured.clone();

    let addr = start_programmable_backend(move |request| {
        let replies = replies.clone();
        let log = log.clone();
        async move {
            let index = {
                let mut log = log.lock().unwrap();
                log.push(request);
                log.len() - 1
            };
            replies[index.min(replies.len() - 1)].clone()
        }
    })
    .await;

    (addr, captured)
}

/// Records backoff delays instead of sleeping.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RecordingPause {
    delays: Arc<Mutex<Vec<Duration>>>,
}

#[allow(dead_code)]
impl RecordingPause {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, delay: Duration) -> impl Future<Output = ()> + Send {
        self.delays.lock().unwrap().push(delay);
        std::future::ready(())
    }
}

async fn write_response(socket: &mut TcpStream, status: u16, content_length: usize, body: &str) {
    let response_str = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        content_length,
        body
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
    tokio::time::sleep(Duration::from_millis(10)).await;
}

async fn read_request(socket: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut start = lines.next()?.split_whitespace();
    let method = start.next()?.to_string();
    let path = start.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Some(CapturedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
