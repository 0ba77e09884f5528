//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use dispatch_relay::config::RelayConfig;
use dispatch_relay::http::HttpServer;

/// One request captured by the stub dispatch API.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CapturedDispatch {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl CapturedDispatch {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("captured body is not JSON")
    }
}

/// A stub dispatch API that records every request and answers a fixed status.
pub struct StubUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedDispatch>>>,
}

#[allow(dead_code)]
impl StubUpstream {
    /// Bind on an ephemeral port and start serving `status` for every request.
    pub async fn start(status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<CapturedDispatch>>> = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((mut socket, _)) => {
                        let captured = captured.clone();
                        tokio::spawn(async move {
                            if let Some(request) = read_request(&mut socket).await {
                                captured.lock().unwrap().push(request);
                            }
                            let response = format!(
                                "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                                status_line(status)
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedDispatch> {
        self.requests.lock().unwrap().clone()
    }
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        204 => "204 No Content",
        401 => "401 Unauthorized",
        404 => "404 Not Found",
        422 => "422 Unprocessable Entity",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    }
}

/// Read one HTTP/1.1 request (headers plus Content-Length body) off a socket.
async fn read_request(socket: &mut TcpStream) -> Option<CapturedDispatch> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&tmp[..n]);
        if let Some(pos) = find_subsequence(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        if buf.len() > 64 * 1024 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name, value));
        }
    }

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&tmp[..n]);
    }

    Some(CapturedDispatch {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// A relay config pointed at a stub upstream, with test credentials.
#[allow(dead_code)]
pub fn relay_config(api_base: String) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.github.token = "test-token".to_string();
    config.github.owner = "octocat".to_string();
    config.github.repo = "downloads".to_string();
    config.github.api_base = api_base;
    config
}

/// Spawn the relay on an ephemeral port and return its address.
#[allow(dead_code)]
pub async fn start_relay(config: RelayConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        HttpServer::new(config).run(listener).await.unwrap();
    });

    // Give the acceptor a moment to start polling.
    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}
