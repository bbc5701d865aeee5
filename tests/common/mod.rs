//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use availability_monitor::config::EndpointConfig;
use availability_monitor::http::{ProbeResponse, Transport, TransportError};
use availability_monitor::{Endpoint, ReqwestTransport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// How the mock backend answers one path.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub status: u16,
    /// Wait before sending the response head.
    pub delay: Duration,
    /// Wait between the head and the body.
    pub body_delay: Duration,
}

impl Reply {
    pub fn new(status: u16, delay_ms: u64) -> Self {
        Self {
            status,
            delay: Duration::from_millis(delay_ms),
            body_delay: Duration::ZERO,
        }
    }

    /// Head sent at once, body held back for `body_delay_ms`.
    pub fn slow_body(status: u16, body_delay_ms: u64) -> Self {
        Self {
            status,
            delay: Duration::ZERO,
            body_delay: Duration::from_millis(body_delay_ms),
        }
    }
}

const BODY: &str = "hello";

/// Start a mock backend on an ephemeral port.
///
/// `f` picks the reply from the request path. Every raw request received is
/// forwarded on the returned channel.
pub async fn start_programmable_backend<F>(f: F) -> (SocketAddr, mpsc::UnboundedReceiver<String>)
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (seen_tx, seen_rx) = mpsc::unbounded_channel();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let seen_tx = seen_tx.clone();
                    tokio::spawn(async move {
                        let raw = read_request(&mut socket).await;
                        let path = raw.split_whitespace().nth(1).unwrap_or("/").to_string();
                        let _ = seen_tx.send(raw);

                        let reply = f(&path);
                        tokio::time::sleep(reply.delay).await;

                        let head = format!(
                            "HTTP/1.1 {} Mock\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                            reply.status,
                            BODY.len()
                        );
                        let _ = socket.write_all(head.as_bytes()).await;
                        let _ = socket.flush().await;
                        tokio::time::sleep(reply.body_delay).await;
                        let _ = socket.write_all(BODY.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen_rx)
}

/// Read one request: head, then `Content-Length` bytes of body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Real transport that ignores any proxy set in the environment.
pub fn direct_transport() -> ReqwestTransport {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    ReqwestTransport::with_client(client)
}

pub fn endpoint(name: &str, url: &str) -> Endpoint {
    Endpoint::new(EndpointConfig::new(name, url)).unwrap()
}

/// Scripted answer for a URL.
#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    Respond { status: u16, elapsed_ms: u64 },
    Refused,
    TimedOut,
}

/// In-memory transport answering from a URL → [`Scripted`] table.
///
/// Clones share the table, so a test can change answers while a scheduler
/// owns another clone.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<HashMap<String, Scripted>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, url: &str, answer: Scripted) {
        self.script.lock().unwrap().insert(url.to_string(), answer);
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, endpoint: &Endpoint, _timeout: Duration) -> Result<ProbeResponse, TransportError> {
        let answer = self
            .script
            .lock()
            .unwrap()
            .get(endpoint.url().as_str())
            .copied()
            .unwrap_or(Scripted::Refused);

        match answer {
            Scripted::Respond { status, elapsed_ms } => Ok(ProbeResponse {
                status,
                elapsed: Duration::from_millis(elapsed_ms),
            }),
            Scripted::Refused => Err(TransportError::Connect("connection refused".into())),
            Scripted::TimedOut => Err(TransportError::Timeout),
        }
    }
}
