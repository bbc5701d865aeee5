//! Probe transport.
//!
//! # Responsibilities
//! - Issue one request for an endpoint, bounded by a timeout
//! - Report status code and elapsed wall-clock time
//!
//! # Design Decisions
//! - Transport failures are a single error type; the checker does not care
//!   whether DNS, TLS or the connection itself failed
//! - Elapsed time is measured here, from send until the body is fully read

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::health::endpoint::Endpoint;

/// Outcome of a request that completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub elapsed: Duration,
}

/// A request that did not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() {
            TransportError::Connect(error.to_string())
        } else {
            TransportError::Request(error)
        }
    }
}

/// Sends one probe for an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, endpoint: &Endpoint, timeout: Duration) -> Result<ProbeResponse, TransportError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("availability-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, endpoint: &Endpoint, timeout: Duration) -> Result<ProbeResponse, TransportError> {
        let mut request = self
            .client
            .request(endpoint.method().clone(), endpoint.url().clone())
            .headers(endpoint.headers().clone())
            .timeout(timeout);
        if let Some(body) = endpoint.body() {
            request = request.body(body.to_owned());
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        // the request is only complete once the whole body has arrived
        response.bytes().await?;
        let elapsed = start.elapsed();

        Ok(ProbeResponse { status, elapsed })
    }
}
