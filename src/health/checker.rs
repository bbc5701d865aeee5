//! Single-endpoint probe.
//!
//! # Responsibilities
//! - Send exactly one request per call, bounded by the probe timeout
//! - Classify the result (2xx within the timeout is available)
//! - Bump the endpoint's counters exactly once
//!
//! # Design Decisions
//! - Nothing escapes a check: transport errors, timeouts and panics inside
//!   the transport all become an unavailable outcome
//! - Slow-but-successful responses count as unavailable

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::time;

use crate::health::endpoint::Endpoint;
use crate::health::HTTP_TIMEOUT;
use crate::http::transport::{ProbeResponse, Transport, TransportError};
use crate::observability::metrics;

/// Why a probe was classified unavailable.
#[derive(Debug)]
pub enum Unavailable {
    /// Completed with a status outside `200..300`.
    Status { status: u16, elapsed: Duration },
    /// Completed with a 2xx status, but too late.
    Slow { status: u16, elapsed: Duration },
    /// Did not finish within the timeout.
    Timeout,
    /// Failed before a response arrived.
    Transport(TransportError),
    /// The transport panicked.
    Panicked,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::Status { status, .. } => write!(f, "status {status}"),
            Unavailable::Slow { status, elapsed } => {
                write!(f, "status {status} after {}ms", elapsed.as_millis())
            }
            Unavailable::Timeout => write!(f, "timed out"),
            Unavailable::Transport(error) => write!(f, "{error}"),
            Unavailable::Panicked => write!(f, "transport panicked"),
        }
    }
}

/// Classification of one probe.
#[derive(Debug)]
pub enum CheckOutcome {
    Available { status: u16, elapsed: Duration },
    Unavailable(Unavailable),
}

impl CheckOutcome {
    /// Apply the availability rule to a transport result.
    pub fn classify(result: Result<ProbeResponse, TransportError>, timeout: Duration) -> Self {
        match result {
            Ok(ProbeResponse { status, elapsed }) => {
                if !(200..300).contains(&status) {
                    CheckOutcome::Unavailable(Unavailable::Status { status, elapsed })
                } else if elapsed > timeout {
                    CheckOutcome::Unavailable(Unavailable::Slow { status, elapsed })
                } else {
                    CheckOutcome::Available { status, elapsed }
                }
            }
            Err(TransportError::Timeout) => CheckOutcome::Unavailable(Unavailable::Timeout),
            Err(error) => CheckOutcome::Unavailable(Unavailable::Transport(error)),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CheckOutcome::Available { .. })
    }
}

/// Probes endpoints through a [`Transport`].
#[derive(Debug)]
pub struct Checker<T> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> Checker<T> {
    /// Checker with the fixed probe timeout.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: HTTP_TIMEOUT,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe `endpoint` once and record the result on it.
    pub async fn check(&self, endpoint: &mut Endpoint) -> CheckOutcome {
        let outcome = self.probe(endpoint).await;
        let available = outcome.is_available();
        endpoint.record(available);

        match &outcome {
            CheckOutcome::Available { status, elapsed } => tracing::debug!(
                endpoint = %endpoint.name(),
                domain = %endpoint.domain(),
                status = status,
                elapsed_ms = elapsed.as_millis() as u64,
                "Check passed"
            ),
            CheckOutcome::Unavailable(reason) => tracing::debug!(
                endpoint = %endpoint.name(),
                domain = %endpoint.domain(),
                reason = %reason,
                "Check failed"
            ),
        }
        metrics::record_check(endpoint.domain(), available);

        outcome
    }

    async fn probe(&self, endpoint: &Endpoint) -> CheckOutcome {
        let request = AssertUnwindSafe(self.transport.send(endpoint, self.timeout)).catch_unwind();

        match time::timeout(self.timeout, request).await {
            Ok(Ok(result)) => CheckOutcome::classify(result, self.timeout),
            Ok(Err(_panic)) => CheckOutcome::Unavailable(Unavailable::Panicked),
            Err(_) => CheckOutcome::Unavailable(Unavailable::Timeout),
        }
    }
}
