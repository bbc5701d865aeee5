//! Outbound HTTP.
//!
//! The monitor only ever sends probes; [`transport::Transport`] is the seam
//! tests use to script responses.

pub mod transport;

pub use transport::{ProbeResponse, ReqwestTransport, Transport, TransportError};
