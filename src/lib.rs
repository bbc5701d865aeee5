//! HTTP endpoint availability monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file ──▶ config::loader ──▶ Vec<Endpoint>
//!                                          │
//!                                          ▼
//!                 ┌──────────────── health::Scheduler ◀──── lifecycle (signals)
//!                 │  every 15s                │
//!                 ▼                           ▼
//!        health::Checker ──▶ http::Transport ──▶ endpoints
//!                 │
//!                 ▼  (all checks joined)
//!     health::DomainAvailability ──▶ health::Reporter ──▶ tracing / metrics
//! ```

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{load_config, ConfigError};
pub use health::{Checker, DomainAvailability, Endpoint, Reporter, Scheduler};
pub use http::ReqwestTransport;
pub use lifecycle::Shutdown;
