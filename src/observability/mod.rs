//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! checker / scheduler / report:
//!     → logging.rs (tracing events; reports at INFO, per-check at DEBUG)
//!     → metrics.rs (check counters, per-domain gauges)
//! ```

pub mod logging;
pub mod metrics;
