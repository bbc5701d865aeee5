//! Availability monitoring engine.
//!
//! # Data Flow
//! ```text
//! scheduler.rs (every CHECK_INTERVAL):
//!     → checker.rs probes every endpoint concurrently
//!         → endpoint.rs counters bumped once per probe
//!     → wait for all probes
//!     → availability.rs groups endpoints by domain
//!     → report.rs logs domain and endpoint percentages
//! ```
//!
//! # Design Decisions
//! - Counters are cumulative since process start, never reset
//! - Percentages are truncated, not rounded
//! - A domain with no checks yet reports 0%

use std::time::Duration;

pub mod availability;
pub mod checker;
pub mod endpoint;
pub mod report;
pub mod scheduler;

pub use availability::DomainAvailability;
pub use checker::{CheckOutcome, Checker};
pub use endpoint::Endpoint;
pub use report::Reporter;
pub use scheduler::Scheduler;

/// Per-request timeout, also the latency ceiling for an available probe.
pub const HTTP_TIMEOUT_MS: u64 = 500;

pub const HTTP_TIMEOUT: Duration = Duration::from_millis(HTTP_TIMEOUT_MS);

/// Start-to-start period between cycles.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(15);
