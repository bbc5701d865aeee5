//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse args → init logging → load config → build transport → run
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs) → Shutdown::trigger (shutdown.rs)
//!     → scheduler leaves its loop after the current cycle
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No forced cancellation; in-flight probes end on their own timeout

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
