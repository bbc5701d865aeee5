//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML list or TOML [[endpoints]])
//!     → loader.rs (read & deserialize)
//!     → validation.rs (build Endpoints, collect all errors)
//!     → Vec<Endpoint> handed to the scheduler
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; there is no reload
//! - Missing required fields deserialize as empty and fail validation, so
//!   every bad record is reported in one go
//! - An empty endpoint list is a startup error

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{EndpointConfig, MonitorConfig};
pub use validation::ValidationError;
