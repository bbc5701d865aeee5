//! Configuration validation.
//!
//! # Responsibilities
//! - Turn raw records into [`Endpoint`]s
//! - Report every bad record, not just the first
//!
//! # Design Decisions
//! - Pure function: records in, endpoints or errors out
//! - Runs before the scheduler exists; any error is fatal
//! - Bodies are opaque and never checked against headers

use crate::config::schema::EndpointConfig;
use crate::health::endpoint::{Endpoint, InvalidEndpoint};

/// A record that failed to build, with its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("endpoint #{index} ({name}): {reason}")]
pub struct ValidationError {
    pub index: usize,
    pub name: String,
    pub reason: InvalidEndpoint,
}

/// Build every endpoint, or collect every reason some could not be built.
pub fn build_endpoints(configs: Vec<EndpointConfig>) -> Result<Vec<Endpoint>, Vec<ValidationError>> {
    let mut endpoints = Vec::with_capacity(configs.len());
    let mut errors = Vec::new();

    for (i, config) in configs.into_iter().enumerate() {
        let name = if config.name.trim().is_empty() {
            "<unnamed>".to_string()
        } else {
            config.name.clone()
        };
        match Endpoint::new(config) {
            Ok(endpoint) => endpoints.push(endpoint),
            Err(reason) => errors.push(ValidationError { index: i + 1, name, reason }),
        }
    }

    if errors.is_empty() {
        Ok(endpoints)
    } else {
        Err(errors)
    }
}
