//! Cycle report rendering.
//!
//! Lines go to the log at INFO; nothing is buffered between cycles.

use crate::health::availability::DomainAvailability;
use crate::health::endpoint::Endpoint;

pub const DOMAIN_HEADER: &str = "=== Domain Availability ===";
pub const ENDPOINT_HEADER: &str = "=== Endpoint Availability ===";

/// Formats and emits the per-cycle availability report.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    include_endpoints: bool,
}

impl Reporter {
    /// Reporter that also lists every endpoint after the domains.
    pub fn new() -> Self {
        Self { include_endpoints: true }
    }

    /// Reporter that prints only the domain section.
    pub fn domains_only() -> Self {
        Self { include_endpoints: false }
    }

    /// Header plus one `"{domain}: {pct}%"` line per domain.
    pub fn domain_lines(availability: &DomainAvailability) -> Vec<String> {
        std::iter::once(DOMAIN_HEADER.to_string())
            .chain(availability.iter().map(|(domain, percent)| format!("{domain}: {percent}%")))
            .collect()
    }

    /// Header plus one `"{name}: {pct}%"` line per endpoint.
    pub fn endpoint_lines(endpoints: &[Endpoint]) -> Vec<String> {
        std::iter::once(ENDPOINT_HEADER.to_string())
            .chain(endpoints.iter().map(|ep| format!("{}: {}%", ep.name(), ep.availability())))
            .collect()
    }

    /// Every line this reporter emits for one cycle.
    pub fn render(&self, availability: &DomainAvailability, endpoints: &[Endpoint]) -> Vec<String> {
        let mut lines = Self::domain_lines(availability);
        if self.include_endpoints {
            lines.extend(Self::endpoint_lines(endpoints));
        }
        lines
    }

    pub fn emit(&self, availability: &DomainAvailability, endpoints: &[Endpoint]) {
        for line in self.render(availability, endpoints) {
            tracing::info!("{line}");
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
