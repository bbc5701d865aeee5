//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_checks_total` (counter): probes by domain, outcome
//! - `monitor_domain_availability_percent` (gauge): cumulative percent by domain
//! - `monitor_cycles_total` (counter): completed cycles
//!
//! Recording is a no-op until [`init_metrics`] installs the exporter.

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::health::availability::DomainAvailability;

/// Serve Prometheus metrics on `addr`. Must be called inside the runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_check(domain: &str, available: bool) {
    let outcome = if available { "available" } else { "unavailable" };
    counter!("monitor_checks_total", "domain" => domain.to_string(), "outcome" => outcome).increment(1);
}

pub fn record_cycle(availability: &DomainAvailability) {
    counter!("monitor_cycles_total").increment(1);
    for (domain, percent) in availability.iter() {
        gauge!("monitor_domain_availability_percent", "domain" => domain.to_string()).set(f64::from(percent));
    }
}
