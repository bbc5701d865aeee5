//! Domain-level availability aggregation.
//!
//! Groups endpoints by domain and turns their cumulative counters into a
//! truncated percentage. Recomputed from scratch every cycle; nothing here
//! outlives the report it feeds.

use std::collections::HashMap;

use crate::health::endpoint::Endpoint;

/// `floor(100 * success / checks)`, or 0 when nothing was checked yet.
pub fn availability_percent(success: u64, checks: u64) -> u8 {
    if checks == 0 {
        return 0;
    }
    let percent = u128::from(success.min(checks)) * 100 / u128::from(checks);
    // success <= checks keeps this within 0..=100
    percent as u8
}

/// Cumulative totals for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStats {
    pub domain: String,
    pub success: u64,
    pub checks: u64,
}

impl DomainStats {
    pub fn availability(&self) -> u8 {
        availability_percent(self.success, self.checks)
    }
}

/// Snapshot of per-domain availability, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainAvailability {
    domains: Vec<DomainStats>,
}

impl DomainAvailability {
    /// Group `endpoints` by domain and sum their counters.
    pub fn aggregate(endpoints: &[Endpoint]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut domains: Vec<DomainStats> = Vec::new();

        for endpoint in endpoints {
            let slot = *index.entry(endpoint.domain()).or_insert_with(|| {
                domains.push(DomainStats {
                    domain: endpoint.domain().to_string(),
                    success: 0,
                    checks: 0,
                });
                domains.len() - 1
            });
            let stats = &mut domains[slot];
            stats.success += endpoint.success_count();
            stats.checks += endpoint.check_count();
        }

        Self { domains }
    }

    /// `(domain, percent)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.domains.iter().map(|stats| (stats.domain.as_str(), stats.availability()))
    }

    /// Percent for one domain, if any endpoint belongs to it.
    pub fn get(&self, domain: &str) -> Option<u8> {
        self.domains
            .iter()
            .find(|stats| stats.domain == domain)
            .map(DomainStats::availability)
    }

    pub fn stats(&self) -> &[DomainStats] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
