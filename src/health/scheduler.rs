//! Periodic check/aggregate/report loop.
//!
//! # Responsibilities
//! - Own the endpoint list for the life of the process
//! - Every tick: check all endpoints concurrently, wait for all of them,
//!   aggregate, report
//! - Stop between cycles when shutdown is signalled
//!
//! # Design Decisions
//! - Checks borrow disjoint `&mut Endpoint`s, so no locks are involved
//! - Ticks are start-to-start; an overrunning cycle is followed immediately
//!   by the next one, without catch-up bursts

use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::health::availability::DomainAvailability;
use crate::health::checker::Checker;
use crate::health::endpoint::Endpoint;
use crate::health::report::Reporter;
use crate::health::CHECK_INTERVAL;
use crate::http::transport::Transport;
use crate::observability::metrics;

pub struct Scheduler<T> {
    endpoints: Vec<Endpoint>,
    checker: Checker<T>,
    reporter: Reporter,
    interval: Duration,
    cycles: u64,
}

impl<T: Transport> Scheduler<T> {
    pub fn new(endpoints: Vec<Endpoint>, checker: Checker<T>, reporter: Reporter) -> Self {
        Self {
            endpoints,
            checker,
            reporter,
            interval: CHECK_INTERVAL,
            cycles: 0,
        }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Completed cycles so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run until `shutdown` fires.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoints = self.endpoints.len(),
            interval_secs = self.interval.as_secs(),
            timeout_ms = self.checker.timeout().as_millis() as u64,
            "Starting monitoring"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!(cycles = self.cycles, "Monitoring stopped");
                    break;
                }
            }
        }
    }

    /// One full pass: check everything, then aggregate and report.
    pub async fn run_cycle(&mut self) -> DomainAvailability {
        let checker = &self.checker;
        let outcomes = join_all(self.endpoints.iter_mut().map(move |ep| checker.check(ep))).await;

        self.cycles += 1;
        let failed = outcomes.iter().filter(|outcome| !outcome.is_available()).count();
        tracing::debug!(cycle = self.cycles, checked = outcomes.len(), failed, "Cycle checks complete");

        let availability = DomainAvailability::aggregate(&self.endpoints);
        self.reporter.emit(&availability, &self.endpoints);
        metrics::record_cycle(&availability);

        availability
    }
}
