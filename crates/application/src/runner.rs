//! Scenario runner
//!
//! Executes one check per call: resolve the request, issue it through the
//! HTTP client port, compare the status code, and tally the counters.
//! Transport faults are caught here and turned into failed outcomes; they
//! never propagate to the caller.

use std::sync::Arc;

use apiprobe_domain::{
    CheckFailure, CheckOutcome, CheckSpec, ResponsePayload, RunStats, RunnerConfig,
};

use crate::ports::{Clock, HttpClient, ProgressReporter};

/// Runs checks against a single base URL and owns the run counters.
pub struct ScenarioRunner<C: HttpClient> {
    client: Arc<C>,
    clock: Arc<dyn Clock>,
    reporter: Arc<dyn ProgressReporter>,
    base_url: String,
    stats: RunStats,
}

impl<C: HttpClient> ScenarioRunner<C> {
    /// Creates a runner wired to the given adapters and configuration.
    pub fn new(
        client: Arc<C>,
        clock: Arc<dyn Clock>,
        reporter: Arc<dyn ProgressReporter>,
        config: RunnerConfig,
    ) -> Self {
        Self {
            client,
            clock,
            reporter,
            base_url: config.base_url,
            stats: RunStats::new(),
        }
    }

    /// Base URL this runner probes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current counter values.
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Clock used for run timestamps.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Reporter receiving progress events.
    #[must_use]
    pub fn reporter(&self) -> &dyn ProgressReporter {
        self.reporter.as_ref()
    }

    /// Executes a single check and returns its outcome.
    ///
    /// The attempted counter is incremented before the request is issued,
    /// so a check that faults mid-flight still counts as attempted. The
    /// passed counter moves only when the response status matches the
    /// expectation; payload decoding happens after that comparison and
    /// cannot fail the check.
    pub async fn run_check(&mut self, check: &CheckSpec) -> CheckOutcome {
        let request = check.resolve(&self.base_url);

        self.stats.record_attempt();
        self.reporter.check_started(&check.name, &request.url);

        match self.client.execute(&request).await {
            Ok(response) if response.status == check.expected_status => {
                self.stats.record_pass();
                let payload = ResponsePayload::decode(&response.body);
                self.reporter
                    .check_passed(response.status, response.duration, &payload);
                CheckOutcome::pass(payload)
            }
            Ok(response) => {
                let failure = CheckFailure::StatusMismatch {
                    expected: check.expected_status,
                    actual: response.status,
                    body: response.body,
                };
                self.reporter.check_failed(&failure);
                CheckOutcome::fail(failure)
            }
            Err(error) => {
                let failure = CheckFailure::Transport {
                    kind: error.fault_kind(),
                    message: error.to_string(),
                };
                self.reporter.check_failed(&failure);
                CheckOutcome::fail(failure)
            }
        }
    }
}
