//! Progress reporting port
//!
//! The runner narrates a run through this trait; the console adapter
//! prints the events and tests record them. The rendered output is
//! human-readable and carries no machine contract.

use std::time::Duration;

use chrono::{DateTime, Utc};

use apiprobe_domain::{CheckFailure, ResponsePayload, RunSummary};

/// Port for observing the progress of a probe run.
pub trait ProgressReporter: Send + Sync {
    /// A run is starting against the given base URL.
    fn run_started(&self, base_url: &str, at: DateTime<Utc>);

    /// A check is about to issue its request.
    fn check_started(&self, name: &str, url: &str);

    /// A check passed: the status matched the expectation.
    fn check_passed(&self, status: u16, duration: Duration, payload: &ResponsePayload);

    /// A check failed with the given failure tag.
    fn check_failed(&self, failure: &CheckFailure);

    /// A scenario-level assertion detail, printed under the check.
    fn check_detail(&self, passed: bool, message: &str);

    /// The run finished with the given summary.
    fn run_finished(&self, summary: &RunSummary);
}
