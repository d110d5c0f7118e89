//! Probe scenarios
//!
//! Three fixed scenarios run in order: root greeting, status check
//! creation, status check listing. A scenario failure never stops the
//! sequence; every scenario issues its request regardless of what came
//! before.

mod create_status_check;
mod list_status_checks;
mod root_endpoint;

pub use create_status_check::create_status_check;
pub use list_status_checks::list_status_checks;
pub use root_endpoint::check_root_endpoint;

use apiprobe_domain::RunSummary;
use serde_json::Value;

use crate::ports::HttpClient;
use crate::runner::ScenarioRunner;

/// Client name stamped into created status checks and matched in listings.
pub const PROBE_CLIENT_NAME: &str = "deep-test";

/// Endpoint of the root greeting.
pub const ROOT_ENDPOINT: &str = "api/";

/// Endpoint for creating and listing status checks.
pub const STATUS_ENDPOINT: &str = "api/status";

/// Greeting the root endpoint must return.
pub const EXPECTED_GREETING: &str = "Hello World";

/// Runs the full scenario sequence and returns the run summary.
///
/// The id minted by the create scenario is not fed into the listing; the
/// listing re-discovers the record by client name. The exit code in the
/// summary derives from the check counters alone, not from the scenario
/// verdicts.
pub async fn run_sequence<C: HttpClient>(runner: &mut ScenarioRunner<C>) -> RunSummary {
    let started_at = runner.clock().now();
    runner.reporter().run_started(runner.base_url(), started_at);

    check_root_endpoint(runner).await;
    create_status_check(runner).await;
    list_status_checks(runner).await;

    let summary = RunSummary::new(runner.stats(), started_at, runner.clock().now());
    runner.reporter().run_finished(&summary);
    summary
}

/// Renders a JSON field for a detail message the way a human expects to
/// read it: strings unquoted, everything else in JSON notation.
fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "none".to_string(),
    }
}
