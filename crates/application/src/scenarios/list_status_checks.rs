//! Status check listing scenario
//!
//! GET the status check collection and look for the probe's own entry.

use serde_json::Value;

use apiprobe_domain::{CheckSpec, status_check};

use super::{PROBE_CLIENT_NAME, STATUS_ENDPOINT};
use crate::ports::HttpClient;
use crate::runner::ScenarioRunner;

/// Lists status checks and requires at least one probe-created entry.
///
/// The payload must be a non-empty JSON array containing at least one
/// record whose client name matches the probe's. A failed check has no
/// list payload and is reported the same way as a non-list body.
pub async fn list_status_checks<C: HttpClient>(runner: &mut ScenarioRunner<C>) -> bool {
    let check = CheckSpec::get("Get Status Checks", STATUS_ENDPOINT, 200);
    let outcome = runner.run_check(&check).await;

    let Some(entries) = outcome.json().and_then(Value::as_array) else {
        runner.reporter().check_detail(false, "Response is not a list");
        return false;
    };

    if entries.is_empty() {
        runner.reporter().check_detail(false, "Empty response array");
        return false;
    }

    let matches = entries
        .iter()
        .filter(|entry| status_check::client_name_is(entry, PROBE_CLIENT_NAME))
        .count();

    if matches == 0 {
        runner
            .reporter()
            .check_detail(false, &format!("No '{PROBE_CLIENT_NAME}' entries found"));
        return false;
    }

    runner
        .reporter()
        .check_detail(true, &format!("Found {matches} '{PROBE_CLIENT_NAME}' entries"));
    true
}
