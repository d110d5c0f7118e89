//! Status check creation scenario
//!
//! POST a new status check and validate the minted record.

use serde_json::json;

use apiprobe_domain::{CheckSpec, status_check};

use super::{PROBE_CLIENT_NAME, STATUS_ENDPOINT, display_value};
use crate::ports::HttpClient;
use crate::runner::ScenarioRunner;

/// Creates a status check and validates the returned record.
///
/// On a passed check with an object payload the record must carry the
/// required fields and echo the probe client name; the minted id is
/// returned to the caller. Every other outcome yields `(false, None)`
/// without a detail line.
pub async fn create_status_check<C: HttpClient>(
    runner: &mut ScenarioRunner<C>,
) -> (bool, Option<String>) {
    let check = CheckSpec::post(
        "Create Status Check",
        STATUS_ENDPOINT,
        200,
        json!({ "client_name": PROBE_CLIENT_NAME }),
    );
    let outcome = runner.run_check(&check).await;

    let Some(record) = outcome.json().filter(|payload| payload.is_object()) else {
        return (false, None);
    };

    let missing = status_check::missing_fields(record);
    if !missing.is_empty() {
        runner
            .reporter()
            .check_detail(false, &format!("Missing fields: {missing:?}"));
        return (false, None);
    }

    if !status_check::client_name_is(record, PROBE_CLIENT_NAME) {
        let actual = display_value(record.get("client_name"));
        runner
            .reporter()
            .check_detail(false, &format!("Incorrect client_name: {actual}"));
        return (false, None);
    }

    runner
        .reporter()
        .check_detail(true, "All required fields present and correct");
    (true, status_check::id_string(record))
}
