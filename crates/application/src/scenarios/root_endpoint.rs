//! Root endpoint scenario
//!
//! GET the service root and require the exact "Hello World" greeting.

use serde_json::Value;

use apiprobe_domain::CheckSpec;

use super::{EXPECTED_GREETING, ROOT_ENDPOINT};
use crate::ports::HttpClient;
use crate::runner::ScenarioRunner;

/// Checks that the root endpoint answers 200 with the expected greeting.
///
/// The verdict requires all three of: matching status, a JSON object
/// payload, and a `message` field equal to the greeting. A detail line
/// is reported either way.
pub async fn check_root_endpoint<C: HttpClient>(runner: &mut ScenarioRunner<C>) -> bool {
    let check = CheckSpec::get("Root Endpoint", ROOT_ENDPOINT, 200);
    let outcome = runner.run_check(&check).await;

    let greeted = outcome
        .json()
        .and_then(|payload| payload.get("message"))
        .and_then(Value::as_str)
        == Some(EXPECTED_GREETING);

    if greeted {
        runner.reporter().check_detail(true, "Correct message returned");
    } else {
        runner
            .reporter()
            .check_detail(false, "Incorrect response format or message");
    }
    greeted
}
