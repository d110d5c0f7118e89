//! Apiprobe Application - Scenario orchestration and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, clock, progress reporting)
//! - The scenario runner that executes checks and owns the run counters
//! - The fixed probe scenarios and their sequencing

pub mod ports;
pub mod runner;
pub mod scenarios;

#[cfg(test)]
pub(crate) mod test_support;

pub use ports::{Clock, HttpClient, HttpClientError, ProgressReporter};
pub use runner::ScenarioRunner;
pub use scenarios::{
    EXPECTED_GREETING, PROBE_CLIENT_NAME, ROOT_ENDPOINT, STATUS_ENDPOINT, check_root_endpoint,
    create_status_check, list_status_checks, run_sequence,
};
