//! Console progress reporter
//!
//! Renders run progress to stdout the way a person watches a smoke run:
//! a banner, one block per check, indented assertion details, and a
//! final tally. The output is for humans; nothing parses it.

use std::time::Duration;

use chrono::{DateTime, Utc};

use apiprobe_application::ports::ProgressReporter;
use apiprobe_domain::response::format_duration;
use apiprobe_domain::{CheckFailure, ResponsePayload, RunSummary};

/// Width of the banner and summary rules.
const RULE_WIDTH: usize = 50;

/// Progress reporter that prints the run narration to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a new console reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressReporter for ConsoleReporter {
    fn run_started(&self, base_url: &str, at: DateTime<Utc>) {
        println!("Starting backend API probe");
        println!("   Base URL: {base_url}");
        println!("   Started:  {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
        println!("{}", rule());
    }

    fn check_started(&self, name: &str, url: &str) {
        println!("\nChecking {name}...");
        println!("   URL: {url}");
    }

    fn check_passed(&self, status: u16, duration: Duration, payload: &ResponsePayload) {
        println!("Passed - Status: {status} ({})", format_duration(duration));
        if let Some(rendered) = format_payload(payload) {
            println!("   Response: {rendered}");
        }
    }

    fn check_failed(&self, failure: &CheckFailure) {
        match failure {
            CheckFailure::StatusMismatch {
                expected,
                actual,
                body,
            } => {
                println!("Failed - Expected {expected}, got {actual}");
                println!("   Response: {body}");
            }
            CheckFailure::Transport { kind, message } => {
                println!("Failed - {}: {message}", kind.title());
            }
        }
    }

    fn check_detail(&self, passed: bool, message: &str) {
        let tag = if passed { "[ok]" } else { "[fail]" };
        println!("   {tag} {message}");
    }

    fn run_finished(&self, summary: &RunSummary) {
        println!("\n{}", rule());
        println!(
            "Final Results: {}/{} checks passed",
            summary.passed, summary.attempted
        );
        if summary.all_passed() {
            println!("All checks passed.");
        } else {
            println!("Some checks failed.");
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Renders a payload for display: pretty JSON, raw text, nothing when empty.
fn format_payload(payload: &ResponsePayload) -> Option<String> {
    match payload {
        ResponsePayload::Json(value) => {
            Some(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
        }
        ResponsePayload::Text(text) => Some(text.clone()),
        ResponsePayload::Empty => None,
    }
}
