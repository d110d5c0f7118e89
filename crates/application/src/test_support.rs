//! Test doubles shared by the crate's unit tests.
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use apiprobe_domain::{CheckFailure, ProbeRequest, ProbeResponse, ResponsePayload, RunSummary};

use crate::ports::{Clock, HttpClient, HttpClientError, ProgressReporter};

/// Scripted HTTP client: hands out canned results in FIFO order and
/// records every request it sees.
#[derive(Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Result<ProbeResponse, HttpClientError>>>,
    requests: Mutex<Vec<ProbeRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push_text(status, &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ProbeResponse::new(
                status,
                body.as_bytes(),
                Duration::from_millis(5),
            )));
    }

    pub fn push_error(&self, error: HttpClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Requests seen so far, in execution order.
    pub fn requests(&self) -> Vec<ProbeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProbeResponse, HttpClientError>> + Send + '_>> {
        self.requests.lock().unwrap().push(request.clone());
        let result = self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(HttpClientError::Other(
                "no scripted response left".to_string(),
            ))
        });
        Box::pin(async move { result })
    }
}

/// Reporter that records every event as a flat string.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in emission order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for RecordingReporter {
    fn run_started(&self, base_url: &str, _at: DateTime<Utc>) {
        self.push(format!("run_started {base_url}"));
    }

    fn check_started(&self, name: &str, url: &str) {
        self.push(format!("check_started {name} {url}"));
    }

    fn check_passed(&self, status: u16, _duration: Duration, _payload: &ResponsePayload) {
        self.push(format!("check_passed {status}"));
    }

    fn check_failed(&self, failure: &CheckFailure) {
        let event = match failure {
            CheckFailure::StatusMismatch {
                expected, actual, ..
            } => {
                format!("check_failed expected={expected} actual={actual}")
            }
            CheckFailure::Transport { kind, .. } => format!("check_failed transport {kind:?}"),
        };
        self.push(event);
    }

    fn check_detail(&self, passed: bool, message: &str) {
        let tag = if passed { "ok" } else { "fail" };
        self.push(format!("detail {tag} {message}"));
    }

    fn run_finished(&self, summary: &RunSummary) {
        self.push(format!("run_finished {}/{}", summary.passed, summary.attempted));
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock {
    pub now: DateTime<Utc>,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// The instant every unit test run starts at.
pub fn probe_instant() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-08-26T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A clock pinned to [`probe_instant`].
pub fn fixed_clock() -> FixedClock {
    FixedClock {
        now: probe_instant(),
    }
}
