//! Check outcome and failure taxonomy
//!
//! Every executed check produces an outcome; failed outcomes carry a tag
//! that distinguishes a status mismatch from a transport-level fault.

use serde::{Deserialize, Serialize};

use crate::response::ResponsePayload;

/// Result of executing a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the response status matched the expectation.
    pub passed: bool,
    /// Decoded payload; always `Empty` on a failed check.
    pub payload: ResponsePayload,
    /// Failure tag when the check did not pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<CheckFailure>,
}

impl CheckOutcome {
    /// Creates a passed outcome carrying the decoded payload.
    #[must_use]
    pub const fn pass(payload: ResponsePayload) -> Self {
        Self {
            passed: true,
            payload,
            failure: None,
        }
    }

    /// Creates a failed outcome with the given failure tag.
    #[must_use]
    pub const fn fail(failure: CheckFailure) -> Self {
        Self {
            passed: false,
            payload: ResponsePayload::Empty,
            failure: Some(failure),
        }
    }

    /// Returns the JSON payload if the check passed with a JSON body.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        self.payload.as_json()
    }
}

/// Why a check failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "failure", rename_all = "snake_case")]
pub enum CheckFailure {
    /// The response arrived but carried the wrong status code.
    StatusMismatch {
        /// Status code the check expected.
        expected: u16,
        /// Status code the service returned.
        actual: u16,
        /// Raw response body, kept for display.
        body: String,
    },
    /// The request never produced a usable response.
    Transport {
        /// Fault category.
        kind: FaultKind,
        /// Human-readable fault description.
        message: String,
    },
}

/// Categories of transport-level faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The resolved URL could not be parsed.
    InvalidUrl,

    /// DNS resolution failed.
    DnsFailure,

    /// Connection was refused by the peer.
    ConnectionRefused,

    /// Could not establish a connection.
    ConnectionFailed,

    /// The request timed out.
    Timeout,

    /// Unknown or unexpected fault.
    Unknown,
}

impl FaultKind {
    /// Returns a human-readable title for this fault category.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::InvalidUrl => "Invalid URL",
            Self::DnsFailure => "DNS Resolution Failed",
            Self::ConnectionRefused => "Connection Refused",
            Self::ConnectionFailed => "Connection Failed",
            Self::Timeout => "Request Timeout",
            Self::Unknown => "Unknown Error",
        }
    }
}
