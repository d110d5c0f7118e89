//! Response types
//!
//! Contains the raw HTTP response handed back by the client adapter and
//! the decoded payload the scenarios inspect.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Raw HTTP response data from a single probe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text; invalid UTF-8 is replaced lossily.
    pub body: String,
    /// Round-trip time measured by the adapter.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl ProbeResponse {
    /// Creates a response from raw body bytes.
    #[must_use]
    pub fn new(status: u16, body: &[u8], duration: Duration) -> Self {
        Self {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
        }
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        format_duration(self.duration)
    }
}

/// Formats a duration for display: milliseconds below one second,
/// fractional seconds above.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis} ms")
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// Decoded response payload carried on a check outcome.
///
/// Serializes in serde's external tag form; the newtype variants rule
/// out an internal tag, which cannot represent a bare string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePayload {
    /// Body parsed as JSON.
    Json(serde_json::Value),
    /// Body kept as raw text because it was not valid JSON.
    Text(String),
    /// No payload; the payload of every failed check.
    Empty,
}

impl ResponsePayload {
    /// Decodes a response body: JSON first, raw text as the fallback.
    #[must_use]
    pub fn decode(body: &str) -> Self {
        serde_json::from_str(body)
            .map_or_else(|_| Self::Text(body.to_string()), Self::Json)
    }

    /// Returns the JSON value if the payload is JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) | Self::Empty => None,
        }
    }

    /// Returns true if the payload is a JSON array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Json(serde_json::Value::Array(_)))
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Millisecond counts for probe round-trips fit comfortably in u64
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
