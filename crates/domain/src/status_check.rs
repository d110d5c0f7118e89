//! Status check record contract
//!
//! The service under test mints status check records; this module knows
//! which fields such a record must carry. Payloads are inspected as raw
//! JSON values on purpose: extra fields and loosely typed values are
//! accepted as long as the required keys exist.

use serde_json::Value;

/// Fields every status check record must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "client_name", "timestamp"];

/// Returns the required fields absent from the given record.
#[must_use]
pub fn missing_fields(record: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| record.get(**field).is_none())
        .copied()
        .collect()
}

/// Returns true if the record's `client_name` equals the expected value.
#[must_use]
pub fn client_name_is(record: &Value, expected: &str) -> bool {
    record
        .get("client_name")
        .and_then(Value::as_str)
        .is_some_and(|name| name == expected)
}

/// Extracts the record's identifier as a string.
///
/// String identifiers come back verbatim; other JSON types are rendered
/// through their JSON representation.
#[must_use]
pub fn id_string(record: &Value) -> Option<String> {
    record.get("id").map(|id| match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
