//! Check specification type
//!
//! A check describes one HTTP call and the status code it must return.
//! Checks are written against endpoint path segments and resolved to
//! absolute URLs at execution time.

use serde::{Deserialize, Serialize};

use crate::request::{Headers, HttpMethod, ProbeRequest};

/// Specification for a single probe check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSpec {
    /// Human-readable name shown in the run report.
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint path segment, joined onto the base URL verbatim.
    pub endpoint: String,
    /// Status code the response must carry for the check to pass.
    pub expected_status: u16,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Optional headers; `None` means the JSON default mapping applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
}

impl CheckSpec {
    /// Creates a GET check.
    #[must_use]
    pub fn get(name: impl Into<String>, endpoint: impl Into<String>, expected_status: u16) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            expected_status,
            body: None,
            headers: None,
        }
    }

    /// Creates a POST check carrying a JSON body.
    #[must_use]
    pub fn post(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        expected_status: u16,
        body: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            method: HttpMethod::Post,
            endpoint: endpoint.into(),
            expected_status,
            body: Some(body),
            headers: None,
        }
    }

    /// Replaces the default header mapping with an explicit one.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Resolves this check against a base URL into a wire request.
    ///
    /// The URL is the verbatim join `base_url + "/" + endpoint`; no
    /// normalization of slashes is applied. Checks without explicit
    /// headers get `Content-Type: application/json`. A body rides only
    /// on a body-carrying method; bodyless methods drop it here.
    #[must_use]
    pub fn resolve(&self, base_url: &str) -> ProbeRequest {
        let endpoint = &self.endpoint;
        let body = if self.method.has_body() {
            self.body.clone()
        } else {
            None
        };
        ProbeRequest {
            method: self.method,
            url: format!("{base_url}/{endpoint}"),
            headers: self.headers.clone().unwrap_or_else(Headers::json),
            body,
        }
    }
}
