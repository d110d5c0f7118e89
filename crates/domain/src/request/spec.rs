//! Resolved wire request type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{Headers, HttpMethod};
use crate::error::{DomainError, DomainResult};

/// A fully resolved HTTP request, ready for an HTTP client to execute.
///
/// Produced by resolving a check against a base URL; the URL here is the
/// final string that goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// HTTP headers
    #[serde(default)]
    pub headers: Headers,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ProbeRequest {
    /// Creates a GET request with the given URL and headers.
    #[must_use]
    pub fn get(url: impl Into<String>, headers: Headers) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// Validates the URL and returns the parsed version if valid.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the URL is malformed.
    pub fn parse_url(&self) -> DomainResult<Url> {
        Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_request() {
        let req = ProbeRequest::get("http://127.0.0.1:8001/api/", Headers::json());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://127.0.0.1:8001/api/");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_parse_url_valid() {
        let req = ProbeRequest::get("http://127.0.0.1:8001/api/status", Headers::new());
        let url = req.parse_url().unwrap();
        assert_eq!(url.path(), "/api/status");
    }

    #[test]
    fn test_parse_url_invalid() {
        let req = ProbeRequest::get("not a url", Headers::new());
        let error = req.parse_url().unwrap_err();
        assert!(matches!(error, DomainError::InvalidUrl(message) if message.contains("not a url")));
    }
}
