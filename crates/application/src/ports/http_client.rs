//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use apiprobe_domain::{DomainError, FaultKind, ProbeRequest, ProbeResponse};

/// Transport-level errors surfaced by HTTP client adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// DNS resolution failed for the target host.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsFailure {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error text.
        message: String,
    },

    /// The peer refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// A connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Maps this error onto the domain fault taxonomy.
    #[must_use]
    pub const fn fault_kind(&self) -> FaultKind {
        match self {
            Self::InvalidUrl(_) => FaultKind::InvalidUrl,
            Self::DnsFailure { .. } => FaultKind::DnsFailure,
            Self::ConnectionRefused { .. } => FaultKind::ConnectionRefused,
            Self::ConnectionFailed(_) => FaultKind::ConnectionFailed,
            Self::Timeout => FaultKind::Timeout,
            Self::Other(_) => FaultKind::Unknown,
        }
    }
}

impl From<DomainError> for HttpClientError {
    /// Folds domain validation failures into the transport taxonomy, so
    /// adapters can validate requests with the domain types directly.
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidUrl(message) => Self::InvalidUrl(message),
            DomainError::UnsupportedMethod(message) => Self::Other(message),
        }
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails at the transport level;
    /// a response with an unexpected status code is not an error here.
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProbeResponse, HttpClientError>> + Send + '_>>;
}
