//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It issues every probe request and maps transport failures onto the
//! port's error taxonomy.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use reqwest::{Client, Method, Url};
use tracing::debug;

use apiprobe_application::ports::{HttpClient, HttpClientError};
use apiprobe_domain::{HttpMethod, ProbeRequest, ProbeResponse};

/// HTTP client adapter backed by `reqwest::Client`.
///
/// No request timeout is configured: a probe against an unresponsive
/// peer blocks until the connection dies on its own.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with the probe's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("apiprobe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates an adapter around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Host named by a reqwest error, for fault messages.
    fn error_host(error: &reqwest::Error) -> String {
        error
            .url()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string()
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = error.to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsFailure {
                    host: Self::error_host(error),
                    message,
                };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: Self::error_host(error),
                    port: error.url().and_then(Url::port).unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &ProbeRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProbeResponse, HttpClientError>> + Send + '_>> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.url.clone();
        let headers = request.headers.all().to_vec();
        let body = request.body.clone();
        let parsed = request.parse_url().map_err(HttpClientError::from);

        Box::pin(async move {
            let parsed_url = parsed?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url);

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            if let Some(json) = &body {
                builder = builder.json(json);
            }

            debug!(%method, %url, "sending probe request");

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

            let duration = start.elapsed();
            let status = response.status().as_u16();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?;

            debug!(status, ?duration, "probe response received");

            Ok(ProbeResponse::new(status, &body_bytes, duration))
        })
    }
}
