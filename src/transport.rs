//! HTTP transport seam.
//!
//! The dispatcher builds [`RequestEnvelope`] values and consumes
//! [`RawResponse`] values; the actual I/O sits behind the [`HttpTransport`]
//! trait. Production code uses [`ReqwestTransport`]; tests can inject a stub
//! to observe (or forbid) network activity.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{AzDevError, Result};

const USER_AGENT: &str = concat!("azdev/", env!("CARGO_PKG_VERSION"));

/// An outbound HTTP request described as plain data.
///
/// Transient: built and consumed within a single dispatch.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A fully-read HTTP response: status plus complete body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round trip.
///
/// Implementations perform exactly one call per envelope: no retry, no
/// caching. Network-level failures (connection refused, timeout, DNS) are
/// reported as [`AzDevError::Transport`] with no status, since no response
/// was obtained.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse>;
}

/// The production transport, backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(|e| AzDevError::Transport {
                status: None,
                body: e.to_string(),
            })?;

        Ok(Self { http })
    }

    fn network_error(err: reqwest::Error) -> AzDevError {
        AzDevError::Transport {
            status: None,
            body: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse> {
        let mut request = self.http.request(envelope.method, &envelope.url);

        for (name, value) in &envelope.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = envelope.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(Self::network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(Self::network_error)?;

        Ok(RawResponse { status, body })
    }
}
