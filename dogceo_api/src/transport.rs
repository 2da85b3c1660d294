//! The HTTP capability the client is built on.
//!
//! [`Client`](crate::Client) only ever needs "GET this URL and give me the
//! status and body". Putting that behind [`Transport`] lets tests swap in a
//! canned responder without a network or a mock server.

use async_trait::async_trait;
use url::Url;

use crate::errors::{LookupFailure, Result};

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the exchange completed without a readable body. For
    /// non-success statuses the body is best-effort and may be `None`.
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single GET request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<RawResponse>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
///
/// The client is built once with reqwest's defaults (no timeout override,
/// no extra headers) and reused for every request so connections are pooled.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            LookupFailure::with_source(LookupFailure::FETCH_FAILED, e)
        })?;
        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<RawResponse> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::debug!("Failed to get resource: {}", e);
            LookupFailure::with_source(LookupFailure::FETCH_FAILED, e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            // Best effort: the status is what gets reported, not the body.
            let body = resp
                .text()
                .await
                .map_err(|e| tracing::debug!("Failed to read error body: {}", e))
                .ok();
            return Ok(RawResponse {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::debug!("Failed to read response body: {}", e);
            LookupFailure::with_source(LookupFailure::FETCH_FAILED, e)
        })?;

        Ok(RawResponse {
            status: status.as_u16(),
            body: Some(body),
        })
    }
}
