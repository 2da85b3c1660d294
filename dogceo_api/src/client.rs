//! Sub-breed lookups against the dog.ceo API.

use async_trait::async_trait;
use url::Url;

use crate::{
    breed::BreedName,
    errors::{LookupFailure, Result},
    transport::{HttpTransport, Transport},
    types::ApiEnvelope,
};

const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Looks up the sub-breeds of a breed.
///
/// Every failure, from blank input to an API-reported "breed not found",
/// is reported as a [`LookupFailure`].
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}

/// Client for the dog.ceo breed endpoints.
///
/// Each lookup issues exactly one GET to `<base>/api/breed/<breed>/list`
/// with no retries. The transport is held for the lifetime of the client,
/// so connections are reused across lookups.
pub struct Client<T = HttpTransport> {
    /// Base URL for the API. Defaults to `https://dog.ceo`.
    base_api_url: String,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a new client pointing at the production dog.ceo API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(base_url, HttpTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// The request URL for `breed`'s sub-breed list.
    pub fn sub_breeds_url(&self, breed: &BreedName) -> Result<Url> {
        let raw = format!("{}/api/breed/{}/list", self.base_api_url, breed.encoded());
        Url::parse(&raw).map_err(|e| {
            tracing::debug!("Invalid URL constructed: {}", e);
            LookupFailure::with_source(LookupFailure::ENCODE_FAILED, e)
        })
    }

    async fn fetch(&self, breed: &BreedName) -> Result<Vec<String>> {
        let url = self.sub_breeds_url(breed)?;
        tracing::debug!("GET {}", url);

        let resp = self.transport.get(url).await?;
        let success = resp.is_success();
        let body = match resp.body {
            Some(body) if success => body,
            body => {
                let snippet = body.as_deref().map(truncate_body).unwrap_or_default();
                tracing::debug!("Request failed with status {}: {}", resp.status, snippet);
                return Err(LookupFailure::http_status(resp.status));
            }
        };

        let envelope = ApiEnvelope::parse(&body).map_err(|e| {
            tracing::debug!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            e
        })?;

        envelope.into_sub_breeds().map_err(|e| {
            tracing::debug!("Lookup of {} failed: {}", breed, e);
            e
        })
    }
}

#[async_trait]
impl<T: Transport> BreedFetcher for Client<T> {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let breed = BreedName::parse(breed)?;
        self.fetch(&breed).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
