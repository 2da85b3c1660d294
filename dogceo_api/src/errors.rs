//! Error type for the API client.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The one failure kind a sub-breed lookup can produce.
///
/// Blank input, URL encoding, transport, HTTP status, JSON parsing,
/// API-reported errors and unexpected response shapes all surface as a
/// `LookupFailure`. Callers tell them apart only by [`message`](Self::message);
/// the underlying cause, when there is one, is available through
/// [`std::error::Error::source`].
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct LookupFailure {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl LookupFailure {
    pub(crate) const BLANK_BREED: &'static str = "Breed must be non-empty";
    pub(crate) const ENCODE_FAILED: &'static str = "Failed to encode breed name";
    pub(crate) const FETCH_FAILED: &'static str = "Failed to fetch sub-breeds";
    pub(crate) const BREED_NOT_FOUND: &'static str = "Breed not found";
    pub(crate) const UNEXPECTED_SHAPE: &'static str = "Unexpected API response shape";

    /// Creates a failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure that wraps the error that caused it.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Failure for a non-success HTTP status or a response without a body.
    pub(crate) fn http_status(status: u16) -> Self {
        Self::new(format!("API call failed with HTTP {}", status))
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LookupFailure>;
