//! Breed name normalization.

use std::fmt;

use url::form_urlencoded;

use crate::errors::{LookupFailure, Result};

/// A breed name that is safe to send to the API: trimmed, non-empty and
/// lower-cased with ASCII-only case mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedName(String);

impl BreedName {
    /// Validates and normalizes user input.
    ///
    /// Blank input is rejected before anything touches the network.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupFailure::new(LookupFailure::BLANK_BREED));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Form-urlencoded form of the name, for use as a single path segment.
    pub fn encoded(&self) -> String {
        form_urlencoded::byte_serialize(self.0.as_bytes()).collect()
    }
}

impl AsRef<str> for BreedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
