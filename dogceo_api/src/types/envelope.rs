//! The `{ "status": ..., "message": ... }` envelope every dog.ceo response uses.

use serde_json::{Map, Value};

use crate::errors::{LookupFailure, Result};

const STATUS_ERROR: &str = "error";

/// A parsed response body.
///
/// The API reports success or failure in the `status` field. On success
/// `message` holds the payload (an array of sub-breed names for the `list`
/// endpoint); on failure it holds a human-readable error string.
#[derive(Debug, Clone)]
pub struct ApiEnvelope {
    fields: Map<String, Value>,
}

impl ApiEnvelope {
    /// Parses a body that must be a JSON object.
    pub fn parse(body: &str) -> Result<Self> {
        let fields = serde_json::from_str::<Map<String, Value>>(body)
            .map_err(|e| LookupFailure::with_source(LookupFailure::FETCH_FAILED, e))?;
        Ok(Self { fields })
    }

    /// The `status` field. Missing or `null` counts as `"error"`; non-string
    /// values are read as their JSON text.
    pub fn status(&self) -> String {
        text_or(self.fields.get("status"), STATUS_ERROR)
    }

    pub fn is_error(&self) -> bool {
        self.status().eq_ignore_ascii_case(STATUS_ERROR)
    }

    /// Converts the envelope into the sub-breed list, or the failure it reports.
    pub fn into_sub_breeds(mut self) -> Result<Vec<String>> {
        if self.is_error() {
            let message = text_or(self.fields.get("message"), LookupFailure::BREED_NOT_FOUND);
            return Err(LookupFailure::new(message));
        }

        match self.fields.remove("message") {
            Some(message @ Value::Array(_)) => serde_json::from_value::<Vec<String>>(message)
                .map_err(|e| LookupFailure::with_source(LookupFailure::FETCH_FAILED, e)),
            _ => Err(LookupFailure::new(LookupFailure::UNEXPECTED_SHAPE)),
        }
    }
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
