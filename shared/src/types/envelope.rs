//! The backend response envelope and error body
//!
//! The backend wraps most bodies as `{"success": .., "message": .., "data": ..}`
//! but returns some raw. Callers always want the payload, so unwrapping
//! prefers the `data` member and falls back to the whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard response envelope as emitted by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request was successful
    #[serde(default)]
    pub success: bool,

    /// Human-readable status message
    #[serde(default)]
    pub message: Option<String>,

    /// Response payload (absent on failures and bare acknowledgements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error detail string (present on failures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Extract the payload from a response body that may or may not be enveloped
///
/// A JSON object with a non-null `data` member yields that member;
/// anything else is deserialized as the payload itself.
pub fn unwrap_envelope<T: DeserializeOwned>(body: serde_json::Value) -> serde_json::Result<T> {
    match body {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => serde_json::from_value(data),
            _ => serde_json::from_value(serde_json::Value::Object(map)),
        },
        other => serde_json::from_value(other),
    }
}

/// Failure body shape used for message extraction
///
/// Different endpoints populate different members; `primary_message`
/// applies the same precedence the shipped clients did.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    /// Field-level validation failures: field name to message list
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Parse a failure body, tolerating non-JSON and non-object payloads
    pub fn from_value(body: &serde_json::Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    /// Backend-supplied message with `message` > `title` > `error` precedence
    pub fn primary_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.title.as_deref())
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
    }

    /// Comma-joined flattening of every field validation message
    ///
    /// Field order follows sorted field names so the output is stable.
    pub fn flattened_field_errors(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        if errors.is_empty() {
            return None;
        }

        let mut fields: Vec<&String> = errors.keys().collect();
        fields.sort();

        let joined = fields
            .iter()
            .flat_map(|field| errors[*field].iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
