//! Pure failure classification
//!
//! Everything here is a function of the observed response (or transport
//! error) and nothing else, so the entire table in the error-handling
//! design is unit-testable without a network.

use reqwest::StatusCode;
use serde_json::Value;

use bondi_shared::types::ErrorBody;

use crate::error::ApiError;

/// Endpoints that are called before a session exists and must never
/// carry a bearer token
const AUTH_EXEMPT: [&str; 2] = ["/auth/login", "/auth/register"];

/// Whether a request path is exempt from bearer attachment
pub fn is_auth_exempt(path: &str) -> bool {
    AUTH_EXEMPT.iter().any(|exempt| path.contains(exempt))
}

/// Classify a non-success HTTP response into an [`ApiError`]
///
/// The body may be any JSON value; non-object bodies (HTML error pages
/// passed through as strings) simply yield the defaults.
pub fn classify_response(status: StatusCode, body: &Value) -> ApiError {
    let error_body = ErrorBody::from_value(body);
    let backend_message = error_body.primary_message().map(str::to_string);

    match status.as_u16() {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden {
            message: backend_message
                .unwrap_or_else(|| "Access denied. Insufficient permissions.".to_string()),
        },
        404 => ApiError::NotFound,
        409 => ApiError::Conflict {
            message: backend_message.unwrap_or_else(|| "Conflict occurred".to_string()),
        },
        422 => ApiError::Validation {
            message: error_body
                .flattened_field_errors()
                .or(backend_message)
                .unwrap_or_else(|| "Validation error".to_string()),
        },
        429 => ApiError::RateLimited,
        status_code if status_code >= 500 => ApiError::Server {
            status: status_code,
            message: backend_message
                .unwrap_or_else(|| format!("Server error ({})", status_code)),
        },
        400 => match error_body.flattened_field_errors() {
            // Some endpoints report validation failures as 400 with the
            // same field-error map
            Some(message) => ApiError::Validation { message },
            None => ApiError::BadRequest {
                message: backend_message.unwrap_or_else(|| "Bad request".to_string()),
            },
        },
        _ => ApiError::BadRequest {
            message: backend_message
                .unwrap_or_else(|| format!("Error {}", status.as_u16())),
        },
    }
}

/// Classify a transport-level failure (no HTTP response received)
pub fn classify_transport(err: &reqwest::Error, base_url: &str) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }

    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }

    let detail = error_chain_text(err);
    if looks_like_cors(&detail) {
        return ApiError::Cors {
            message: format!(
                "CORS configuration error: the backend API at {} is not configured to allow requests from this origin.",
                base_url
            ),
        };
    }

    ApiError::Network
}

/// Heuristic for blocked cross-origin requests
///
/// Outside a browser there is no CORS enforcement, so this only looks at
/// the failure text, the same signal the shipped clients had.
fn looks_like_cors(detail: &str) -> bool {
    let lowered = detail.to_lowercase();
    lowered.contains("cors") || lowered.contains("access-control-allow-origin")
}

fn error_chain_text(err: &reqwest::Error) -> String {
    use std::error::Error as _;

    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
