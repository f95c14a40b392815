//! The failure taxonomy every request resolves to
//!
//! Each HTTP failure is converted once into a human-readable
//! [`ApiError`]. Redirects are data, not side effects: callers (the
//! navigation controller in practice) ask [`ApiError::redirect`] where
//! the user should land.

use thiserror::Error;

use bondi_core::routes::paths;

/// Classified failure of one request
#[derive(Error, Debug)]
pub enum ApiError {
    /// 401: the session is no longer valid and has been cleared
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    /// 403: the backend refused the action for this user
    #[error("{message}")]
    Forbidden { message: String },

    /// 404
    #[error("Resource not found")]
    NotFound,

    /// 409: backend-reported conflict
    #[error("{message}")]
    Conflict { message: String },

    /// 422 (or a validation-shaped 400): flattened field errors
    #[error("{message}")]
    Validation { message: String },

    /// 429
    #[error("Too many requests. Please try again later")]
    RateLimited,

    /// 5xx
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Any other 4xx
    #[error("{message}")]
    BadRequest { message: String },

    /// No response; the failure looks like a blocked cross-origin request
    #[error("{message}")]
    Cors { message: String },

    /// No response: connectivity failure
    #[error("Network error. Please check your connection.")]
    Network,

    /// The fixed per-request timeout elapsed
    #[error("The request timed out. Please try again.")]
    Timeout,

    /// The response arrived but its body was not what the caller expected
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to surface to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status that produced this failure, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Conflict { .. } => Some(409),
            ApiError::Validation { .. } => Some(422),
            ApiError::RateLimited => Some(429),
            ApiError::Server { status, .. } => Some(*status),
            ApiError::BadRequest { .. } => Some(400),
            _ => None,
        }
    }

    /// Route the user should be sent to because of this failure
    ///
    /// 401 ends the session and lands on login; 403 lands on the
    /// forbidden page. Everything else stays put.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            ApiError::Unauthorized => Some(paths::LOGIN),
            ApiError::Forbidden { .. } => Some(paths::FORBIDDEN),
            _ => None,
        }
    }

    /// Whether this failure never reached the backend
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Cors { .. } | ApiError::Network | ApiError::Timeout
        )
    }
}
