//! Shared configuration and common types for the BondiHub client SDK
//!
//! This crate provides functionality used across the client workspace:
//! - Deployment configuration (API endpoint, app metadata, feature flags)
//! - The backend response envelope and error body shapes
//! - Pagination types forwarded to and mirrored from list endpoints

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    ApiConfig, AppConfig, ConfigError, Environment, FeatureFlags, MapDefaults, PaymentMethodInfo,
    SocialLinks, SupportContact,
};
pub use types::{
    unwrap_envelope, ApiEnvelope, ErrorBody, PaginationInfo, PaginationQuery,
};
