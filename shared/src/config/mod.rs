//! Deployment configuration for the BondiHub client
//!
//! Everything the client needs to know about its surroundings lives here:
//! which backend to talk to, which environment it runs in, and the static
//! application metadata (currency, support contacts, payment methods, map
//! defaults) that the UI layers render.

mod api;
mod app;
mod environment;

pub use api::ApiConfig;
pub use app::{AppConfig, FeatureFlags, MapDefaults, PaymentMethodInfo, SocialLinks, SupportContact};
pub use environment::Environment;

use thiserror::Error;

/// Errors raised while loading configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("{name} is not set. {hint}")]
    MissingVariable { name: &'static str, hint: &'static str },

    /// A variable is present but its value cannot be used
    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
