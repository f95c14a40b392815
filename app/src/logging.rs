//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use bondi_shared::config::Environment;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the environment's default level
/// applies. Calling twice is a no-op so tests can initialize freely.
pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
