//! # BondiHub App
//!
//! Presentation layer of the BondiHub client SDK. Owns the pieces with
//! side effects (the navigation controller, toast sink and logging) and
//! wires the whole client together with explicit construction: every
//! collaborator is built once in [`BondiApp::new`] and passed down, no
//! globals and no injection framework.

pub mod logging;
pub mod navigation;
pub mod toast;
pub mod ui;

pub use navigation::NavigationController;
pub use toast::{RecordingToasts, ToastLevel, ToastSink, TracingToasts};

use std::sync::Arc;

use bondi_client::{
    AdminApi, AuthApi, FavoriteApi, HouseApi, HttpApi, MaintenanceApi, NotificationApi, PaymentApi,
    RentalApi, ReviewApi,
};
use bondi_core::routes::RouteTable;
use bondi_core::session::{CredentialStore, SessionContext};
use bondi_shared::config::{ApiConfig, AppConfig, ConfigError};

/// The fully wired client
///
/// One session context (single writer), one HTTP pipeline reading from
/// it, one service wrapper per backend resource, and the navigation
/// controller consuming guard decisions and failure redirects.
pub struct BondiApp {
    pub config: AppConfig,
    pub session: Arc<SessionContext>,
    pub navigation: NavigationController,

    pub auth: AuthApi,
    pub houses: HouseApi,
    pub rentals: RentalApi,
    pub payments: PaymentApi,
    pub reviews: ReviewApi,
    pub maintenance: MaintenanceApi,
    pub favorites: FavoriteApi,
    pub notifications: NotificationApi,
    pub admin: AdminApi,
}

impl BondiApp {
    /// Wire the client from explicit configuration
    pub fn new(
        api_config: &ApiConfig,
        app_config: AppConfig,
        store: Arc<dyn CredentialStore>,
        toasts: Arc<dyn ToastSink>,
    ) -> Result<Self, ConfigError> {
        let session = Arc::new(SessionContext::new(store));
        let http = Arc::new(HttpApi::new(api_config, session.clone())?);
        let navigation =
            NavigationController::new(RouteTable::bondihub(), session.clone(), toasts);

        Ok(Self {
            config: app_config,
            session,
            navigation,
            auth: AuthApi::new(http.clone()),
            houses: HouseApi::new(http.clone()),
            rentals: RentalApi::new(http.clone()),
            payments: PaymentApi::new(http.clone()),
            reviews: ReviewApi::new(http.clone()),
            maintenance: MaintenanceApi::new(http.clone()),
            favorites: FavoriteApi::new(http.clone()),
            notifications: NotificationApi::new(http.clone()),
            admin: AdminApi::new(http),
        })
    }

    /// Wire the client from environment variables
    ///
    /// Fails hard with a descriptive message when the base URL variable
    /// is absent.
    pub fn from_env(
        store: Arc<dyn CredentialStore>,
        toasts: Arc<dyn ToastSink>,
    ) -> Result<Self, ConfigError> {
        let api_config = ApiConfig::from_env()?;
        Self::new(&api_config, AppConfig::default(), store, toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondi_core::routes::paths;
    use bondi_core::session::MemoryCredentialStore;

    #[test]
    fn test_wiring_starts_signed_out_on_landing() {
        let app = BondiApp::new(
            &ApiConfig::new("http://localhost:8080/api/v1"),
            AppConfig::default(),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingToasts::new()),
        )
        .unwrap();

        assert!(!app.session.is_authenticated());
        assert_eq!(app.navigation.location(), paths::LANDING);
    }
}
