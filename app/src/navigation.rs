//! The navigation controller
//!
//! The single place where guard decisions and classified API failures
//! turn into actual location changes and toasts. Guards and the HTTP
//! pipeline stay side-effect-free; this controller consumes their
//! explicit outcomes.

use std::sync::{Arc, RwLock};

use tracing::debug;

use bondi_client::ApiError;
use bondi_core::guards::{self, NavigationDecision, NoticeLevel, Redirect};
use bondi_core::routes::{paths, RouteTable};
use bondi_core::session::SessionContext;

use crate::toast::{ToastLevel, ToastSink};

/// Query parameter carrying the originally requested path through login
const RETURN_URL_PARAM: &str = "returnUrl";

/// Applies guard decisions and failure redirects to the current location
pub struct NavigationController {
    routes: RouteTable,
    session: Arc<SessionContext>,
    toasts: Arc<dyn ToastSink>,
    location: RwLock<String>,
}

impl NavigationController {
    pub fn new(
        routes: RouteTable,
        session: Arc<SessionContext>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            routes,
            session,
            toasts,
            location: RwLock::new(paths::LANDING.to_string()),
        }
    }

    /// Where the user currently is
    pub fn location(&self) -> String {
        read_lock(&self.location).clone()
    }

    /// Attempt to navigate to `path`
    ///
    /// Looks up the route, runs both guards against a session snapshot,
    /// surfaces any guard notice as a toast and applies the redirect.
    /// Unknown paths are denied without moving.
    pub fn navigate(&self, path: &str) -> NavigationDecision {
        let Some(route) = self.routes.find(path) else {
            debug!(path, "Navigation denied: unknown route");
            return NavigationDecision::Denied;
        };

        let decision = guards::evaluate(route, &self.session.snapshot(), path);

        match &decision {
            NavigationDecision::Allowed => {
                debug!(path, "Navigation allowed");
                self.set_location(path.to_string());
            }
            NavigationDecision::RedirectTo(redirect) => {
                self.toast_notice(redirect);
                let target = redirect_location(redirect);
                debug!(path, to = %target, "Navigation redirected");
                self.set_location(target);
            }
            NavigationDecision::Denied => {}
        }

        decision
    }

    /// Surface a classified request failure
    ///
    /// Shows the user-facing message and applies the failure's explicit
    /// redirect (401 lands on login, 403 on the forbidden page).
    /// Returns the redirect target when one was applied.
    pub fn handle_failure(&self, error: &ApiError) -> Option<&'static str> {
        self.toasts.error(&error.user_message());

        let target = error.redirect()?;
        debug!(to = target, "Failure redirect applied");
        self.set_location(target.to_string());
        Some(target)
    }

    /// Complete a successful login: navigate to the preserved return URL
    /// when one is pending, the dashboard otherwise
    pub fn finish_login(&self) -> String {
        let target = self
            .pending_return_url()
            .unwrap_or_else(|| paths::DASHBOARD.to_string());
        self.navigate(&target);
        target
    }

    /// Return URL preserved by a login redirect, if any
    fn pending_return_url(&self) -> Option<String> {
        let location = self.location();
        let (path, query) = location.split_once('?')?;
        if path != paths::LOGIN {
            return None;
        }

        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", RETURN_URL_PARAM)))
            .map(str::to_string)
    }

    fn toast_notice(&self, redirect: &Redirect) {
        let level = match redirect.notice.level {
            NoticeLevel::Warning => ToastLevel::Warning,
            NoticeLevel::Error => ToastLevel::Error,
        };
        self.toasts.show(level, redirect.notice.message);
    }

    fn set_location(&self, location: String) {
        *write_lock(&self.location) = location;
    }
}

/// Location a redirect resolves to, with the return URL as a query
/// parameter when one is preserved
fn redirect_location(redirect: &Redirect) -> String {
    match &redirect.return_url {
        Some(url) => format!("{}?{}={}", redirect.to, RETURN_URL_PARAM, url),
        None => redirect.to.to_string(),
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
