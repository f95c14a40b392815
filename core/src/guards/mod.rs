//! Navigation guards
//!
//! A guard is a pure function of (route record, auth snapshot, requested
//! URL). It performs no side effects: notices and redirects come back as
//! values for the navigation controller to act on, which keeps the gates
//! testable in isolation.

use crate::domain::user::Role;
use crate::routes::{paths, RouteRecord};
use crate::session::AuthState;

/// Severity of a notice attached to a denied navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// User-facing message explaining why navigation was denied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardNotice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl GuardNotice {
    fn login_required() -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: "Please log in to access this page",
        }
    }

    fn missing_role() -> Self {
        Self {
            level: NoticeLevel::Error,
            message: "You do not have permission to access this page",
        }
    }
}

/// Where a denied navigation should go instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Target route path
    pub to: &'static str,

    /// Originally requested path, preserved for post-login redirect
    pub return_url: Option<String>,

    /// Notice to surface alongside the redirect
    pub notice: GuardNotice,
}

/// Outcome of evaluating a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// The navigation may proceed
    Allowed,

    /// Denied; the caller should navigate to the redirect target instead
    RedirectTo(Redirect),

    /// Denied with nowhere to go (unknown target)
    Denied,
}

impl NavigationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, NavigationDecision::Allowed)
    }
}

/// Evaluate both gates for a navigation attempt, in order
///
/// 1. Authentication gate: a protected route without a session redirects
///    to login, carrying the requested URL for the post-login redirect.
/// 2. Role gate: a route with a declared role set admits only users
///    holding one of those roles; everyone else goes to the forbidden
///    route.
///
/// Public routes pass both gates untouched.
pub fn evaluate(route: &RouteRecord, auth: &AuthState, requested_url: &str) -> NavigationDecision {
    let needs_session = route.requires_auth || route.requires_role();

    if needs_session && !auth.is_authenticated {
        return NavigationDecision::RedirectTo(Redirect {
            to: paths::LOGIN,
            return_url: Some(requested_url.to_string()),
            notice: GuardNotice::login_required(),
        });
    }

    if route.requires_role() && !holds_required_role(auth, route.roles) {
        return NavigationDecision::RedirectTo(Redirect {
            to: paths::FORBIDDEN,
            return_url: None,
            notice: GuardNotice::missing_role(),
        });
    }

    NavigationDecision::Allowed
}

fn holds_required_role(auth: &AuthState, roles: &[Role]) -> bool {
    auth.has_any_role(roles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{SubscriptionPlan, User};
    use crate::routes::RouteTable;
    use chrono::Utc;
    use uuid::Uuid;

    fn auth_as(role: Role) -> AuthState {
        let mut user = User {
            id: Uuid::new_v4(),
            full_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "+260955000222".to_string(),
            role,
            roles: Vec::new(),
            is_active: true,
            is_verified: true,
            profile_image: None,
            subscription_plan: SubscriptionPlan::Basic,
            plan_expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        user.normalize_roles();
        AuthState::authenticated(user, "token".to_string())
    }

    fn route(path: &str) -> RouteRecord {
        *RouteTable::bondihub().find(path).unwrap()
    }

    #[test]
    fn test_public_route_allows_anonymous() {
        let decision = evaluate(&route(paths::LANDING), &AuthState::default(), paths::LANDING);
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_protected_route_redirects_anonymous_to_login() {
        let decision = evaluate(
            &route(paths::PAYMENTS),
            &AuthState::default(),
            "/app/payments",
        );

        match decision {
            NavigationDecision::RedirectTo(redirect) => {
                assert_eq!(redirect.to, paths::LOGIN);
                assert_eq!(redirect.return_url.as_deref(), Some("/app/payments"));
                assert_eq!(redirect.notice.level, NoticeLevel::Warning);
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_role_gate_redirects_to_forbidden() {
        let decision = evaluate(&route(paths::USERS), &auth_as(Role::Tenant), "/app/users");

        match decision {
            NavigationDecision::RedirectTo(redirect) => {
                assert_eq!(redirect.to, paths::FORBIDDEN);
                assert_eq!(redirect.return_url, None);
                assert_eq!(redirect.notice.level, NoticeLevel::Error);
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_role_gate_admits_member() {
        let decision = evaluate(&route(paths::USERS), &auth_as(Role::Admin), "/app/users");
        assert!(decision.is_allowed());

        let decision = evaluate(
            &route(paths::FAVORITES),
            &auth_as(Role::Tenant),
            "/app/favorites",
        );
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_authenticated_user_passes_plain_protected_route() {
        let decision = evaluate(&route(paths::HOUSES), &auth_as(Role::Agent), "/app/houses");
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_auth_gate_runs_before_role_gate() {
        // Anonymous user on a role-gated route gets the login redirect,
        // not the forbidden one
        let decision = evaluate(&route(paths::USERS), &AuthState::default(), "/app/users");
        match decision {
            NavigationDecision::RedirectTo(redirect) => assert_eq!(redirect.to, paths::LOGIN),
            other => panic!("expected redirect, got {:?}", other),
        }
    }
}
