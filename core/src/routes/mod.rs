//! The client-side route table
//!
//! Route metadata is data, not behavior: each record declares whether a
//! route needs a session and which roles may enter. Guards evaluate the
//! records; nothing here inspects the session itself.

use crate::domain::user::Role;

/// Well-known route paths
pub mod paths {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const FORBIDDEN: &str = "/forbidden";

    pub const DASHBOARD: &str = "/app/dashboard";
    pub const PROFILE: &str = "/app/profile";
    pub const USERS: &str = "/app/users";
    pub const HOUSES: &str = "/app/houses";
    pub const RENTALS: &str = "/app/rentals";
    pub const PAYMENTS: &str = "/app/payments";
    pub const MAINTENANCE: &str = "/app/maintenance";
    pub const FAVORITES: &str = "/app/favorites";
    pub const NOTIFICATIONS: &str = "/app/notifications";
}

/// One navigable route and its access requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,

    pub name: &'static str,

    /// Whether entering requires a session
    pub requires_auth: bool,

    /// Roles allowed in; empty means any authenticated user
    pub roles: &'static [Role],
}

impl RouteRecord {
    const fn public(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
            roles: &[],
        }
    }

    const fn protected(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
            roles: &[],
        }
    }

    const fn restricted(path: &'static str, name: &'static str, roles: &'static [Role]) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
            roles,
        }
    }

    /// Whether this route declares a required role set
    pub fn requires_role(&self) -> bool {
        !self.roles.is_empty()
    }
}

/// The navigable routes of the application
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    /// The BondiHub route table as shipped
    pub fn bondihub() -> Self {
        Self {
            routes: vec![
                RouteRecord::public(paths::LANDING, "landing"),
                RouteRecord::public(paths::LOGIN, "login"),
                RouteRecord::public(paths::REGISTER, "register"),
                RouteRecord::public(paths::FORBIDDEN, "forbidden"),
                RouteRecord::protected(paths::DASHBOARD, "dashboard"),
                RouteRecord::protected(paths::PROFILE, "profile"),
                RouteRecord::restricted(paths::USERS, "users", &[Role::Admin]),
                RouteRecord::protected(paths::HOUSES, "houses"),
                RouteRecord::protected(paths::RENTALS, "rentals"),
                RouteRecord::protected(paths::PAYMENTS, "payments"),
                RouteRecord::protected(paths::MAINTENANCE, "maintenance"),
                RouteRecord::restricted(paths::FAVORITES, "favorites", &[Role::Tenant, Role::Admin]),
                RouteRecord::protected(paths::NOTIFICATIONS, "notifications"),
            ],
        }
    }

    /// Build a table from custom records
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// Look up a route by exact path, ignoring any query string
    pub fn find(&self, path: &str) -> Option<&RouteRecord> {
        let path = path.split('?').next().unwrap_or(path);
        self.routes.iter().find(|r| r.path == path)
    }

    /// Look up a route by name
    pub fn find_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// All records, in declaration order
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }
}
