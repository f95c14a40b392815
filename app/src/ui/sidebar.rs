//! Sidebar menu state
//!
//! Sections appear and disappear with the viewer's role; this is
//! visibility only, the guards still decide whether a navigation lands.

use serde::Serialize;

use bondi_core::routes::paths;
use bondi_core::session::AuthState;

/// One navigable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

/// A group of entries under an optional heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub heading: Option<&'static str>,
    pub items: Vec<MenuItem>,
}

const fn item(label: &'static str, route: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { label, route, icon }
}

/// Build the sidebar for the current session
pub fn sidebar_menu(auth: &AuthState) -> Vec<MenuSection> {
    let mut sections = vec![MenuSection {
        heading: None,
        items: vec![
            item("Dashboard", paths::DASHBOARD, "pi-home"),
            item("Browse Houses", paths::HOUSES, "pi-building"),
        ],
    }];

    if !auth.is_authenticated {
        return sections;
    }

    if auth.can_manage_houses() {
        sections.push(MenuSection {
            heading: Some("Property Management"),
            items: vec![
                item("My Properties", paths::HOUSES, "pi-building"),
                item("Agreements", paths::RENTALS, "pi-file-text"),
                item("Payments", paths::PAYMENTS, "pi-credit-card"),
                item("Maintenance", paths::MAINTENANCE, "pi-wrench"),
            ],
        });
    }

    if auth.can_make_payments() {
        sections.push(MenuSection {
            heading: Some("Tenant Services"),
            items: vec![
                item("Favorites", paths::FAVORITES, "pi-heart"),
                item("My Agreements", paths::RENTALS, "pi-file-text"),
                item("Payments", paths::PAYMENTS, "pi-credit-card"),
                item("Maintenance", paths::MAINTENANCE, "pi-wrench"),
            ],
        });
    }

    if auth.can_view_admin_panel() {
        sections.push(MenuSection {
            heading: Some("Administration"),
            items: vec![item("Users", paths::USERS, "pi-users")],
        });
    }

    sections.push(MenuSection {
        heading: Some("Account"),
        items: vec![
            item("Notifications", paths::NOTIFICATIONS, "pi-bell"),
            item("Profile", paths::PROFILE, "pi-user"),
        ],
    });

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondi_core::domain::user::{Role, SubscriptionPlan, User};
    use chrono::Utc;
    use uuid::Uuid;

    fn auth_as(role: Role) -> AuthState {
        let mut user = User {
            id: Uuid::new_v4(),
            full_name: "Sidebar User".to_string(),
            email: "sidebar@example.com".to_string(),
            phone: "+260955123789".to_string(),
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

    fn headings(sections: &[MenuSection]) -> Vec<&str> {
        sections.iter().filter_map(|s| s.heading).collect()
    }

    #[test]
    fn test_guest_sees_only_general_section() {
        let sections = sidebar_menu(&AuthState::default());
        assert_eq!(sections.len(), 1);
        assert!(sections[0].heading.is_none());
    }

    #[test]
    fn test_landlord_sections() {
        let sections = sidebar_menu(&auth_as(Role::Landlord));
        assert_eq!(
            headings(&sections),
            vec!["Property Management", "Account"]
        );
    }

    #[test]
    fn test_tenant_sections() {
        let sections = sidebar_menu(&auth_as(Role::Tenant));
        assert_eq!(headings(&sections), vec!["Tenant Services", "Account"]);
    }

    #[test]
    fn test_admin_sees_everything() {
        let sections = sidebar_menu(&auth_as(Role::Admin));
        assert_eq!(
            headings(&sections),
            vec![
                "Property Management",
                "Tenant Services",
                "Administration",
                "Account"
            ]
        );
    }

    #[test]
    fn test_agent_gets_no_role_sections() {
        let sections = sidebar_menu(&auth_as(Role::Agent));
        assert_eq!(headings(&sections), vec!["Account"]);
    }
}
