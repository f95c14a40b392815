//! Header state: brand, public links and the user menu.

use serde::Serialize;

use bondi_core::routes::paths;
use bondi_core::session::AuthState;
use bondi_shared::config::AppConfig;

/// What activating a menu entry should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuAction {
    Navigate(&'static str),
    Logout,
}

/// One entry in the user dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: MenuAction,
}

/// The right-hand side of the header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UserMenu {
    /// Signed out: login and sign-up links
    Guest {
        login_route: &'static str,
        register_route: &'static str,
    },
    /// Signed in: avatar, dropdown and the unread-notification badge
    Authenticated {
        display_name: String,
        avatar: Option<String>,
        unread_notifications: u64,
        entries: Vec<MenuEntry>,
    },
}

/// Header view state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub brand: String,
    pub nav_links: Vec<(&'static str, &'static str)>,
    pub menu: UserMenu,
}

impl HeaderView {
    /// Build the header for the current session
    pub fn build(config: &AppConfig, auth: &AuthState, unread_notifications: u64) -> Self {
        let menu = match &auth.user {
            Some(user) if auth.is_authenticated => UserMenu::Authenticated {
                display_name: user.full_name.clone(),
                avatar: user.profile_image.clone(),
                unread_notifications,
                entries: vec![
                    MenuEntry {
                        label: "Profile",
                        icon: "pi-user",
                        action: MenuAction::Navigate(paths::PROFILE),
                    },
                    MenuEntry {
                        label: "Dashboard",
                        icon: "pi-home",
                        action: MenuAction::Navigate(paths::DASHBOARD),
                    },
                    MenuEntry {
                        label: "Notifications",
                        icon: "pi-bell",
                        action: MenuAction::Navigate(paths::NOTIFICATIONS),
                    },
                    MenuEntry {
                        label: "Logout",
                        icon: "pi-sign-out",
                        action: MenuAction::Logout,
                    },
                ],
            },
            _ => UserMenu::Guest {
                login_route: paths::LOGIN,
                register_route: paths::REGISTER,
            },
        };

        Self {
            brand: config.app_name.clone(),
            nav_links: vec![("Browse Houses", paths::HOUSES)],
            menu,
        }
    }
}
