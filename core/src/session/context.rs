//! The owned session context and its read-only snapshots.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::user::{Role, User};

use super::store::{keys, CredentialStore};

/// Read-only view of the current session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    /// Snapshot for a signed-in user
    pub fn authenticated(user: User, token: String) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
            token: Some(token),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_role(role))
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_any_role(roles))
    }

    pub fn is_landlord(&self) -> bool {
        self.has_role(Role::Landlord)
    }

    pub fn is_tenant(&self) -> bool {
        self.has_role(Role::Tenant)
    }

    pub fn is_agent(&self) -> bool {
        self.has_role(Role::Agent)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    // Capability helpers: these gate UI visibility only, never server
    // permissions.

    pub fn can_manage_houses(&self) -> bool {
        self.has_any_role(&[Role::Landlord, Role::Admin])
    }

    pub fn can_make_payments(&self) -> bool {
        self.has_any_role(&[Role::Tenant, Role::Admin])
    }

    pub fn can_view_admin_panel(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn can_create_agreements(&self) -> bool {
        self.has_any_role(&[Role::Landlord, Role::Admin])
    }

    pub fn can_request_maintenance(&self) -> bool {
        self.has_any_role(&[Role::Tenant, Role::Admin])
    }
}

/// Single writer over the session
///
/// Owns the credential store and the in-memory mirror. Constructed once at
/// startup and shared as `Arc<SessionContext>`; everything that only needs
/// to read takes a [`snapshot`](SessionContext::snapshot).
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
    state: RwLock<AuthState>,
}

impl SessionContext {
    /// Create a context seeded from the store
    ///
    /// A persisted token plus a parseable user record restores the
    /// session; a corrupt user record clears the store instead of
    /// failing startup.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let state = Self::seed(&*store);
        Self {
            store,
            state: RwLock::new(state),
        }
    }

    fn seed(store: &dyn CredentialStore) -> AuthState {
        let token = store.get(keys::TOKEN);
        let user_blob = store.get(keys::USER);

        match (token, user_blob) {
            (Some(token), Some(blob)) => match serde_json::from_str::<User>(&blob) {
                Ok(user) => {
                    debug!(user_id = %user.id, "Restored session from store");
                    AuthState::authenticated(user, token)
                }
                Err(e) => {
                    warn!("Clearing session: persisted user record is corrupt: {}", e);
                    store.clear_session();
                    AuthState::default()
                }
            },
            _ => AuthState::default(),
        }
    }

    /// Read-only snapshot of the current session
    pub fn snapshot(&self) -> AuthState {
        read_lock(&self.state).clone()
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        read_lock(&self.state).token.clone()
    }

    /// Current user, if signed in
    pub fn current_user(&self) -> Option<User> {
        read_lock(&self.state).user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        read_lock(&self.state).is_authenticated
    }

    /// Record a successful login or registration
    ///
    /// Normalizes the user's `role` into its `roles` list before
    /// persisting, so stored records always carry a populated list.
    pub fn set_authenticated(&self, mut user: User, token: String) {
        user.normalize_roles();

        self.store.set(keys::TOKEN, &token);
        self.persist_user(&user);

        let mut state = write_lock(&self.state);
        *state = AuthState::authenticated(user, token);
    }

    /// Replace the stored user after a profile update
    ///
    /// Leaves authentication status and token untouched.
    pub fn update_user(&self, mut user: User) {
        user.normalize_roles();
        self.persist_user(&user);

        let mut state = write_lock(&self.state);
        state.user = Some(user);
    }

    /// Drop the session: every persisted key and the in-memory mirror
    pub fn clear(&self) {
        self.store.clear_session();
        let mut state = write_lock(&self.state);
        *state = AuthState::default();
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(blob) => self.store.set(keys::USER, &blob),
            Err(e) => warn!("Failed to serialize user for persistence: {}", e),
        }
    }

    /// The underlying store, for callers that persist adjacent keys
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::SubscriptionPlan;
    use crate::session::store::MemoryCredentialStore;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Bwalya Phiri".to_string(),
            email: "bwalya@example.com".to_string(),
            phone: "+260966000111".to_string(),
            role,
            roles: Vec::new(),
            is_active: true,
            is_verified: true,
            profile_image: None,
            subscription_plan: SubscriptionPlan::Basic,
            plan_expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_unauthenticated_with_empty_store() {
        let session = SessionContext::new(Arc::new(MemoryCredentialStore::new()));
        let state = session.snapshot();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_set_authenticated_persists_and_normalizes() {
        let store = Arc::new(MemoryCredentialStore::new());
        let session = SessionContext::new(store.clone());

        session.set_authenticated(sample_user(Role::Tenant), "tok-1".to_string());

        assert_eq!(store.get(keys::TOKEN), Some("tok-1".to_string()));
        let persisted: User = serde_json::from_str(&store.get(keys::USER).unwrap()).unwrap();
        assert_eq!(persisted.roles, vec![Role::Tenant]);

        let state = session.snapshot();
        assert!(state.is_authenticated);
        assert!(state.is_tenant());
        assert!(state.can_make_payments());
        assert!(!state.can_manage_houses());
    }

    #[test]
    fn test_seed_restores_persisted_session() {
        let store = Arc::new(MemoryCredentialStore::new());
        {
            let session = SessionContext::new(store.clone());
            session.set_authenticated(sample_user(Role::Landlord), "tok-2".to_string());
        }

        let restored = SessionContext::new(store);
        assert!(restored.is_authenticated());
        assert!(restored.snapshot().is_landlord());
        assert_eq!(restored.token(), Some("tok-2".to_string()));
    }

    #[test]
    fn test_seed_clears_corrupt_user_record() {
        let store = Arc::new(MemoryCredentialStore::new());
        store.set(keys::TOKEN, "tok-3");
        store.set(keys::USER, "{not valid json");
        store.set(keys::REFRESH_TOKEN, "refresh-3");

        let session = SessionContext::new(store.clone());

        assert!(!session.is_authenticated());
        assert_eq!(store.get(keys::TOKEN), None);
        assert_eq!(store.get(keys::USER), None);
        assert_eq!(store.get(keys::REFRESH_TOKEN), None);
    }

    #[test]
    fn test_clear_removes_all_session_keys() {
        let store = Arc::new(MemoryCredentialStore::new());
        store.set(keys::REFRESH_TOKEN, "refresh");
        store.set(keys::ROLES, "[\"tenant\"]");
        store.set(keys::PERMISSIONS, "[]");

        let session = SessionContext::new(store.clone());
        session.set_authenticated(sample_user(Role::Tenant), "tok-4".to_string());
        session.clear();

        for key in keys::SESSION {
            assert_eq!(store.get(key), None, "{key} should be cleared");
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_update_user_keeps_token() {
        let session = SessionContext::new(Arc::new(MemoryCredentialStore::new()));
        session.set_authenticated(sample_user(Role::Agent), "tok-5".to_string());

        let mut updated = sample_user(Role::Agent);
        updated.full_name = "Bwalya P. Phiri".to_string();
        session.update_user(updated);

        let state = session.snapshot();
        assert_eq!(state.token, Some("tok-5".to_string()));
        assert_eq!(state.user.unwrap().full_name, "Bwalya P. Phiri");
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_admin_capabilities() {
        let session = SessionContext::new(Arc::new(MemoryCredentialStore::new()));
        session.set_authenticated(sample_user(Role::Admin), "tok-6".to_string());

        let state = session.snapshot();
        assert!(state.can_manage_houses());
        assert!(state.can_make_payments());
        assert!(state.can_view_admin_panel());
        assert!(state.can_create_agreements());
        assert!(state.can_request_maintenance());
    }
}
