//! User entity and the authentication request/response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user holds in the marketplace
///
/// Roles gate navigation and UI visibility only; every real permission
/// check happens server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Lists and manages houses
    Landlord,
    /// Rents houses, pays rent, files maintenance requests
    Tenant,
    /// Brokers listings on behalf of landlords
    Agent,
    /// Platform administrator
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Landlord => write!(f, "landlord"),
            Role::Tenant => write!(f, "tenant"),
            Role::Agent => write!(f, "agent"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// Subscription tier a user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Premium,
    Enterprise,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    pub full_name: String,

    pub email: String,

    pub phone: String,

    /// Primary role returned by the backend
    pub role: Role,

    /// Normalized role list; empty when the backend sent only `role`
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Whether the account is enabled
    #[serde(default)]
    pub is_active: bool,

    /// Whether the account passed identity verification
    #[serde(default)]
    pub is_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    pub subscription_plan: SubscriptionPlan,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_expiry_date: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Fold the primary `role` into the `roles` list when the backend
    /// sent none. Persisted user records always carry a populated list.
    pub fn normalize_roles(&mut self) {
        if self.roles.is_empty() {
            self.roles = vec![self.role];
        }
    }

    /// Check membership against the normalized list, falling back to the
    /// primary role when no list was sent
    pub fn has_role(&self, role: Role) -> bool {
        if self.roles.is_empty() {
            self.role == role
        } else {
            self.roles.contains(&role)
        }
    }

    /// Check whether the user holds any of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

/// Credentials submitted to `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
}

/// Successful authentication payload: the user plus an opaque bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Payload for `PUT /auth/profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Payload for `PUT /auth/change-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Chanda Mwila".to_string(),
            email: "chanda@example.com".to_string(),
            phone: "+260977123456".to_string(),
            role,
            roles: Vec::new(),
            is_active: true,
            is_verified: false,
            profile_image: None,
            subscription_plan: SubscriptionPlan::Basic,
            plan_expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_normalize_roles_folds_primary_role() {
        let mut user = sample_user(Role::Tenant);
        user.normalize_roles();
        assert_eq!(user.roles, vec![Role::Tenant]);
    }

    #[test]
    fn test_normalize_roles_keeps_existing_list() {
        let mut user = sample_user(Role::Tenant);
        user.roles = vec![Role::Tenant, Role::Agent];
        user.normalize_roles();
        assert_eq!(user.roles, vec![Role::Tenant, Role::Agent]);
    }

    #[test]
    fn test_has_role_without_list_uses_primary() {
        let user = sample_user(Role::Landlord);
        assert!(user.has_role(Role::Landlord));
        assert!(!user.has_role(Role::Admin));
    }

    #[test]
    fn test_has_any_role() {
        let mut user = sample_user(Role::Tenant);
        user.normalize_roles();
        assert!(user.has_any_role(&[Role::Tenant, Role::Admin]));
        assert!(!user.has_any_role(&[Role::Landlord, Role::Admin]));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Landlord).unwrap(), "\"landlord\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_user_deserializes_without_roles_list() {
        let json = serde_json::json!({
            "id": "7b6915c1-7a39-4a39-8e5e-0d9a36a2f001",
            "full_name": "Chanda Mwila",
            "email": "chanda@example.com",
            "phone": "+260977123456",
            "role": "tenant",
            "is_active": true,
            "is_verified": true,
            "subscription_plan": "basic",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.roles.is_empty());
        assert_eq!(user.role, Role::Tenant);
    }
}
