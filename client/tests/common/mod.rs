//! Shared fixtures for the pipeline integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use bondi_client::HttpApi;
use bondi_core::domain::user::{Role, SubscriptionPlan, User};
use bondi_core::session::{MemoryCredentialStore, SessionContext};
use bondi_shared::config::ApiConfig;

/// A wired pipeline over an in-memory store, pointed at a mock server
pub struct TestClient {
    pub store: Arc<MemoryCredentialStore>,
    pub session: Arc<SessionContext>,
    pub http: Arc<HttpApi>,
}

/// Build a client whose base URL already includes the `/api/v1` prefix
pub fn client_for(server_url: &str) -> TestClient {
    let store = Arc::new(MemoryCredentialStore::new());
    let session = Arc::new(SessionContext::new(store.clone()));
    let config = ApiConfig::new(format!("{}/api/v1", server_url));
    let http = Arc::new(HttpApi::new(&config, session.clone()).expect("client construction"));
    TestClient {
        store,
        session,
        http,
    }
}

pub fn sample_user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        full_name: "Test Person".to_string(),
        email: "person@example.com".to_string(),
        phone: "+260977000999".to_string(),
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

/// A backend-shaped user record carrying only the single `role` member
pub fn user_json(id: Uuid, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "full_name": "Chipo Tembo",
        "email": "chipo@example.com",
        "phone": "+260966123123",
        "role": role,
        "is_active": true,
        "is_verified": true,
        "subscription_plan": "basic",
        "created_at": "2024-03-01T08:00:00Z",
        "updated_at": "2024-03-01T08:00:00Z"
    })
}
