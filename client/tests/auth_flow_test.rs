//! Login, logout and profile flows against a local mock backend.

mod common;

use httpmock::prelude::*;
use serde_json::json;
use uuid::Uuid;

use bondi_client::{ApiError, AuthApi};
use bondi_core::domain::user::{LoginRequest, Role, UpdateProfileRequest, User};
use bondi_core::session::{keys, CredentialStore};

use common::{client_for, sample_user, user_json};

#[tokio::test]
async fn login_persists_token_and_normalized_user() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());
    let user_id = Uuid::new_v4();

    // A stale session exists; logging in again must replace it
    client
        .session
        .set_authenticated(sample_user(Role::Tenant), "stale".to_string());

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/login")
                .json_body_partial(r#"{"email": "chipo@example.com"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "success": true,
                    "message": "Login successful",
                    "data": {
                        "user": user_json(user_id, "tenant"),
                        "token": "fresh-token"
                    }
                }));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    let response = auth
        .login(&LoginRequest {
            email: "chipo@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.token, "fresh-token");
    assert_eq!(response.user.id, user_id);

    // Token persisted, and the stored user carries the normalized roles
    // list even though the backend sent only `role`
    assert_eq!(client.store.get(keys::TOKEN), Some("fresh-token".to_string()));
    let stored: User =
        serde_json::from_str(&client.store.get(keys::USER).unwrap()).unwrap();
    assert_eq!(stored.roles, vec![Role::Tenant]);

    let state = client.session.snapshot();
    assert!(state.is_authenticated);
    assert!(state.is_tenant());
}

#[tokio::test]
async fn failed_login_clears_any_session_state() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());
    client
        .session
        .set_authenticated(sample_user(Role::Tenant), "old-token".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"success": false, "message": "Invalid credentials"}));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    let error = auth
        .login(&LoginRequest {
            email: "chipo@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized));
    assert_eq!(client.store.get(keys::TOKEN), None);
    assert_eq!(client.store.get(keys::USER), None);
    assert!(!client.session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_server_fails() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());
    client
        .session
        .set_authenticated(sample_user(Role::Landlord), "tok".to_string());
    client.store.set(keys::ROLES, "[\"landlord\"]");

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/logout");
            then.status(500)
                .header("content-type", "application/json")
                .json_body(json!({"success": false, "message": "boom"}));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    auth.logout().await;

    for key in keys::SESSION {
        assert_eq!(client.store.get(key), None, "{key} should be cleared");
    }
    assert!(!client.session.is_authenticated());
}

#[tokio::test]
async fn update_profile_refreshes_the_stored_user() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());
    client
        .session
        .set_authenticated(sample_user(Role::Tenant), "tok".to_string());

    let user_id = Uuid::new_v4();
    let mut updated = user_json(user_id, "tenant");
    updated["full_name"] = json!("Chipo T. Mwansa");

    server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/auth/profile")
                .header("authorization", "Bearer tok");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "success": true,
                    "message": "Profile updated successfully",
                    "data": {"user": updated}
                }));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    let user = auth
        .update_profile(&UpdateProfileRequest {
            full_name: Some("Chipo T. Mwansa".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(user.full_name, "Chipo T. Mwansa");

    let state = client.session.snapshot();
    assert_eq!(state.user.unwrap().full_name, "Chipo T. Mwansa");
    assert_eq!(state.token, Some("tok".to_string()));
}

#[tokio::test]
async fn check_auth_status_revalidates_and_clears_dead_sessions() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());
    client
        .session
        .set_authenticated(sample_user(Role::Tenant), "expired".to_string());

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/profile");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"success": false, "message": "Invalid or expired token"}));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    let state = auth.check_auth_status().await;

    assert!(!state.is_authenticated);
    assert_eq!(client.store.get(keys::TOKEN), None);
}

#[tokio::test]
async fn check_auth_status_without_token_skips_the_network() {
    let server = MockServer::start_async().await;
    let client = client_for(&server.base_url());

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/profile");
            then.status(200).json_body(json!({}));
        })
        .await;

    let auth = AuthApi::new(client.http.clone());
    let state = auth.check_auth_status().await;

    assert!(!state.is_authenticated);
    assert_eq!(mock.hits_async().await, 0);
}
