//! Authentication endpoints and their session side effects
//!
//! This is the only service that writes to the session: login and
//! registration persist the returned token and user, profile updates
//! refresh the stored user, and logout clears everything even when the
//! server call fails.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use bondi_core::domain::user::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest, User,
};
use bondi_core::session::{AuthState, SessionContext};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/auth` endpoints
pub struct AuthApi {
    http: Arc<HttpApi>,
    session: Arc<SessionContext>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

impl AuthApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        let session = http.session().clone();
        Self { http, session }
    }

    /// `POST /auth/login`
    ///
    /// On success the token and the normalized user are persisted into
    /// the session; on failure any half-open session is cleared.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        match self
            .http
            .post::<AuthResponse, _>("/auth/login", credentials)
            .await
        {
            Ok(auth) => {
                self.session
                    .set_authenticated(auth.user.clone(), auth.token.clone());
                info!(user_id = %auth.user.id, "Login succeeded");
                Ok(auth)
            }
            Err(e) => {
                self.session.clear();
                Err(e)
            }
        }
    }

    /// `POST /auth/register`; persists the session like a login
    pub async fn register(&self, user_data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        match self
            .http
            .post::<AuthResponse, _>("/auth/register", user_data)
            .await
        {
            Ok(auth) => {
                self.session
                    .set_authenticated(auth.user.clone(), auth.token.clone());
                info!(user_id = %auth.user.id, "Registration succeeded");
                Ok(auth)
            }
            Err(e) => {
                self.session.clear();
                Err(e)
            }
        }
    }

    /// `GET /auth/profile`
    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.http.get("/auth/profile").await?;
        Ok(envelope.user)
    }

    /// `PUT /auth/profile`; refreshes the stored user on success
    pub async fn update_profile(&self, profile: &UpdateProfileRequest) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.http.put("/auth/profile", profile).await?;
        self.session.update_user(envelope.user.clone());
        Ok(envelope.user)
    }

    /// `PUT /auth/change-password`
    pub async fn change_password(&self, passwords: &ChangePasswordRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.put("/auth/change-password", passwords).await?;
        Ok(())
    }

    /// Revalidate a persisted session against the profile endpoint
    ///
    /// A missing token short-circuits to signed-out; a failing profile
    /// call clears the session. Either way the caller gets the resulting
    /// snapshot rather than an error.
    pub async fn check_auth_status(&self) -> AuthState {
        let Some(token) = self.session.token() else {
            return AuthState::default();
        };

        match self.profile().await {
            Ok(user) => {
                self.session.set_authenticated(user, token);
                self.session.snapshot()
            }
            Err(e) => {
                debug!("Session revalidation failed: {}", e);
                self.session.clear();
                AuthState::default()
            }
        }
    }

    /// `POST /auth/logout`, best effort
    ///
    /// The local session is cleared regardless of what the server says.
    pub async fn logout(&self) {
        if let Err(e) = self.http.post_empty::<serde_json::Value>("/auth/logout").await {
            warn!("Logout request failed, clearing session anyway: {}", e);
        }
        self.session.clear();
    }
}
