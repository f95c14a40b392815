//! Admin-only endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::admin::{
    AdminDashboard, AdminUserFilters, AdminUserListResponse, ReportQuery, UpdateUserStatusRequest,
};
use bondi_core::domain::user::User;

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/admin` endpoints; the backend enforces the admin role on all of them
pub struct AdminApi {
    http: Arc<HttpApi>,
}

impl AdminApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /admin/dashboard`
    pub async fn dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.http.get("/admin/dashboard").await
    }

    /// `GET /admin/users`
    pub async fn users(&self, filters: &AdminUserFilters) -> Result<AdminUserListResponse, ApiError> {
        self.http.get_query("/admin/users", filters).await
    }

    /// `PUT /admin/users/{id}/status`
    pub async fn update_user_status(
        &self,
        user_id: Uuid,
        status: &UpdateUserStatusRequest,
    ) -> Result<User, ApiError> {
        #[derive(Deserialize)]
        struct UserEnvelope {
            user: User,
        }
        let envelope: UserEnvelope = self
            .http
            .put(&format!("/admin/users/{}/status", user_id), status)
            .await?;
        Ok(envelope.user)
    }

    /// `GET /admin/reports`; report documents vary per type and stay
    /// untyped
    pub async fn reports(&self, query: &ReportQuery) -> Result<serde_json::Value, ApiError> {
        self.http.get_query("/admin/reports", query).await
    }
}
