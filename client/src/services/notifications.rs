//! Notification endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::notification::{
    Notification, NotificationFilters, NotificationListResponse, NotificationStats,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/notifications` endpoints
pub struct NotificationApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct NotificationEnvelope {
    notification: Notification,
}

impl NotificationApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /notifications`
    pub async fn list(
        &self,
        filters: &NotificationFilters,
    ) -> Result<NotificationListResponse, ApiError> {
        self.http.get_query("/notifications", filters).await
    }

    /// `GET /notifications/{id}`
    pub async fn get(&self, id: Uuid) -> Result<Notification, ApiError> {
        let envelope: NotificationEnvelope =
            self.http.get(&format!("/notifications/{}", id)).await?;
        Ok(envelope.notification)
    }

    /// `PUT /notifications/{id}/read`
    pub async fn mark_read(&self, id: Uuid) -> Result<Notification, ApiError> {
        let envelope: NotificationEnvelope = self
            .http
            .put_empty(&format!("/notifications/{}/read", id))
            .await?;
        Ok(envelope.notification)
    }

    /// `PUT /notifications/read-all`
    pub async fn mark_all_read(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.put_empty("/notifications/read-all").await?;
        Ok(())
    }

    /// `DELETE /notifications/{id}`
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.delete(&format!("/notifications/{}", id)).await?;
        Ok(())
    }

    /// `GET /notifications/stats`
    pub async fn stats(&self) -> Result<NotificationStats, ApiError> {
        self.http.get("/notifications/stats").await
    }
}
