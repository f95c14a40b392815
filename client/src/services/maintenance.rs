//! Maintenance request endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::maintenance::{
    CreateMaintenanceRequest, MaintenanceFilters, MaintenanceListResponse, MaintenanceRequest,
    MaintenanceStats, UpdateMaintenanceRequest,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/maintenance` endpoints
pub struct MaintenanceApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct RequestEnvelope {
    maintenance_request: MaintenanceRequest,
}

impl MaintenanceApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /maintenance`
    pub async fn list(
        &self,
        filters: &MaintenanceFilters,
    ) -> Result<MaintenanceListResponse, ApiError> {
        self.http.get_query("/maintenance", filters).await
    }

    /// `GET /maintenance/{id}`
    pub async fn get(&self, id: Uuid) -> Result<MaintenanceRequest, ApiError> {
        let envelope: RequestEnvelope = self.http.get(&format!("/maintenance/{}", id)).await?;
        Ok(envelope.maintenance_request)
    }

    /// `POST /maintenance`
    pub async fn create(
        &self,
        request: &CreateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, ApiError> {
        let envelope: RequestEnvelope = self.http.post("/maintenance", request).await?;
        Ok(envelope.maintenance_request)
    }

    /// `PUT /maintenance/{id}`
    pub async fn update(
        &self,
        id: Uuid,
        changes: &UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, ApiError> {
        let envelope: RequestEnvelope = self
            .http
            .put(&format!("/maintenance/{}", id), changes)
            .await?;
        Ok(envelope.maintenance_request)
    }

    /// `GET /maintenance/stats`
    pub async fn stats(&self) -> Result<MaintenanceStats, ApiError> {
        self.http.get("/maintenance/stats").await
    }
}
