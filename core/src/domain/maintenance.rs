//! Maintenance request entity, filters and statistics payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::house::House;
use super::user::User;

/// Workflow state of a maintenance request; server-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Resolved,
    Cancelled,
}

/// A tenant-reported maintenance issue on a house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub house_id: Uuid,

    pub title: String,

    pub description: String,

    pub status: MaintenanceStatus,

    /// Free-form priority label (low/medium/high/urgent)
    pub priority: String,

    pub reported_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<House>,
}

/// Payload for `POST /maintenance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub house_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: String,
}

/// Payload for `PUT /maintenance/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMaintenanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
}

/// List filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /maintenance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceListResponse {
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub pagination: PaginationInfo,
}

/// Response of `GET /maintenance/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceStats {
    pub total_requests: u64,

    #[serde(default)]
    pub requests_by_status: Vec<StatusCount>,

    #[serde(default)]
    pub requests_by_priority: Vec<PriorityCount>,

    #[serde(default)]
    pub avg_resolution_days: f64,
}

/// Count of requests in one workflow state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

/// Count of requests at one priority label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: u64,
}
