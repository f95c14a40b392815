//! Admin dashboard, user management and reporting payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bondi_shared::types::PaginationInfo;

use super::user::{Role, User};

/// Response of `GET /admin/dashboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub users: UserTotals,
    pub houses: HouseTotals,
    pub agreements: AgreementTotals,
    pub payments: PaymentTotals,
    pub maintenance: MaintenanceTotals,
    pub reviews: ReviewTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTotals {
    pub total: u64,
    #[serde(default)]
    pub by_role: Vec<RoleCount>,
    /// Registrations in the last 30 days
    #[serde(default)]
    pub recent: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseTotals {
    pub total: u64,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
    #[serde(default)]
    pub recent: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementTotals {
    pub total: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub total: u64,
    pub revenue: f64,
    pub commission: f64,
    #[serde(default)]
    pub by_method: Vec<MethodTotals>,
    #[serde(default)]
    pub recent: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodTotals {
    pub method: String,
    pub count: u64,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTotals {
    pub total: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewTotals {
    pub total: u64,
    #[serde(default)]
    pub average_rating: f64,
}

/// Filters for `GET /admin/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUserFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Free-text search over name and email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /admin/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserListResponse {
    pub users: Vec<User>,
    pub pagination: PaginationInfo,
}

/// Payload for `PUT /admin/users/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

/// Query for `GET /admin/reports`
///
/// Report documents vary per type, so the response stays untyped JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Report kind: `payments`, `houses` or `users`
    #[serde(rename = "type")]
    pub report_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}
