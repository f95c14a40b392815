//! Review entity and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::user::User;

/// A tenant's review of a house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub house_id: Uuid,

    /// 1..=5 stars; range enforced server-side
    pub rating: u8,

    pub comment: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<User>,
}

/// Payload for `POST /reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub house_id: Uuid,
    pub rating: u8,
    pub comment: String,
}

/// Payload for `PUT /reviews/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// List filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /houses/{id}/reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
    pub pagination: PaginationInfo,

    #[serde(default)]
    pub average_rating: f64,

    #[serde(default)]
    pub rating_distribution: Vec<RatingDistribution>,
}

/// Count of reviews at one star value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub rating: u8,
    pub count: u64,
}
