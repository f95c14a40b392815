//! Favorite (saved listing) entity and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::house::House;
use super::user::User;

/// A house saved by a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub house_id: Uuid,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<House>,
}

/// Response of `GET /favorites`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteListResponse {
    pub favorites: Vec<Favorite>,
    pub pagination: PaginationInfo,
}
