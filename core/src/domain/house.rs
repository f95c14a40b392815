//! House listing entity, filters and list payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::review::Review;
use super::user::User;

/// Occupancy status of a listing; server-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStatus {
    Available,
    Occupied,
    Maintenance,
}

/// Kind of property being listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseType {
    Apartment,
    House,
    Studio,
    Townhouse,
    Commercial,
}

/// A house listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: Uuid,

    /// Owner of the listing
    pub landlord_id: Uuid,

    pub title: String,

    pub description: String,

    pub address: String,

    pub monthly_rent: f64,

    pub status: HouseStatus,

    pub house_type: HouseType,

    pub latitude: f64,

    pub longitude: f64,

    pub bedrooms: u32,

    pub bathrooms: u32,

    /// Floor area in square meters
    pub area: f64,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_until: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Embedded landlord record when the endpoint expands it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landlord: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<HouseImage>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// One uploaded photo of a house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseImage {
    pub id: Uuid,
    pub house_id: Uuid,
    pub image_url: String,
    #[serde(default)]
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /houses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHouseRequest {
    pub title: String,
    pub description: String,
    pub address: String,
    pub monthly_rent: f64,
    pub house_type: HouseType,
    pub latitude: f64,
    pub longitude: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    #[serde(default)]
    pub is_featured: bool,
}

/// Payload for `PUT /houses/{id}`; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHouseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_rent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HouseStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_type: Option<HouseType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// Browse filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HouseFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_type: Option<HouseType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HouseStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Free-text search over title and address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /houses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseListResponse {
    pub houses: Vec<House>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HouseStatus::Available).unwrap(),
            "\"available\""
        );
        assert_eq!(
            serde_json::to_string(&HouseType::Townhouse).unwrap(),
            "\"townhouse\""
        );
    }

    #[test]
    fn test_filters_serialize_only_set_fields() {
        let filters = HouseFilters {
            min_rent: Some(1500.0),
            search: Some("Kabulonga".to_string()),
            page: Some(2),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({"min_rent": 1500.0, "search": "Kabulonga", "page": 2})
        );
    }
}
