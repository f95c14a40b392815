//! Rental agreement entity and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::house::House;
use super::payment::Payment;
use super::user::User;

/// Lifecycle state of an agreement; transitions happen server-side only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementStatus {
    Active,
    Terminated,
    Expired,
}

/// A rental agreement between a tenant and a house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalAgreement {
    pub id: Uuid,

    pub house_id: Uuid,

    pub tenant_id: Uuid,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    /// Monthly rent agreed for this tenancy
    pub rent_amount: f64,

    pub deposit: f64,

    pub status: AgreementStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<House>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,
}

/// Payload for `POST /rentals`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRentalAgreementRequest {
    pub house_id: Uuid,
    pub tenant_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub rent_amount: f64,
    pub deposit: f64,
}

/// Payload for `PUT /rentals/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRentalAgreementRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgreementStatus>,
}

/// List filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentalAgreementFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AgreementStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /rentals`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalAgreementListResponse {
    pub agreements: Vec<RentalAgreement>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AgreementStatus::Terminated).unwrap(),
            "\"terminated\""
        );
    }
}
