//! Payment entity, filters and statistics payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

use super::rental::RentalAgreement;

/// How a payment was made
///
/// Wire values are the backend's exact spellings, not lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "MTN")]
    Mtn,
    Airtel,
    Cash,
    Bank,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Mtn => write!(f, "MTN"),
            PaymentMethod::Airtel => write!(f, "Airtel"),
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Bank => write!(f, "Bank"),
        }
    }
}

/// Settlement state of a payment; server-authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// A rent or deposit payment against an agreement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,

    pub agreement_id: Uuid,

    pub amount: f64,

    pub payment_date: DateTime<Utc>,

    pub method: PaymentMethod,

    /// Mobile-money or bank reference, backend-generated for cash
    pub reference_no: String,

    pub status: PaymentStatus,

    /// Platform commission withheld from this payment
    pub commission: f64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement: Option<RentalAgreement>,
}

/// Payload for `POST /payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub agreement_id: Uuid,
    pub amount: f64,
    pub method: PaymentMethod,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_no: Option<String>,
}

/// List filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
    pub pagination: PaginationInfo,
}

/// Outcome reported by the payment provider integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    pub transaction_id: String,
    pub reference_no: String,
    pub status: String,
    pub message: String,
}

/// Response of `POST /payments`: the stored payment plus the provider outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment: Payment,
    pub result: PaymentResult,
}

/// Response of `GET /payments/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStats {
    pub total_payments: u64,
    pub total_amount: f64,
    pub completed_payments: u64,
    pub completed_amount: f64,
    pub pending_payments: u64,
    pub failed_payments: u64,
    #[serde(default)]
    pub payments_by_method: Vec<PaymentMethodStats>,
}

/// Per-method slice of the payment statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodStats {
    pub method: String,
    pub count: u64,
    pub amount: f64,
}
