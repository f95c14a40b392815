//! Payment endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::payment::{
    CreatePaymentRequest, Payment, PaymentFilters, PaymentListResponse, PaymentReceipt,
    PaymentStats,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/payments` endpoints
pub struct PaymentApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct PaymentEnvelope {
    payment: Payment,
}

impl PaymentApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /payments`
    pub async fn list(&self, filters: &PaymentFilters) -> Result<PaymentListResponse, ApiError> {
        self.http.get_query("/payments", filters).await
    }

    /// `GET /payments/{id}`
    pub async fn get(&self, id: Uuid) -> Result<Payment, ApiError> {
        let envelope: PaymentEnvelope = self.http.get(&format!("/payments/{}", id)).await?;
        Ok(envelope.payment)
    }

    /// `POST /payments`: records the payment and runs it through the
    /// configured provider, returning both
    pub async fn process(&self, payment: &CreatePaymentRequest) -> Result<PaymentReceipt, ApiError> {
        self.http.post("/payments", payment).await
    }

    /// `GET /payments/stats`
    pub async fn stats(&self) -> Result<PaymentStats, ApiError> {
        self.http.get("/payments/stats").await
    }
}
