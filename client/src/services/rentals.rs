//! Rental agreement endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::rental::{
    CreateRentalAgreementRequest, RentalAgreement, RentalAgreementFilters,
    RentalAgreementListResponse, UpdateRentalAgreementRequest,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/rentals` endpoints
pub struct RentalApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct AgreementEnvelope {
    agreement: RentalAgreement,
}

impl RentalApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /rentals`
    pub async fn list(
        &self,
        filters: &RentalAgreementFilters,
    ) -> Result<RentalAgreementListResponse, ApiError> {
        self.http.get_query("/rentals", filters).await
    }

    /// `GET /rentals/{id}`
    pub async fn get(&self, id: Uuid) -> Result<RentalAgreement, ApiError> {
        let envelope: AgreementEnvelope = self.http.get(&format!("/rentals/{}", id)).await?;
        Ok(envelope.agreement)
    }

    /// `POST /rentals`
    pub async fn create(
        &self,
        agreement: &CreateRentalAgreementRequest,
    ) -> Result<RentalAgreement, ApiError> {
        let envelope: AgreementEnvelope = self.http.post("/rentals", agreement).await?;
        Ok(envelope.agreement)
    }

    /// `PUT /rentals/{id}`
    pub async fn update(
        &self,
        id: Uuid,
        changes: &UpdateRentalAgreementRequest,
    ) -> Result<RentalAgreement, ApiError> {
        let envelope: AgreementEnvelope =
            self.http.put(&format!("/rentals/{}", id), changes).await?;
        Ok(envelope.agreement)
    }

    /// `PUT /rentals/{id}/terminate`
    pub async fn terminate(&self, id: Uuid) -> Result<RentalAgreement, ApiError> {
        let envelope: AgreementEnvelope = self
            .http
            .put_empty(&format!("/rentals/{}/terminate", id))
            .await?;
        Ok(envelope.agreement)
    }
}
