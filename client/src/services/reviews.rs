//! Review endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::review::{
    CreateReviewRequest, Review, ReviewFilters, ReviewListResponse, UpdateReviewRequest,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/reviews` endpoints
pub struct ReviewApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct ReviewEnvelope {
    review: Review,
}

impl ReviewApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /houses/{id}/reviews`
    pub async fn for_house(
        &self,
        house_id: Uuid,
        filters: &ReviewFilters,
    ) -> Result<ReviewListResponse, ApiError> {
        self.http
            .get_query(&format!("/houses/{}/reviews", house_id), filters)
            .await
    }

    /// `GET /reviews/my`; the rating aggregates default to zero since the
    /// endpoint returns only the caller's reviews
    pub async fn my_reviews(&self) -> Result<ReviewListResponse, ApiError> {
        self.http.get("/reviews/my").await
    }

    /// `POST /reviews`
    pub async fn create(&self, review: &CreateReviewRequest) -> Result<Review, ApiError> {
        let envelope: ReviewEnvelope = self.http.post("/reviews", review).await?;
        Ok(envelope.review)
    }

    /// `PUT /reviews/{id}`
    pub async fn update(&self, id: Uuid, changes: &UpdateReviewRequest) -> Result<Review, ApiError> {
        let envelope: ReviewEnvelope = self.http.put(&format!("/reviews/{}", id), changes).await?;
        Ok(envelope.review)
    }

    /// `DELETE /reviews/{id}`
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.delete(&format!("/reviews/{}", id)).await?;
        Ok(())
    }
}
