//! Favorite (saved listing) endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::favorite::{Favorite, FavoriteListResponse};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/favorites` endpoints
pub struct FavoriteApi {
    http: Arc<HttpApi>,
}

impl FavoriteApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /favorites`
    pub async fn list(&self) -> Result<FavoriteListResponse, ApiError> {
        self.http.get("/favorites").await
    }

    /// `POST /favorites/{houseId}`
    pub async fn add(&self, house_id: Uuid) -> Result<Favorite, ApiError> {
        #[derive(Deserialize)]
        struct FavoriteEnvelope {
            favorite: Favorite,
        }
        let envelope: FavoriteEnvelope = self
            .http
            .post_empty(&format!("/favorites/{}", house_id))
            .await?;
        Ok(envelope.favorite)
    }

    /// `DELETE /favorites/{houseId}`
    pub async fn remove(&self, house_id: Uuid) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.delete(&format!("/favorites/{}", house_id)).await?;
        Ok(())
    }

    /// `GET /favorites/{houseId}/check`
    pub async fn check(&self, house_id: Uuid) -> Result<bool, ApiError> {
        #[derive(Deserialize)]
        struct CheckEnvelope {
            is_favorite: bool,
        }
        let envelope: CheckEnvelope = self
            .http
            .get(&format!("/favorites/{}/check", house_id))
            .await?;
        Ok(envelope.is_favorite)
    }
}
