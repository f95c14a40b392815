//! House listing endpoints.

use std::sync::Arc;

use serde::Deserialize;
use uuid::Uuid;

use bondi_core::domain::house::{
    CreateHouseRequest, House, HouseFilters, HouseImage, HouseListResponse, UpdateHouseRequest,
};

use crate::error::ApiError;
use crate::http::HttpApi;

/// `/houses` endpoints
pub struct HouseApi {
    http: Arc<HttpApi>,
}

#[derive(Deserialize)]
struct HouseEnvelope {
    house: House,
    #[serde(default)]
    average_rating: Option<f64>,
}

#[derive(Deserialize)]
struct ImageEnvelope {
    image: HouseImage,
}

/// An image file to attach to a listing
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl HouseApi {
    pub fn new(http: Arc<HttpApi>) -> Self {
        Self { http }
    }

    /// `GET /houses`
    pub async fn list(&self, filters: &HouseFilters) -> Result<HouseListResponse, ApiError> {
        self.http.get_query("/houses", filters).await
    }

    /// `GET /houses/{id}`; the detail endpoint also reports the average
    /// rating, folded into the returned record
    pub async fn get(&self, id: Uuid) -> Result<House, ApiError> {
        let envelope: HouseEnvelope = self.http.get(&format!("/houses/{}", id)).await?;
        let mut house = envelope.house;
        if house.average_rating.is_none() {
            house.average_rating = envelope.average_rating;
        }
        Ok(house)
    }

    /// `POST /houses`
    pub async fn create(&self, house: &CreateHouseRequest) -> Result<House, ApiError> {
        let envelope: HouseEnvelope = self.http.post("/houses", house).await?;
        Ok(envelope.house)
    }

    /// `PUT /houses/{id}`
    pub async fn update(&self, id: Uuid, changes: &UpdateHouseRequest) -> Result<House, ApiError> {
        let envelope: HouseEnvelope = self.http.put(&format!("/houses/{}", id), changes).await?;
        Ok(envelope.house)
    }

    /// `DELETE /houses/{id}`
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.delete(&format!("/houses/{}", id)).await?;
        Ok(())
    }

    /// `POST /houses/{id}/images`, multipart upload under the `image` field
    pub async fn upload_image(
        &self,
        house_id: Uuid,
        upload: ImageUpload,
    ) -> Result<HouseImage, ApiError> {
        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| ApiError::BadRequest {
                message: format!("Invalid image content type: {}", e),
            })?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let envelope: ImageEnvelope = self
            .http
            .post_multipart(&format!("/houses/{}/images", house_id), form)
            .await?;
        Ok(envelope.image)
    }

    /// `DELETE /houses/images/{imageId}`
    pub async fn delete_image(&self, image_id: Uuid) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .http
            .delete(&format!("/houses/images/{}", image_id))
            .await?;
        Ok(())
    }
}
