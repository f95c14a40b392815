//! # BondiHub Client
//!
//! The I/O layer of the BondiHub client SDK: a reqwest-based HTTP pipeline
//! that attaches credentials and classifies failures uniformly, plus one
//! thin typed wrapper per backend resource. Every wrapper method performs
//! exactly one HTTP call; failures are never retried and reach the caller
//! classified once.
//!
//! Construction is explicit: build a [`HttpApi`] from an
//! [`ApiConfig`](bondi_shared::ApiConfig) and a shared
//! [`SessionContext`](bondi_core::SessionContext), then hand it to the
//! service wrappers you need.

pub mod error;
pub mod http;
pub mod services;

pub use error::ApiError;
pub use http::HttpApi;
pub use services::{
    AdminApi, AuthApi, FavoriteApi, HouseApi, ImageUpload, MaintenanceApi, NotificationApi,
    PaymentApi, RentalApi, ReviewApi,
};
