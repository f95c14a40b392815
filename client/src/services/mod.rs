//! Typed endpoint wrappers, one per backend resource
//!
//! Every method performs exactly one HTTP call through the shared
//! pipeline and unwraps the response envelope; no retries, no caching,
//! no pagination logic beyond forwarding query parameters.

mod admin;
mod auth;
mod favorites;
mod houses;
mod maintenance;
mod notifications;
mod payments;
mod rentals;
mod reviews;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use favorites::FavoriteApi;
pub use houses::{HouseApi, ImageUpload};
pub use maintenance::MaintenanceApi;
pub use notifications::NotificationApi;
pub use payments::PaymentApi;
pub use rentals::RentalApi;
pub use reviews::ReviewApi;
