//! Landing page state.

use serde::Serialize;

use bondi_core::domain::house::House;
use bondi_shared::config::{AppConfig, MapDefaults, PaymentMethodInfo};

/// Landing page view state
///
/// Featured houses come from a regular `HouseApi::list` call with the
/// `featured` filter; they pass through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    pub headline: String,
    pub tagline: String,
    pub currency_symbol: String,
    pub payment_methods: Vec<PaymentMethodInfo>,
    pub map: MapDefaults,
    pub featured: Vec<House>,
}

impl LandingView {
    pub fn build(config: &AppConfig, featured: Vec<House>) -> Self {
        Self {
            headline: format!("Find your next home on {}", config.app_name),
            tagline: "Browse verified listings, sign agreements and pay rent in one place"
                .to_string(),
            currency_symbol: config.currency_symbol.clone(),
            payment_methods: config.enabled_payment_methods().cloned().collect(),
            map: config.map,
            featured,
        }
    }
}
