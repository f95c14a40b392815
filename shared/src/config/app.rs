//! Static application metadata rendered by the UI layers
//!
//! These are deployment constants, not behavior: the shipped values match
//! the BondiHub deployments and can be overridden by embedding hosts that
//! construct `AppConfig` themselves.

use serde::{Deserialize, Serialize};

/// Application-wide metadata and feature switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name of the application
    pub app_name: String,

    /// Application version string
    pub app_version: String,

    /// ISO currency code used for rents and payments
    pub currency: String,

    /// Currency symbol shown next to amounts
    pub currency_symbol: String,

    /// Support contact details shown in the footer
    pub support: SupportContact,

    /// Social media profile links
    pub social: SocialLinks,

    /// Feature switches
    pub features: FeatureFlags,

    /// Payment methods offered at checkout
    pub payment_methods: Vec<PaymentMethodInfo>,

    /// Map widget defaults
    pub map: MapDefaults,
}

/// Support contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportContact {
    pub email: String,
    pub phone: String,
}

/// Social media profile links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub linkedin: String,
}

/// Feature switches controlling optional client behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub push_notifications: bool,
    pub offline_mode: bool,
    pub analytics: bool,
    pub error_reporting: bool,
}

/// Display metadata for one payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    /// Wire value sent to the payments endpoint (`MTN`, `Airtel`, ...)
    pub code: String,

    /// Human-readable display name
    pub name: String,

    /// Whether the method is offered at checkout
    pub enabled: bool,
}

/// Default center and zoom for the listings map
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapDefaults {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("BondiHub"),
            app_version: String::from("1.0.0"),
            currency: String::from("ZMW"),
            currency_symbol: String::from("K"),
            support: SupportContact {
                email: String::from("support@bondihub.com"),
                phone: String::from("+260 211 123 456"),
            },
            social: SocialLinks {
                facebook: String::from("https://facebook.com/bondihub"),
                twitter: String::from("https://twitter.com/bondihub"),
                instagram: String::from("https://instagram.com/bondihub"),
                linkedin: String::from("https://linkedin.com/company/bondihub"),
            },
            features: FeatureFlags {
                push_notifications: true,
                offline_mode: false,
                analytics: true,
                error_reporting: true,
            },
            payment_methods: vec![
                PaymentMethodInfo {
                    code: String::from("MTN"),
                    name: String::from("MTN MoMo"),
                    enabled: true,
                },
                PaymentMethodInfo {
                    code: String::from("Airtel"),
                    name: String::from("Airtel Money"),
                    enabled: true,
                },
                PaymentMethodInfo {
                    code: String::from("Cash"),
                    name: String::from("Cash"),
                    enabled: true,
                },
                PaymentMethodInfo {
                    code: String::from("Bank"),
                    name: String::from("Bank Transfer"),
                    enabled: true,
                },
            ],
            // Lusaka city center
            map: MapDefaults {
                latitude: -15.3875,
                longitude: 28.3228,
                zoom: 10,
            },
        }
    }
}

impl AppConfig {
    /// Payment methods currently offered at checkout
    pub fn enabled_payment_methods(&self) -> impl Iterator<Item = &PaymentMethodInfo> {
        self.payment_methods.iter().filter(|m| m.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payment_methods() {
        let config = AppConfig::default();
        let codes: Vec<&str> = config
            .enabled_payment_methods()
            .map(|m| m.code.as_str())
            .collect();
        assert_eq!(codes, vec!["MTN", "Airtel", "Cash", "Bank"]);
    }

    #[test]
    fn test_default_map_center_is_lusaka() {
        let config = AppConfig::default();
        assert_eq!(config.map.latitude, -15.3875);
        assert_eq!(config.map.longitude, 28.3228);
        assert_eq!(config.map.zoom, 10);
    }
}
