//! Footer state from deployment constants.

use serde::Serialize;

use bondi_shared::config::AppConfig;

/// One social media link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

/// Footer view state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub app_name: String,
    pub app_version: String,
    pub support_email: String,
    pub support_phone: String,
    pub social_links: Vec<SocialLink>,
}

impl FooterView {
    pub fn build(config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            app_version: config.app_version.clone(),
            support_email: config.support.email.clone(),
            support_phone: config.support.phone.clone(),
            social_links: vec![
                SocialLink {
                    label: "Facebook",
                    url: config.social.facebook.clone(),
                },
                SocialLink {
                    label: "Twitter",
                    url: config.social.twitter.clone(),
                },
                SocialLink {
                    label: "Instagram",
                    url: config.social.instagram.clone(),
                },
                SocialLink {
                    label: "LinkedIn",
                    url: config.social.linkedin.clone(),
                },
            ],
        }
    }
}
