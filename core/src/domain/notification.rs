//! Notification entity, filters and statistics payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bondi_shared::types::PaginationInfo;

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Payment,
    Maintenance,
    Agreement,
    Review,
    General,
}

/// An in-app notification addressed to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub message: String,

    #[serde(default)]
    pub is_read: bool,

    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    pub created_at: DateTime<Utc>,
}

/// List filters forwarded as query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Response of `GET /notifications`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// Response of `GET /notifications/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationStats {
    pub total_notifications: u64,
    pub unread_notifications: u64,

    #[serde(default)]
    pub notifications_by_type: Vec<NotificationTypeCount>,
}

/// Count of notifications of one type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationTypeCount {
    #[serde(rename = "type")]
    pub notification_type: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_rename() {
        let json = serde_json::json!({
            "id": "5f0f3bb1-93a8-4a6e-9c56-0f51f4c7e001",
            "user_id": "5f0f3bb1-93a8-4a6e-9c56-0f51f4c7e002",
            "title": "Rent received",
            "message": "K3,500 received for Roma house",
            "is_read": false,
            "type": "payment",
            "created_at": "2024-02-01T09:30:00Z"
        });
        let notification: Notification = serde_json::from_value(json).unwrap();
        assert_eq!(notification.notification_type, NotificationType::Payment);
    }
}
