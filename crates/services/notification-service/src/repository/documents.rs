//! Stored shape of a notification.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use domain::{NewNotification, Notification, NotificationType};

/// Notification as stored in the `notifications` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user: Bson,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "createdAt")]
    pub created_at: bson::DateTime,
}

impl NotificationDocument {
    /// Build an unread document stamped with the current time.
    pub fn from_new(notification: NewNotification) -> Self {
        Self {
            id: None,
            user: user_ref(&notification.user),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            read: false,
            created_at: bson::DateTime::now(),
        }
    }
}

impl From<NotificationDocument> for Notification {
    fn from(doc: NotificationDocument) -> Self {
        let user = match doc.user {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };

        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user,
            kind: doc.kind,
            title: doc.title,
            message: doc.message,
            read: doc.read,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

/// User reference as stored: an ObjectId when the id is one, the raw string otherwise.
pub fn user_ref(user: &str) -> Bson {
    ObjectId::parse_str(user)
        .map(Bson::ObjectId)
        .unwrap_or_else(|_| Bson::String(user.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_users_are_stored_as_object_ids() {
        let hex = "65a1f0c2e4b0a1b2c3d4e5f6";
        assert!(matches!(user_ref(hex), Bson::ObjectId(oid) if oid.to_hex() == hex));
    }

    #[test]
    fn other_users_are_stored_as_strings() {
        assert_eq!(user_ref("u123"), Bson::String("u123".to_string()));
    }

    #[test]
    fn document_maps_back_to_domain() {
        let new = NewNotification::new("u123", NotificationType::Follow, "Title", "Body");
        let mut doc = NotificationDocument::from_new(new);
        let oid = ObjectId::new();
        doc.id = Some(oid);

        let notification = Notification::from(doc);

        assert_eq!(notification.id, oid.to_hex());
        assert_eq!(notification.user, "u123");
        assert_eq!(notification.kind, NotificationType::Follow);
        assert!(notification.is_unread());
    }
}
