//! Notification domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    NOTIFICATION_TYPE_COMMENT, NOTIFICATION_TYPE_FOLLOW, NOTIFICATION_TYPE_LIKE,
    NOTIFICATION_TYPE_SYSTEM,
};

/// Notification categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Like,
    Comment,
    Follow,
    System,
}

impl NotificationType {
    /// Stored label for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Like => NOTIFICATION_TYPE_LIKE,
            NotificationType::Comment => NOTIFICATION_TYPE_COMMENT,
            NotificationType::Follow => NOTIFICATION_TYPE_FOLLOW,
            NotificationType::System => NOTIFICATION_TYPE_SYSTEM,
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification content before it is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNotification {
    /// Owning user identifier
    pub user: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
}

impl NewNotification {
    pub fn new(
        user: impl Into<String>,
        kind: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Persisted notification (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Notification {
    /// Store-assigned identifier
    pub id: String,
    /// Owning user identifier
    pub user: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    pub message: String,
    /// Whether the user has seen it
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
