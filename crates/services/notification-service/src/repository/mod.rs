//! Repository layer for data access.

pub mod documents;
mod notification_repository;

pub use notification_repository::{NotificationRepository, NotificationStore, NOTIFICATIONS_COLLECTION};

#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository::MockNotificationRepository;
