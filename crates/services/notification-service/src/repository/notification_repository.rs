//! Notification repository backed by a MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use common::{AppError, AppResult};
use domain::{NewNotification, Notification};

use super::documents::{user_ref, NotificationDocument};
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Collection holding notification documents
pub const NOTIFICATIONS_COLLECTION: &str = "notifications";

/// Notification repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert all notifications as one batch, returning how many were stored
    async fn insert_many(&self, notifications: Vec<NewNotification>) -> AppResult<usize>;

    /// Newest notifications owned by `user`, at most `limit`
    async fn list_for_user(&self, user: &str, limit: u32) -> AppResult<Vec<Notification>>;

    /// Flag a notification as read
    async fn mark_read(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of NotificationRepository
#[derive(Clone)]
pub struct NotificationStore {
    collection: Collection<NotificationDocument>,
}

impl NotificationStore {
    /// Create new repository instance
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(NOTIFICATIONS_COLLECTION),
        }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn insert_many(&self, notifications: Vec<NewNotification>) -> AppResult<usize> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let docs: Vec<NotificationDocument> = notifications
            .into_iter()
            .map(NotificationDocument::from_new)
            .collect();

        let result = self.collection.insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }

    async fn list_for_user(&self, user: &str, limit: u32) -> AppResult<Vec<Notification>> {
        let docs: Vec<NotificationDocument> = self
            .collection
            .find(doc! { "user": user_ref(user) })
            .sort(doc! { "createdAt": -1 })
            .limit(i64::from(limit))
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Notification::from).collect())
    }

    async fn mark_read(&self, id: &str) -> AppResult<()> {
        // Malformed ids cannot match any document
        let oid = ObjectId::parse_str(id).map_err(|_| AppError::NotFound)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": { "read": true } })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
