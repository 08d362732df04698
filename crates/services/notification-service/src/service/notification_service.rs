//! Notification service - Handles notification-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{DomainError, Notification, DEFAULT_NOTIFICATION_LIMIT, MAX_NOTIFICATION_LIMIT};

use crate::repository::NotificationRepository;

/// Notification service trait for dependency injection.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Newest notifications for a user; `limit` defaults to 20 and is capped at 100
    async fn list_notifications(
        &self,
        user_id: &str,
        limit: Option<u32>,
    ) -> AppResult<Vec<Notification>>;

    /// Mark one notification as read
    async fn mark_read(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of NotificationService using repository.
pub struct NotificationManager {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationManager {
    /// Create new notification service instance with repository
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NotificationService for NotificationManager {
    async fn list_notifications(
        &self,
        user_id: &str,
        limit: Option<u32>,
    ) -> AppResult<Vec<Notification>> {
        if user_id.trim().is_empty() {
            return Err(DomainError::validation("User id cannot be empty").into());
        }

        let limit = limit
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
            .clamp(1, MAX_NOTIFICATION_LIMIT);

        self.repo.list_for_user(user_id, limit).await
    }

    async fn mark_read(&self, id: &str) -> AppResult<()> {
        self.repo.mark_read(id).await
    }
}
