//! Sample notification seeding.
//!
//! A seeding run owns exactly one store session: it is opened before the
//! insert and closed afterwards on every path, including a failed insert.

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::sample_notifications;

use crate::infra::Database;
use crate::repository::{NotificationRepository, NotificationStore};

/// Opens exclusive store sessions.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self) -> AppResult<Box<dyn StoreSession>>;
}

/// An open store session. Must be closed by its owner.
#[async_trait]
pub trait StoreSession: Send + Sync {
    /// Notification collection reachable through this session
    fn notifications(&self) -> &dyn NotificationRepository;

    /// Release the session
    async fn close(self: Box<Self>) -> AppResult<()>;
}

/// Connector for a MongoDB deployment.
pub struct MongoConnector {
    uri: String,
}

impl MongoConnector {
    /// The URI is only used when a session is opened.
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    async fn connect(&self) -> AppResult<Box<dyn StoreSession>> {
        let db = Database::connect(&self.uri).await?;
        let store = NotificationStore::new(&db);
        Ok(Box::new(MongoSession { db, store }))
    }
}

struct MongoSession {
    db: Database,
    store: NotificationStore,
}

#[async_trait]
impl StoreSession for MongoSession {
    fn notifications(&self) -> &dyn NotificationRepository {
        &self.store
    }

    async fn close(self: Box<Self>) -> AppResult<()> {
        self.db.close().await;
        Ok(())
    }
}

/// Insert the sample notifications for `user_id`, returning how many were stored.
///
/// Not idempotent: every run appends another three notifications.
pub async fn seed_notifications<C>(connector: &C, user_id: &str) -> AppResult<usize>
where
    C: StoreConnector + ?Sized,
{
    if user_id.trim().is_empty() {
        return Err(AppError::invalid_argument("a user id is required"));
    }

    let session = connector.connect().await?;

    let inserted = session
        .notifications()
        .insert_many(sample_notifications(user_id))
        .await;

    if let Ok(count) = &inserted {
        info!(user_id, inserted = *count, "Seeded notifications");
    }

    let closed = session.close().await;

    match (inserted, closed) {
        (Ok(count), Ok(())) => Ok(count),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), closed) => {
            if let Err(close_err) = closed {
                warn!("Failed to close store session after error: {}", close_err);
            }
            Err(e)
        }
    }
}
