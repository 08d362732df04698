//! MongoDB connection and lifecycle.

use async_trait::async_trait;
use mongodb::{bson::doc, Client, Collection};

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Database used when the connection string does not name one
pub const DEFAULT_DATABASE_NAME: &str = "recipe_app";

/// Connectivity check used by health endpoints.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip a no-op command to the server
    async fn ping(&self) -> AppResult<()>;
}

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Connect to the server named by `uri` and verify it answers.
    pub async fn connect(uri: &str) -> AppResult<Self> {
        if uri.trim().is_empty() {
            return Err(AppError::configuration("MONGODB_URI is not set"));
        }

        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));

        let db = Self { client, database };
        db.ping().await?;
        tracing::info!(database = db.name(), "Database connected");

        Ok(db)
    }

    /// Name of the database in use.
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Typed handle to a collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Close every pooled connection. The handle is consumed.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::debug!("Database connection closed");
    }
}

#[async_trait]
impl StoreHealth for Database {
    async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
