//! Infrastructure layer - database connection management.

mod db;

pub use db::{Database, StoreHealth, DEFAULT_DATABASE_NAME};

#[cfg(any(test, feature = "test-utils"))]
pub use db::MockStoreHealth;
