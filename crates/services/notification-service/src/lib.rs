//! Notification Service Library
//!
//! MongoDB access for notifications, the sample-data seeder and its
//! command-line adapter. The API process reuses the repository and service.

pub mod cli;
pub mod infra;
pub mod repository;
pub mod seeder;
pub mod service;

pub use infra::{Database, StoreHealth};
pub use repository::{NotificationRepository, NotificationStore};
pub use seeder::{seed_notifications, MongoConnector, StoreConnector, StoreSession};
pub use service::{NotificationManager, NotificationService};
