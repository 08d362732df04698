//! Service layer - notification use cases.

mod notification_service;

pub use notification_service::{NotificationManager, NotificationService};
