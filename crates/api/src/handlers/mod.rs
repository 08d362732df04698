//! HTTP handlers.

pub mod health_handler;
pub mod notification_handler;

pub use health_handler::health_routes;
pub use notification_handler::{notification_routes, user_notification_routes};
