//! Application state for dependency injection.

use std::sync::Arc;

use notification_service_lib::{NotificationService, StoreHealth};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub notifications: Arc<dyn NotificationService>,
    pub store: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Create new app state.
    pub fn new(notifications: Arc<dyn NotificationService>, store: Arc<dyn StoreHealth>) -> Self {
        Self {
            notifications,
            store,
        }
    }
}
