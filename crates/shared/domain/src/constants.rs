//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Notification Types
// =============================================================================

/// Someone liked one of the user's recipes
pub const NOTIFICATION_TYPE_LIKE: &str = "like";

/// Someone commented on one of the user's recipes
pub const NOTIFICATION_TYPE_COMMENT: &str = "comment";

/// Someone started following the user
pub const NOTIFICATION_TYPE_FOLLOW: &str = "follow";

/// Platform message not tied to another user's action
pub const NOTIFICATION_TYPE_SYSTEM: &str = "system";

// =============================================================================
// Required Environment
// =============================================================================

/// MongoDB connection string
pub const ENV_MONGODB_URI: &str = "MONGODB_URI";

/// Access token signing secret
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Refresh token signing secret
pub const ENV_JWT_REFRESH_SECRET: &str = "JWT_REFRESH_SECRET";

/// API key for the recipe assistant model
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

// =============================================================================
// Notifications
// =============================================================================

/// Default number of notifications returned per listing
pub const DEFAULT_NOTIFICATION_LIMIT: u32 = 20;

/// Maximum number of notifications returned per listing
pub const MAX_NOTIFICATION_LIMIT: u32 = 100;
