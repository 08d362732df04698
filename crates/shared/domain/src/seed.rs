//! Fixed sample notifications used to populate a user's inbox.

use crate::notification::{NewNotification, NotificationType};

/// Recipe referenced by the sample activity notifications
const SAMPLE_RECIPE: &str = "Creamy Garlic Pasta";

/// Build the three sample notifications for `user`.
///
/// The content is fixed; only the owning user varies.
pub fn sample_notifications(user: &str) -> Vec<NewNotification> {
    vec![
        NewNotification::new(
            user,
            NotificationType::Like,
            "New like on your recipe",
            format!("Someone liked your recipe \"{}\".", SAMPLE_RECIPE),
        ),
        NewNotification::new(
            user,
            NotificationType::Comment,
            "New comment",
            format!(
                "Someone left a comment on your recipe \"{}\".",
                SAMPLE_RECIPE
            ),
        ),
        NewNotification::new(
            user,
            NotificationType::System,
            "Welcome to the kitchen",
            "Start by sharing your first recipe with the community.",
        ),
    ]
}
