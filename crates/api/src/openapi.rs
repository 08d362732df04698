//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{Notification, NotificationType};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::notification_handler::list_notifications,
        crate::handlers::notification_handler::mark_read,
    ),
    components(schemas(Notification, NotificationType)),
    tags(
        (name = "Notifications", description = "User notification endpoints"),
    )
)]
pub struct ApiDoc;
