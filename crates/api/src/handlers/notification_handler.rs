//! Notification handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use common::AppResult;
use domain::Notification;

use crate::extractors::ValidatedQuery;
use crate::state::AppState;

/// Listing query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNotificationsQuery {
    /// Maximum number of notifications to return (1-100, default 20)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

/// Routes nested under `/users`
pub fn user_notification_routes() -> Router<AppState> {
    Router::new().route("/:user_id/notifications", get(list_notifications))
}

/// Routes nested under `/notifications`
pub fn notification_routes() -> Router<AppState> {
    Router::new().route("/:id/read", patch(mark_read))
}

/// List a user's notifications, newest first
#[utoipa::path(
    get,
    path = "/users/{user_id}/notifications",
    tag = "Notifications",
    params(
        ("user_id" = String, Path, description = "Owning user identifier"),
        ListNotificationsQuery
    ),
    responses(
        (status = 200, description = "Notifications for the user", body = Vec<Notification>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ListNotificationsQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = state
        .notifications
        .list_notifications(&user_id, query.limit)
        .await?;

    Ok(Json(notifications))
}

/// Mark a notification as read
#[utoipa::path(
    patch,
    path = "/notifications/{id}/read",
    tag = "Notifications",
    params(("id" = String, Path, description = "Notification identifier")),
    responses(
        (status = 204, description = "Notification marked as read"),
        (status = 404, description = "Notification not found")
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.notifications.mark_read(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
