//! Notification route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use uuid::Uuid;

use domain::models::{ListNotificationsQuery, ListNotificationsResponse, Notification};
use persistence::repositories::NotificationRepository;
use shared::pagination::{PageWindow, Pagination};

use crate::app::AppState;
use crate::error::ApiError;

/// Create notification routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/:notification_id/seen", post(mark_notification_seen))
}

/// List notifications for a recipient, newest first.
///
/// GET /api/v1/notifications?recipient_id=&unseen_only=&page=&per_page=
#[axum::debug_handler]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let window = PageWindow::new(query.page, query.per_page);

    let repo = NotificationRepository::new(state.pool.clone());
    let total = repo
        .count_for_recipient(query.recipient_id, query.unseen_only)
        .await?;
    let entities = repo
        .list_for_recipient(
            query.recipient_id,
            query.unseen_only,
            window.limit(),
            window.offset(),
        )
        .await?;
    let notifications: Vec<Notification> =
        entities.into_iter().map(Notification::from).collect();

    Ok((
        StatusCode::OK,
        Json(ListNotificationsResponse {
            data: notifications,
            pagination: Pagination::for_window(window, total),
        }),
    ))
}

/// Mark a notification as seen.
///
/// POST /api/v1/notifications/{notification_id}/seen
#[axum::debug_handler]
pub async fn mark_notification_seen(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let entity = repo
        .mark_seen(notification_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Notification not found".to_string()))?;

    info!(notification_id = %notification_id, "Marked notification seen");

    Ok((StatusCode::OK, Json(Notification::from(entity))))
}
