//! Notification handlers

use axum::{extract::State, Json};
use forum_service::{NotificationResponse, NotificationService, PaginatedResponse};

use crate::extractors::{AuthUser, FeedPagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// The caller's notification feed, newest first
///
/// GET /users/@me/notifications?before=&limit=&kind=
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    FeedPagination(query): FeedPagination,
) -> ApiResult<Json<PaginatedResponse<NotificationResponse>>> {
    let notifications = NotificationService::new(state.service_context())
        .list_for_owner(auth.user_id, query)
        .await?;

    let data: Vec<NotificationResponse> = notifications
        .iter()
        .map(NotificationResponse::from)
        .collect();
    Ok(Json(PaginatedResponse::newest_first(
        data,
        query.effective_limit(),
        |n| n.id,
    )))
}
