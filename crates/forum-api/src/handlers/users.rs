//! User handlers
//!
//! Endpoints scoped to the caller: identity, reacted targets and posts.

use axum::{
    extract::{Query, State},
    Json,
};
use forum_core::Polarity;
use forum_service::{
    CurrentUserResponse, PostResponse, ReactedTargetsQuery, ReactedTargetsResponse,
    ReactionService, UserService,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = UserService::new(state.service_context())
        .get_current_user(auth.user_id)
        .await?;

    Ok(Json(CurrentUserResponse::from(&user)))
}

/// Ids of the posts or comments the caller liked or disliked
///
/// GET /users/@me/reactions?kind=post|comment&action=like|dislike
pub async fn my_reactions(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ReactedTargetsQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<Json<ReactedTargetsResponse>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let (kind, polarity) = query.parse()?;

    let ids = ReactionService::new(state.service_context())
        .reacted_target_ids(auth.user_id, kind, polarity)
        .await?;

    Ok(Json(ReactedTargetsResponse {
        kind,
        action: polarity,
        ids: ids.into_iter().map(|id| id.into_inner()).collect(),
    }))
}

/// Posts the caller liked
///
/// GET /users/@me/posts/liked
pub async fn liked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    reacted_posts(&state, auth, Polarity::Like).await
}

/// Posts the caller disliked
///
/// GET /users/@me/posts/disliked
pub async fn disliked_posts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PostResponse>>> {
    reacted_posts(&state, auth, Polarity::Dislike).await
}

async fn reacted_posts(
    state: &AppState,
    auth: AuthUser,
    polarity: Polarity,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let posts = ReactionService::new(state.service_context())
        .reacted_posts(auth.user_id, polarity)
        .await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}
