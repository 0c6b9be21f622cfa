//! Reaction handlers
//!
//! Toggle, read and repair the reactions of posts and comments.

use axum::{extract::State, Json};
use forum_core::Target;
use forum_service::{
    ReactRequest, ReactionCountsResponse, ReactionResponse, ReactionService, RecountResponse,
};

use crate::extractors::{AuthUser, CommentTarget, PostTarget, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a reaction on a post
///
/// POST /posts/{post_id}/reactions
pub async fn react_to_post(
    State(state): State<AppState>,
    auth: AuthUser,
    PostTarget(target): PostTarget,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    react(&state, auth, target, request).await
}

/// Toggle a reaction on a comment
///
/// POST /comments/{comment_id}/reactions
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentTarget(target): CommentTarget,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    react(&state, auth, target, request).await
}

async fn react(
    state: &AppState,
    auth: AuthUser,
    target: Target,
    request: ReactRequest,
) -> ApiResult<Json<ReactionResponse>> {
    // Unknown actions never reach the engine
    let polarity = request.polarity()?;

    let outcome = ReactionService::new(state.service_context())
        .react(auth.user_id, target, request.owner(), polarity)
        .await?;
    Ok(Json(outcome.into()))
}

/// Get a post's counters and the caller's reaction
///
/// GET /posts/{post_id}/reactions
pub async fn post_reactions(
    State(state): State<AppState>,
    auth: AuthUser,
    PostTarget(target): PostTarget,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let view = ReactionService::new(state.service_context())
        .counts(auth.user_id, target)
        .await?;
    Ok(Json(view.into()))
}

/// Get a comment's counters and the caller's reaction
///
/// GET /comments/{comment_id}/reactions
pub async fn comment_reactions(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentTarget(target): CommentTarget,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let view = ReactionService::new(state.service_context())
        .counts(auth.user_id, target)
        .await?;
    Ok(Json(view.into()))
}

/// Recompute a post's counters from its reaction rows
///
/// POST /posts/{post_id}/reactions/recount
pub async fn recount_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    PostTarget(target): PostTarget,
) -> ApiResult<Json<RecountResponse>> {
    let outcome = ReactionService::new(state.service_context())
        .recount(target)
        .await?;
    Ok(Json(outcome.into()))
}

/// Recompute a comment's counters from its reaction rows
///
/// POST /comments/{comment_id}/reactions/recount
pub async fn recount_comment(
    State(state): State<AppState>,
    _auth: AuthUser,
    CommentTarget(target): CommentTarget,
) -> ApiResult<Json<RecountResponse>> {
    let outcome = ReactionService::new(state.service_context())
        .recount(target)
        .await?;
    Ok(Json(outcome.into()))
}
