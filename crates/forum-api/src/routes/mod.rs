//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, notifications, reactions, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(comment_routes())
        .merge(user_routes())
}

/// Post reaction routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/posts/:post_id/reactions",
            get(reactions::post_reactions).post(reactions::react_to_post),
        )
        .route(
            "/posts/:post_id/reactions/recount",
            post(reactions::recount_post),
        )
}

/// Comment reaction routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/:comment_id/reactions",
            get(reactions::comment_reactions).post(reactions::react_to_comment),
        )
        .route(
            "/comments/:comment_id/reactions/recount",
            post(reactions::recount_comment),
        )
}

/// Caller-scoped routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/reactions", get(users::my_reactions))
        .route("/users/@me/posts/liked", get(users::liked_posts))
        .route("/users/@me/posts/disliked", get(users::disliked_posts))
        .route(
            "/users/@me/notifications",
            get(notifications::list_notifications),
        )
}
