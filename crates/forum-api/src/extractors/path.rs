//! Path parameter extractors
//!
//! Turns `/posts/:post_id/...` and `/comments/:comment_id/...` segments into
//! reaction targets.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use forum_core::{Id, Target};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct PostIdParams {
    post_id: String,
}

#[derive(Debug, Deserialize)]
struct CommentIdParams {
    comment_id: String,
}

fn parse_id(raw: &str, name: &str) -> Result<Id, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::invalid_path(format!("Invalid {name}: {e}")))
}

/// Post target taken from `:post_id`
#[derive(Debug, Clone, Copy)]
pub struct PostTarget(pub Target);

#[async_trait]
impl<S> FromRequestParts<S> for PostTarget
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<PostIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(PostTarget(Target::post(parse_id(&params.post_id, "post_id")?)))
    }
}

/// Comment target taken from `:comment_id`
#[derive(Debug, Clone, Copy)]
pub struct CommentTarget(pub Target);

#[async_trait]
impl<S> FromRequestParts<S> for CommentTarget
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<CommentIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(CommentTarget(Target::comment(parse_id(
            &params.comment_id,
            "comment_id",
        )?)))
    }
}
