//! Notification feed query extractor
//!
//! Extracts cursor-based pagination (`before`, `limit`) and the optional
//! `kind` filter from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use forum_core::NotificationQuery;
use forum_service::NotificationFeedQuery;

use crate::response::ApiError;

/// Validated feed query
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedPagination(pub NotificationQuery);

impl TryFrom<NotificationFeedQuery> for FeedPagination {
    type Error = ApiError;

    fn try_from(params: NotificationFeedQuery) -> Result<Self, Self::Error> {
        params
            .parse()
            .map(FeedPagination)
            .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FeedPagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<NotificationFeedQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        FeedPagination::try_from(params)
    }
}
