//! Post and comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

/// The reaction-relevant columns of a post or comment row
#[derive(Debug, Clone, FromRow)]
pub struct TargetRowModel {
    pub id: i64,
    pub owner_id: i64,
    pub post_id: i64,
    pub likes: i64,
    pub dislikes: i64,
}
