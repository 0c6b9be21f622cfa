//! Reaction database models

use sqlx::FromRow;

/// Per-polarity row count for one target (from query)
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TallyModel {
    pub likes: i64,
    pub dislikes: i64,
}
