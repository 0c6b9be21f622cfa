//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub actor_id: i64,
    pub actor_name: String,
    pub owner_id: i64,
    pub target_kind: String,
    pub target_id: i64,
    pub post_id: i64,
    pub verb: String,
    pub created_at: DateTime<Utc>,
}
