//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Notification;
use forum_core::traits::{NotificationQuery, NotificationRepository, RepoResult};
use forum_core::value_objects::Id;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn list_for_owner(
        &self,
        owner: Id,
        query: NotificationQuery,
    ) -> RepoResult<Vec<Notification>> {
        let results = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, actor_id, actor_name, owner_id, target_kind, target_id, post_id, verb, created_at
            FROM notifications
            WHERE owner_id = $1
              AND ($2::BIGINT IS NULL OR id < $2)
              AND ($3::TEXT IS NULL OR target_kind = $3)
            ORDER BY id DESC
            LIMIT $4
            "#,
        )
        .bind(owner.into_inner())
        .bind(query.before.map(Id::into_inner))
        .bind(query.kind.map(|kind| kind.as_str()))
        .bind(query.effective_limit())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }
}
