//! PostgreSQL unit of work for one reaction toggle
//!
//! Wraps a single transaction. `lock_target` takes a `FOR UPDATE` row lock on
//! the post or comment, so concurrent toggles on the same target queue up
//! behind each other until commit or rollback. Dropping the unit of work
//! without calling `commit` rolls the transaction back.

use async_trait::async_trait;
use sqlx::{PgConnection, Postgres, Transaction};
use tracing::instrument;

use forum_core::entities::{
    NewNotification, Notification, Reaction, ReactionCounts, TargetRecord, User,
};
use forum_core::error::DomainError;
use forum_core::traits::{
    CounterMaintainer, NotificationLedger, ReactionStore, ReactionUnitOfWork, RepoResult,
};
use forum_core::value_objects::{Id, Polarity, Target, TargetKind};

use crate::mappers::{counter_column, target_record, target_table, NotificationInsert};
use crate::models::{TallyModel, TargetRowModel, UserModel};

use super::error::{
    is_foreign_key_violation, map_db_error, map_unique_violation, unit_of_work_finished,
};

/// Select the reaction-relevant columns of a target row
pub(crate) fn target_select(target: Target, lock: bool) -> String {
    let post_id = match target.kind {
        TargetKind::Post => "id",
        TargetKind::Comment => "post_id",
    };
    format!(
        "SELECT id, author_id AS owner_id, {post_id} AS post_id, likes, dislikes FROM {table} WHERE id = $1{lock}",
        table = target_table(target.kind),
        lock = if lock { " FOR UPDATE" } else { "" },
    )
}

/// Transaction-scoped implementation of the reaction stores
pub struct PgReactionUnitOfWork {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgReactionUnitOfWork {
    pub(crate) fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx: Some(tx) }
    }

    fn conn(&mut self) -> RepoResult<&mut PgConnection> {
        self.tx.as_deref_mut().ok_or_else(unit_of_work_finished)
    }

    async fn target_exists(&mut self, target: Target) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            target_table(target.kind)
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(target.id.into_inner())
            .fetch_one(self.conn()?)
            .await
            .map_err(map_db_error)
    }
}

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
impl ReactionStore for PgReactionUnitOfWork {
    #[instrument(skip(self))]
    async fn has(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reactions
                WHERE actor_id = $1 AND target_kind = $2 AND target_id = $3 AND polarity = $4
            )
            "#,
        )
        .bind(actor.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .bind(polarity.as_str())
        .fetch_one(self.conn()?)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (actor_id, target_kind, target_id, polarity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reaction.actor_id.into_inner())
        .bind(reaction.target.kind.as_str())
        .bind(reaction.target.id.into_inner())
        .bind(reaction.polarity.as_str())
        .bind(reaction.created_at)
        .execute(self.conn()?)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::UserNotFound(reaction.actor_id)
            } else {
                map_unique_violation(e, || DomainError::ReactionAlreadyExists)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE actor_id = $1 AND target_kind = $2 AND target_id = $3 AND polarity = $4
            "#,
        )
        .bind(actor.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .bind(polarity.as_str())
        .execute(self.conn()?)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn tally(&mut self, target: Target) -> RepoResult<ReactionCounts> {
        let tally = sqlx::query_as::<_, TallyModel>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE polarity = 'like') AS likes,
                COUNT(*) FILTER (WHERE polarity = 'dislike') AS dislikes
            FROM reactions
            WHERE target_kind = $1 AND target_id = $2
            "#,
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_one(self.conn()?)
        .await
        .map_err(map_db_error)?;

        Ok(ReactionCounts::new(tally.likes, tally.dislikes))
    }
}

// ============================================================================
// Counter Maintainer
// ============================================================================

#[async_trait]
impl CounterMaintainer for PgReactionUnitOfWork {
    #[instrument(skip(self))]
    async fn increment(&mut self, target: Target, polarity: Polarity) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {table} SET {col} = {col} + 1 WHERE id = $1",
            table = target_table(target.kind),
            col = counter_column(polarity),
        );
        let result = sqlx::query(&sql)
            .bind(target.id.into_inner())
            .execute(self.conn()?)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(target.not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement_if_positive(
        &mut self,
        target: Target,
        polarity: Polarity,
    ) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {table} SET {col} = {col} - 1 WHERE id = $1 AND {col} > 0",
            table = target_table(target.kind),
            col = counter_column(polarity),
        );
        let result = sqlx::query(&sql)
            .bind(target.id.into_inner())
            .execute(self.conn()?)
            .await
            .map_err(map_db_error)?;

        // Zero rows: either the counter is already 0 or the target is gone
        if result.rows_affected() == 0 && !self.target_exists(target).await? {
            return Err(target.not_found());
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts(&mut self, target: Target) -> RepoResult<ReactionCounts> {
        let sql = format!(
            "SELECT likes, dislikes FROM {} WHERE id = $1",
            target_table(target.kind)
        );
        let row = sqlx::query_as::<_, TallyModel>(&sql)
            .bind(target.id.into_inner())
            .fetch_optional(self.conn()?)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| target.not_found())?;

        Ok(ReactionCounts::new(row.likes, row.dislikes))
    }

    #[instrument(skip(self))]
    async fn overwrite(&mut self, target: Target, counts: ReactionCounts) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET likes = $2, dislikes = $3 WHERE id = $1",
            target_table(target.kind)
        );
        let result = sqlx::query(&sql)
            .bind(target.id.into_inner())
            .bind(counts.likes)
            .bind(counts.dislikes)
            .execute(self.conn()?)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(target.not_found());
        }

        Ok(())
    }
}

// ============================================================================
// Notification Ledger
// ============================================================================

#[async_trait]
impl NotificationLedger for PgReactionUnitOfWork {
    #[instrument(skip(self))]
    async fn put(&mut self, notification: NewNotification) -> RepoResult<Notification> {
        let insert = NotificationInsert::new(&notification);

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO notifications
                (actor_id, actor_name, owner_id, target_kind, target_id, post_id, verb, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (actor_id, target_kind, target_id) DO UPDATE SET
                actor_name = EXCLUDED.actor_name,
                owner_id = EXCLUDED.owner_id,
                post_id = EXCLUDED.post_id,
                verb = EXCLUDED.verb,
                created_at = EXCLUDED.created_at
            RETURNING id
            "#,
        )
        .bind(insert.actor_id)
        .bind(insert.actor_name)
        .bind(insert.owner_id)
        .bind(insert.target_kind)
        .bind(insert.target_id)
        .bind(insert.post_id)
        .bind(insert.verb)
        .bind(notification.created_at)
        .fetch_one(self.conn()?)
        .await
        .map_err(map_db_error)?;

        Ok(Notification::from_new(Id::new(id), notification))
    }

    #[instrument(skip(self))]
    async fn delete_for(&mut self, actor: Id, target: Target) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications
            WHERE actor_id = $1 AND target_kind = $2 AND target_id = $3
            "#,
        )
        .bind(actor.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .execute(self.conn()?)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// Unit of Work
// ============================================================================

#[async_trait]
impl ReactionUnitOfWork for PgReactionUnitOfWork {
    #[instrument(skip(self))]
    async fn lock_target(&mut self, target: Target) -> RepoResult<TargetRecord> {
        let sql = target_select(target, true);
        let row = sqlx::query_as::<_, TargetRowModel>(&sql)
            .bind(target.id.into_inner())
            .fetch_optional(self.conn()?)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| target.not_found())?;

        Ok(target_record(target.kind, row))
    }

    #[instrument(skip(self))]
    async fn load_actor(&mut self, actor: Id) -> RepoResult<User> {
        // Key-share lock: the user cannot be deleted before commit
        let row = sqlx::query_as::<_, UserModel>(
            "SELECT id, username FROM users WHERE id = $1 FOR KEY SHARE",
        )
        .bind(actor.into_inner())
        .fetch_optional(self.conn()?)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::UserNotFound(actor))?;

        Ok(User::from(row))
    }

    #[instrument(skip(self))]
    async fn commit(&mut self) -> RepoResult<()> {
        let tx = self.tx.take().ok_or_else(unit_of_work_finished)?;
        tx.commit().await.map_err(map_db_error)
    }
}
