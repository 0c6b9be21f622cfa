//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Post, TargetRecord, User};
use forum_core::traits::{ReactionRepository, ReactionUnitOfWork, RepoResult};
use forum_core::value_objects::{Id, Polarity, Target, TargetKind};

use crate::mappers::{parse_polarity, target_record};
use crate::models::{PostModel, TargetRowModel, UserModel};

use super::error::map_db_error;
use super::unit_of_work::{target_select, PgReactionUnitOfWork};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn ReactionUnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgReactionUnitOfWork::new(tx)))
    }

    #[instrument(skip(self))]
    async fn find_target(&self, target: Target) -> RepoResult<Option<TargetRecord>> {
        let sql = target_select(target, false);
        let row = sqlx::query_as::<_, TargetRowModel>(&sql)
            .bind(target.id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(|row| target_record(target.kind, row)))
    }

    #[instrument(skip(self))]
    async fn find_user(&self, id: Id) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>("SELECT id, username FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self))]
    async fn reaction_of(&self, actor: Id, target: Target) -> RepoResult<Option<Polarity>> {
        let polarity = sqlx::query_scalar::<_, String>(
            r#"
            SELECT polarity FROM reactions
            WHERE actor_id = $1 AND target_kind = $2 AND target_id = $3
            "#,
        )
        .bind(actor.into_inner())
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        polarity.as_deref().map(parse_polarity).transpose()
    }

    #[instrument(skip(self))]
    async fn reacted_target_ids(
        &self,
        actor: Id,
        kind: TargetKind,
        polarity: Polarity,
    ) -> RepoResult<Vec<Id>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT target_id
            FROM reactions
            WHERE actor_id = $1 AND target_kind = $2 AND polarity = $3
            ORDER BY created_at DESC, target_id DESC
            "#,
        )
        .bind(actor.into_inner())
        .bind(kind.as_str())
        .bind(polarity.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Id::new).collect())
    }

    #[instrument(skip(self))]
    async fn reacted_posts(&self, actor: Id, polarity: Polarity) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT p.id, p.author_id, p.title, p.content, p.category, p.likes, p.dislikes, p.created_at
            FROM reactions r
            INNER JOIN posts p ON p.id = r.target_id
            WHERE r.actor_id = $1 AND r.target_kind = 'post' AND r.polarity = $2
            ORDER BY r.created_at DESC, p.id DESC
            "#,
        )
        .bind(actor.into_inner())
        .bind(polarity.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
