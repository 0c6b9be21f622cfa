//! In-memory implementation of the reaction and notification repositories

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use forum_core::entities::{
    Comment, Notification, Post, Reaction, ReactionCounts, TargetRecord, User,
};
use forum_core::error::DomainError;
use forum_core::traits::{
    NotificationQuery, NotificationRepository, ReactionRepository, ReactionUnitOfWork,
    RepoResult,
};
use forum_core::value_objects::{Id, Polarity, Target, TargetKind};

use super::state::MemoryState;
use super::unit_of_work::{FaultSlot, MemoryUnitOfWork, StoreOp};

/// Process-local forum store
#[derive(Debug, Clone, Default)]
pub struct InMemoryForumStore {
    state: Arc<tokio::sync::Mutex<MemoryState>>,
    faults: FaultSlot,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user
    pub async fn insert_user(&self, user: User) {
        self.state.lock().await.users.insert(user.id, user);
    }

    /// Add or replace a post
    pub async fn insert_post(&self, post: Post) {
        self.state.lock().await.posts.insert(post.id, post);
    }

    /// Add or replace a comment; its post must exist
    pub async fn insert_comment(&self, comment: Comment) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        if !state.posts.contains_key(&comment.post_id) {
            return Err(DomainError::PostNotFound(comment.post_id));
        }
        state.comments.insert(comment.id, comment);
        Ok(())
    }

    /// Overwrite stored counters without touching reaction rows
    pub async fn set_counts(&self, target: Target, counts: ReactionCounts) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        let stored = state.counts_mut(target).ok_or_else(|| target.not_found())?;
        *stored = counts;
        Ok(())
    }

    /// Store a reaction row as-is, skipping the one-row-per-pair check.
    /// Counters are not touched. Used to load rows written by older versions.
    pub async fn insert_reaction_unchecked(&self, reaction: Reaction) {
        self.state.lock().await.push_reaction(reaction);
    }

    /// Make the next call of `op` inside a unit of work fail with
    /// `StoreUnavailable`
    pub fn fail_on(&self, op: StoreOp) {
        *self.faults.lock() = Some(op);
    }

    /// Every stored reaction row of `actor` on `target`
    pub async fn reactions_of(&self, actor: Id, target: Target) -> Vec<Polarity> {
        let state = self.state.lock().await;
        [Polarity::Like, Polarity::Dislike]
            .into_iter()
            .filter(|&polarity| state.has(actor, target, polarity))
            .collect()
    }

    /// Live notifications created by `actor` for `target`
    pub async fn notifications_for(&self, actor: Id, target: Target) -> Vec<Notification> {
        self.state
            .lock()
            .await
            .notifications
            .values()
            .filter(|n| n.actor_id == actor && n.target == target)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ReactionRepository for InMemoryForumStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn ReactionUnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        Ok(Box::new(MemoryUnitOfWork::new(
            guard,
            Arc::clone(&self.faults),
        )))
    }

    async fn find_target(&self, target: Target) -> RepoResult<Option<TargetRecord>> {
        Ok(self.state.lock().await.record(target))
    }

    async fn find_user(&self, id: Id) -> RepoResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn reaction_of(&self, actor: Id, target: Target) -> RepoResult<Option<Polarity>> {
        let state = self.state.lock().await;
        Ok([Polarity::Like, Polarity::Dislike]
            .into_iter()
            .find(|&polarity| state.has(actor, target, polarity)))
    }

    async fn reacted_target_ids(
        &self,
        actor: Id,
        kind: TargetKind,
        polarity: Polarity,
    ) -> RepoResult<Vec<Id>> {
        let state = self.state.lock().await;
        Ok(state
            .reactions_by(actor, kind, polarity)
            .into_iter()
            .map(|stored| stored.reaction.target.id)
            .collect())
    }

    async fn reacted_posts(&self, actor: Id, polarity: Polarity) -> RepoResult<Vec<Post>> {
        let state = self.state.lock().await;
        Ok(state
            .reactions_by(actor, TargetKind::Post, polarity)
            .into_iter()
            .filter_map(|stored| state.posts.get(&stored.reaction.target.id).cloned())
            .collect())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl NotificationRepository for InMemoryForumStore {
    #[instrument(skip(self))]
    async fn list_for_owner(
        &self,
        owner: Id,
        query: NotificationQuery,
    ) -> RepoResult<Vec<Notification>> {
        let state = self.state.lock().await;
        let limit = usize::try_from(query.effective_limit()).unwrap_or(usize::MAX);

        Ok(state
            .notifications
            .values()
            .rev()
            .filter(|n| n.owner_id == owner)
            .filter(|n| query.before.map_or(true, |before| n.id < before))
            .filter(|n| query.kind.map_or(true, |kind| n.target.kind == kind))
            .take(limit)
            .cloned()
            .collect())
    }
}
