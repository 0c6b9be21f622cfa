//! Repository traits (ports) - define the interface for data access
//!
//! The reaction engine needs three stores to move together: reaction rows,
//! the denormalized counters on the target row, and the notification ledger.
//! They are exposed as separate traits so each contract stays small, and are
//! bundled into a [`ReactionUnitOfWork`] so that one `react` call runs inside
//! a single transaction. Nothing written through a unit of work is visible to
//! other callers until [`ReactionUnitOfWork::commit`] succeeds; dropping it
//! without committing rolls everything back.

use async_trait::async_trait;

use crate::entities::{
    NewNotification, Notification, Post, Reaction, ReactionCounts, TargetRecord, User,
};
use crate::error::DomainError;
use crate::value_objects::{Id, Polarity, Target, TargetKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
pub trait ReactionStore: Send {
    /// Check whether `actor` holds a `polarity` reaction on `target`
    async fn has(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<bool>;

    /// Insert a reaction row.
    ///
    /// Fails with `ReactionAlreadyExists` if the actor already has any
    /// reaction on the target; the caller clears the other polarity first.
    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()>;

    /// Delete a reaction row. Deleting a missing row is not an error.
    async fn delete(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<()>;

    /// Count reaction rows per polarity (source of truth for the counters)
    async fn tally(&mut self, target: Target) -> RepoResult<ReactionCounts>;
}

// ============================================================================
// Counter Maintainer
// ============================================================================

#[async_trait]
pub trait CounterMaintainer: Send {
    /// Add one to the polarity's counter on the target row
    async fn increment(&mut self, target: Target, polarity: Polarity) -> RepoResult<()>;

    /// Subtract one from the polarity's counter unless it is already zero
    async fn decrement_if_positive(&mut self, target: Target, polarity: Polarity)
        -> RepoResult<()>;

    /// Read the stored counters; a missing target is a not-found error
    async fn counts(&mut self, target: Target) -> RepoResult<ReactionCounts>;

    /// Replace the stored counters (repair after detected drift)
    async fn overwrite(&mut self, target: Target, counts: ReactionCounts) -> RepoResult<()>;
}

// ============================================================================
// Notification Ledger
// ============================================================================

#[async_trait]
pub trait NotificationLedger: Send {
    /// Store a notification, replacing any live one for the same
    /// (actor, target) pair
    async fn put(&mut self, notification: NewNotification) -> RepoResult<Notification>;

    /// Delete the live notification for (actor, target), if any.
    /// Returns the number of rows removed.
    async fn delete_for(&mut self, actor: Id, target: Target) -> RepoResult<u64>;
}

// ============================================================================
// Unit of Work
// ============================================================================

#[async_trait]
pub trait ReactionUnitOfWork: ReactionStore + CounterMaintainer + NotificationLedger {
    /// Lock the target row for the rest of the unit of work and read it.
    ///
    /// Concurrent units of work on the same target block here until this one
    /// finishes. Returns the kind-specific not-found error for a missing target.
    async fn lock_target(&mut self, target: Target) -> RepoResult<TargetRecord>;

    /// Read the reacting user; a missing user is `UserNotFound`
    async fn load_actor(&mut self, actor: Id) -> RepoResult<User>;

    /// Make every write of this unit of work durable and visible
    async fn commit(&mut self) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Start a unit of work (one transaction)
    async fn begin(&self) -> RepoResult<Box<dyn ReactionUnitOfWork>>;

    /// Read a target row without locking it
    async fn find_target(&self, target: Target) -> RepoResult<Option<TargetRecord>>;

    async fn find_user(&self, id: Id) -> RepoResult<Option<User>>;

    /// Current polarity of `actor` on `target`, if any
    async fn reaction_of(&self, actor: Id, target: Target) -> RepoResult<Option<Polarity>>;

    /// Ids of targets of `kind` the actor reacted to with `polarity`,
    /// newest reaction first
    async fn reacted_target_ids(
        &self,
        actor: Id,
        kind: TargetKind,
        polarity: Polarity,
    ) -> RepoResult<Vec<Id>>;

    /// Posts the actor reacted to with `polarity`, newest reaction first
    async fn reacted_posts(&self, actor: Id, polarity: Polarity) -> RepoResult<Vec<Post>>;

    /// Check that the backing store answers
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

/// Default page size for notification listings
pub const DEFAULT_NOTIFICATION_LIMIT: i64 = 50;
/// Maximum page size for notification listings
pub const MAX_NOTIFICATION_LIMIT: i64 = 100;

/// Pagination options for notification queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationQuery {
    /// Only notifications with an id lower than this cursor
    pub before: Option<Id>,
    pub limit: i64,
    /// Restrict to post or comment notifications
    pub kind: Option<TargetKind>,
}

impl Default for NotificationQuery {
    fn default() -> Self {
        Self {
            before: None,
            limit: DEFAULT_NOTIFICATION_LIMIT,
            kind: None,
        }
    }
}

impl NotificationQuery {
    /// Limit clamped to 1..=100
    pub fn effective_limit(&self) -> i64 {
        self.limit.clamp(1, MAX_NOTIFICATION_LIMIT)
    }
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications addressed to `owner`, newest first
    async fn list_for_owner(
        &self,
        owner: Id,
        query: NotificationQuery,
    ) -> RepoResult<Vec<Notification>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_query_limit_clamping() {
        let query = NotificationQuery::default();
        assert_eq!(query.effective_limit(), DEFAULT_NOTIFICATION_LIMIT);

        let query = NotificationQuery {
            limit: 500,
            ..Default::default()
        };
        assert_eq!(query.effective_limit(), MAX_NOTIFICATION_LIMIT);

        let query = NotificationQuery {
            limit: 0,
            ..Default::default()
        };
        assert_eq!(query.effective_limit(), 1);
    }
}
