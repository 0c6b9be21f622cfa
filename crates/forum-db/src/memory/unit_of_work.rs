//! In-memory unit of work with one-shot fault injection
//!
//! Writes go straight to the locked state; each one records its inverse in a
//! journal that is replayed newest first if the unit of work is dropped
//! without committing.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::OwnedMutexGuard;

use forum_core::entities::{
    NewNotification, Notification, Reaction, ReactionCounts, TargetRecord, User,
};
use forum_core::error::DomainError;
use forum_core::traits::{
    CounterMaintainer, NotificationLedger, ReactionStore, ReactionUnitOfWork, RepoResult,
};
use forum_core::value_objects::{Id, Polarity, Target};

use super::state::{MemoryState, ReactionKey, StoredReaction};

/// Store operation that can be made to fail once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    LockTarget,
    LoadActor,
    Has,
    InsertReaction,
    DeleteReaction,
    Tally,
    Increment,
    Decrement,
    Counts,
    Overwrite,
    PutNotification,
    DeleteNotification,
    Commit,
}

pub(super) type FaultSlot = Arc<Mutex<Option<StoreOp>>>;

/// Inverse of one write
#[derive(Debug)]
enum Undo {
    RemoveReaction(ReactionKey),
    RestoreReaction(ReactionKey, StoredReaction),
    RestoreCounts(Target, ReactionCounts),
    /// Previous occupant of a notification id (`None`: the id was free)
    RestoreNotification(Id, Option<Notification>),
}

impl Undo {
    fn revert(self, state: &mut MemoryState) {
        match self {
            Self::RemoveReaction(key) => {
                state.reactions.remove(&key);
            }
            Self::RestoreReaction(key, stored) => {
                state.reactions.insert(key, stored);
            }
            Self::RestoreCounts(target, counts) => {
                if let Some(stored) = state.counts_mut(target) {
                    *stored = counts;
                }
            }
            Self::RestoreNotification(id, Some(previous)) => {
                state.notifications.insert(id, previous);
            }
            Self::RestoreNotification(id, None) => {
                state.notifications.remove(&id);
            }
        }
    }
}

/// Unit of work holding the store lock until commit or drop
pub struct MemoryUnitOfWork {
    guard: Option<OwnedMutexGuard<MemoryState>>,
    journal: Vec<Undo>,
    faults: FaultSlot,
}

impl MemoryUnitOfWork {
    pub(super) fn new(guard: OwnedMutexGuard<MemoryState>, faults: FaultSlot) -> Self {
        Self {
            guard: Some(guard),
            journal: Vec::new(),
            faults,
        }
    }

    /// Fail if `op` is the armed fault, disarming it
    fn check(&self, op: StoreOp) -> RepoResult<()> {
        let mut armed = self.faults.lock();
        if *armed == Some(op) {
            *armed = None;
            return Err(DomainError::StoreUnavailable(format!(
                "injected failure on {op:?}"
            )));
        }
        Ok(())
    }

    fn state(&mut self, op: StoreOp) -> RepoResult<&mut MemoryState> {
        self.check(op)?;
        self.guard.as_deref_mut().ok_or_else(|| {
            DomainError::InternalError("unit of work already committed".to_string())
        })
    }

    /// Change one counter of `target` and journal its previous value
    fn update_counts(
        &mut self,
        op: StoreOp,
        target: Target,
        update: impl FnOnce(&mut ReactionCounts),
    ) -> RepoResult<()> {
        let counts = self
            .state(op)?
            .counts_mut(target)
            .ok_or_else(|| target.not_found())?;
        let previous = *counts;
        update(counts);
        self.journal.push(Undo::RestoreCounts(target, previous));
        Ok(())
    }
}

impl Drop for MemoryUnitOfWork {
    fn drop(&mut self) {
        if let Some(state) = self.guard.as_deref_mut() {
            for undo in self.journal.drain(..).rev() {
                undo.revert(state);
            }
        }
    }
}

#[async_trait]
impl ReactionStore for MemoryUnitOfWork {
    async fn has(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<bool> {
        Ok(self.state(StoreOp::Has)?.has(actor, target, polarity))
    }

    async fn insert(&mut self, reaction: &Reaction) -> RepoResult<()> {
        let state = self.state(StoreOp::InsertReaction)?;
        let (actor, target) = (reaction.actor_id, reaction.target);
        if !state.users.contains_key(&actor) {
            return Err(DomainError::UserNotFound(actor));
        }
        if state.has(actor, target, Polarity::Like) || state.has(actor, target, Polarity::Dislike)
        {
            return Err(DomainError::ReactionAlreadyExists);
        }
        let key = state.push_reaction(reaction.clone());
        self.journal.push(Undo::RemoveReaction(key));
        Ok(())
    }

    async fn delete(&mut self, actor: Id, target: Target, polarity: Polarity) -> RepoResult<()> {
        let key = (actor, target, polarity);
        let removed = self.state(StoreOp::DeleteReaction)?.reactions.remove(&key);
        if let Some(stored) = removed {
            self.journal.push(Undo::RestoreReaction(key, stored));
        }
        Ok(())
    }

    async fn tally(&mut self, target: Target) -> RepoResult<ReactionCounts> {
        Ok(self.state(StoreOp::Tally)?.tally(target))
    }
}

#[async_trait]
impl CounterMaintainer for MemoryUnitOfWork {
    async fn increment(&mut self, target: Target, polarity: Polarity) -> RepoResult<()> {
        self.update_counts(StoreOp::Increment, target, |counts| {
            *counts.get_mut(polarity) += 1;
        })
    }

    async fn decrement_if_positive(
        &mut self,
        target: Target,
        polarity: Polarity,
    ) -> RepoResult<()> {
        self.update_counts(StoreOp::Decrement, target, |counts| {
            let counter = counts.get_mut(polarity);
            if *counter > 0 {
                *counter -= 1;
            }
        })
    }

    async fn counts(&mut self, target: Target) -> RepoResult<ReactionCounts> {
        self.state(StoreOp::Counts)?
            .record(target)
            .map(|record| record.counts)
            .ok_or_else(|| target.not_found())
    }

    async fn overwrite(&mut self, target: Target, counts: ReactionCounts) -> RepoResult<()> {
        self.update_counts(StoreOp::Overwrite, target, |stored| *stored = counts)
    }
}

#[async_trait]
impl NotificationLedger for MemoryUnitOfWork {
    async fn put(&mut self, notification: NewNotification) -> RepoResult<Notification> {
        let state = self.state(StoreOp::PutNotification)?;
        let id = match state.notification_for(notification.actor_id, notification.target) {
            Some(existing) => existing,
            None => state.next_notification_id(),
        };
        let stored = Notification::from_new(id, notification);
        let previous = state.notifications.insert(id, stored.clone());
        self.journal.push(Undo::RestoreNotification(id, previous));
        Ok(stored)
    }

    async fn delete_for(&mut self, actor: Id, target: Target) -> RepoResult<u64> {
        let state = self.state(StoreOp::DeleteNotification)?;
        let ids: Vec<Id> = state
            .notifications
            .values()
            .filter(|n| n.actor_id == actor && n.target == target)
            .map(|n| n.id)
            .collect();
        let removed: Vec<Notification> = ids
            .iter()
            .filter_map(|id| state.notifications.remove(id))
            .collect();

        let count = removed.len() as u64;
        self.journal.extend(
            removed
                .into_iter()
                .map(|n| Undo::RestoreNotification(n.id, Some(n))),
        );
        Ok(count)
    }
}

#[async_trait]
impl ReactionUnitOfWork for MemoryUnitOfWork {
    async fn lock_target(&mut self, target: Target) -> RepoResult<TargetRecord> {
        // The whole store is already locked for the lifetime of the unit of work
        self.state(StoreOp::LockTarget)?
            .record(target)
            .ok_or_else(|| target.not_found())
    }

    async fn load_actor(&mut self, actor: Id) -> RepoResult<User> {
        self.state(StoreOp::LoadActor)?
            .users
            .get(&actor)
            .cloned()
            .ok_or(DomainError::UserNotFound(actor))
    }

    async fn commit(&mut self) -> RepoResult<()> {
        self.state(StoreOp::Commit)?;
        self.journal.clear();
        self.guard = None;
        Ok(())
    }
}
