//! Reaction service
//!
//! The reaction engine: toggles an actor's like/dislike on a post or comment
//! and keeps the reaction rows, the target's counters and the owner's
//! notifications in step. Every toggle runs in one unit of work that locks the
//! target first, so toggles on the same target are serialized and a failure
//! at any step rolls all of them back.

use forum_core::entities::{Notification, Post, Reaction, ReactionCounts, TargetRecord, User};
use forum_core::traits::ReactionUnitOfWork;
use forum_core::{DomainError, Id, NewNotification, Polarity, ReactionState, Target, TargetKind};
use tracing::{debug, info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of one `react` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionOutcome {
    pub target: Target,
    /// State of the actor towards the target after the call
    pub state: ReactionState,
    /// Counters after the call
    pub counts: ReactionCounts,
    /// Notification created by this call, if the call applied a reaction
    pub notification: Option<Notification>,
}

/// Result of a counter repair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecountOutcome {
    pub target: Target,
    /// Counters stored before the repair
    pub previous: ReactionCounts,
    /// Counters after the repair (the true row counts)
    pub counts: ReactionCounts,
}

impl RecountOutcome {
    pub fn repaired(&self) -> bool {
        self.previous != self.counts
    }
}

/// Counters of a target plus the caller's own state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountsView {
    pub target: Target,
    pub counts: ReactionCounts,
    pub me: ReactionState,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle `actor`'s `polarity` reaction on `target`.
    ///
    /// Reacting with the polarity already held removes it; reacting with the
    /// opposite one switches over. Both the target and the actor must exist.
    /// `owner`, when given, must match the target's author.
    #[instrument(skip(self), fields(target = %target))]
    pub async fn react(
        &self,
        actor: Id,
        target: Target,
        owner: Option<Id>,
        polarity: Polarity,
    ) -> ServiceResult<ReactionOutcome> {
        let mut uow = self.ctx.reaction_repo().begin().await?;

        let record = uow.lock_target(target).await?;
        let user = uow.load_actor(actor).await?;
        if let Some(supplied) = owner {
            if supplied != record.owner_id {
                return Err(DomainError::OwnerMismatch {
                    target,
                    supplied,
                    actual: record.owner_id,
                }
                .into());
            }
        }

        let current = current_state(uow.as_mut(), actor, target).await?;
        let transition = current.toggle(polarity);

        if let Some(cleared) = transition.clear {
            clear_reaction(uow.as_mut(), actor, target, cleared).await?;
        }

        let notification = match transition.apply {
            Some(applied) => Some(apply_reaction(uow.as_mut(), &user, &record, applied).await?),
            None => None,
        };

        let counts = uow.counts(target).await?;
        uow.commit().await?;

        let state = transition.resulting_state();
        info!(
            actor = %actor,
            owner = %record.owner_id,
            from = %current,
            to = %state,
            likes = counts.likes,
            dislikes = counts.dislikes,
            "Reaction toggled"
        );

        Ok(ReactionOutcome {
            target,
            state,
            counts,
            notification,
        })
    }

    /// Recompute the target's counters from its reaction rows and overwrite
    /// them if they drifted
    #[instrument(skip(self), fields(target = %target))]
    pub async fn recount(&self, target: Target) -> ServiceResult<RecountOutcome> {
        let mut uow = self.ctx.reaction_repo().begin().await?;

        let record = uow.lock_target(target).await?;
        let tally = uow.tally(target).await?;

        if tally != record.counts {
            warn!(
                stored_likes = record.counts.likes,
                stored_dislikes = record.counts.dislikes,
                likes = tally.likes,
                dislikes = tally.dislikes,
                "Counter drift detected, repairing"
            );
            uow.overwrite(target, tally).await?;
        }

        uow.commit().await?;

        Ok(RecountOutcome {
            target,
            previous: record.counts,
            counts: tally,
        })
    }

    /// Current counters of the target and the caller's state towards it
    #[instrument(skip(self), fields(target = %target))]
    pub async fn counts(&self, actor: Id, target: Target) -> ServiceResult<CountsView> {
        let record = self
            .ctx
            .reaction_repo()
            .find_target(target)
            .await?
            .ok_or_else(|| target.not_found())?;

        let mine = self.ctx.reaction_repo().reaction_of(actor, target).await?;

        Ok(CountsView {
            target,
            counts: record.counts,
            me: ReactionState::from_polarity(mine),
        })
    }

    /// Ids of the targets of `kind` the actor holds `polarity` on
    #[instrument(skip(self))]
    pub async fn reacted_target_ids(
        &self,
        actor: Id,
        kind: TargetKind,
        polarity: Polarity,
    ) -> ServiceResult<Vec<Id>> {
        Ok(self
            .ctx
            .reaction_repo()
            .reacted_target_ids(actor, kind, polarity)
            .await?)
    }

    /// Posts the actor liked or disliked
    #[instrument(skip(self))]
    pub async fn reacted_posts(&self, actor: Id, polarity: Polarity) -> ServiceResult<Vec<Post>> {
        Ok(self.ctx.reaction_repo().reacted_posts(actor, polarity).await?)
    }
}

/// Read the actor's state inside the unit of work.
///
/// Both rows present means an earlier writer broke the one-reaction rule;
/// both are cleared and the toggle continues from `None`.
async fn current_state(
    uow: &mut dyn ReactionUnitOfWork,
    actor: Id,
    target: Target,
) -> ServiceResult<ReactionState> {
    let liked = uow.has(actor, target, Polarity::Like).await?;
    let disliked = uow.has(actor, target, Polarity::Dislike).await?;

    if liked && disliked {
        warn!(
            error = %DomainError::InconsistentState { actor, target },
            "Clearing both reactions"
        );
        clear_reaction(uow, actor, target, Polarity::Like).await?;
        clear_reaction(uow, actor, target, Polarity::Dislike).await?;
        return Ok(ReactionState::None);
    }

    Ok(ReactionState::from_flags(liked, disliked))
}

/// Remove the row, its notification and one unit of the counter
async fn clear_reaction(
    uow: &mut dyn ReactionUnitOfWork,
    actor: Id,
    target: Target,
    polarity: Polarity,
) -> ServiceResult<()> {
    uow.delete(actor, target, polarity).await?;
    let removed = uow.delete_for(actor, target).await?;
    uow.decrement_if_positive(target, polarity).await?;

    debug!(polarity = %polarity, notifications_removed = removed, "Reaction cleared");
    Ok(())
}

/// Insert the row, bump the counter and notify the owner
async fn apply_reaction(
    uow: &mut dyn ReactionUnitOfWork,
    actor: &User,
    record: &TargetRecord,
    polarity: Polarity,
) -> ServiceResult<Notification> {
    uow.insert(&Reaction::new(actor.id, record.target, polarity))
        .await?;
    uow.increment(record.target, polarity).await?;
    let notification = uow
        .put(NewNotification::for_reaction(actor, record, polarity))
        .await?;

    debug!(polarity = %polarity, notification = %notification.id, "Reaction applied");
    Ok(notification)
}
