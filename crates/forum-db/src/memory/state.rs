//! Shared state behind the in-memory store

use std::collections::{BTreeMap, HashMap};

use forum_core::entities::{
    Comment, Notification, Post, Reaction, ReactionCounts, TargetRecord, User,
};
use forum_core::value_objects::{Id, Polarity, Target, TargetKind};

/// Key of one reaction row
pub(super) type ReactionKey = (Id, Target, Polarity);

/// Reaction row plus its insertion sequence number (newest-first listings)
#[derive(Debug, Clone)]
pub(super) struct StoredReaction {
    pub seq: u64,
    pub reaction: Reaction,
}

#[derive(Debug, Default)]
pub(super) struct MemoryState {
    pub users: BTreeMap<Id, User>,
    pub posts: BTreeMap<Id, Post>,
    pub comments: BTreeMap<Id, Comment>,
    pub reactions: HashMap<ReactionKey, StoredReaction>,
    pub notifications: BTreeMap<Id, Notification>,
    pub reaction_seq: u64,
    pub notification_seq: i64,
}

impl MemoryState {
    pub fn record(&self, target: Target) -> Option<TargetRecord> {
        match target.kind {
            TargetKind::Post => self.posts.get(&target.id).map(Post::record),
            TargetKind::Comment => self.comments.get(&target.id).map(Comment::record),
        }
    }

    pub fn counts_mut(&mut self, target: Target) -> Option<&mut ReactionCounts> {
        match target.kind {
            TargetKind::Post => self.posts.get_mut(&target.id).map(|p| &mut p.counts),
            TargetKind::Comment => self.comments.get_mut(&target.id).map(|c| &mut c.counts),
        }
    }

    pub fn has(&self, actor: Id, target: Target, polarity: Polarity) -> bool {
        self.reactions.contains_key(&(actor, target, polarity))
    }

    pub fn push_reaction(&mut self, reaction: Reaction) -> ReactionKey {
        self.reaction_seq += 1;
        let key = (reaction.actor_id, reaction.target, reaction.polarity);
        self.reactions.insert(
            key,
            StoredReaction {
                seq: self.reaction_seq,
                reaction,
            },
        );
        key
    }

    /// Reactions of `actor` matching the filter, newest first
    pub fn reactions_by(
        &self,
        actor: Id,
        kind: TargetKind,
        polarity: Polarity,
    ) -> Vec<&StoredReaction> {
        let mut rows: Vec<&StoredReaction> = self
            .reactions
            .values()
            .filter(|stored| {
                stored.reaction.actor_id == actor
                    && stored.reaction.target.kind == kind
                    && stored.reaction.polarity == polarity
            })
            .collect();
        rows.sort_by(|a, b| b.seq.cmp(&a.seq));
        rows
    }

    pub fn tally(&self, target: Target) -> ReactionCounts {
        self.reactions
            .values()
            .filter(|stored| stored.reaction.target == target)
            .fold(ReactionCounts::default(), |mut counts, stored| {
                *counts.get_mut(stored.reaction.polarity) += 1;
                counts
            })
    }

    pub fn notification_for(&self, actor: Id, target: Target) -> Option<Id> {
        self.notifications
            .values()
            .find(|n| n.actor_id == actor && n.target == target)
            .map(|n| n.id)
    }

    pub fn next_notification_id(&mut self) -> Id {
        self.notification_seq += 1;
        Id::new(self.notification_seq)
    }
}
