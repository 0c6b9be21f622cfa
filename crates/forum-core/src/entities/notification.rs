//! Notification entity - "actor reacted to owner's post/comment"

use chrono::{DateTime, Utc};

use super::{TargetRecord, User};
use crate::value_objects::{Id, Polarity, Target, TargetKind};

/// Notification as stored in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Id,
    pub actor_id: Id,
    /// Username of the actor when the notification was written
    pub actor_name: String,
    pub owner_id: Id,
    pub target: Target,
    pub post_id: Id,
    pub verb: Polarity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Attach a ledger-assigned id to a pending notification
    pub fn from_new(id: Id, new: NewNotification) -> Self {
        Self {
            id,
            actor_id: new.actor_id,
            actor_name: new.actor_name,
            owner_id: new.owner_id,
            target: new.target,
            post_id: new.post_id,
            verb: new.verb,
            created_at: new.created_at,
        }
    }

    /// What happened, without the actor, e.g. "liked your post"
    pub fn action(&self) -> &'static str {
        match (self.verb, self.target.kind) {
            (Polarity::Like, TargetKind::Post) => "liked your post",
            (Polarity::Dislike, TargetKind::Post) => "disliked your post",
            (Polarity::Like, TargetKind::Comment) => "liked your comment",
            (Polarity::Dislike, TargetKind::Comment) => "disliked your comment",
        }
    }

    /// Activity line shown to the owner, e.g. "alice liked your post"
    pub fn message(&self) -> String {
        format!("{} {}", self.actor_name, self.action())
    }
}

/// Notification before the ledger assigned it an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub actor_id: Id,
    pub actor_name: String,
    pub owner_id: Id,
    pub target: Target,
    pub post_id: Id,
    pub verb: Polarity,
    pub created_at: DateTime<Utc>,
}

impl NewNotification {
    /// Notification for `actor` reacting with `verb` to the locked target
    pub fn for_reaction(actor: &User, record: &TargetRecord, verb: Polarity) -> Self {
        Self {
            actor_id: actor.id,
            actor_name: actor.username.clone(),
            owner_id: record.owner_id,
            target: record.target,
            post_id: record.post_id,
            verb,
            created_at: Utc::now(),
        }
    }
}
