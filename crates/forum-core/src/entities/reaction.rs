//! Reaction entity - one actor's like or dislike on a post or comment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Id, Polarity, Target};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub actor_id: Id,
    pub target: Target,
    pub polarity: Polarity,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(actor_id: Id, target: Target, polarity: Polarity) -> Self {
        Self {
            actor_id,
            target,
            polarity,
            created_at: Utc::now(),
        }
    }
}

/// Denormalized like/dislike counters stored on a target row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}

impl ReactionCounts {
    pub const fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }

    /// Counter for one polarity
    pub const fn get(&self, polarity: Polarity) -> i64 {
        match polarity {
            Polarity::Like => self.likes,
            Polarity::Dislike => self.dislikes,
        }
    }

    pub fn get_mut(&mut self, polarity: Polarity) -> &mut i64 {
        match polarity {
            Polarity::Like => &mut self.likes,
            Polarity::Dislike => &mut self.dislikes,
        }
    }
}
