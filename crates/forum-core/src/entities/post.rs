//! Post and comment entities
//!
//! Only the fields the reaction subsystem reads are modelled here; text
//! editing lives elsewhere.

use chrono::{DateTime, Utc};

use super::{ReactionCounts, TargetRecord};
use crate::value_objects::{Id, Target};

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Id,
    pub author_id: Id,
    pub title: String,
    pub content: String,
    pub category: String,
    pub counts: ReactionCounts,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with zeroed counters
    pub fn new(id: Id, author_id: Id, title: String, content: String, category: String) -> Self {
        Self {
            id,
            author_id,
            title,
            content,
            category,
            counts: ReactionCounts::default(),
            created_at: Utc::now(),
        }
    }

    pub fn target(&self) -> Target {
        Target::post(self.id)
    }

    pub fn record(&self) -> TargetRecord {
        TargetRecord {
            target: self.target(),
            owner_id: self.author_id,
            post_id: self.id,
            counts: self.counts,
        }
    }
}

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Id,
    pub post_id: Id,
    pub author_id: Id,
    pub content: String,
    pub counts: ReactionCounts,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with zeroed counters
    pub fn new(id: Id, post_id: Id, author_id: Id, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            counts: ReactionCounts::default(),
            created_at: Utc::now(),
        }
    }

    pub fn target(&self) -> Target {
        Target::comment(self.id)
    }

    pub fn record(&self) -> TargetRecord {
        TargetRecord {
            target: self.target(),
            owner_id: self.author_id,
            post_id: self.post_id,
            counts: self.counts,
        }
    }
}
