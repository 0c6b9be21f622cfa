//! Reaction targets - a post or a comment

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Id;
use crate::error::DomainError;

/// Kind of entity a reaction points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" => Ok(Self::Post),
            "comment" => Ok(Self::Comment),
            other => Err(DomainError::InvalidTargetKind(other.to_string())),
        }
    }
}

/// A post or comment that can receive reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    pub id: Id,
}

impl Target {
    pub const fn new(kind: TargetKind, id: Id) -> Self {
        Self { kind, id }
    }

    pub const fn post(id: Id) -> Self {
        Self::new(TargetKind::Post, id)
    }

    pub const fn comment(id: Id) -> Self {
        Self::new(TargetKind::Comment, id)
    }

    /// The not-found error matching this target's kind
    pub fn not_found(&self) -> DomainError {
        match self.kind {
            TargetKind::Post => DomainError::PostNotFound(self.id),
            TargetKind::Comment => DomainError::CommentNotFound(self.id),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
