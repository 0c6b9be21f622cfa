//! Target record - the row a reaction locks and updates

use super::ReactionCounts;
use crate::value_objects::{Id, Target};

/// Snapshot of a post or comment row taken under the reaction lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRecord {
    pub target: Target,
    /// Author of the post or comment; notifications are addressed to them
    pub owner_id: Id,
    /// Post the target belongs to (a post belongs to itself)
    pub post_id: Id,
    pub counts: ReactionCounts,
}
