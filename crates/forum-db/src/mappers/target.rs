//! Target kind / polarity <-> table and column names

use forum_core::entities::{ReactionCounts, TargetRecord};
use forum_core::error::DomainError;
use forum_core::traits::RepoResult;
use forum_core::value_objects::{Id, Polarity, Target, TargetKind};

use crate::models::TargetRowModel;

/// Table holding rows of the given target kind
pub const fn target_table(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Post => "posts",
        TargetKind::Comment => "comments",
    }
}

/// Counter column for a polarity
pub const fn counter_column(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Like => "likes",
        Polarity::Dislike => "dislikes",
    }
}

/// Parse a stored polarity; the column is CHECK-constrained
pub fn parse_polarity(raw: &str) -> RepoResult<Polarity> {
    raw.parse()
        .map_err(|_| DomainError::InternalError(format!("corrupt polarity column: {raw:?}")))
}

/// Parse a stored target kind; the column is CHECK-constrained
pub fn parse_target_kind(raw: &str) -> RepoResult<TargetKind> {
    raw.parse()
        .map_err(|_| DomainError::InternalError(format!("corrupt target_kind column: {raw:?}")))
}

/// Convert a target row to a TargetRecord
pub fn target_record(kind: TargetKind, model: TargetRowModel) -> TargetRecord {
    TargetRecord {
        target: Target::new(kind, Id::new(model.id)),
        owner_id: Id::new(model.owner_id),
        post_id: Id::new(model.post_id),
        counts: ReactionCounts::new(model.likes, model.dislikes),
    }
}
