//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Id, Target};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Id),

    #[error("Comment not found: {0}")]
    CommentNotFound(Id),

    #[error("User not found: {0}")]
    UserNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction action: {0:?} (expected \"like\" or \"dislike\")")]
    InvalidPolarity(String),

    #[error("Invalid target kind: {0:?} (expected \"post\" or \"comment\")")]
    InvalidTargetKind(String),

    #[error("Owner {supplied} does not own {target} (owner is {actual})")]
    OwnerMismatch {
        target: Target,
        supplied: Id,
        actual: Id,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Integrity Errors
    // =========================================================================
    #[error("Inconsistent reaction state for actor {actor} on {target}: both like and dislike rows exist")]
    InconsistentState { actor: Id, target: Target },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPolarity(_) => "INVALID_POLARITY",
            Self::InvalidTargetKind(_) => "INVALID_TARGET_KIND",
            Self::OwnerMismatch { .. } => "OWNER_MISMATCH",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",

            // Integrity
            Self::InconsistentState { .. } => "INCONSISTENT_STATE",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::CommentNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidPolarity(_)
                | Self::InvalidTargetKind(_)
                | Self::OwnerMismatch { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }

    /// Check if the underlying persistence failed
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
