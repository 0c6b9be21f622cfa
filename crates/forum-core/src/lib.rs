//! # forum-core
//!
//! Domain layer for forum reactions: entities, value objects, the store ports
//! the reaction engine runs against, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, NewNotification, Notification, Post, Reaction, ReactionCounts, TargetRecord, User,
};
pub use error::DomainError;
pub use traits::{
    CounterMaintainer, NotificationLedger, NotificationQuery, NotificationRepository,
    ReactionRepository, ReactionStore, ReactionUnitOfWork, RepoResult,
};
pub use value_objects::{
    Id, IdParseError, Polarity, ReactionState, Target, TargetKind, Transition,
};
