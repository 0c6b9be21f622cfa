//! Store ports used by the reaction engine and its read paths

mod repositories;

pub use repositories::{
    CounterMaintainer, NotificationLedger, NotificationQuery, NotificationRepository,
    ReactionRepository, ReactionStore, ReactionUnitOfWork, RepoResult,
};
