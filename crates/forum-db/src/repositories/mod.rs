//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.

mod error;
mod notification;
mod reaction;
mod unit_of_work;

pub use notification::PgNotificationRepository;
pub use reaction::PgReactionRepository;
pub use unit_of_work::PgReactionUnitOfWork;
