//! Business logic services
//!
//! Service layer implementations that orchestrate domain operations over the
//! repository ports.

pub mod context;
pub mod error;
pub mod notification;
pub mod reaction;
pub mod user;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use reaction::{CountsView, ReactionOutcome, ReactionService, RecountOutcome};
pub use user::UserService;
