//! Database models - SQLx-compatible structs for PostgreSQL tables

mod notification;
mod post;
mod reaction;
mod user;

pub use notification::NotificationModel;
pub use post::{PostModel, TargetRowModel};
pub use reaction::TallyModel;
pub use user::UserModel;
