//! Domain entities - core business objects

mod notification;
mod post;
mod reaction;
mod target;
mod user;

pub use notification::{NewNotification, Notification};
pub use post::{Comment, Post};
pub use reaction::{Reaction, ReactionCounts};
pub use target::TargetRecord;
pub use user::User;
