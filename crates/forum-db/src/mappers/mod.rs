//! Entity to model mappers
//!
//! Conversions between domain entities (forum-core) and database models, plus
//! the table and column names a target kind or polarity maps to.

mod notification;
mod post;
mod target;
mod user;

pub use notification::NotificationInsert;
pub use target::{counter_column, parse_polarity, parse_target_kind, target_record, target_table};
