//! Value objects - immutable types that represent domain concepts

mod id;
mod polarity;
mod target;

pub use id::{Id, IdParseError};
pub use polarity::{Polarity, ReactionState, Transition};
pub use target::{Target, TargetKind};
