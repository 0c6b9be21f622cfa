//! Row identifier shared by users, posts, comments and notifications
//!
//! Identifiers come from `BIGSERIAL` columns and are never negative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative 64-bit row identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Id(i64);

impl Id {
    /// Wrap a raw value that is already known to be non-negative
    /// (database rows, literals).
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Checked constructor for values coming from outside the process
    pub fn try_new(id: i64) -> Result<Self, IdParseError> {
        if id < 0 {
            return Err(IdParseError::Negative(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

/// Error when parsing an Id from untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be non-negative, got {0}")]
    Negative(i64),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Id {
    type Error = IdParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl std::str::FromStr for Id {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i64>()
            .map_err(|_| IdParseError::InvalidFormat)?;
        Self::try_new(raw)
    }
}
