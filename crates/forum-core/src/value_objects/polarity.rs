//! Reaction polarity and the per-(actor, target) toggle state machine

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Like or dislike. An actor holds at most one of them per target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    /// Wire name, also used as the notification verb
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Polarity {
    type Err = DomainError;

    /// Only the exact literals `like` and `dislike` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(DomainError::InvalidPolarity(other.to_string())),
        }
    }
}

/// Reaction state of one actor towards one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionState {
    #[default]
    None,
    Liked,
    Disliked,
}

impl ReactionState {
    /// Build the state from the two existence checks.
    ///
    /// Callers must rule out `liked && disliked` first; that combination is
    /// an integrity violation and has no state of its own.
    pub fn from_flags(liked: bool, disliked: bool) -> Self {
        debug_assert!(!(liked && disliked));
        match (liked, disliked) {
            (true, _) => Self::Liked,
            (false, true) => Self::Disliked,
            (false, false) => Self::None,
        }
    }

    pub const fn from_polarity(polarity: Option<Polarity>) -> Self {
        match polarity {
            Some(Polarity::Like) => Self::Liked,
            Some(Polarity::Dislike) => Self::Disliked,
            None => Self::None,
        }
    }

    /// The polarity currently switched on, if any
    pub const fn active(self) -> Option<Polarity> {
        match self {
            Self::None => None,
            Self::Liked => Some(Polarity::Like),
            Self::Disliked => Some(Polarity::Dislike),
        }
    }

    /// Compute the transition for a requested polarity.
    ///
    /// Same polarity switches it off, the opposite polarity is cleared before
    /// the requested one is applied, and from `None` the request is applied.
    pub fn toggle(self, requested: Polarity) -> Transition {
        match self.active() {
            Some(current) if current == requested => Transition {
                clear: Some(current),
                apply: None,
            },
            Some(current) => Transition {
                clear: Some(current),
                apply: Some(requested),
            },
            None => Transition {
                clear: None,
                apply: Some(requested),
            },
        }
    }
}

impl fmt::Display for ReactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Liked => "liked",
            Self::Disliked => "disliked",
        })
    }
}

/// Steps to run for one `react` call, in order: clear first, then apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Polarity whose row, notification and counter are removed
    pub clear: Option<Polarity>,
    /// Polarity whose row, notification and counter are added
    pub apply: Option<Polarity>,
}

impl Transition {
    pub const fn resulting_state(&self) -> ReactionState {
        ReactionState::from_polarity(self.apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polarity() {
        assert_eq!("like".parse::<Polarity>().unwrap(), Polarity::Like);
        assert_eq!("dislike".parse::<Polarity>().unwrap(), Polarity::Dislike);

        let err = "LIKE".parse::<Polarity>().unwrap_err();
        assert_eq!(err.code(), "INVALID_POLARITY");
        assert!("love".parse::<Polarity>().is_err());
        assert!("".parse::<Polarity>().is_err());
    }

    #[test]
    fn test_polarity_serde() {
        assert_eq!(serde_json::to_string(&Polarity::Dislike).unwrap(), "\"dislike\"");
        let p: Polarity = serde_json::from_str("\"like\"").unwrap();
        assert_eq!(p, Polarity::Like);
    }

    #[test]
    fn test_toggle_from_none() {
        let t = ReactionState::None.toggle(Polarity::Like);
        assert_eq!(t.clear, None);
        assert_eq!(t.apply, Some(Polarity::Like));
        assert_eq!(t.resulting_state(), ReactionState::Liked);
    }

    #[test]
    fn test_toggle_same_polarity_switches_off() {
        let t = ReactionState::Disliked.toggle(Polarity::Dislike);
        assert_eq!(t.clear, Some(Polarity::Dislike));
        assert_eq!(t.apply, None);
        assert_eq!(t.resulting_state(), ReactionState::None);
    }

    #[test]
    fn test_toggle_flip_clears_opposite_first() {
        let t = ReactionState::Liked.toggle(Polarity::Dislike);
        assert_eq!(t.clear, Some(Polarity::Like));
        assert_eq!(t.apply, Some(Polarity::Dislike));
        assert_eq!(t.resulting_state(), ReactionState::Disliked);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(ReactionState::from_flags(false, false), ReactionState::None);
        assert_eq!(ReactionState::from_flags(true, false), ReactionState::Liked);
        assert_eq!(ReactionState::from_flags(false, true), ReactionState::Disliked);
    }
}
