//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings are parsed
//! into domain types by their `parse` helpers.

use forum_core::{DomainError, Id, NotificationQuery, Polarity, TargetKind};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle a reaction on a post or comment
///
/// `action` stays a plain string and is not validated here, so that any
/// value other than `like` or `dislike` is reported as `INVALID_POLARITY`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    pub action: String,

    /// Expected author of the target; rejected if it disagrees
    #[validate(range(min = 0, message = "owner_id must be non-negative"))]
    pub owner_id: Option<i64>,
}

impl ReactRequest {
    /// Requested polarity
    pub fn polarity(&self) -> Result<Polarity, DomainError> {
        self.action.parse()
    }

    /// Supplied owner, if any
    pub fn owner(&self) -> Option<Id> {
        self.owner_id.map(Id::new)
    }
}

// ============================================================================
// Query Requests
// ============================================================================

/// `GET /users/@me/reactions?kind=&action=`
#[derive(Debug, Clone, Deserialize)]
pub struct ReactedTargetsQuery {
    pub kind: String,
    pub action: String,
}

impl ReactedTargetsQuery {
    pub fn parse(&self) -> Result<(TargetKind, Polarity), DomainError> {
        Ok((self.kind.parse()?, self.action.parse()?))
    }
}

/// `GET /users/@me/notifications?before=&limit=&kind=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationFeedQuery {
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub kind: Option<String>,
}

impl NotificationFeedQuery {
    /// Convert into a store query; the limit is clamped by the store
    pub fn parse(&self) -> Result<NotificationQuery, DomainError> {
        let before = self
            .before
            .as_deref()
            .map(|raw| {
                raw.parse::<Id>()
                    .map_err(|_| DomainError::ValidationError("Invalid 'before' cursor".into()))
            })
            .transpose()?;
        let kind = self.kind.as_deref().map(str::parse).transpose()?;

        let mut query = NotificationQuery {
            before,
            kind,
            ..Default::default()
        };
        if let Some(limit) = self.limit {
            query.limit = limit;
        }
        Ok(query)
    }
}
