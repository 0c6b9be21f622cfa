//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::{Polarity, ReactionCounts, ReactionState, TargetKind};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Cursor-paginated list
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    /// Pass as `before` to fetch the next (older) page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_before: Option<i64>,
    /// Whether the page was full, so more results may exist
    pub has_more: bool,
    pub limit: i64,
}

impl<T> PaginatedResponse<T> {
    /// Build a page whose items are ordered newest first; `cursor` extracts
    /// the id used for the next page
    pub fn newest_first(data: Vec<T>, limit: i64, cursor: impl Fn(&T) -> i64) -> Self {
        let has_more = data.len() as i64 >= limit;
        let next_before = if has_more { data.last().map(cursor) } else { None };
        Self {
            data,
            pagination: PaginationMeta {
                next_before,
                has_more,
                limit,
            },
        }
    }
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Like/dislike counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// Result of a reaction toggle
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub target_kind: TargetKind,
    pub target_id: i64,
    /// Caller's state after the toggle: "none", "liked" or "disliked"
    pub state: ReactionState,
    pub counts: CountsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationResponse>,
}

/// Counters of a target plus the caller's state
#[derive(Debug, Clone, Serialize)]
pub struct ReactionCountsResponse {
    pub target_kind: TargetKind,
    pub target_id: i64,
    pub counts: CountsResponse,
    pub me: ReactionState,
}

/// Result of a counter repair
#[derive(Debug, Clone, Serialize)]
pub struct RecountResponse {
    pub target_kind: TargetKind,
    pub target_id: i64,
    pub previous: CountsResponse,
    pub counts: CountsResponse,
    pub repaired: bool,
}

/// Ids of the targets the caller reacted to
#[derive(Debug, Clone, Serialize)]
pub struct ReactedTargetsResponse {
    pub kind: TargetKind,
    pub action: Polarity,
    pub ids: Vec<i64>,
}

// ============================================================================
// Post & Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub actor_id: i64,
    pub actor_name: String,
    pub owner_id: i64,
    pub target_kind: TargetKind,
    pub target_id: i64,
    pub post_id: i64,
    pub verb: Polarity,
    /// e.g. "alice liked your post"
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// The authenticated caller
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

impl From<ReactionCounts> for CountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            likes: counts.likes,
            dislikes: counts.dislikes,
        }
    }
}
