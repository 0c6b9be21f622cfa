//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{NotificationFeedQuery, ReactRequest, ReactedTargetsQuery};

pub use responses::{
    CountsResponse, CurrentUserResponse, HealthChecks, HealthResponse,
    NotificationResponse, PaginatedResponse, PaginationMeta, PostResponse,
    ReactedTargetsResponse, ReactionCountsResponse, ReactionResponse, ReadinessResponse,
    RecountResponse,
};
