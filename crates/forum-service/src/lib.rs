//! # forum-service
//!
//! Application layer: the reaction engine, read-side queries, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CountsView, NotificationService, ReactionOutcome, ReactionService, RecountOutcome,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};

pub use dto::{
    CurrentUserResponse, HealthResponse, NotificationFeedQuery,
    NotificationResponse, PaginatedResponse, PostResponse, ReactRequest, ReactedTargetsQuery,
    ReactedTargetsResponse, ReactionCountsResponse, ReactionResponse, ReadinessResponse,
    RecountResponse,
};
