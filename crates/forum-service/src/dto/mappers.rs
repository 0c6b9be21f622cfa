//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities and service outcomes to
//! response DTOs.

use forum_core::entities::{Notification, Post, User};

use super::responses::{
    CurrentUserResponse, NotificationResponse, PostResponse, ReactionCountsResponse, ReactionResponse,
    RecountResponse,
};
use crate::services::{CountsView, ReactionOutcome, RecountOutcome};

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.into_inner(),
            actor_id: notification.actor_id.into_inner(),
            actor_name: notification.actor_name.clone(),
            owner_id: notification.owner_id.into_inner(),
            target_kind: notification.target.kind,
            target_id: notification.target.id.into_inner(),
            post_id: notification.post_id.into_inner(),
            verb: notification.verb,
            message: notification.message(),
            created_at: notification.created_at,
        }
    }
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self::from(&notification)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: user.username.clone(),
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into_inner(),
            author_id: post.author_id.into_inner(),
            title: post.title,
            content: post.content,
            category: post.category,
            likes: post.counts.likes,
            dislikes: post.counts.dislikes,
            created_at: post.created_at,
        }
    }
}

impl From<ReactionOutcome> for ReactionResponse {
    fn from(outcome: ReactionOutcome) -> Self {
        Self {
            target_kind: outcome.target.kind,
            target_id: outcome.target.id.into_inner(),
            state: outcome.state,
            counts: outcome.counts.into(),
            notification: outcome.notification.map(NotificationResponse::from),
        }
    }
}

impl From<CountsView> for ReactionCountsResponse {
    fn from(view: CountsView) -> Self {
        Self {
            target_kind: view.target.kind,
            target_id: view.target.id.into_inner(),
            counts: view.counts.into(),
            me: view.me,
        }
    }
}

impl From<RecountOutcome> for RecountResponse {
    fn from(outcome: RecountOutcome) -> Self {
        Self {
            target_kind: outcome.target.kind,
            target_id: outcome.target.id.into_inner(),
            previous: outcome.previous.into(),
            counts: outcome.counts.into(),
            repaired: outcome.repaired(),
        }
    }
}
