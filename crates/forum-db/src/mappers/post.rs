//! Post entity <-> model mapper

use forum_core::entities::{Post, ReactionCounts};
use forum_core::value_objects::Id;

use crate::models::PostModel;

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Id::new(model.id),
            author_id: Id::new(model.author_id),
            title: model.title,
            content: model.content,
            category: model.category,
            counts: ReactionCounts::new(model.likes, model.dislikes),
            created_at: model.created_at,
        }
    }
}
