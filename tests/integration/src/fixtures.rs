//! Test fixtures and response shapes
//!
//! Seeds the store with a small forum and provides the request and response
//! bodies the tests exchange with the API.

use anyhow::Result;
use forum_core::entities::{Comment, Post, User};
use forum_core::Id;
use forum_db::InMemoryForumStore;
use serde::{Deserialize, Serialize};

/// Ids of the seeded rows
#[derive(Debug, Clone, Copy)]
pub struct Seeded {
    /// Author of both posts
    pub owner: Id,
    /// Author of the comment
    pub commenter: Id,
    /// Main acting user
    pub actor: Id,
    pub post: Id,
    pub other_post: Id,
    /// Comment on `post`
    pub comment: Id,
}

impl Default for Seeded {
    fn default() -> Self {
        Self {
            owner: Id::new(7),
            commenter: Id::new(8),
            actor: Id::new(5),
            post: Id::new(10),
            other_post: Id::new(11),
            comment: Id::new(3),
        }
    }
}

/// Insert the fixture forum into `store`
pub async fn seed(store: &InMemoryForumStore) -> Result<Seeded> {
    let seeded = Seeded::default();

    for (id, name) in [(5, "alice"), (6, "carol"), (7, "bob"), (8, "dave")] {
        store.insert_user(User::new(Id::new(id), name)).await;
    }
    for id in (20..=30).chain(100..120) {
        store.insert_user(User::new(Id::new(id), format!("user{id}"))).await;
    }

    store
        .insert_post(Post::new(
            seeded.post,
            seeded.owner,
            "Welcome".to_string(),
            "First post".to_string(),
            "general".to_string(),
        ))
        .await;
    store
        .insert_post(Post::new(
            seeded.other_post,
            seeded.owner,
            "Rules".to_string(),
            "Be nice".to_string(),
            "meta".to_string(),
        ))
        .await;
    store
        .insert_comment(Comment::new(
            seeded.comment,
            seeded.post,
            seeded.commenter,
            "Thanks!".to_string(),
        ))
        .await?;

    Ok(seeded)
}

/// Reaction request body
#[derive(Debug, Serialize)]
pub struct ReactBody {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

impl ReactBody {
    pub fn like() -> Self {
        Self::action("like")
    }

    pub fn dislike() -> Self {
        Self::action("dislike")
    }

    pub fn action(action: &str) -> Self {
        Self {
            action: action.to_string(),
            owner_id: None,
        }
    }

    pub fn with_owner(mut self, owner: Id) -> Self {
        self.owner_id = Some(owner.into_inner());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Counts {
    pub likes: i64,
    pub dislikes: i64,
}

impl Counts {
    pub fn new(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReactionBody {
    pub target_kind: String,
    pub target_id: i64,
    pub state: String,
    pub counts: Counts,
    pub notification: Option<NotificationBody>,
}

#[derive(Debug, Deserialize)]
pub struct CountsBody {
    pub counts: Counts,
    pub me: String,
}

#[derive(Debug, Deserialize)]
pub struct RecountBody {
    pub previous: Counts,
    pub counts: Counts,
    pub repaired: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationBody {
    pub id: i64,
    pub actor_id: i64,
    pub actor_name: String,
    pub owner_id: i64,
    pub target_kind: String,
    pub target_id: i64,
    pub post_id: i64,
    pub verb: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub next_before: Option<i64>,
    pub has_more: bool,
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct FeedBody {
    pub data: Vec<NotificationBody>,
    pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct ReactedIdsBody {
    pub kind: String,
    pub action: String,
    pub ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub likes: i64,
    pub dislikes: i64,
}
