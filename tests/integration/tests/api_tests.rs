//! API Integration Tests
//!
//! Every test spawns its own server on a seeded in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use forum_core::{Id, ReactionCounts, Target};
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

fn post_path(id: Id) -> String {
    format!("/api/v1/posts/{id}/reactions")
}

fn comment_path(id: Id) -> String {
    format!("/api/v1/comments/{id}/reactions")
}

async fn react(server: &TestServer, token: &str, path: &str, body: ReactBody) -> ReactionBody {
    let response = server.post_auth(path, token, &body).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn feed(server: &TestServer, token: &str, query: &str) -> FeedBody {
    let response = server
        .get_auth(&format!("/api/v1/users/@me/notifications{query}"), token)
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_reactions_require_token() {
    let server = server().await;
    let path = post_path(server.seeded.post);

    let response = server.post(&path, &ReactBody::like()).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");

    let response = server.get_auth(&path, "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_comes_from_token() {
    let server = server().await;
    let token = server.token_for(server.seeded.actor).unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["id"], 5);
    assert_eq!(body["username"], "alice");

    let stranger = server.token_for(Id::new(999)).unwrap();
    let response = server.get_auth("/api/v1/users/@me", &stranger).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_USER");
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_dislike_dislike_scenario() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();
    let owner = server.token_for(seeded.owner).unwrap();
    let path = post_path(seeded.post);

    // Like
    let liked = react(&server, &actor, &path, ReactBody::like().with_owner(seeded.owner)).await;
    assert_eq!(liked.state, "liked");
    assert_eq!(liked.counts, Counts::new(1, 0));
    let notification = liked.notification.unwrap();
    assert_eq!(notification.actor_id, 5);
    assert_eq!(notification.actor_name, "alice");
    assert_eq!(notification.owner_id, 7);
    assert_eq!(notification.target_id, 10);
    assert_eq!(notification.verb, "like");

    let owner_feed = feed(&server, &owner, "").await;
    assert_eq!(owner_feed.data.len(), 1);
    assert_eq!(owner_feed.data[0].message, "alice liked your post");

    // Switch to dislike
    let disliked = react(&server, &actor, &path, ReactBody::dislike()).await;
    assert_eq!(disliked.state, "disliked");
    assert_eq!(disliked.counts, Counts::new(0, 1));

    let owner_feed = feed(&server, &owner, "").await;
    assert_eq!(owner_feed.data.len(), 1);
    assert_eq!(owner_feed.data[0].verb, "dislike");
    assert_ne!(owner_feed.data[0].id, notification.id);

    // Dislike again clears it
    let cleared = react(&server, &actor, &path, ReactBody::dislike()).await;
    assert_eq!(cleared.state, "none");
    assert_eq!(cleared.counts, Counts::new(0, 0));
    assert!(cleared.notification.is_none());
    assert!(feed(&server, &owner, "").await.data.is_empty());
}

#[tokio::test]
async fn test_comment_reaction_notifies_comment_author() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();

    let body = react(&server, &actor, &comment_path(seeded.comment), ReactBody::like()).await;
    assert_eq!(body.target_kind, "comment");
    assert_eq!(body.target_id, 3);
    let notification = body.notification.unwrap();
    assert_eq!(notification.owner_id, 8);
    assert_eq!(notification.post_id, 10);
    assert_eq!(notification.target_kind, "comment");

    let commenter = server.token_for(seeded.commenter).unwrap();
    let commenter_feed = feed(&server, &commenter, "").await;
    assert_eq!(commenter_feed.data.len(), 1);
    assert_eq!(commenter_feed.data[0].message, "alice liked your comment");

    // The post's author is not notified about a reaction to someone else's comment
    let owner = server.token_for(seeded.owner).unwrap();
    assert!(feed(&server, &owner, "").await.data.is_empty());
}

#[tokio::test]
async fn test_counts_and_own_state() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();
    let other = server.token_for(Id::new(6)).unwrap();
    let path = post_path(seeded.post);

    react(&server, &actor, &path, ReactBody::like()).await;
    react(&server, &other, &path, ReactBody::dislike()).await;

    let response = server.get_auth(&path, &actor).await.unwrap();
    let mine: CountsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.counts, Counts::new(1, 1));
    assert_eq!(mine.me, "liked");

    let response = server.get_auth(&path, &other).await.unwrap();
    let theirs: CountsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(theirs.me, "disliked");
}

#[tokio::test]
async fn test_invalid_action_rejected() {
    let server = server().await;
    let actor = server.token_for(server.seeded.actor).unwrap();
    let path = post_path(server.seeded.post);

    for action in ["love", "LIKE", "Like ", "", "like-like-like-like-like"] {
        let response = server
            .post_auth(&path, &actor, &ReactBody::action(action))
            .await
            .unwrap();
        let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(code, "INVALID_POLARITY");
    }

    let response = server
        .post_auth(&path, &actor, &serde_json::json!({ "owner_id": 7 }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");

    // Nothing was written
    let response = server.get_auth(&path, &actor).await.unwrap();
    let body: CountsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts, Counts::new(0, 0));
}

#[tokio::test]
async fn test_owner_mismatch_rejected() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();

    let response = server
        .post_auth(
            &post_path(seeded.post),
            &actor,
            &ReactBody::like().with_owner(seeded.commenter),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "OWNER_MISMATCH");

    assert!(server
        .store
        .reactions_of(seeded.actor, Target::post(seeded.post))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_unknown_targets_not_found() {
    let server = server().await;
    let actor = server.token_for(server.seeded.actor).unwrap();

    let response = server
        .post_auth(&post_path(Id::new(999)), &actor, &ReactBody::like())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_POST");

    let response = server
        .get_auth(&comment_path(Id::new(999)), &actor)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_COMMENT");

    let response = server
        .post_auth("/api/v1/posts/abc/reactions", &actor, &ReactBody::like())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_unknown_actor_not_found() {
    let server = server().await;
    let seeded = server.seeded;
    let stranger = server.token_for(Id::new(999)).unwrap();
    let path = post_path(seeded.post);

    let response = server
        .post_auth(&path, &stranger, &ReactBody::like())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_USER");

    let owner = server.token_for(seeded.owner).unwrap();
    let response = server.get_auth(&path, &owner).await.unwrap();
    let body: CountsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts, Counts::new(0, 0));
    assert!(feed(&server, &owner, "").await.data.is_empty());
}

#[tokio::test]
async fn test_concurrent_reactions_over_http() {
    let server = server().await;
    let path = post_path(server.seeded.post);

    let tokens: Vec<String> = (100..120)
        .map(|user| server.token_for(Id::new(user)).unwrap())
        .collect();
    let requests = tokens.iter().enumerate().map(|(i, token)| {
        let body = if i % 2 == 0 {
            ReactBody::like()
        } else {
            ReactBody::dislike()
        };
        let server = &server;
        let path = &path;
        async move { server.post_auth(path, token, &body).await }
    });

    for response in futures::future::join_all(requests).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let owner = server.token_for(server.seeded.owner).unwrap();
    let response = server.get_auth(&path, &owner).await.unwrap();
    let body: CountsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts, Counts::new(10, 10));
    assert_eq!(body.me, "none");

    let owner_feed = feed(&server, &owner, "?limit=100").await;
    assert_eq!(owner_feed.data.len(), 20);
}

// ============================================================================
// Recount Tests
// ============================================================================

#[tokio::test]
async fn test_recount_repairs_drifted_counters() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();
    let path = post_path(seeded.post);

    react(&server, &actor, &path, ReactBody::like()).await;
    server
        .store
        .set_counts(Target::post(seeded.post), ReactionCounts::new(4, 2))
        .await
        .unwrap();

    let response = server
        .post_auth(&format!("{path}/recount"), &actor, &serde_json::json!({}))
        .await
        .unwrap();
    let body: RecountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.repaired);
    assert_eq!(body.previous, Counts::new(4, 2));
    assert_eq!(body.counts, Counts::new(1, 0));

    let response = server
        .post_auth(&format!("{path}/recount"), &actor, &serde_json::json!({}))
        .await
        .unwrap();
    let body: RecountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.repaired);
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_reacted_ids_and_posts() {
    let server = server().await;
    let seeded = server.seeded;
    let actor = server.token_for(seeded.actor).unwrap();

    react(&server, &actor, &post_path(seeded.post), ReactBody::like()).await;
    react(&server, &actor, &post_path(seeded.other_post), ReactBody::dislike()).await;
    react(&server, &actor, &comment_path(seeded.comment), ReactBody::like()).await;

    let response = server
        .get_auth("/api/v1/users/@me/reactions?kind=post&action=like", &actor)
        .await
        .unwrap();
    let body: ReactedIdsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.kind, "post");
    assert_eq!(body.action, "like");
    assert_eq!(body.ids, vec![10]);

    let response = server
        .get_auth("/api/v1/users/@me/reactions?kind=comment&action=like", &actor)
        .await
        .unwrap();
    let body: ReactedIdsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.ids, vec![3]);

    let response = server
        .get_auth("/api/v1/users/@me/posts/disliked", &actor)
        .await
        .unwrap();
    let posts: Vec<PostBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 11);
    assert_eq!(posts[0].title, "Rules");
    assert_eq!(posts[0].dislikes, 1);

    let response = server
        .get_auth("/api/v1/users/@me/posts/liked", &actor)
        .await
        .unwrap();
    let posts: Vec<PostBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author_id, 7);
    assert_eq!(posts[0].likes, 1);
}

#[tokio::test]
async fn test_reacted_ids_rejects_bad_filters() {
    let server = server().await;
    let actor = server.token_for(server.seeded.actor).unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/reactions?kind=thread&action=like", &actor)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TARGET_KIND");

    let response = server
        .get_auth("/api/v1/users/@me/reactions?kind=post&action=meh", &actor)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_POLARITY");

    let response = server
        .get_auth("/api/v1/users/@me/reactions", &actor)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_notification_feed_pagination() {
    let server = server().await;
    let seeded = server.seeded;
    let path = post_path(seeded.post);

    for user in 20..25 {
        let token = server.token_for(Id::new(user)).unwrap();
        react(&server, &token, &path, ReactBody::like()).await;
    }
    let token = server.token_for(Id::new(30)).unwrap();
    react(&server, &token, &comment_path(seeded.comment), ReactBody::like()).await;

    let owner = server.token_for(seeded.owner).unwrap();
    let first = feed(&server, &owner, "?limit=2").await;
    assert_eq!(first.data.len(), 2);
    assert!(first.pagination.has_more);
    assert_eq!(first.pagination.limit, 2);
    assert_eq!(first.data[0].actor_id, 24);
    assert!(first.data[0].id > first.data[1].id);

    let before = first.pagination.next_before.unwrap();
    let rest = feed(&server, &owner, &format!("?before={before}&limit=10")).await;
    assert_eq!(rest.data.len(), 3);
    assert!(!rest.pagination.has_more);
    assert!(rest.data.iter().all(|n| n.id < before));

    let posts_only = feed(&server, &owner, "?kind=post").await;
    assert_eq!(posts_only.data.len(), 5);
    assert!(feed(&server, &owner, "?kind=comment").await.data.is_empty());

    let response = server
        .get_auth("/api/v1/users/@me/notifications?before=x", &owner)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}
