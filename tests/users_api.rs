//! Profile and follow API integration tests
#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::{count_rows, TestApp};

#[tokio::test]
async fn test_profile_lists_relations() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let post_id = app.create_post(&alice, "hello").await;

    app.post(&format!("/api/users/follow/{}", alice.id), Some(&bob.token), json!({}))
        .await;
    app.post(&format!("/api/posts/{}/like", post_id), Some(&bob.token), json!({}))
        .await;

    let (status, bob_profile) = app.get("/api/users/profile/bob", Some(&alice.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bob_profile["following"], json!([alice.id.to_string()]));
    assert_eq!(bob_profile["followers"], json!([]));
    assert_eq!(bob_profile["liked_posts"], json!([post_id]));
    assert!(bob_profile.get("password_hash").is_none());

    let (_, alice_profile) = app.get("/api/users/profile/alice", Some(&bob.token)).await;
    assert_eq!(alice_profile["followers"], json!([bob.id.to_string()]));
}

#[tokio::test]
async fn test_profile_unknown_user() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;

    assert_error!(
        app.get("/api/users/profile/nobody", Some(&alice.token)).await,
        StatusCode::NOT_FOUND,
        "User not found"
    );
}

#[tokio::test]
async fn test_follow_toggles() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let uri = format!("/api/users/follow/{}", bob.id);

    let (status, body) = app.post(&uri, Some(&alice.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User followed successfully" }));
    assert_eq!(count_rows(&app.pool, "follows").await, 1);

    let (status, body) = app.post(&uri, Some(&alice.token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User unfollowed successfully" }));
    assert_eq!(count_rows(&app.pool, "follows").await, 0);
}

#[tokio::test]
async fn test_follow_notifies_target_once() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let uri = format!("/api/users/follow/{}", bob.id);

    app.post(&uri, Some(&alice.token), json!({})).await;
    app.post(&uri, Some(&alice.token), json!({})).await;

    let (_, notifications) = app.get("/api/notifications", Some(&bob.token)).await;
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["kind"], "follow");
    assert_eq!(notifications[0]["from"]["id"], alice.id.to_string());
}

#[tokio::test]
async fn test_follow_self() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;

    assert_error!(
        app.post(
            &format!("/api/users/follow/{}", alice.id),
            Some(&alice.token),
            json!({}),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "You can't follow/unfollow yourself"
    );
}

#[tokio::test]
async fn test_follow_unknown_user() {
    let app = TestApp::new().await;
    let alice = app.user("alice").await;

    assert_error!(
        app.post(
            &format!("/api/users/follow/{}", Uuid::new_v4()),
            Some(&alice.token),
            json!({}),
        )
        .await,
        StatusCode::NOT_FOUND,
        "User not found"
    );
    assert_error!(
        app.post("/api/users/follow/bob", Some(&alice.token), json!({}))
            .await,
        StatusCode::BAD_REQUEST,
        "Invalid user id"
    );
}
