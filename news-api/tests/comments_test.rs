mod common;

use serde_json::{json, Value};

// ── GET /api/articles/{article_id}/comments ──

#[tokio::test]
async fn lists_comments_newest_first() {
    let resp = common::app()
        .get("/api/articles/1/comments")
        .send()
        .await
        .assert_ok()
        .assert_json_path("comments.len()", 11)
        .assert_json_path("comments[0].comment_id", 5)
        .assert_json_path("comments[0].body", "I hate streaming noses")
        .assert_json_path("comments[10].comment_id", 9);

    let comments: Vec<Value> = resp.json_path("comments");
    for comment in &comments {
        assert_eq!(comment["article_id"], 1);
        for field in ["comment_id", "votes", "created_at", "author", "body", "article_id"] {
            assert!(comment.get(field).is_some(), "missing {field}: {comment}");
        }
    }
    let dates: Vec<&str> = comments
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "{dates:?}");
}

#[tokio::test]
async fn article_without_comments_has_empty_list() {
    common::app()
        .get("/api/articles/2/comments")
        .send()
        .await
        .assert_ok()
        .assert_json_path("comments", json!([]));
}

#[tokio::test]
async fn comments_for_missing_article_are_not_found() {
    common::app()
        .get("/api/articles/999/comments")
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn comments_for_non_integer_id_are_bad_request() {
    common::app()
        .get("/api/articles/banana/comments")
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}

// ── POST /api/articles/{article_id}/comments ──

#[tokio::test]
async fn posts_a_comment() {
    let app = common::app();
    let resp = app
        .post("/api/articles/2/comments")
        .json(&json!({ "username": "lurker", "body": "Worth the wait." }))
        .send()
        .await
        .assert_created()
        .assert_json_path("comment.comment_id", 19)
        .assert_json_path("comment.article_id", 2)
        .assert_json_path("comment.author", "lurker")
        .assert_json_path("comment.body", "Worth the wait.")
        .assert_json_path("comment.votes", 0);
    let created_at: String = resp.json_path("comment.created_at");
    assert!(!created_at.is_empty());

    app.get("/api/articles/2/comments")
        .send()
        .await
        .assert_ok()
        .assert_json_path("comments.len()", 1)
        .assert_json_path("comments[0].comment_id", 19);
    app.get("/api/articles/2")
        .send()
        .await
        .assert_json_path("article.comment_count", 1);
}

#[tokio::test]
async fn newest_comment_is_listed_first() {
    let app = common::app();
    app.post("/api/articles/1/comments")
        .json(&json!({ "username": "rogersop", "body": "Late to the party" }))
        .send()
        .await
        .assert_created();
    app.get("/api/articles/1/comments")
        .send()
        .await
        .assert_json_path("comments.len()", 12)
        .assert_json_path("comments[0].body", "Late to the party");
}

#[tokio::test]
async fn extra_properties_are_ignored() {
    common::app()
        .post("/api/articles/1/comments")
        .json(&json!({ "username": "lurker", "body": "hi", "votes": 1000, "comment_id": 1 }))
        .send()
        .await
        .assert_created()
        .assert_json_path("comment.comment_id", 19)
        .assert_json_path("comment.votes", 0);
}

#[tokio::test]
async fn unknown_username_is_not_found() {
    common::app()
        .post("/api/articles/1/comments")
        .json(&json!({ "username": "not_a_user", "body": "hello" }))
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn empty_username_is_not_found() {
    common::app()
        .post("/api/articles/1/comments")
        .json(&json!({ "username": "", "body": "hello" }))
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn empty_body_is_accepted() {
    common::app()
        .post("/api/articles/1/comments")
        .json(&json!({ "username": "lurker", "body": "" }))
        .send()
        .await
        .assert_created()
        .assert_json_path("comment.body", "")
        .assert_json_path("comment.author", "lurker");
}

#[tokio::test]
async fn missing_article_is_not_found() {
    common::app()
        .post("/api/articles/999/comments")
        .json(&json!({ "username": "lurker", "body": "hello" }))
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn malformed_payload_is_bad_request() {
    let app = common::app();
    for body in [
        json!({ "username": "lurker", "body": 5 }),
        json!({ "username": "lurker", "body": null }),
        json!({ "username": "lurker" }),
        json!({ "body": "hello" }),
        json!({ "username": 7, "body": "hello" }),
        json!({}),
    ] {
        app.post("/api/articles/1/comments")
            .json(&body)
            .send()
            .await
            .assert_bad_request()
            .assert_message("Bad Request");
    }
    app.get("/api/articles/1/comments")
        .send()
        .await
        .assert_json_path("comments.len()", 11);
}

#[tokio::test]
async fn post_to_non_integer_id_is_bad_request() {
    common::app()
        .post("/api/articles/abc/comments")
        .json(&json!({ "username": "lurker", "body": "hello" }))
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}
