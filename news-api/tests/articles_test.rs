mod common;

use serde_json::{json, Value};

fn ids(articles: &[Value]) -> Vec<i64> {
    articles
        .iter()
        .map(|a| a["article_id"].as_i64().unwrap())
        .collect()
}

async fn list(query: &str) -> Vec<Value> {
    common::app()
        .get(&format!("/api/articles{query}"))
        .send()
        .await
        .assert_ok()
        .json_path("articles")
}

// ── GET /api/articles ──

#[tokio::test]
async fn lists_all_articles_newest_first() {
    let articles = list("").await;
    assert_eq!(articles.len(), 12);
    assert_eq!(articles[0]["article_id"], 3);
    let dates: Vec<&str> = articles
        .iter()
        .map(|a| a["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "{dates:?}");
}

#[tokio::test]
async fn every_article_carries_a_comment_count() {
    let articles = list("").await;
    for article in &articles {
        for field in ["author", "title", "article_id", "topic", "created_at", "votes", "body"] {
            assert!(article.get(field).is_some(), "missing {field}: {article}");
        }
        assert!(article["comment_count"].is_i64(), "{article}");
    }
    let no_comments = articles.iter().find(|a| a["article_id"] == 2).unwrap();
    assert_eq!(no_comments["comment_count"], 0);
    let busiest = articles.iter().find(|a| a["article_id"] == 1).unwrap();
    assert_eq!(busiest["comment_count"], 11);
}

#[tokio::test]
async fn filters_by_topic() {
    let cats = list("?topic=cats").await;
    assert_eq!(ids(&cats), vec![5]);

    let mitch = list("?topic=mitch").await;
    assert_eq!(mitch.len(), 11);
    assert!(mitch.iter().all(|a| a["topic"] == "mitch"));
}

#[tokio::test]
async fn existing_topic_without_articles_is_empty() {
    assert!(list("?topic=paper").await.is_empty());
}

#[tokio::test]
async fn unknown_topic_is_not_found() {
    let app = common::app();
    for query in ["?topic=teeth", "?topic=", "?topic=cats%27%3B%20DROP%20TABLE%20articles%3B"] {
        app.get(&format!("/api/articles{query}"))
            .send()
            .await
            .assert_not_found()
            .assert_message("Topic Not Found");
    }
}

#[tokio::test]
async fn sorts_by_whitelisted_column_with_its_default_direction() {
    let by_votes = list("?sort_by=votes").await;
    assert_eq!(by_votes[0]["article_id"], 1);
    assert_eq!(ids(&by_votes[1..]), vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

    let by_title = list("?sort_by=title").await;
    assert_eq!(by_title[0]["title"], "A");
    assert_eq!(by_title[11]["title"], "Z");

    let by_author = list("?sort_by=author").await;
    assert_eq!(by_author[0]["author"], "rogersop");
    assert_eq!(by_author[0]["article_id"], 4);
    assert_eq!(by_author[11]["author"], "butter_bridge");

    let by_id = list("?sort_by=article_id").await;
    assert_eq!(ids(&by_id), (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn order_overrides_the_default_direction() {
    let by_title = list("?sort_by=title&order=desc").await;
    assert_eq!(by_title[0]["title"], "Z");

    let oldest_first = list("?order=asc").await;
    assert_eq!(oldest_first[0]["article_id"], 7);
    assert_eq!(oldest_first[11]["article_id"], 3);

    let upper = list("?sort_by=votes&order=ASC").await;
    assert_eq!(upper[11]["article_id"], 1);
}

#[tokio::test]
async fn topic_sort_and_order_compose() {
    let articles = list("?topic=mitch&sort_by=article_id&order=desc").await;
    assert_eq!(ids(&articles), vec![12, 11, 10, 9, 8, 7, 6, 4, 3, 2, 1]);
}

#[tokio::test]
async fn empty_sort_parameters_mean_default() {
    assert_eq!(ids(&list("?sort_by=&order=").await), ids(&list("").await));
}

#[tokio::test]
async fn invalid_sort_by_is_rejected() {
    let app = common::app();
    for query in [
        "?sort_by=cabbage",
        "?sort_by=comment_count",
        "?sort_by=votes%3B%20DROP%20TABLE%20articles",
        "?topic=teeth&sort_by=cabbage",
    ] {
        app.get(&format!("/api/articles{query}"))
            .send()
            .await
            .assert_bad_request()
            .assert_message("Invalid sort_by query");
    }
}

#[tokio::test]
async fn invalid_order_is_rejected() {
    common::app()
        .get("/api/articles?sort_by=title&order=sideways")
        .send()
        .await
        .assert_bad_request()
        .assert_message("Invalid order query");
}

#[tokio::test]
async fn malformed_query_string_is_bad_request() {
    common::app()
        .get("/api/articles?topic=cats&topic=mitch")
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = common::app();
    for query in ["", "?sort_by=votes", "?sort_by=topic&order=desc"] {
        let first = app.get(&format!("/api/articles{query}")).send().await.text();
        let second = app.get(&format!("/api/articles{query}")).send().await.text();
        assert_eq!(first, second, "{query}");
    }
}

// ── GET /api/articles/{article_id} ──

#[tokio::test]
async fn gets_article_by_id() {
    common::app()
        .get("/api/articles/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("article.article_id", 1)
        .assert_json_path("article.title", "Living in the shadow of a great man")
        .assert_json_path("article.topic", "mitch")
        .assert_json_path("article.author", "butter_bridge")
        .assert_json_path("article.body", "I find this existence challenging")
        .assert_json_path("article.created_at", "2020-07-09T20:11:00Z")
        .assert_json_path("article.votes", 100)
        .assert_json_path("article.comment_count", 11);
}

#[tokio::test]
async fn every_id_returns_its_own_article() {
    let app = common::app();
    for id in 1..=12 {
        app.get(&format!("/api/articles/{id}"))
            .send()
            .await
            .assert_ok()
            .assert_json_path("article.article_id", id);
    }
}

#[tokio::test]
async fn article_without_comments_counts_zero() {
    common::app()
        .get("/api/articles/2")
        .send()
        .await
        .assert_ok()
        .assert_json_path("article.comment_count", 0);
}

#[tokio::test]
async fn missing_article_is_not_found() {
    common::app()
        .get("/api/articles/999")
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn non_integer_id_is_bad_request() {
    let app = common::app();
    for id in ["notAnID", "1.5", "1e3", "-"] {
        app.get(&format!("/api/articles/{id}"))
            .send()
            .await
            .assert_bad_request()
            .assert_message("Bad Request");
    }
}

#[tokio::test]
async fn out_of_range_integer_id_is_not_found() {
    let app = common::app();
    for path in ["/api/articles/99999999999", "/api/articles/99999999999/comments"] {
        app.get(path)
            .send()
            .await
            .assert_not_found()
            .assert_message("Not Found");
    }
    app.patch("/api/articles/99999999999")
        .json(&json!({ "inc_votes": 1 }))
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

// ── PATCH /api/articles/{article_id} ──

#[tokio::test]
async fn increments_votes() {
    let app = common::app();
    app.patch("/api/articles/1")
        .json(&json!({ "inc_votes": 50 }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("article.article_id", 1)
        .assert_json_path("article.votes", 150)
        .assert_json_path("article.comment_count", 11);

    app.get("/api/articles/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("article.votes", 150);
}

#[tokio::test]
async fn decrements_votes_below_zero() {
    common::app()
        .patch("/api/articles/2")
        .json(&json!({ "inc_votes": -100 }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("article.votes", -100);
}

#[tokio::test]
async fn increments_accumulate() {
    let app = common::app();
    for _ in 0..3 {
        app.patch("/api/articles/3")
            .json(&json!({ "inc_votes": 2 }))
            .send()
            .await
            .assert_ok();
    }
    app.get("/api/articles/3")
        .send()
        .await
        .assert_json_path("article.votes", 6);
}

#[tokio::test]
async fn invalid_inc_votes_is_bad_request() {
    let app = common::app();
    for body in [
        json!({ "inc_votes": "50" }),
        json!({ "inc_votes": 1.5 }),
        json!({ "inc_votes": null }),
        json!({ "votes": 50 }),
        json!({}),
        json!(50),
    ] {
        app.patch("/api/articles/1")
            .json(&body)
            .send()
            .await
            .assert_bad_request()
            .assert_message("Bad Request");
    }
    app.get("/api/articles/1")
        .send()
        .await
        .assert_json_path("article.votes", 100);
}

#[tokio::test]
async fn unparseable_or_untyped_body_is_bad_request() {
    let app = common::app();
    app.patch("/api/articles/1")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body("{ inc_votes: ")
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
    app.patch("/api/articles/1")
        .body(r#"{ "inc_votes": 1 }"#)
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}

#[tokio::test]
async fn vote_overflow_is_bad_request() {
    common::app()
        .patch("/api/articles/1")
        .json(&json!({ "inc_votes": i32::MAX }))
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}

#[tokio::test]
async fn patch_missing_article_is_not_found() {
    common::app()
        .patch("/api/articles/999")
        .json(&json!({ "inc_votes": 1 }))
        .send()
        .await
        .assert_not_found()
        .assert_message("Not Found");
}

#[tokio::test]
async fn patch_non_integer_id_is_bad_request() {
    common::app()
        .patch("/api/articles/banana")
        .json(&json!({ "inc_votes": 1 }))
        .send()
        .await
        .assert_bad_request()
        .assert_message("Bad Request");
}
