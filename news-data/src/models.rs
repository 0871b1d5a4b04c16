use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// The stored columns of an article, without derived fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleRecord {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article as served by the API, with its aggregated `comment_count`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i64,
}

impl Article {
    pub fn from_record(record: &ArticleRecord, comment_count: i64) -> Self {
        Article {
            article_id: record.article_id,
            title: record.title.clone(),
            topic: record.topic.clone(),
            author: record.author.clone(),
            body: record.body.clone(),
            created_at: record.created_at,
            votes: record.votes,
            comment_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a comment. `comment_id`, `votes` and `created_at` are
/// assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}
