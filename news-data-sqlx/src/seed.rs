use news_data::SeedData;
use sqlx::PgPool;

use crate::error::{SqlxErrorExt, SqlxResult};

/// Replace the contents of every table with `data`.
///
/// Rows keep their explicit ids and the id sequences are moved past the
/// highest seeded id, so later inserts continue the numbering.
pub async fn seed(pool: &PgPool, data: &SeedData) -> SqlxResult<()> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_data_error)?;

    sqlx::query("TRUNCATE comments, articles, users, topics RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
    }

    for article in &data.articles {
        sqlx::query(
            "INSERT INTO articles (article_id, title, topic, author, body, created_at, votes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(article.article_id)
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;
    }

    for comment in &data.comments {
        sqlx::query(
            "INSERT INTO comments (comment_id, article_id, author, body, votes, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(comment.comment_id)
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.votes)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_data_error)?;
    }

    for (table, id) in [("articles", "article_id"), ("comments", "comment_id")] {
        let sql = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', '{id}'), \
             COALESCE(MAX({id}), 0) + 1, false) FROM {table}"
        );
        sqlx::query(&sql)
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_data_error)?;
    }

    tx.commit().await.map_err(SqlxErrorExt::into_data_error)?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "database seeded"
    );
    Ok(())
}
