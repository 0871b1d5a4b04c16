use news_data::{
    select_articles, Article, ArticleQuery, Comment, NewComment, NewsStore, SqlParam, Topic, User,
};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::error::{SqlxErrorExt, SqlxResult};

const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

/// [`NewsStore`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PgNewsStore {
    pool: PgPool,
}

impl PgNewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn bind_params<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: Vec<SqlParam>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value),
            SqlParam::Int(value) => query.bind(value),
        };
    }
    query
}

impl NewsStore for PgNewsStore {
    async fn list_topics(&self) -> SqlxResult<Vec<Topic>> {
        sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn topic_exists(&self, slug: &str) -> SqlxResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn list_articles(&self, query: &ArticleQuery) -> SqlxResult<Vec<Article>> {
        let (sql, params) = query.build();
        tracing::debug!(%sql, "listing articles");
        bind_params(sqlx::query_as::<_, Article>(&sql), params)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn find_article(&self, article_id: i32) -> SqlxResult<Option<Article>> {
        let (sql, params) = select_articles()
            .where_eq("articles.article_id", SqlParam::Int(article_id))
            .build();
        bind_params(sqlx::query_as::<_, Article>(&sql), params)
            .fetch_optional(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn list_comments(&self, article_id: i32) -> SqlxResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = $1 \
             ORDER BY created_at DESC, comment_id DESC"
        );
        sqlx::query_as::<_, Comment>(&sql)
            .bind(article_id)
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn insert_comment(&self, article_id: i32, comment: &NewComment) -> SqlxResult<Comment> {
        let sql = format!(
            "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&sql)
            .bind(article_id)
            .bind(&comment.author)
            .bind(&comment.body)
            .fetch_one(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }

    async fn increment_votes(&self, article_id: i32, delta: i32) -> SqlxResult<Option<Article>> {
        // One statement: concurrent increments never lose an update.
        sqlx::query_as::<_, Article>(
            "WITH updated AS ( \
                 UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING * \
             ) \
             SELECT updated.article_id, updated.title, updated.topic, updated.author, \
                    updated.body, updated.created_at, updated.votes, \
                    (SELECT COUNT(*) FROM comments \
                      WHERE comments.article_id = updated.article_id) AS comment_count \
             FROM updated",
        )
        .bind(delta)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(SqlxErrorExt::into_data_error)
    }

    async fn list_users(&self) -> SqlxResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }
}

impl std::fmt::Debug for PgNewsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgNewsStore")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}

