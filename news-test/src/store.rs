use std::sync::Arc;

use chrono::Utc;
use news_data::{
    Article, ArticleQuery, ArticleRecord, Comment, DataError, NewComment, NewsStore, SeedData,
    Topic, User,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<ArticleRecord>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

impl Tables {
    fn comment_count(&self, article_id: i32) -> i64 {
        self.comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .count() as i64
    }

    fn article(&self, record: &ArticleRecord) -> Article {
        Article::from_record(record, self.comment_count(record.article_id))
    }
}

/// In-memory [`NewsStore`] that behaves like the relational schema:
/// references to missing rows are `NotFound`, vote overflow is `BadInput`.
///
/// Text columns sort by byte order. PostgreSQL sorts them by the database
/// collation, which can differ for mixed case and punctuation; the fixture
/// titles and usernames order the same both ways at the ends asserted in tests.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn from_seed(data: SeedData) -> Self {
        let next_comment_id = data.comments.iter().map(|c| c.comment_id).max().unwrap_or(0) + 1;
        let tables = Tables {
            topics: data.topics,
            users: data.users,
            articles: data.articles,
            comments: data.comments,
            next_comment_id,
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
            unavailable: false,
        }
    }

    /// A store whose every operation fails with a database error.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DataError> {
        if self.unavailable {
            return Err(DataError::database(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        Ok(())
    }
}

impl NewsStore for MemoryStore {
    async fn list_topics(&self) -> Result<Vec<Topic>, DataError> {
        self.check()?;
        Ok(self.tables.read().await.topics.clone())
    }

    async fn topic_exists(&self, slug: &str) -> Result<bool, DataError> {
        self.check()?;
        Ok(self.tables.read().await.topics.iter().any(|t| t.slug == slug))
    }

    async fn list_articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, DataError> {
        self.check()?;
        let tables = self.tables.read().await;
        let mut articles: Vec<_> = tables
            .articles
            .iter()
            .filter(|record| query.matches(record))
            .map(|record| tables.article(record))
            .collect();
        query.sort(&mut articles);
        Ok(articles)
    }

    async fn find_article(&self, article_id: i32) -> Result<Option<Article>, DataError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .articles
            .iter()
            .find(|a| a.article_id == article_id)
            .map(|record| tables.article(record)))
    }

    async fn list_comments(&self, article_id: i32) -> Result<Vec<Comment>, DataError> {
        self.check()?;
        let mut comments: Vec<_> = self
            .tables
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.comment_id.cmp(&a.comment_id))
        });
        Ok(comments)
    }

    async fn insert_comment(
        &self,
        article_id: i32,
        comment: &NewComment,
    ) -> Result<Comment, DataError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let article_exists = tables.articles.iter().any(|a| a.article_id == article_id);
        let author_exists = tables.users.iter().any(|u| u.username == comment.author);
        if !article_exists || !author_exists {
            return Err(DataError::not_found());
        }

        let inserted = Comment {
            comment_id: tables.next_comment_id,
            article_id,
            author: comment.author.clone(),
            body: comment.body.clone(),
            votes: 0,
            created_at: Utc::now(),
        };
        tables.next_comment_id += 1;
        tables.comments.push(inserted.clone());
        Ok(inserted)
    }

    async fn increment_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> Result<Option<Article>, DataError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let Some(record) = tables.articles.iter_mut().find(|a| a.article_id == article_id) else {
            return Ok(None);
        };
        record.votes = record
            .votes
            .checked_add(delta)
            .ok_or_else(DataError::bad_request)?;
        let record = record.clone();
        Ok(Some(tables.article(&record)))
    }

    async fn list_users(&self) -> Result<Vec<User>, DataError> {
        self.check()?;
        Ok(self.tables.read().await.users.clone())
    }
}
