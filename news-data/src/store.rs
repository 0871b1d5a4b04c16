use std::future::Future;

use crate::error::DataError;
use crate::models::{Article, Comment, NewComment, Topic, User};
use crate::query::ArticleQuery;

/// Storage collaborator for the news dataset.
///
/// Implementations translate failures into [`DataError`]: a referenced row
/// that does not exist is `NotFound`, malformed values are `BadInput`, and
/// anything else is `Database`.
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
pub trait NewsStore: Clone + Send + Sync + 'static {
    fn list_topics(&self) -> impl Future<Output = Result<Vec<Topic>, DataError>> + Send;

    fn topic_exists(&self, slug: &str) -> impl Future<Output = Result<bool, DataError>> + Send;

    /// Articles matching `query`, in the query's order, each with its `comment_count`.
    fn list_articles(
        &self,
        query: &ArticleQuery,
    ) -> impl Future<Output = Result<Vec<Article>, DataError>> + Send;

    fn find_article(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<Option<Article>, DataError>> + Send;

    /// Comments on an article, most recent first.
    fn list_comments(
        &self,
        article_id: i32,
    ) -> impl Future<Output = Result<Vec<Comment>, DataError>> + Send;

    /// Insert a comment. A missing article or author is `NotFound`.
    fn insert_comment(
        &self,
        article_id: i32,
        comment: &NewComment,
    ) -> impl Future<Output = Result<Comment, DataError>> + Send;

    /// Add `delta` to an article's votes in a single atomic step and return the
    /// updated article, or `None` if it does not exist.
    fn increment_votes(
        &self,
        article_id: i32,
        delta: i32,
    ) -> impl Future<Output = Result<Option<Article>, DataError>> + Send;

    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, DataError>> + Send;
}
