use crate::models::{ArticleRecord, Comment, Topic, User};

/// A complete dataset used to (re)load a store, with explicit ids.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    pub articles: Vec<ArticleRecord>,
    pub comments: Vec<Comment>,
}

impl SeedData {
    /// Number of comments referencing `article_id`.
    pub fn comment_count(&self, article_id: i32) -> i64 {
        self.comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .count() as i64
    }
}
