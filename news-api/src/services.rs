use news_data::{
    messages, Article, ArticleFilter, ArticleQuery, Comment, DataError, NewComment, NewsStore,
    Topic, User,
};
use tracing::{debug, info};

/// The data access operations behind each endpoint.
///
/// Input that can be rejected without the store (sort column, direction) is
/// rejected first. Existence checks that need the store follow.
#[derive(Clone)]
pub struct NewsService<S> {
    store: S,
}

impl<S: NewsStore> NewsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>, DataError> {
        debug!("listing topics");
        self.store.list_topics().await
    }

    pub async fn list_articles(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DataError> {
        let query = ArticleQuery::from_filter(filter)
            .inspect_err(|err| debug!(?filter, %err, "rejected article filter"))?;

        if let Some(topic) = &query.topic {
            if !self.store.topic_exists(topic).await? {
                debug!(%topic, "unknown topic");
                return Err(DataError::NotFound(messages::TOPIC_NOT_FOUND.into()));
            }
        }

        debug!(
            topic = ?query.topic,
            sort_by = query.sort_by.name(),
            order = query.order.as_sql(),
            "listing articles"
        );
        self.store.list_articles(&query).await
    }

    pub async fn get_article(&self, article_id: i32) -> Result<Article, DataError> {
        debug!(article_id, "fetching article");
        self.store.find_article(article_id).await?.ok_or_else(|| {
            debug!(article_id, "article not found");
            DataError::not_found()
        })
    }

    /// Comments for an existing article; an article without comments yields
    /// an empty list, a missing article is `NotFound`.
    pub async fn list_comments(&self, article_id: i32) -> Result<Vec<Comment>, DataError> {
        self.get_article(article_id).await?;
        self.store.list_comments(article_id).await
    }

    pub async fn add_comment(
        &self,
        article_id: i32,
        comment: NewComment,
    ) -> Result<Comment, DataError> {
        let created = self.store.insert_comment(article_id, &comment).await?;
        info!(
            article_id,
            comment_id = created.comment_id,
            author = %created.author,
            "comment created"
        );
        Ok(created)
    }

    pub async fn update_votes(&self, article_id: i32, delta: i32) -> Result<Article, DataError> {
        match self.store.increment_votes(article_id, delta).await? {
            Some(article) => {
                info!(article_id, delta, votes = article.votes, "article votes updated");
                Ok(article)
            }
            None => {
                debug!(article_id, "article not found");
                Err(DataError::not_found())
            }
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DataError> {
        debug!("listing users");
        self.store.list_users().await
    }
}
