use garde::Validate;
use news_data::{Article, Comment, NewComment, Topic, User};
use serde::{Deserialize, Serialize};

/// `POST /api/articles/{article_id}/comments` body.
///
/// Both fields must be strings. Whether `username` names a user is left to
/// the store, so an unknown (or empty) username is `404`, not `400`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostCommentRequest {
    #[garde(skip)]
    pub username: String,
    #[garde(skip)]
    pub body: String,
}

impl From<PostCommentRequest> for NewComment {
    fn from(req: PostCommentRequest) -> Self {
        NewComment {
            author: req.username,
            body: req.body,
        }
    }
}

/// `PATCH /api/articles/{article_id}` body. Numeric strings do not deserialize.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PatchVotesRequest {
    #[garde(skip)]
    pub inc_votes: i32,
}

#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
