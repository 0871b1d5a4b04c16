use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use news_core::HttpError;
use news_data::NewsStore;

use crate::extract::{ArticleId, ValidJson};
use crate::models::{CommentResponse, CommentsResponse, PostCommentRequest};
use crate::state::AppState;

async fn list<S: NewsStore>(
    State(state): State<AppState<S>>,
    ArticleId(article_id): ArticleId,
) -> Result<Json<CommentsResponse>, HttpError> {
    let comments = state.service.list_comments(article_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

async fn create<S: NewsStore>(
    State(state): State<AppState<S>>,
    ArticleId(article_id): ArticleId,
    ValidJson(body): ValidJson<PostCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), HttpError> {
    let comment = state.service.add_comment(article_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

pub fn routes<S: NewsStore>() -> Router<AppState<S>> {
    Router::new().route(
        "/api/articles/{article_id}/comments",
        get(list::<S>).post(create::<S>),
    )
}
