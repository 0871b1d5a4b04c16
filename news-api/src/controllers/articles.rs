use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use news_core::HttpError;
use news_data::NewsStore;

use crate::extract::{ArticleId, Filter, ValidJson};
use crate::models::{ArticleResponse, ArticlesResponse, PatchVotesRequest};
use crate::state::AppState;

/// `GET /api/articles?topic=&sort_by=&order=`
async fn list<S: NewsStore>(
    State(state): State<AppState<S>>,
    Filter(filter): Filter,
) -> Result<Json<ArticlesResponse>, HttpError> {
    let articles = state.service.list_articles(&filter).await?;
    Ok(Json(ArticlesResponse { articles }))
}

async fn get_by_id<S: NewsStore>(
    State(state): State<AppState<S>>,
    ArticleId(article_id): ArticleId,
) -> Result<Json<ArticleResponse>, HttpError> {
    let article = state.service.get_article(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

/// `PATCH /api/articles/{article_id}` with `{ "inc_votes": n }`
async fn update_votes<S: NewsStore>(
    State(state): State<AppState<S>>,
    ArticleId(article_id): ArticleId,
    ValidJson(body): ValidJson<PatchVotesRequest>,
) -> Result<Json<ArticleResponse>, HttpError> {
    let article = state
        .service
        .update_votes(article_id, body.inc_votes)
        .await?;
    Ok(Json(ArticleResponse { article }))
}

pub fn routes<S: NewsStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/api/articles", get(list::<S>))
        .route(
            "/api/articles/{article_id}",
            get(get_by_id::<S>).patch(update_votes::<S>),
        )
}
