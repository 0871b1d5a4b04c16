use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use news_core::HttpError;
use news_data::NewsStore;

use crate::models::TopicsResponse;
use crate::state::AppState;

async fn list<S: NewsStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<TopicsResponse>, HttpError> {
    let topics = state.service.list_topics().await?;
    Ok(Json(TopicsResponse { topics }))
}

pub fn routes<S: NewsStore>() -> Router<AppState<S>> {
    Router::new().route("/api/topics", get(list::<S>))
}
