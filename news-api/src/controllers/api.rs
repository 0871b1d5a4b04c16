use axum::routing::get;
use axum::{Json, Router};
use news_data::NewsStore;

use crate::models::ApiStatus;
use crate::state::AppState;

async fn status() -> Json<ApiStatus> {
    Json(ApiStatus { message: "all ok" })
}

pub fn routes<S: NewsStore>() -> Router<AppState<S>> {
    Router::new().route("/api", get(status))
}
