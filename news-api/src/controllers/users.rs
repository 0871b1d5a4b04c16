use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use news_core::HttpError;
use news_data::NewsStore;

use crate::models::UsersResponse;
use crate::state::AppState;

async fn list<S: NewsStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<UsersResponse>, HttpError> {
    let users = state.service.list_users().await?;
    Ok(Json(UsersResponse { users }))
}

pub fn routes<S: NewsStore>() -> Router<AppState<S>> {
    Router::new().route("/api/users", get(list::<S>))
}
