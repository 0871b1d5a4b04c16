//! NC News REST API.
//!
//! [`app`] assembles the router over any [`NewsStore`]; the binary wires it to
//! PostgreSQL, the tests to an in-memory store.

pub mod controllers;
pub mod extract;
pub mod models;
pub mod services;
pub mod state;

use axum::Router;
use news_core::{catch_panic_layer, default_cors, default_trace, HttpError};
use news_data::{messages, NewsStore};

pub use services::NewsService;
pub use state::AppState;

/// Unmatched paths and unsupported methods on known paths.
async fn not_found() -> HttpError {
    HttpError::NotFound(messages::NOT_FOUND.into())
}

/// Build the full application router over `store`.
pub fn app<S: NewsStore>(store: S) -> Router {
    Router::new()
        .merge(controllers::api::routes::<S>())
        .merge(controllers::topics::routes::<S>())
        .merge(controllers::articles::routes::<S>())
        .merge(controllers::comments::routes::<S>())
        .merge(controllers::users::routes::<S>())
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .with_state(AppState::new(store))
        .layer(default_cors())
        .layer(default_trace())
        .layer(catch_panic_layer())
}
