//! Request extractors that reject malformed input as `400 Bad Request`.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use garde::Validate;
use news_core::HttpError;
use news_data::{messages, parse_article_id, ArticleFilter};
use serde::de::DeserializeOwned;

fn bad_request() -> HttpError {
    HttpError::BadRequest(messages::BAD_REQUEST.into())
}

/// The `{article_id}` path segment, parsed as an integer. An integer too
/// large to be an id is rejected as `404 Not Found`.
#[derive(Debug, Clone, Copy)]
pub struct ArticleId(pub i32);

impl<S: Send + Sync> FromRequestParts<S> for ArticleId {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected path");
                bad_request()
            })?;
        let id = parse_article_id(&raw)
            .inspect_err(|_| tracing::debug!(%raw, "non-integer article_id"))?;
        Ok(ArticleId(id))
    }
}

/// `GET /api/articles` query parameters.
#[derive(Debug, Clone, Default)]
pub struct Filter(pub ArticleFilter);

impl<S: Send + Sync> FromRequestParts<S> for Filter {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(filter) = Query::<ArticleFilter>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected query string");
                bad_request()
            })?;
        Ok(Filter(filter))
    }
}

/// A JSON body that deserialized and passed `garde` validation.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected JSON body");
                bad_request()
            })?;
        value.validate().map_err(|report| {
            tracing::debug!(%report, "invalid JSON body");
            bad_request()
        })?;
        Ok(ValidJson(value))
    }
}
