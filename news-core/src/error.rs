use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Message returned to clients for any server-side fault.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Helper to create a JSON error response with the API's `{ "message": ... }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "message": message.into() });
    (status, Json(body)).into_response()
}

/// Error type returned by every handler.
///
/// Each variant carries the message sent to the client, except `Internal`,
/// whose message is logged and replaced by [`INTERNAL_MESSAGE`].
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) => error_response(status, msg),
            HttpError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed with a server error");
                error_response(status, INTERNAL_MESSAGE)
            }
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for HttpError {}

impl From<std::io::Error> for HttpError {
    fn from(err: std::io::Error) -> Self {
        HttpError::Internal(err.to_string())
    }
}
