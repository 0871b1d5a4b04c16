/// Client-facing messages attached to classified failures.
pub mod messages {
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const NOT_FOUND: &str = "Not Found";
    pub const TOPIC_NOT_FOUND: &str = "Topic Not Found";
    pub const INVALID_SORT_BY: &str = "Invalid sort_by query";
    pub const INVALID_ORDER: &str = "Invalid order query";
}

/// Errors that can occur in the data layer.
///
/// `BadInput` and `NotFound` are client errors whose message is safe to return
/// as-is. `Database` is anything the classifier could not attribute to the
/// client.
#[derive(Debug)]
pub enum DataError {
    BadInput(String),
    NotFound(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
}

impl DataError {
    pub fn bad_request() -> Self {
        DataError::BadInput(messages::BAD_REQUEST.into())
    }

    pub fn not_found() -> Self {
        DataError::NotFound(messages::NOT_FOUND.into())
    }

    /// Construct a `Database` variant from any error type.
    ///
    /// Used by backend crates (e.g. `news-data-sqlx`) to wrap driver-specific errors.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::BadInput(msg) => write!(f, "Bad input: {msg}"),
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DataError> for news_core::HttpError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::BadInput(msg) => news_core::HttpError::BadRequest(msg),
            DataError::NotFound(msg) => news_core::HttpError::NotFound(msg),
            DataError::Database(e) => news_core::HttpError::Internal(e.to_string()),
        }
    }
}
