use news_data::{messages, DataError};

/// Extension trait for converting `sqlx::Error` into `DataError`.
///
/// Orphan rules prevent `From<sqlx::Error> for DataError` here, so call
/// `.into_data_error()` (or pass it to `map_err`).
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        match &self {
            sqlx::Error::RowNotFound => DataError::not_found(),
            sqlx::Error::Database(db) => {
                let classified = db.code().and_then(|code| classify_sqlstate(&code));
                classified.unwrap_or_else(|| DataError::database(self))
            }
            _ => DataError::database(self),
        }
    }
}

/// Map a PostgreSQL SQLSTATE to a client error, if it is one.
///
/// | Code | Condition | Result |
/// |------|-----------|--------|
/// | `23503` | foreign_key_violation | Not Found |
/// | `22P02` | invalid_text_representation | Bad Request |
/// | `23502` | not_null_violation | Bad Request |
/// | `22003` | numeric_value_out_of_range | Bad Request |
/// | `42703` | undefined_column | Invalid sort_by query |
/// | `42601` | syntax_error | Invalid order query |
pub fn classify_sqlstate(code: &str) -> Option<DataError> {
    let err = match code {
        "23503" => DataError::not_found(),
        "22P02" | "23502" | "22003" => DataError::bad_request(),
        "42703" => DataError::BadInput(messages::INVALID_SORT_BY.into()),
        "42601" => DataError::BadInput(messages::INVALID_ORDER.into()),
        _ => return None,
    };
    Some(err)
}

/// Convenience alias for data-layer results using `DataError`.
pub type SqlxResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(err: Option<DataError>) -> String {
        match err {
            Some(DataError::BadInput(msg)) => format!("400 {msg}"),
            Some(DataError::NotFound(msg)) => format!("404 {msg}"),
            Some(DataError::Database(e)) => format!("500 {e}"),
            None => "unclassified".into(),
        }
    }

    #[test]
    fn foreign_key_violation_is_not_found() {
        assert_eq!(describe(classify_sqlstate("23503")), "404 Not Found");
    }

    #[test]
    fn malformed_values_are_bad_request() {
        for code in ["22P02", "23502", "22003"] {
            assert_eq!(describe(classify_sqlstate(code)), "400 Bad Request", "{code}");
        }
    }

    #[test]
    fn identifier_errors_name_the_parameter() {
        assert_eq!(describe(classify_sqlstate("42703")), "400 Invalid sort_by query");
        assert_eq!(describe(classify_sqlstate("42601")), "400 Invalid order query");
    }

    #[test]
    fn other_codes_are_left_to_the_caller() {
        for code in ["23505", "08006", "57014", ""] {
            assert_eq!(describe(classify_sqlstate(code)), "unclassified", "{code}");
        }
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = sqlx::Error::RowNotFound.into_data_error();
        assert!(matches!(err, DataError::NotFound(ref msg) if msg == "Not Found"));
    }

    #[test]
    fn pool_errors_are_database_errors() {
        let err = sqlx::Error::PoolTimedOut.into_data_error();
        assert!(matches!(err, DataError::Database(_)));
    }
}
