use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use news_core::{HttpError, INTERNAL_MESSAGE};

async fn error_parts(err: HttpError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn bad_request_status_and_message() {
    let (status, body) = error_parts(HttpError::BadRequest("Invalid sort_by query".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "message": "Invalid sort_by query" }));
}

#[tokio::test]
async fn not_found_status_and_message() {
    let (status, body) = error_parts(HttpError::NotFound("Topic Not Found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Topic Not Found");
}

#[tokio::test]
async fn internal_error_hides_detail() {
    let (status, body) =
        error_parts(HttpError::Internal("connection refused (os error 111)".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    assert!(!body.to_string().contains("connection refused"));
}

#[test]
fn display_formatting() {
    assert_eq!(HttpError::BadRequest("x".into()).to_string(), "Bad Request: x");
    assert_eq!(HttpError::NotFound("y".into()).to_string(), "Not Found: y");
    assert_eq!(HttpError::Internal("z".into()).to_string(), "Internal Error: z");
}

#[test]
fn io_error_is_internal() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    match HttpError::from(io_err) {
        HttpError::Internal(msg) => assert!(msg.contains("pipe closed")),
        other => panic!("expected Internal, got {other}"),
    }
}
