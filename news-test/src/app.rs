use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP client over an assembled `Router`.
///
/// Requests are dispatched with `tower::ServiceExt::oneshot`; no socket is bound.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn patch(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::DELETE, path)
    }

    pub fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest {
            app: self,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// A request under construction.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl TestRequest<'_> {
    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        self.headers
            .insert(name, value.as_ref().parse().expect("invalid header value"));
        self
    }

    /// JSON body; sets `Content-Type: application/json`.
    pub fn json(self, body: &impl Serialize) -> Self {
        let bytes = serde_json::to_vec(body).expect("failed to serialize request body");
        self.body(bytes).header(CONTENT_TYPE, "application/json")
    }

    /// Raw body, sent with whatever headers were set.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .body(self.body.map(Body::from).unwrap_or_else(Body::empty))
            .expect("failed to build request");

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Resolve a dotted path such as `articles[0].title` or `comments.len()`.
///
/// Missing fields and out-of-range indices resolve to `null`.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let (path, len) = match path.strip_suffix("len()") {
        Some(rest) => (rest.trim_end_matches('.'), true),
        None => (path, false),
    };

    let mut pointer = String::new();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let mut parts = segment.split('[');
        if let Some(field) = parts.next().filter(|f| !f.is_empty()) {
            pointer.push('/');
            pointer.push_str(field);
        }
        for index in parts {
            pointer.push('/');
            pointer.push_str(index.trim_end_matches(']'));
        }
    }

    let value = root.pointer(&pointer).cloned().unwrap_or(Value::Null);
    if !len {
        return value;
    }
    match &value {
        Value::Array(items) => items.len().into(),
        Value::Object(fields) => fields.len().into(),
        other => panic!("len() applied to a non-collection at \"{path}\": {other}"),
    }
}

/// A received response with assertion helpers.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_created(self) -> Self {
        self.assert_status(StatusCode::CREATED)
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_not_found(self) -> Self {
        self.assert_status(StatusCode::NOT_FOUND)
    }

    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "expected {expected}, got {}\nbody: {}",
            self.status,
            self.text()
        );
        self
    }

    /// Assert the `{ "message": ... }` error body.
    pub fn assert_message(self, expected: &str) -> Self {
        self.assert_json_path("message", expected)
    }

    pub fn assert_json_path(self, path: &str, expected: impl Into<Value>) -> Self {
        let root: Value = self.json();
        let actual = resolve_path(&root, path);
        let expected = expected.into();
        assert_eq!(
            actual, expected,
            "JSON path \"{path}\"\n  expected: {expected}\n  actual:   {actual}\n  body: {root}"
        );
        self
    }

    /// Deserialize the value at a JSON path.
    pub fn json_path<T: DeserializeOwned>(&self, path: &str) -> T {
        let root: Value = self.json();
        let value = resolve_path(&root, path);
        serde_json::from_value(value.clone())
            .unwrap_or_else(|e| panic!("JSON path \"{path}\": {e}\n  value: {value}"))
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("response is not JSON: {e}\nbody: {}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_fields_indices_and_len() {
        let body = json!({
            "articles": [{ "title": "A", "votes": 0 }, { "title": "Z" }],
            "message": "all ok"
        });
        assert_eq!(resolve_path(&body, "message"), json!("all ok"));
        assert_eq!(resolve_path(&body, "articles[1].title"), json!("Z"));
        assert_eq!(resolve_path(&body, "articles.len()"), json!(2));
        assert_eq!(resolve_path(&body, "articles[0].len()"), json!(2));
        assert_eq!(resolve_path(&body, "len()"), json!(2));
    }

    #[test]
    fn missing_paths_are_null() {
        let body = json!({ "articles": [] });
        assert_eq!(resolve_path(&body, "articles[3].title"), Value::Null);
        assert_eq!(resolve_path(&body, "article.votes"), Value::Null);
    }
}
