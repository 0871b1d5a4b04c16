use news_test::{seeded_store, MemoryStore, TestApp};

/// The router over a freshly seeded in-memory store.
pub fn app() -> TestApp {
    TestApp::new(news_api::app(seeded_store()))
}

/// The router over a store whose every call fails.
#[allow(dead_code)]
pub fn broken_app() -> TestApp {
    TestApp::new(news_api::app(MemoryStore::unavailable()))
}
