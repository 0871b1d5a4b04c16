//! Test support for the NC News API.
//!
//! - [`TestApp`]: drive a `Router` in-process and assert on responses.
//! - [`MemoryStore`]: a `NewsStore` over in-memory tables.
//! - [`fixtures`]: the reference dataset.

mod app;
pub mod fixtures;
mod store;

pub use app::{resolve_path, TestApp, TestRequest, TestResponse};
pub use store::MemoryStore;

/// A `MemoryStore` loaded with [`fixtures::test_data`].
pub fn seeded_store() -> MemoryStore {
    MemoryStore::from_seed(fixtures::test_data())
}
