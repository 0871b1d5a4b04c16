//! PostgreSQL backend for the NC News data layer.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`PgNewsStore`] | `NewsStore` over a `PgPool` |
//! | [`SqlxErrorExt`] | `sqlx::Error` → `DataError`, classified by SQLSTATE |
//! | [`connect`] / [`migrate`] | pool construction and the bundled schema |
//! | [`seed()`] | truncate and reload every table from a `SeedData` |

pub mod error;
pub mod pool;
pub mod seed;
pub mod store;

pub use error::{classify_sqlstate, SqlxErrorExt, SqlxResult};
pub use pool::{connect, migrate};
pub use seed::seed;
pub use store::PgNewsStore;
