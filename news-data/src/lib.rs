//! Data access layer for the NC News API.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`models`] | `Topic`, `Article`, `Comment`, `User` rows |
//! | [`validate`] | path id parsing, the `sort_by` whitelist and `order` parsing |
//! | [`query`] | `ArticleFilter` → `ArticleQuery`, and the SQL `QueryBuilder` |
//! | [`store`] | the `NewsStore` trait implemented by storage backends |
//! | [`error`] | `DataError` and the client-facing messages |

pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;
pub mod validate;

pub use error::{messages, DataError};
pub use models::{Article, ArticleRecord, Comment, NewComment, Topic, User};
pub use query::{select_articles, ArticleFilter, ArticleQuery, QueryBuilder, SqlParam};
pub use seed::SeedData;
pub use store::NewsStore;
pub use validate::{parse_article_id, SortColumn, SortOrder};
