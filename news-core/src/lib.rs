//! Cross-cutting runtime pieces shared by the NC News crates: the HTTP error
//! type, configuration loading, tracing layers and the server entry point.

pub mod config;
pub mod error;
pub mod layers;
pub mod server;

pub use config::{ConfigError, ConfigSection, ConfigValue, DatabaseConfig, NewsConfig, ServerConfig};
pub use error::{error_response, HttpError, INTERNAL_MESSAGE};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use server::serve;
