//! clans-server: HTTP JSON API for clan records
//!
//! Maps REST verbs on `/clans` to single parameterized SQL statements
//! against an injected PostgreSQL connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
