//! PostgreSQL backend.
//!
//! Connections come from a `deadpool-postgres` pool; every connection runs
//! with the configured `statement_timeout`.

mod backend;
mod executor;
pub mod schema;

pub use backend::{PostgresBackend, PostgresConfig, PostgresSslMode};
