//! Database backend implementations.
//!
//! Each backend implements [`QueryExecutor`](crate::core::QueryExecutor) and is
//! gated behind a feature flag.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |
//! | PostgreSQL | `postgres` | The production catalog store |

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;
