//! SQL functions registered on every pooled connection.
//!
//! SQLite's built-in `lower()` only folds ASCII letters. The catalog holds
//! titles such as `ÉTOILE` and `Ω`, so `lower()` is replaced with a version
//! that applies Unicode lowercasing, matching PostgreSQL on a UTF-8 database.

use rusqlite::Connection;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;

/// Replaces the built-in single-argument `lower()` on `conn`.
pub(super) fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        unicode_lower,
    )
}

fn unicode_lower(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    let lowered = match ctx.get_raw(0) {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).to_lowercase())
        }
    };
    Ok(lowered)
}
