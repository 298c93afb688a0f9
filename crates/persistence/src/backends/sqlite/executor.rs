//! [`QueryExecutor`] for SQLite.

use async_trait::async_trait;
use rusqlite::types::ToSqlOutput;
use rusqlite::{Row, ToSql, params_from_iter};

use crate::core::{BackendKind, QueryExecutor};
use crate::error::{BackendError, QueryError, StorageResult};
use crate::query::{Dialect, RowSource, SqlFragment, SqlParam, scan_pack_row, scan_song_row};
use crate::types::{PackRow, SongRow};

use super::backend::{BACKEND_NAME, SqliteBackend};

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Text(s) => ToSqlOutput::from(s.as_str()),
            SqlParam::Integer(i) => ToSqlOutput::from(*i),
            SqlParam::BigInt(i) => ToSqlOutput::from(*i),
            SqlParam::Float(f) => ToSqlOutput::from(*f),
        })
    }
}

struct SqliteRow<'a, 'stmt>(&'a Row<'stmt>);

impl RowSource for SqliteRow<'_, '_> {
    fn text(&self, index: usize) -> Result<Option<String>, String> {
        self.0.get(index).map_err(|e| e.to_string())
    }

    fn integer(&self, index: usize) -> Result<Option<i32>, String> {
        self.0.get(index).map_err(|e| e.to_string())
    }

    fn float(&self, index: usize) -> Result<Option<f64>, String> {
        self.0.get(index).map_err(|e| e.to_string())
    }
}

fn execution_error(e: rusqlite::Error) -> QueryError {
    QueryError::Execution {
        backend_name: BACKEND_NAME.to_string(),
        message: e.to_string(),
    }
}

impl SqliteBackend {
    /// Runs `query` and scans every row with `scan`.
    fn query_rows<T, F>(&self, query: &SqlFragment, scan: F) -> StorageResult<Vec<T>>
    where
        F: Fn(&SqliteRow<'_, '_>) -> Result<T, QueryError>,
    {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(&query.sql).map_err(execution_error)?;
        let mut rows = stmt
            .query(params_from_iter(query.params.iter()))
            .map_err(execution_error)?;

        let mut scanned = Vec::new();
        while let Some(row) = rows.next().map_err(execution_error)? {
            scanned.push(scan(&SqliteRow(row))?);
        }
        Ok(scanned)
    }
}

#[async_trait]
impl QueryExecutor for SqliteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn fetch_count(&self, query: &SqlFragment) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn
            .query_row(&query.sql, params_from_iter(query.params.iter()), |row| {
                row.get(0)
            })
            .map_err(execution_error)?;

        u64::try_from(count).map_err(|e| {
            QueryError::Scan {
                backend_name: BACKEND_NAME.to_string(),
                column: "count".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    async fn fetch_song_rows(&self, query: &SqlFragment) -> StorageResult<Vec<SongRow>> {
        self.query_rows(query, |row| scan_song_row(row, BACKEND_NAME))
    }

    async fn fetch_pack_rows(&self, query: &SqlFragment) -> StorageResult<Vec<PackRow>> {
        self.query_rows(query, |row| scan_pack_row(row, BACKEND_NAME))
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        let conn = self
            .get_connection()
            .map_err(|_| BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "Failed to get connection".to_string(),
            })?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Health check failed: {}", e),
                source: None,
            })?;
        Ok(())
    }
}
