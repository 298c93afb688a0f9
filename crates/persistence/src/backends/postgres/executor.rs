//! [`QueryExecutor`] for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

use crate::core::{BackendKind, QueryExecutor};
use crate::error::{BackendError, QueryError, StorageResult};
use crate::query::{Dialect, RowSource, SqlFragment, SqlParam, scan_pack_row, scan_song_row};
use crate::types::{PackRow, SongRow};

use super::backend::{BACKEND_NAME, PostgresBackend};

struct PgRow<'a>(&'a Row);

impl RowSource for PgRow<'_> {
    fn text(&self, index: usize) -> Result<Option<String>, String> {
        self.0.try_get(index).map_err(|e| e.to_string())
    }

    fn integer(&self, index: usize) -> Result<Option<i32>, String> {
        self.0.try_get(index).map_err(|e| e.to_string())
    }

    fn float(&self, index: usize) -> Result<Option<f64>, String> {
        self.0.try_get(index).map_err(|e| e.to_string())
    }
}

fn to_sql_params(params: &[SqlParam]) -> Vec<Box<dyn ToSql + Sync + Send>> {
    params
        .iter()
        .map(|param| -> Box<dyn ToSql + Sync + Send> {
            match param {
                SqlParam::Text(s) => Box::new(s.clone()),
                SqlParam::Integer(i) => Box::new(*i),
                SqlParam::BigInt(i) => Box::new(*i),
                SqlParam::Float(f) => Box::new(*f),
            }
        })
        .collect()
}

fn execution_error(e: tokio_postgres::Error) -> QueryError {
    QueryError::Execution {
        backend_name: BACKEND_NAME.to_string(),
        message: e.to_string(),
    }
}

impl PostgresBackend {
    async fn query(&self, query: &SqlFragment) -> StorageResult<Vec<Row>> {
        let client = self.get_client().await?;
        let params = to_sql_params(&query.params);
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = client
            .query(&query.sql, &param_refs)
            .await
            .map_err(execution_error)?;
        Ok(rows)
    }
}

#[async_trait]
impl QueryExecutor for PostgresBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Postgres
    }

    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn fetch_count(&self, query: &SqlFragment) -> StorageResult<u64> {
        let rows = self.query(query).await?;
        let scan_error = |message: String| QueryError::Scan {
            backend_name: BACKEND_NAME.to_string(),
            column: "count".to_string(),
            message,
        };

        let row = rows
            .first()
            .ok_or_else(|| scan_error("count query returned no rows".to_string()))?;
        let count: i64 = row.try_get(0).map_err(|e| scan_error(e.to_string()))?;
        Ok(u64::try_from(count).map_err(|e| scan_error(e.to_string()))?)
    }

    async fn fetch_song_rows(&self, query: &SqlFragment) -> StorageResult<Vec<SongRow>> {
        let rows = self.query(query).await?;
        let mut songs = Vec::with_capacity(rows.len());
        for row in &rows {
            songs.push(scan_song_row(&PgRow(row), BACKEND_NAME)?);
        }
        Ok(songs)
    }

    async fn fetch_pack_rows(&self, query: &SqlFragment) -> StorageResult<Vec<PackRow>> {
        let rows = self.query(query).await?;
        let mut packs = Vec::with_capacity(rows.len());
        for row in &rows {
            packs.push(scan_pack_row(&PgRow(row), BACKEND_NAME)?);
        }
        Ok(packs)
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "Failed to get connection".to_string(),
            })?;
        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| BackendError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Health check failed: {}", e),
                source: None,
            })?;
        Ok(())
    }
}
