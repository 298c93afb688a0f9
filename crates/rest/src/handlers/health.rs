//! Health check endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use smdb_persistence::core::QueryExecutor;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Asks the backend for a connection and runs a trivial statement.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - The database is reachable
/// - `503 Service Unavailable` - The database is not reachable
pub async fn health_handler<E>(State(state): State<AppState<E>>) -> RestResult<Response>
where
    E: QueryExecutor,
{
    debug!("Processing health check request");

    let executor = state.executor();
    executor
        .health_check()
        .await
        .map_err(|e| RestError::ServiceUnavailable {
            message: e.to_string(),
        })?;

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": executor.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
