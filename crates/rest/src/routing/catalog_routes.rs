//! Catalog route configuration.

use axum::{
    Router,
    routing::{get, post},
};
use smdb_persistence::core::QueryExecutor;

use crate::handlers;
use crate::state::AppState;

/// Creates all catalog API routes.
///
/// # Routes
///
/// - `GET /songs` - Song search
/// - `GET /songs/{songid}` - Song lookup
/// - `GET /packs/{packid}` - Pack lookup
/// - `POST /packs` - Pack submission
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
pub fn create_routes<E>(state: AppState<E>) -> Router
where
    E: QueryExecutor + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<E>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/songs", get(handlers::search_songs_handler::<E>))
        .route("/songs/{songid}", get(handlers::song_handler::<E>))
        .route("/packs", post(handlers::submit_pack_handler))
        .route("/packs/{packid}", get(handlers::pack_handler::<E>))
        .with_state(state)
}
