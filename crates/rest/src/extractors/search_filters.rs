//! Song search filter extractor.
//!
//! Parses the query string of `GET /songs` into validated
//! [`SearchFilters`], applying the page size limits from the server
//! configuration.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use smdb_persistence::core::QueryExecutor;
use smdb_persistence::types::SearchFilters;

use crate::error::RestError;
use crate::state::AppState;

/// Axum extractor for song search filters.
///
/// Rejects with [`RestError::BadRequest`] when a numeric option does not
/// parse. Unknown options are ignored.
///
/// # Example
///
/// ```rust,ignore
/// use smdb_rest::extractors::SearchQuery;
///
/// async fn handler(SearchQuery(filters): SearchQuery) {
///     println!("page {}", filters.page.page());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery(pub SearchFilters);

impl<E> FromRequestParts<AppState<E>> for SearchQuery
where
    E: QueryExecutor + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<E>,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid query string: {}", e.body_text()),
            })?;

        let filters = SearchFilters::from_params_with_limits(
            &params,
            state.default_page_size(),
            state.max_page_size(),
        )
        .map_err(|e| RestError::BadRequest {
            message: e.to_string(),
        })?;

        Ok(SearchQuery(filters))
    }
}
