//! Pack handlers.
//!
//! - `GET [base]/packs/[packid]` - a pack with its songs
//! - `POST [base]/packs` - submit a pack for review

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use smdb_persistence::core::{QueryExecutor, find_pack};
use smdb_persistence::types::{Pack, PackSubmission};
use tracing::{debug, error, info};
use url::Url;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Status reported for every accepted submission.
pub const PENDING_REVIEW: &str = "pending-review";

/// Response body of an accepted pack submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Always [`PENDING_REVIEW`].
    pub status: &'static str,
    /// The submitted link, trimmed.
    pub download_link: String,
}

/// Handler for reading a pack.
///
/// # HTTP Request
///
/// `GET [base]/packs/[packid]`
///
/// # Response
///
/// - `200 OK` - The pack with its songs ordered by title
/// - `404 Not Found` - No pack has this id
pub async fn pack_handler<E>(
    State(state): State<AppState<E>>,
    Path(pack_id): Path<String>,
) -> RestResult<Json<Pack>>
where
    E: QueryExecutor,
{
    debug!(pack_id = %pack_id, "Processing pack request");

    let pack = find_pack(state.executor(), &pack_id)
        .await
        .inspect_err(|e| error!(error = %e, pack_id = %pack_id, "Pack lookup failed"))?;

    pack.map(Json)
        .ok_or_else(|| RestError::pack_not_found(pack_id))
}

/// Handler for pack submission.
///
/// Nothing is stored. The submission is logged for an administrator to review.
///
/// # HTTP Request
///
/// `POST [base]/packs` with body `{"downloadLink": "https://..."}`
///
/// # Response
///
/// - `202 Accepted` - `{"status": "pending-review", "downloadLink": "..."}`
/// - `400 Bad Request` - Missing body, missing link, or a link that is not an
///   absolute http(s) URL
pub async fn submit_pack_handler(
    payload: Result<Json<PackSubmission>, JsonRejection>,
) -> RestResult<Response> {
    let Json(submission) = payload.map_err(|e| RestError::BadRequest {
        message: format!("Invalid pack submission: {}", e.body_text()),
    })?;

    let download_link = validate_download_link(&submission.download_link)?;

    info!(download_link = %download_link, "Pack submitted for review");

    let receipt = SubmissionReceipt {
        status: PENDING_REVIEW,
        download_link,
    };
    Ok((StatusCode::ACCEPTED, Json(receipt)).into_response())
}

/// Checks that `link` is an absolute http or https URL with a host.
fn validate_download_link(link: &str) -> RestResult<String> {
    let link = link.trim();
    if link.is_empty() {
        return Err(RestError::BadRequest {
            message: "downloadLink is required".to_string(),
        });
    }

    let url = Url::parse(link).map_err(|e| RestError::BadRequest {
        message: format!("downloadLink is not a valid URL: {}", e),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(RestError::BadRequest {
            message: "downloadLink must be an http or https URL".to_string(),
        });
    }

    Ok(link.to_string())
}
