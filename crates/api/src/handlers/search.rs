//! Handler for the track title search endpoint.

use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracksearch_core::search::{SearchParams, SearchRequest};
use tracksearch_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /?search=<term>[&limit=<n>][&offset=<n>]
///
/// Returns a JSON array of matching tracks, best matches first. Mounted for
/// every method so non-GET requests get a logged 405 rather than the
/// router's silent one.
pub async fn search_tracks(
    method: Method,
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed(method));
    }

    let request = SearchRequest::try_from(SearchParams::from_pairs(pairs))?;
    tracing::info!(term = request.term(), page = ?request.page(), "Received query for term");

    let tracks = TrackRepo::search(&state.pool, &request).await?;

    let body = serde_json::to_vec(&tracks)
        .map_err(|e| AppError::InternalError(format!("Failed to encode tracks: {e}")))?;

    tracing::info!(term = request.term(), results = tracks.len(), "Completed query for term");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
