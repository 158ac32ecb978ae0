pub mod health;

use std::path::Path;

use axum::routing::any;
use axum::Router;
use tower_http::services::ServeFile;

use crate::handlers::search;
use crate::state::AppState;

/// Build the search route tree.
///
/// ```text
/// /               search_tracks (GET only; other methods answer 405)
/// /favicon.ico    static icon
/// ```
pub fn search_routes(favicon_path: &Path) -> Router<AppState> {
    Router::new()
        .route("/", any(search::search_tracks))
        .route_service("/favicon.ico", ServeFile::new(favicon_path))
}
