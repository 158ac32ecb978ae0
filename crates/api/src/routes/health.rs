//! Liveness and catalog readiness at `GET /health`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracksearch_db::DbError;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when searches can be served, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `ready`, `unreachable` (no connection) or `unusable` (the catalog
    /// tables cannot be read).
    pub catalog: &'static str,
}

/// Answers 200 when the catalog can serve searches and 503 when it cannot,
/// so the status alone is enough for a load balancer.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let catalog = match tracksearch_db::health_check(&state.pool).await {
        Ok(()) => "ready",
        Err(DbError::Connection(e)) => {
            tracing::warn!(error = %e, "Catalog unreachable");
            "unreachable"
        }
        Err(DbError::Query(e)) => {
            tracing::warn!(error = %e, "Catalog tables unreadable");
            "unusable"
        }
    };

    let (code, status) = if catalog == "ready" {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            catalog,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
