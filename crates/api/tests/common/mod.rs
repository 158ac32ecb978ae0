#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use tracksearch_api::config::{LogFormat, ServerConfig};
use tracksearch_api::router::build_app_router;
use tracksearch_api::state::AppState;
use tracksearch_db::DbPool;

const CATALOG_FIXTURE: &str = include_str!("../../../db/fixtures/catalog.sql");

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
        favicon_path: concat!(env!("CARGO_MANIFEST_DIR"), "/assets/note.ico").into(),
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    }
}

/// In-memory catalog seeded with the shared fixture.
///
/// In-memory databases live per connection, so the pool is pinned to a
/// single connection that never expires.
pub async fn catalog_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::raw_sql(CATALOG_FIXTURE).execute(&pool).await.unwrap();
    pool
}

/// Build the full application router, with all middleware layers, on top of
/// the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Router backed by the seeded in-memory catalog.
pub async fn catalog_app() -> Router {
    build_test_app(catalog_pool().await)
}

/// Router over an open database that has none of the catalog tables.
pub async fn empty_database_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    build_test_app(pool)
}

/// Router whose catalog path does not exist.
pub fn unreachable_catalog_app() -> Router {
    let pool = tracksearch_db::create_pool(
        "sqlite:///nonexistent-dir/catalog.sqlite",
        1,
        Duration::from_secs(1),
    )
    .unwrap();
    build_test_app(pool)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// `TrackId`s of a JSON array response, in order.
pub fn track_ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("body should be a JSON array")
        .iter()
        .map(|t| t["TrackId"].as_i64().unwrap())
        .collect()
}
