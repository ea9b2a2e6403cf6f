#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_api::config::{CatalogBackend, LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_catalog::{CatalogService, CatalogStore, MemoryCatalogStore, SqlCatalogStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        catalog_backend: CatalogBackend::Memory,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store, using the same
/// middleware stack as production.
pub fn build_test_app(store: Arc<dyn CatalogStore>) -> Router {
    let config = test_config();
    let state = AppState {
        catalog: CatalogService::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn CatalogStore> {
    Arc::new(MemoryCatalogStore::new())
}

/// An in-memory store holding the default seed entries.
pub async fn seeded_store() -> Arc<dyn CatalogStore> {
    let store = memory_store();
    CatalogService::new(Arc::clone(&store))
        .seed_if_empty()
        .await
        .unwrap();
    store
}

/// A SQLite-backed store with migrations applied.
pub async fn sql_store() -> Arc<dyn CatalogStore> {
    let pool = folio_db::create_pool("sqlite::memory:").await.unwrap();
    folio_db::run_migrations(&pool).await.unwrap();
    Arc::new(SqlCatalogStore::new(pool))
}

pub fn project_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "role": "Full-Stack Developer",
        "date": "Fall 2025",
        "description": "Something I built.",
        "technologies": "Rust, Axum, SQLite",
        "url": "",
        "imageUrl": "/images/new.png",
        "type": "project",
    })
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
