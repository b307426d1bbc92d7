//! System endpoints: health check, type catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    pools: usize,
}

/// `GET /health` — Service health status.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pools: state.pool_service.pool_count().await,
        }),
    )
}

/// Type catalog response.
#[derive(Debug, Serialize)]
struct TypeCatalogResponse {
    /// `true` when pools may be created with any type tag.
    open: bool,
    types: Vec<String>,
    max_pool_size: usize,
}

/// `GET /config/types` — Report which type tags pools may be created with.
pub async fn types_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.pool_service;
    let catalog = service.catalog();
    (
        StatusCode::OK,
        Json(TypeCatalogResponse {
            open: catalog.is_open(),
            types: catalog.tags().map(ToString::to_string).collect(),
            max_pool_size: service.max_pool_size(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/types", get(types_handler))
}
