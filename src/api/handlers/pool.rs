//! Pool handlers: create, list, describe.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreatePoolRequest, PoolResponse};
use crate::app_state::AppState;
use crate::domain::PoolName;
use crate::error::GatewayError;

/// `POST /create_object_pool/` — Create a new empty pool.
///
/// # Errors
///
/// Returns [`GatewayError`] on a missing or invalid type tag, an invalid
/// name or capacity, an unregistered type, or a name that is already used.
pub async fn create_pool(
    State(state): State<AppState>,
    Json(req): Json<CreatePoolRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let (name, type_tag) = req.parse()?;

    let pool = state
        .pool_service
        .create_pool(name, type_tag, req.capacity)
        .await?;

    let response = PoolResponse {
        message: format!("Pool {} created for type {}", pool.pool_name, pool.type_tag),
        pool,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /pools` — List all pools sorted by name.
pub async fn list_pools(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.pool_service.list_pools().await)
}

/// `GET /pools/{name}` — Get pool metadata.
///
/// # Errors
///
/// Returns [`GatewayError::PoolNotFound`] if the pool does not exist.
pub async fn get_pool(
    State(state): State<AppState>,
    Path(raw_name): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let name = PoolName::parse(&raw_name)?;
    let pool = state.pool_service.describe_pool(&name).await?;

    Ok(Json(PoolResponse {
        message: "Pool found".to_string(),
        pool,
    }))
}

/// Pool management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create_object_pool/", post(create_pool))
        .route("/create_object_pool", post(create_pool))
        .route("/pools", get(list_pools))
        .route("/pools/{name}", get(get_pool))
}
