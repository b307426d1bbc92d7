//! Object handlers: add, remove, random select.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AddObjectRequest, AddObjectResponse, RandomObjectResponse, RandomQuery, RemoveObjectRequest,
    RemoveObjectResponse,
};
use crate::app_state::AppState;
use crate::domain::{PoolName, TypedObject};
use crate::error::GatewayError;

/// `POST /add_object_to_pool/` — Append an object to a pool.
///
/// # Errors
///
/// Returns [`GatewayError::PoolNotFound`] if the pool is missing, or
/// [`GatewayError::TypeMismatch`] / [`GatewayError::CapacityExceeded`] if
/// the object is rejected.
pub async fn add_object(
    State(state): State<AppState>,
    Json(req): Json<AddObjectRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let name = PoolName::parse(&req.pool_name)?;
    let object = TypedObject::try_from(req.object)?;

    let size = state.pool_service.add_object(&name, object).await?;

    Ok(Json(AddObjectResponse {
        message: "Object added successfully".to_string(),
        pool_name: name,
        size,
    }))
}

/// `DELETE /remove/` — Remove one object by value (first match) or index.
///
/// # Errors
///
/// Returns [`GatewayError::PoolNotFound`] or
/// [`GatewayError::ObjectNotFound`] if the pool or object is missing, and
/// [`GatewayError::InvalidRequest`] on a malformed target.
pub async fn remove_object(
    State(state): State<AppState>,
    Json(req): Json<RemoveObjectRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let (name, target) = req.parse()?;

    let removal = state.pool_service.remove_object(&name, &target).await?;

    Ok(Json(RemoveObjectResponse {
        message: "Object removed successfully".to_string(),
        pool_name: name,
        size: removal.size,
        removed: removal.removed.into(),
    }))
}

/// `GET /random/?pool_name=…` — Pick a random object without removing it.
///
/// # Errors
///
/// Returns [`GatewayError::PoolNotFound`] or [`GatewayError::EmptyPool`]
/// if there is nothing to pick from.
pub async fn random_object(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let name = PoolName::parse(&query.pool_name)?;
    let object = state.pool_service.random_object(&name).await?;

    Ok(Json(RandomObjectResponse {
        pool_name: name,
        object: object.into(),
    }))
}

/// Object routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add_object_to_pool/", post(add_object))
        .route("/add_object_to_pool", post(add_object))
        .route("/remove/", delete(remove_object))
        .route("/remove", delete(remove_object))
        .route("/random/", get(random_object))
        .route("/random", get(random_object))
}
