//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Pool and object endpoints keep their historical root-level paths
//! (`/create_object_pool/`, `/add_object_to_pool/`, `/remove/`, `/random/`),
//! each also reachable without the trailing slash.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::panic_response;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// Wraps a state-bound router in the gateway middleware stack.
///
/// Panics inside handlers are turned into `500` responses with error
/// code 3000 instead of dropping the connection.
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
