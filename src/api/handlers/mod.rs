//! REST endpoint handlers organized by resource.

pub mod object;
pub mod pool;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the pool and object routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(pool::routes()).merge(object::routes())
}
