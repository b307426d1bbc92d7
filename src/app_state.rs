//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::domain::PoolRegistry;
use crate::service::PoolService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pool service for all business logic.
    pub pool_service: Arc<PoolService>,
}

impl AppState {
    /// Builds the state around a fresh, empty [`PoolRegistry`].
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        let registry = Arc::new(PoolRegistry::new());
        let pool_service = PoolService::new(
            registry,
            config.type_catalog.clone(),
            config.max_pool_size,
        );
        Self {
            pool_service: Arc::new(pool_service),
        }
    }
}
