//! Service layer: business logic orchestration.
//!
//! [`PoolService`] validates pool requests against the type catalog and
//! capacity ceiling, then applies them to the [`super::domain::PoolRegistry`].

pub mod pool_service;

pub use pool_service::{PoolService, Removal, RemoveTarget};
