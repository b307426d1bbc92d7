//! Pool service: validates requests and applies them to the registry.

use std::sync::Arc;

use crate::domain::{Pool, PoolName, PoolRegistry, PoolSummary, TypeCatalog, TypeTag, TypedObject};
use crate::error::GatewayError;

/// How an object to remove is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    /// First object equal to this one.
    Value(TypedObject),
    /// Object at this zero-based position.
    Index(usize),
}

/// Outcome of a successful removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The object taken out of the pool.
    pub removed: TypedObject,
    /// Pool size after the removal.
    pub size: usize,
}

/// Orchestration layer for all pool operations.
///
/// Stateless coordinator: owns a reference to the [`PoolRegistry`] for state
/// and the [`TypeCatalog`] plus capacity ceiling for validation. Every
/// mutation follows the pattern: resolve pool → acquire its write lock →
/// validate → mutate → log → return.
#[derive(Debug, Clone)]
pub struct PoolService {
    registry: Arc<PoolRegistry>,
    catalog: TypeCatalog,
    max_pool_size: usize,
}

impl PoolService {
    /// Creates a new `PoolService`.
    ///
    /// `max_pool_size` is both the capacity given to pools created without
    /// one and the largest capacity a client may request.
    #[must_use]
    pub fn new(registry: Arc<PoolRegistry>, catalog: TypeCatalog, max_pool_size: usize) -> Self {
        Self {
            registry,
            catalog,
            max_pool_size,
        }
    }

    /// Returns the number of registered pools.
    pub async fn pool_count(&self) -> usize {
        self.registry.len().await
    }

    /// Returns the type catalog used to validate pool creation.
    #[must_use]
    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    /// Returns the configured capacity ceiling.
    #[must_use]
    pub const fn max_pool_size(&self) -> usize {
        self.max_pool_size
    }

    /// Creates a new empty pool.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::TypeNotRegistered`] if the catalog is closed and
    ///   does not list `type_tag`.
    /// - [`GatewayError::InvalidRequest`] if `capacity` is zero or above the
    ///   configured ceiling.
    /// - [`GatewayError::PoolAlreadyExists`] if the name is taken.
    pub async fn create_pool(
        &self,
        name: PoolName,
        type_tag: TypeTag,
        capacity: Option<usize>,
    ) -> Result<PoolSummary, GatewayError> {
        self.catalog.ensure_registered(&type_tag)?;
        let capacity = self.resolve_capacity(capacity)?;

        let pool = Pool::new(name, type_tag, Some(capacity));
        let summary = self.registry.insert(pool).await.inspect_err(|err| {
            tracing::warn!(error = %err, "pool creation rejected");
        })?;

        tracing::info!(
            pool_name = %summary.pool_name,
            type_tag = %summary.type_tag,
            capacity,
            "pool created"
        );
        Ok(summary)
    }

    /// Appends an object to a pool and returns the new size.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::PoolNotFound`] if the pool does not exist.
    /// - [`GatewayError::TypeMismatch`] if the object's tag differs from the
    ///   pool's.
    /// - [`GatewayError::CapacityExceeded`] if the pool is full.
    pub async fn add_object(
        &self,
        name: &PoolName,
        object: TypedObject,
    ) -> Result<usize, GatewayError> {
        let pool_lock = self.registry.get(name).await?;
        let mut pool = pool_lock.write().await;

        let size = pool.push(object).inspect_err(|err| {
            tracing::warn!(pool_name = %name, error = %err, "object rejected");
        })?;

        tracing::info!(pool_name = %name, size, "object added");
        Ok(size)
    }

    /// Removes one object from a pool.
    ///
    /// By value, the first equal object is removed. Remaining objects keep
    /// their order.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::PoolNotFound`] if the pool does not exist.
    /// - [`GatewayError::ObjectNotFound`] if no matching object (or no object
    ///   at the index) is present.
    pub async fn remove_object(
        &self,
        name: &PoolName,
        target: &RemoveTarget,
    ) -> Result<Removal, GatewayError> {
        let pool_lock = self.registry.get(name).await?;
        let mut pool = pool_lock.write().await;

        let removed = match target {
            RemoveTarget::Value(object) => pool.remove_first(object),
            RemoveTarget::Index(index) => pool.remove_at(*index),
        }
        .inspect_err(|err| {
            tracing::warn!(pool_name = %name, error = %err, "removal rejected");
        })?;

        let size = pool.len();
        tracing::info!(pool_name = %name, size, "object removed");
        Ok(Removal { removed, size })
    }

    /// Picks one object from a pool uniformly at random.
    ///
    /// The pool is only read-locked and never modified.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::PoolNotFound`] if the pool does not exist.
    /// - [`GatewayError::EmptyPool`] if the pool holds no objects.
    pub async fn random_object(&self, name: &PoolName) -> Result<TypedObject, GatewayError> {
        let pool_lock = self.registry.get(name).await?;
        let pool = pool_lock.read().await;

        let picked = pool.choose(&mut rand::rng())?.clone();
        tracing::debug!(pool_name = %name, size = pool.len(), "random object selected");
        Ok(picked)
    }

    /// Returns the metadata of one pool.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PoolNotFound`] if the pool does not exist.
    pub async fn describe_pool(&self, name: &PoolName) -> Result<PoolSummary, GatewayError> {
        let pool_lock = self.registry.get(name).await?;
        let pool = pool_lock.read().await;
        Ok(PoolSummary::from(&*pool))
    }

    /// Returns summaries of all pools sorted by name.
    pub async fn list_pools(&self) -> Vec<PoolSummary> {
        self.registry.list().await
    }

    fn resolve_capacity(&self, requested: Option<usize>) -> Result<usize, GatewayError> {
        match requested {
            None => Ok(self.max_pool_size),
            Some(0) => Err(GatewayError::InvalidRequest(
                "capacity must be at least 1".to_string(),
            )),
            Some(cap) if cap > self.max_pool_size => Err(GatewayError::InvalidRequest(format!(
                "capacity {cap} exceeds maximum pool size {}",
                self.max_pool_size
            ))),
            Some(cap) => Ok(cap),
        }
    }
}
