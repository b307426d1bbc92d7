//! Concurrent pool storage with per-pool fine-grained locking.
//!
//! [`PoolRegistry`] stores all pools in a `HashMap` where each entry is
//! individually protected by a [`tokio::sync::RwLock`]. This allows
//! concurrent reads on the same pool and concurrent writes on different
//! pools.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::PoolName;
use super::pool::{Pool, PoolSummary};
use crate::error::GatewayError;

/// Central store for all object pools.
///
/// Uses a `RwLock<HashMap<...>>` for the outer map and per-entry
/// `Arc<RwLock<Pool>>` for fine-grained per-pool locking.
///
/// # Concurrency
///
/// - Multiple tasks may read the same pool concurrently.
/// - Writes to different pools are concurrent.
/// - Writes to the same pool are serialized.
#[derive(Debug)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolName, Arc<RwLock<Pool>>>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new pool, returning its summary.
    ///
    /// The existence check and the insert happen under one write lock, so
    /// of two racing inserts with the same name exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PoolAlreadyExists`] if a pool with the same
    /// name is already registered. The existing pool is left untouched.
    pub async fn insert(&self, pool: Pool) -> Result<PoolSummary, GatewayError> {
        let mut map = self.pools.write().await;
        if map.contains_key(&pool.name) {
            return Err(GatewayError::PoolAlreadyExists(pool.name.to_string()));
        }
        let summary = PoolSummary::from(&pool);
        map.insert(pool.name.clone(), Arc::new(RwLock::new(pool)));
        Ok(summary)
    }

    /// Returns a shared reference to the pool behind a per-pool lock.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PoolNotFound`] if no pool with the given name
    /// exists.
    pub async fn get(&self, name: &PoolName) -> Result<Arc<RwLock<Pool>>, GatewayError> {
        let map = self.pools.read().await;
        map.get(name)
            .cloned()
            .ok_or_else(|| GatewayError::PoolNotFound(name.to_string()))
    }

    /// Returns summaries of all pools sorted by name.
    pub async fn list(&self) -> Vec<PoolSummary> {
        let map = self.pools.read().await;
        let mut summaries = Vec::with_capacity(map.len());
        for pool_lock in map.values() {
            let pool = pool_lock.read().await;
            summaries.push(PoolSummary::from(&*pool));
        }
        summaries.sort_by(|a, b| a.pool_name.cmp(&b.pool_name));
        summaries
    }

    /// Returns the number of pools in the registry.
    pub async fn len(&self) -> usize {
        self.pools.read().await.len()
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{TypeTag, TypedObject};
    use serde_json::json;

    fn name(raw: &str) -> PoolName {
        let Ok(name) = PoolName::parse(raw) else {
            panic!("valid name");
        };
        name
    }

    fn make_pool(raw: &str) -> Pool {
        let Ok(tag) = TypeTag::parse("int") else {
            panic!("valid tag");
        };
        Pool::new(name(raw), tag, Some(4))
    }

    #[tokio::test]
    async fn insert_and_get() {
        let registry = PoolRegistry::new();
        let result = registry.insert(make_pool("nums")).await;
        let Ok(summary) = result else {
            panic!("insert failed");
        };
        assert_eq!(summary.size, 0);
        assert_eq!(summary.capacity, Some(4));

        assert!(registry.get(&name("nums")).await.is_ok());
    }

    #[tokio::test]
    async fn get_nonexistent_returns_error() {
        let registry = PoolRegistry::new();
        let result = registry.get(&name("missing")).await;
        assert!(matches!(result, Err(GatewayError::PoolNotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_insert_keeps_original() {
        let registry = PoolRegistry::new();
        let _ = registry.insert(make_pool("nums")).await;

        let Ok(lock) = registry.get(&name("nums")).await else {
            panic!("pool missing");
        };
        let Ok(tag) = TypeTag::parse("int") else {
            panic!("valid tag");
        };
        let _ = lock.write().await.push(TypedObject::new(tag, json!(7)));

        let result = registry.insert(make_pool("nums")).await;
        assert_eq!(
            result,
            Err(GatewayError::PoolAlreadyExists("nums".to_string()))
        );
        assert_eq!(lock.read().await.len(), 1);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let registry = PoolRegistry::new();
        let _ = registry.insert(make_pool("socks")).await;
        let _ = registry.insert(make_pool("nums")).await;

        let names: Vec<String> = registry
            .list()
            .await
            .into_iter()
            .map(|s| s.pool_name.to_string())
            .collect();
        assert_eq!(names, vec!["nums".to_string(), "socks".to_string()]);
    }

    #[tokio::test]
    async fn len_counts_pools() {
        let registry = PoolRegistry::new();
        assert_eq!(registry.len().await, 0);

        let _ = registry.insert(make_pool("nums")).await;
        let _ = registry.insert(make_pool("socks")).await;
        assert_eq!(registry.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_one_name_yield_one_success() {
        let registry = Arc::new(PoolRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.insert(make_pool("race")).await.is_ok()
            }));
        }
        let mut successes = 0;
        for handle in handles {
            if let Ok(true) = handle.await {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }
}
