//! Object pool: a named, typed, capacity-bounded ordered sequence.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::{PoolName, TypeTag, TypedObject};
use crate::error::GatewayError;

/// A pool of objects sharing one declared type tag.
///
/// Each pool in the registry is stored as a `Pool` behind its own lock.
/// Every mutating method validates first and mutates last, so a rejected
/// call never leaves the pool half-changed.
///
/// # Invariants
///
/// - Every contained object carries [`Pool::type_tag`].
/// - `len() <= capacity` whenever a capacity is set.
#[derive(Debug)]
pub struct Pool {
    /// Unique pool name (immutable after creation).
    pub name: PoolName,

    /// Declared type tag (immutable after creation).
    pub type_tag: TypeTag,

    /// Maximum number of objects, or `None` for unbounded.
    pub capacity: Option<usize>,

    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last successful mutation.
    pub last_modified_at: DateTime<Utc>,

    objects: Vec<TypedObject>,
}

impl Pool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new(name: PoolName, type_tag: TypeTag, capacity: Option<usize>) -> Self {
        let now = Utc::now();
        Self {
            name,
            type_tag,
            capacity,
            created_at: now,
            last_modified_at: now,
            objects: Vec::new(),
        }
    }

    /// Number of objects currently in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no further object can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.objects.len() >= cap)
    }

    /// Appends an object and returns the new size.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::TypeMismatch`] if the object's tag differs from the
    ///   pool's.
    /// - [`GatewayError::CapacityExceeded`] if the pool is full.
    pub fn push(&mut self, object: TypedObject) -> Result<usize, GatewayError> {
        if !object.has_type(&self.type_tag) {
            return Err(GatewayError::TypeMismatch {
                expected: self.type_tag.to_string(),
                actual: object.type_tag.to_string(),
            });
        }
        if self.is_full() {
            return Err(GatewayError::CapacityExceeded {
                pool: self.name.to_string(),
                capacity: self.capacity.unwrap_or_default(),
            });
        }
        self.objects.push(object);
        self.touch();
        Ok(self.objects.len())
    }

    /// Removes the first object equal to `object`, preserving the order of
    /// the rest.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ObjectNotFound`] if no equal object is present.
    pub fn remove_first(&mut self, object: &TypedObject) -> Result<TypedObject, GatewayError> {
        let index = self
            .objects
            .iter()
            .position(|candidate| candidate == object)
            .ok_or_else(|| GatewayError::ObjectNotFound(self.name.to_string()))?;
        self.remove_at(index)
    }

    /// Removes the object at `index`, preserving the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ObjectNotFound`] if `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Result<TypedObject, GatewayError> {
        if index >= self.objects.len() {
            return Err(GatewayError::ObjectNotFound(self.name.to_string()));
        }
        let removed = self.objects.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Picks one object uniformly at random without modifying the pool.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::EmptyPool`] if the pool holds no objects.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&TypedObject, GatewayError> {
        self.objects
            .choose(rng)
            .ok_or_else(|| GatewayError::EmptyPool(self.name.to_string()))
    }

    fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }
}

/// Pool metadata returned by create and describe endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSummary {
    /// Pool name.
    pub pool_name: PoolName,
    /// Declared type tag.
    pub type_tag: TypeTag,
    /// Capacity, if bounded.
    pub capacity: Option<usize>,
    /// Current number of objects.
    pub size: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub last_modified_at: DateTime<Utc>,
}

impl From<&Pool> for PoolSummary {
    fn from(pool: &Pool) -> Self {
        Self {
            pool_name: pool.name.clone(),
            type_tag: pool.type_tag.clone(),
            capacity: pool.capacity,
            size: pool.len(),
            created_at: pool.created_at,
            last_modified_at: pool.last_modified_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag(raw: &str) -> TypeTag {
        let Ok(tag) = TypeTag::parse(raw) else {
            panic!("valid tag");
        };
        tag
    }

    fn make_pool(capacity: Option<usize>) -> Pool {
        let Ok(name) = PoolName::parse("nums") else {
            panic!("valid name");
        };
        Pool::new(name, tag("int"), capacity)
    }

    fn int(value: i64) -> TypedObject {
        TypedObject::new(tag("int"), json!(value))
    }

    fn values(pool: &Pool) -> Vec<serde_json::Value> {
        pool.objects.iter().map(|o| o.value.clone()).collect()
    }

    #[test]
    fn push_appends_in_order() {
        let mut pool = make_pool(None);
        assert_eq!(pool.push(int(1)), Ok(1));
        assert_eq!(pool.push(int(2)), Ok(2));
        assert_eq!(values(&pool), vec![json!(1), json!(2)]);
    }

    #[test]
    fn type_mismatch_leaves_size_unchanged() {
        let mut pool = make_pool(None);
        let _ = pool.push(int(1));
        let result = pool.push(TypedObject::new(tag("str"), json!("1")));
        assert!(matches!(result, Err(GatewayError::TypeMismatch { .. })));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut pool = make_pool(Some(2));
        assert!(pool.push(int(1)).is_ok());
        assert!(pool.push(int(2)).is_ok());
        assert!(pool.is_full());

        let result = pool.push(int(3));
        assert_eq!(
            result,
            Err(GatewayError::CapacityExceeded {
                pool: "nums".to_string(),
                capacity: 2,
            })
        );
        assert_eq!(values(&pool), vec![json!(1), json!(2)]);
    }

    #[test]
    fn type_is_checked_before_capacity() {
        let mut pool = make_pool(Some(0));
        let result = pool.push(TypedObject::new(tag("str"), json!("x")));
        assert!(matches!(result, Err(GatewayError::TypeMismatch { .. })));
    }

    #[test]
    fn remove_first_removes_only_first_match() {
        let mut pool = make_pool(None);
        for v in [1, 2, 1, 3] {
            let _ = pool.push(int(v));
        }
        let Ok(removed) = pool.remove_first(&int(1)) else {
            panic!("object should be present");
        };
        assert_eq!(removed, int(1));
        assert_eq!(values(&pool), vec![json!(2), json!(1), json!(3)]);
    }

    #[test]
    fn remove_absent_object_fails() {
        let mut pool = make_pool(None);
        let _ = pool.push(int(1));
        let result = pool.remove_first(&int(9));
        assert!(matches!(result, Err(GatewayError::ObjectNotFound(_))));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn remove_at_preserves_order() {
        let mut pool = make_pool(None);
        for v in [1, 2, 3] {
            let _ = pool.push(int(v));
        }
        assert_eq!(pool.remove_at(1), Ok(int(2)));
        assert_eq!(values(&pool), vec![json!(1), json!(3)]);
        assert!(matches!(
            pool.remove_at(2),
            Err(GatewayError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn choose_returns_member() {
        let mut pool = make_pool(None);
        for v in [1, 2, 3] {
            let _ = pool.push(int(v));
        }
        let mut rng = rand::rng();
        for _ in 0..50 {
            let Ok(picked) = pool.choose(&mut rng) else {
                panic!("pool is non-empty");
            };
            assert!(pool.objects.contains(picked));
        }
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn choose_on_empty_pool_fails() {
        let pool = make_pool(None);
        let mut rng = rand::rng();
        assert!(matches!(
            pool.choose(&mut rng),
            Err(GatewayError::EmptyPool(_))
        ));
    }

    #[test]
    fn summary_reflects_state() {
        let mut pool = make_pool(Some(5));
        let _ = pool.push(int(1));
        let summary = PoolSummary::from(&pool);
        assert_eq!(summary.pool_name.as_str(), "nums");
        assert_eq!(summary.capacity, Some(5));
        assert_eq!(summary.size, 1);
    }
}
