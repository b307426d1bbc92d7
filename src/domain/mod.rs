//! Domain layer: pool names, typed objects, pools, and the pool registry.
//!
//! This module contains the server-side domain model: validated identifiers,
//! the tagged object representation, the capacity-bounded [`Pool`], the
//! [`TypeCatalog`] of allowed type tags, and the [`PoolRegistry`] for
//! concurrent pool storage.

pub mod pool;
pub mod pool_name;
pub mod pool_registry;
pub mod type_catalog;
pub mod typed_object;

pub use pool::{Pool, PoolSummary};
pub use pool_name::{PoolName, TypeTag};
pub use pool_registry::PoolRegistry;
pub use type_catalog::TypeCatalog;
pub use typed_object::TypedObject;
