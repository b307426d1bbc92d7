//! # pool-registry-gateway
//!
//! REST gateway for named, typed, in-memory object pools.
//!
//! Clients create pools that declare a type tag and an optional capacity,
//! append tagged objects, remove them by value or position, and draw a
//! uniformly random member. State lives in process memory only.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PoolService (service/)
//!     │
//!     ├── PoolRegistry (domain/)
//!     └── Pool, TypedObject, TypeCatalog (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
