//! Data Transfer Objects for REST request/response serialization.
//!
//! Requests carry raw strings; validation into domain types happens in the
//! `parse` helpers so that failures render as [`crate::error::GatewayError`].

pub mod object_dto;
pub mod pool_dto;

pub use object_dto::*;
pub use pool_dto::*;
