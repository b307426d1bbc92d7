//! Pool-related DTOs for create and describe operations.

use serde::{Deserialize, Serialize};

use crate::domain::{PoolName, PoolSummary, TypeTag};
use crate::error::GatewayError;

/// Request body for `POST /create_object_pool/`.
#[derive(Debug, Deserialize)]
pub struct CreatePoolRequest {
    /// Unique pool name (max 100 chars).
    pub pool_name: String,
    /// Type tag every object in the pool must carry. Required.
    #[serde(default)]
    pub type_tag: Option<String>,
    /// Optional capacity; defaults to the configured maximum pool size.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl CreatePoolRequest {
    /// Validates the name and type tag.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the type tag is missing or
    /// either field fails validation.
    pub fn parse(&self) -> Result<(PoolName, TypeTag), GatewayError> {
        let name = PoolName::parse(&self.pool_name)?;
        let raw_tag = self
            .type_tag
            .as_deref()
            .ok_or_else(|| GatewayError::InvalidRequest("type_tag is required".to_string()))?;
        Ok((name, TypeTag::parse(raw_tag)?))
    }
}

/// Response body for `POST /create_object_pool/` (201 Created) and
/// `GET /pools/{name}`.
#[derive(Debug, Serialize)]
pub struct PoolResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Pool metadata.
    #[serde(flatten)]
    pub pool: PoolSummary,
}
