//! Object DTOs for add, remove, and random-select operations.

use serde::{Deserialize, Serialize};

use crate::domain::{PoolName, TypeTag, TypedObject};
use crate::error::GatewayError;
use crate::service::RemoveTarget;

/// Wire form of a tagged object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDto {
    /// Type tag asserted for the value.
    pub type_tag: String,
    /// Arbitrary JSON value.
    pub value: serde_json::Value,
}

impl TryFrom<ObjectDto> for TypedObject {
    type Error = GatewayError;

    fn try_from(dto: ObjectDto) -> Result<Self, Self::Error> {
        Ok(Self::new(TypeTag::parse(&dto.type_tag)?, dto.value))
    }
}

impl From<TypedObject> for ObjectDto {
    fn from(object: TypedObject) -> Self {
        Self {
            type_tag: object.type_tag.to_string(),
            value: object.value,
        }
    }
}

/// Request body for `POST /add_object_to_pool/`.
#[derive(Debug, Deserialize)]
pub struct AddObjectRequest {
    /// Target pool name.
    pub pool_name: String,
    /// Object to append.
    pub object: ObjectDto,
}

/// Response body for `POST /add_object_to_pool/`.
#[derive(Debug, Serialize)]
pub struct AddObjectResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Target pool name.
    pub pool_name: PoolName,
    /// Pool size after the add.
    pub size: usize,
}

/// Request body for `DELETE /remove/`.
///
/// Exactly one of `object` and `index` must be set.
#[derive(Debug, Deserialize)]
pub struct RemoveObjectRequest {
    /// Target pool name.
    pub pool_name: String,
    /// Remove the first object equal to this one.
    #[serde(default)]
    pub object: Option<ObjectDto>,
    /// Remove the object at this zero-based position.
    #[serde(default)]
    pub index: Option<usize>,
}

impl RemoveObjectRequest {
    /// Validates the request into a pool name and removal target.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the name or object tag is
    /// invalid, or if not exactly one of `object` / `index` is given.
    pub fn parse(self) -> Result<(PoolName, RemoveTarget), GatewayError> {
        let name = PoolName::parse(&self.pool_name)?;
        let target = match (self.object, self.index) {
            (Some(object), None) => RemoveTarget::Value(object.try_into()?),
            (None, Some(index)) => RemoveTarget::Index(index),
            _ => {
                return Err(GatewayError::InvalidRequest(
                    "exactly one of `object` or `index` is required".to_string(),
                ));
            }
        };
        Ok((name, target))
    }
}

/// Response body for `DELETE /remove/`.
#[derive(Debug, Serialize)]
pub struct RemoveObjectResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Target pool name.
    pub pool_name: PoolName,
    /// Pool size after the removal.
    pub size: usize,
    /// The removed object.
    pub removed: ObjectDto,
}

/// Query parameters for `GET /random/`.
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Pool to select from.
    pub pool_name: String,
}

/// Response body for `GET /random/`.
#[derive(Debug, Serialize)]
pub struct RandomObjectResponse {
    /// Pool the object was selected from.
    pub pool_name: PoolName,
    /// The selected object.
    pub object: ObjectDto,
}
