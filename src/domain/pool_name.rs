//! Validated pool name and type tag newtypes.
//!
//! [`PoolName`] keys the [`super::PoolRegistry`]; [`TypeTag`] is the label a
//! pool declares at creation and every added object must carry.

use std::fmt;

use serde::Serialize;

use crate::error::GatewayError;

/// Maximum length of a pool name, in characters.
pub const MAX_POOL_NAME_LEN: usize = 100;

/// Maximum length of a type tag, in characters.
pub const MAX_TYPE_TAG_LEN: usize = 64;

/// Unique name of an object pool.
///
/// Surrounding whitespace is trimmed; the result must be non-empty and at
/// most [`MAX_POOL_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PoolName(String);

impl PoolName {
    /// Validates and wraps a pool name.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the name is blank or too
    /// long.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        validate(raw, "pool_name", MAX_POOL_NAME_LEN).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type label declared by a pool and asserted by every object added to it.
///
/// Compared exactly: `"Int"` and `"int"` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    /// Validates and wraps a type tag.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the tag is blank or too
    /// long.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        validate(raw, "type_tag", MAX_TYPE_TAG_LEN).map(Self)
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate(raw: &str, field: &str, max_len: usize) -> Result<String, GatewayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::InvalidRequest(format!(
            "{field} must not be empty"
        )));
    }
    if trimmed.chars().count() > max_len {
        return Err(GatewayError::InvalidRequest(format!(
            "{field} exceeds {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let Ok(name) = PoolName::parse("  nums ") else {
            panic!("valid name");
        };
        assert_eq!(name.as_str(), "nums");
        assert_eq!(format!("{name}"), "nums");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            PoolName::parse("   "),
            Err(GatewayError::InvalidRequest(_))
        ));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let raw = "x".repeat(MAX_POOL_NAME_LEN + 1);
        assert!(PoolName::parse(&raw).is_err());
        let raw = "x".repeat(MAX_POOL_NAME_LEN);
        assert!(PoolName::parse(&raw).is_ok());
    }

    #[test]
    fn type_tags_are_case_sensitive() {
        let (Ok(lower), Ok(upper)) = (TypeTag::parse("int"), TypeTag::parse("Int")) else {
            panic!("valid tags");
        };
        assert_ne!(lower, upper);
    }

    #[test]
    fn blank_type_tag_is_rejected() {
        assert!(TypeTag::parse("").is_err());
    }
}
