//! Catalog of type tags that pools may be created with.

use std::collections::BTreeSet;

use super::TypeTag;
use crate::error::GatewayError;

/// Allow-list of type tags.
///
/// An *open* catalog accepts any tag. A *closed* catalog only accepts the
/// tags it was built with.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    registered: Option<BTreeSet<TypeTag>>,
}

impl TypeCatalog {
    /// Catalog that accepts every type tag.
    #[must_use]
    pub const fn open() -> Self {
        Self { registered: None }
    }

    /// Catalog restricted to the given tags.
    #[must_use]
    pub fn closed(tags: impl IntoIterator<Item = TypeTag>) -> Self {
        Self {
            registered: Some(tags.into_iter().collect()),
        }
    }

    /// Builds a catalog from a comma-separated list such as
    /// `"shirt,pants,sock"`. A blank list yields an open catalog.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if an entry is too long to be
    /// a type tag.
    pub fn from_list(raw: &str) -> Result<Self, GatewayError> {
        let tags = raw
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(TypeTag::parse)
            .collect::<Result<BTreeSet<_>, _>>()?;
        if tags.is_empty() {
            Ok(Self::open())
        } else {
            Ok(Self { registered: Some(tags) })
        }
    }

    /// Returns `true` if any tag is accepted.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.registered.is_none()
    }

    /// Returns `true` if pools may be created with `tag`.
    #[must_use]
    pub fn accepts(&self, tag: &TypeTag) -> bool {
        self.registered.as_ref().is_none_or(|set| set.contains(tag))
    }

    /// Fails unless pools may be created with `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::TypeNotRegistered`] for a tag missing from a
    /// closed catalog.
    pub fn ensure_registered(&self, tag: &TypeTag) -> Result<(), GatewayError> {
        if self.accepts(tag) {
            Ok(())
        } else {
            Err(GatewayError::TypeNotRegistered(tag.to_string()))
        }
    }

    /// Registered tags in sorted order; empty for an open catalog.
    pub fn tags(&self) -> impl Iterator<Item = &TypeTag> {
        self.registered.iter().flatten()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn tag(raw: &str) -> TypeTag {
        let Ok(tag) = TypeTag::parse(raw) else {
            panic!("valid tag");
        };
        tag
    }

    #[test]
    fn open_catalog_accepts_anything() {
        let catalog = TypeCatalog::open();
        assert!(catalog.is_open());
        assert!(catalog.ensure_registered(&tag("whatever")).is_ok());
        assert_eq!(catalog.tags().count(), 0);
    }

    #[test]
    fn closed_catalog_rejects_unknown_tags() {
        let catalog = TypeCatalog::closed([tag("shirt"), tag("sock")]);
        assert!(!catalog.is_open());
        assert!(catalog.accepts(&tag("shirt")));
        assert_eq!(
            catalog.ensure_registered(&tag("hat")),
            Err(GatewayError::TypeNotRegistered("hat".to_string()))
        );
    }

    #[test]
    fn from_list_parses_and_sorts() {
        let Ok(catalog) = TypeCatalog::from_list(" sock, shirt ,,pants") else {
            panic!("valid list");
        };
        let tags: Vec<&str> = catalog.tags().map(TypeTag::as_str).collect();
        assert_eq!(tags, vec!["pants", "shirt", "sock"]);
    }

    #[test]
    fn blank_list_is_open() {
        let Ok(catalog) = TypeCatalog::from_list(" , ") else {
            panic!("valid list");
        };
        assert!(catalog.is_open());
    }
}
