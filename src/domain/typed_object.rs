//! Tagged object values stored in pools.

use serde::Serialize;
use serde_json::Value;

use super::TypeTag;

/// An opaque JSON value paired with the type tag asserted for it.
///
/// Objects have no identity beyond their tag, value, and position in the
/// owning pool. Equality compares both tag and value; JSON numbers compare
/// by numeric value, so `1` and `1.0` are the same object.
#[derive(Debug, Clone, Serialize)]
pub struct TypedObject {
    /// Type tag asserted by the client at insertion time.
    pub type_tag: TypeTag,
    /// Arbitrary JSON payload.
    pub value: Value,
}

impl PartialEq for TypedObject {
    fn eq(&self, other: &Self) -> bool {
        self.type_tag == other.type_tag && values_match(&self.value, &other.value)
    }
}

impl Eq for TypedObject {}

/// Structural JSON equality with numbers compared by value.
#[allow(clippy::float_cmp)]
fn values_match(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_f64() || y.is_f64() {
                x.as_f64() == y.as_f64()
            } else {
                x == y
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_match(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_match(x, y)))
        }
        _ => a == b,
    }
}

impl TypedObject {
    /// Creates a new tagged object.
    #[must_use]
    pub const fn new(type_tag: TypeTag, value: Value) -> Self {
        Self { type_tag, value }
    }

    /// Returns `true` if this object carries the given type tag.
    #[must_use]
    pub fn has_type(&self, tag: &TypeTag) -> bool {
        self.type_tag == *tag
    }
}
