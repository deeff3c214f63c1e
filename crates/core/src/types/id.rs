//! Newtype ID for type-safe product references.
//!
//! Product identifiers arrive from outside the system as opaque strings, so
//! the wrapper carries a `String` rather than a numeric key. The wrapper
//! prevents accidentally passing an arbitrary string where a product
//! reference is expected.

use serde::{Deserialize, Serialize};

/// Type-safe identifier for a product.
///
/// Serializes transparently as the underlying string, so the persisted cart
/// encoding keeps a plain `"id"` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    ///
    /// Callers are expected to supply non-empty IDs; an empty ID is still
    /// processed by the usual keyed-on-id rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
