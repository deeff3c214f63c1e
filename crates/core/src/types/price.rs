//! Type-safe price representation using decimal arithmetic.
//!
//! The persisted cart encoding stores prices as plain JSON numbers, so this
//! wrapper serializes transparently via `rust_decimal`'s float serde rather
//! than as an amount/currency object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price for a product.
///
/// Decimal-backed to keep arithmetic (e.g. subtotal derivation) exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
