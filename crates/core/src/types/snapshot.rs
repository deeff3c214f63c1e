//! The cart snapshot and its pure mutation operations.
//!
//! A [`CartSnapshot`] is the full ordered set of line items at a point in
//! time. All cart semantics live here as pure in-memory operations; the
//! `gomarket-cart` crate layers persistence and change notification on top.
//!
//! # Invariants
//!
//! - At most one line item per distinct product ID.
//! - Insertion order is preserved: mutated items keep their position, newly
//!   added items are appended at the end.
//! - `decrement` floors at zero and does NOT remove the item. A
//!   quantity-zero line item stays in the cart until the product is added
//!   again. This is a deliberate policy, not a bug.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CartLineInput, LineItem, ProductId};

/// The full ordered set of cart line items at a point in time.
///
/// Serializes transparently as a JSON array of line items; decoding the most
/// recently encoded value reproduces an equivalent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot(Vec<LineItem>);

impl CartSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| &item.id == id)
    }

    /// Number of distinct line items (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart holds no line items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total units across all line items (cart badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.0.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price * quantity` across all line items.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.0
            .iter()
            .map(|item| item.price.amount() * Decimal::from(item.quantity))
            .sum()
    }

    /// Add a candidate item to the cart.
    ///
    /// If a line item with the same ID already exists, its quantity is
    /// incremented by one and the input's remaining fields are ignored (the
    /// existing item keeps its title, image, price, and position). Otherwise
    /// the input is appended at the end with quantity one.
    pub fn add(&mut self, input: CartLineInput) {
        match self.0.iter_mut().find(|item| item.id == input.id) {
            Some(existing) => existing.quantity += 1,
            None => self.0.push(input.into_line_item(1)),
        }
    }

    /// Increase the quantity of every line item matching `id` by one.
    ///
    /// A missing ID leaves the snapshot unchanged; callers still treat the
    /// operation as having produced a (structurally identical) new snapshot.
    pub fn increment(&mut self, id: &ProductId) {
        for item in &mut self.0 {
            if &item.id == id {
                item.quantity += 1;
            }
        }
    }

    /// Decrease the quantity of every line item matching `id` by one,
    /// flooring at zero.
    ///
    /// An item already at quantity zero is left at zero and is not removed.
    /// A missing ID leaves the snapshot unchanged.
    pub fn decrement(&mut self, id: &ProductId) {
        for item in &mut self.0 {
            if &item.id == id && item.quantity != 0 {
                item.quantity -= 1;
            }
        }
    }
}

impl<'a> IntoIterator for &'a CartSnapshot {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
