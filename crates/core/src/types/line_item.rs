//! Cart line item types.
//!
//! A [`LineItem`] is one product entry in the cart together with how many
//! units of it are in the cart. A [`CartLineInput`] is the caller-supplied
//! candidate for `add_to_cart`: the same fields minus the quantity, which the
//! cart itself manages.
//!
//! Field names (`image_url` in particular) are part of the persisted wire
//! format and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a snapshot.
    pub id: ProductId,
    /// Product display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
    /// Units of this product in the cart. Never negative by construction.
    pub quantity: u32,
}

/// Candidate item for `add_to_cart`: a line item without a quantity.
///
/// If the product is already in the cart, only `id` is consulted and the
/// remaining fields are ignored; otherwise all fields seed the new line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineInput {
    /// Product identifier. Expected to be non-empty.
    pub id: ProductId,
    /// Product display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price.
    pub price: Price,
}

impl CartLineInput {
    /// Turn the input into a line item with the given quantity.
    #[must_use]
    pub fn into_line_item(self, quantity: u32) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}
