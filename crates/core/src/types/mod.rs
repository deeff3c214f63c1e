//! Core types for GoMarket.
//!
//! This module provides type-safe wrappers for common cart domain concepts.

pub mod id;
pub mod line_item;
pub mod price;
pub mod snapshot;

pub use id::ProductId;
pub use line_item::{CartLineInput, LineItem};
pub use price::Price;
pub use snapshot::CartSnapshot;
