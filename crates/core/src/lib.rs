//! GoMarket Core - Shared types library.
//!
//! This crate provides the common types used across all GoMarket components:
//! - `cart` - Persisted cart state manager
//! - `integration-tests` - Workspace-level integration tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! channels. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and prices, cart line items, and
//!   the cart snapshot with its pure mutation operations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
