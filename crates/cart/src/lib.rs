//! GoMarket Cart - Persisted cart state manager.
//!
//! Holds the current [`CartSnapshot`] in memory, loads the persisted
//! snapshot once at startup, applies add/increment/decrement mutations, and
//! writes every mutation's resulting snapshot to durable storage. Consumers
//! observe the snapshot reactively through a watch channel.
//!
//! # Architecture
//!
//! - [`storage`] - The durable key-value collaborator: a [`Storage`] trait
//!   with in-memory and file-backed implementations
//! - [`store`] - [`CartStore`]: the single owner and sole writer of the
//!   snapshot
//! - [`provider`] - [`CartProvider`]/[`CartHandle`]: the scoped capability
//!   set handed to consumers
//! - [`error`] - Unified [`CartError`] taxonomy
//!
//! # Example
//!
//! ```rust
//! use gomarket_cart::{CartProvider, MemoryStorage};
//! use gomarket_core::{CartLineInput, Price, ProductId};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gomarket_cart::CartError> {
//! let provider = CartProvider::new(MemoryStorage::new());
//! provider.initialize().await?;
//!
//! let cart = provider.cart();
//! cart.add_to_cart(CartLineInput {
//!     id: ProductId::new("shirt-1"),
//!     title: "Shirt".to_string(),
//!     image_url: "https://img.example/shirt.png".to_string(),
//!     price: Price::from_cents(1000),
//! })
//! .await?;
//!
//! assert_eq!(cart.snapshot()?.total_quantity(), 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod provider;
pub mod storage;
pub mod store;

pub use error::{CartError, Result};
pub use provider::{CartHandle, CartProvider};
pub use storage::{CART_STORAGE_KEY, FileStorage, MemoryStorage, Storage, StorageError};
pub use store::CartStore;
