//! Provider scope for the cart capability set.
//!
//! Consumers never hold the [`CartStore`] directly. A [`CartProvider`] owns
//! the store for the lifetime of the enclosing application context and hands
//! out [`CartHandle`]s - the capability set of snapshot read, subscribe,
//! `add_to_cart`, `increment`, and `decrement`. A handle used after its
//! provider has been dropped fails loudly with [`CartError::ScopeExpired`]
//! instead of silently operating on a dead cart.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

use gomarket_core::{CartLineInput, CartSnapshot, ProductId};

use crate::error::{CartError, Result};
use crate::storage::Storage;
use crate::store::CartStore;

/// Owner of the cart store for one application session.
///
/// Construct once at startup, call [`initialize`](Self::initialize) once, and
/// pass [`CartHandle`]s to whatever needs cart access. Dropping the provider
/// ends the scope: outstanding handles start failing with
/// [`CartError::ScopeExpired`].
#[derive(Debug)]
pub struct CartProvider {
    store: Arc<CartStore>,
}

impl CartProvider {
    /// Create a provider over the given storage backend.
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            store: Arc::new(CartStore::new(storage)),
        }
    }

    /// Create a provider over a shared storage backend.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            store: Arc::new(CartStore::with_storage(storage)),
        }
    }

    /// Load the persisted snapshot. Call once, at startup.
    ///
    /// # Errors
    ///
    /// See [`CartStore::initialize`].
    pub async fn initialize(&self) -> Result<()> {
        self.store.initialize().await
    }

    /// Hand out the cart capability set.
    ///
    /// Handles are cheap to clone and remain valid only while the provider
    /// is alive.
    #[must_use]
    pub fn cart(&self) -> CartHandle {
        CartHandle {
            store: Arc::downgrade(&self.store),
        }
    }
}

/// The cart capability set handed to consumers.
///
/// Every operation fails with [`CartError::ScopeExpired`] once the owning
/// [`CartProvider`] has been dropped.
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Weak<CartStore>,
}

impl CartHandle {
    fn store(&self) -> Result<Arc<CartStore>> {
        self.store.upgrade().ok_or(CartError::ScopeExpired)
    }

    /// Clone of the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ScopeExpired`] outside an active provider scope.
    pub fn snapshot(&self) -> Result<CartSnapshot> {
        Ok(self.store()?.snapshot())
    }

    /// Subscribe to snapshot changes.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ScopeExpired`] outside an active provider scope.
    pub fn subscribe(&self) -> Result<watch::Receiver<CartSnapshot>> {
        Ok(self.store()?.subscribe())
    }

    /// Add a candidate item to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ScopeExpired`] outside an active provider scope,
    /// otherwise the [`CartStore::add_to_cart`] contract applies.
    pub async fn add_to_cart(&self, input: CartLineInput) -> Result<()> {
        self.store()?.add_to_cart(input).await
    }

    /// Increase the quantity of the line item matching `id` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ScopeExpired`] outside an active provider scope,
    /// otherwise the [`CartStore::increment`] contract applies.
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.store()?.increment(id).await
    }

    /// Decrease the quantity of the line item matching `id` by one, flooring
    /// at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ScopeExpired`] outside an active provider scope,
    /// otherwise the [`CartStore::decrement`] contract applies.
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.store()?.decrement(id).await
    }
}
