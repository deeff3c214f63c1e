//! The cart store: sole owner and sole writer of the cart snapshot.
//!
//! The current [`CartSnapshot`] lives inside a `tokio::sync::watch` channel.
//! Every mutation applies its pure snapshot operation synchronously (so
//! back-to-back mutations are applied in call order and observers see the
//! new state immediately), then awaits the durable write of the resulting
//! encoding.
//!
//! # Persistence contract
//!
//! The in-memory update is optimistic: by the time a durable-write failure
//! is reported, observers have already seen the new snapshot, and it is not
//! rolled back. Writes are not queued; two mutations issued back-to-back may
//! complete their durable writes in either order, and the last write to
//! complete wins durably.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use gomarket_core::{CartLineInput, CartSnapshot, ProductId};

use crate::error::{CartError, Result};
use crate::storage::{CART_STORAGE_KEY, Storage};

/// Persisted cart state manager.
///
/// One instance is expected to exist per running application session,
/// normally owned by a [`crate::CartProvider`].
pub struct CartStore {
    storage: Arc<dyn Storage>,
    snapshot_tx: watch::Sender<CartSnapshot>,
    initialized: AtomicBool,
}

impl CartStore {
    /// Create a store with an empty snapshot over the given storage backend.
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_storage(Arc::new(storage))
    }

    /// Create a store over a shared storage backend.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        let (snapshot_tx, _) = watch::channel(CartSnapshot::new());
        Self {
            storage,
            snapshot_tx,
            initialized: AtomicBool::new(false),
        }
    }

    /// Load the persisted snapshot, once per process.
    ///
    /// - No persisted value: the snapshot stays empty.
    /// - Persisted value decodes: the snapshot is replaced and observers are
    ///   notified.
    /// - Persisted value is malformed: the snapshot stays empty and the
    ///   decode error is logged and returned.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::AlreadyInitialized`] on a second call (the load
    /// step is never retried), [`CartError::Storage`] if the read fails, or
    /// [`CartError::Decode`] if the blob is malformed.
    pub async fn initialize(&self) -> Result<()> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(CartError::AlreadyInitialized);
        }

        let Some(encoded) = self.storage.get(CART_STORAGE_KEY).await? else {
            tracing::debug!("No persisted cart found, starting empty");
            return Ok(());
        };

        match serde_json::from_str::<CartSnapshot>(&encoded) {
            Ok(snapshot) => {
                tracing::info!(items = snapshot.len(), "Loaded persisted cart");
                self.snapshot_tx.send_replace(snapshot);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to decode persisted cart, starting empty");
                Err(CartError::Decode(err))
            }
        }
    }

    /// Add a candidate item: increment the existing line item with the same
    /// ID, or append it with quantity one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the durable write fails. The
    /// in-memory snapshot has already been updated and observers notified.
    pub async fn add_to_cart(&self, input: CartLineInput) -> Result<()> {
        self.apply_and_persist(|snapshot| snapshot.add(input)).await
    }

    /// Increase the quantity of the line item matching `id` by one.
    ///
    /// A missing ID leaves the snapshot unchanged, but the snapshot is still
    /// re-persisted and observers are still notified.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::add_to_cart`].
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        self.apply_and_persist(|snapshot| snapshot.increment(id)).await
    }

    /// Decrease the quantity of the line item matching `id` by one, flooring
    /// at zero without removing it.
    ///
    /// A missing ID leaves the snapshot unchanged, but the snapshot is still
    /// re-persisted and observers are still notified.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::add_to_cart`].
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        self.apply_and_persist(|snapshot| snapshot.decrement(id)).await
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver is notified on every mutation, including pass-through
    /// mutations that did not change any quantity.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Apply a pure mutation inside the watch channel (synchronous, notifies
    /// observers), then persist the resulting snapshot.
    async fn apply_and_persist<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut CartSnapshot),
    {
        let mut updated = CartSnapshot::new();
        self.snapshot_tx.send_modify(|snapshot| {
            apply(snapshot);
            updated = snapshot.clone();
        });

        let encoded = serde_json::to_string(&updated)?;
        if let Err(err) = self.storage.set(CART_STORAGE_KEY, &encoded).await {
            tracing::error!(error = %err, "Failed to persist cart snapshot");
            return Err(err.into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.snapshot_tx.borrow().len())
            .field("initialized", &self.initialized.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
