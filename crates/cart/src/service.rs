//! Cart service: the quantity-update and cache-persistence core.
//!
//! [`CartService`] is a stateless transformer between the current cart
//! snapshot and the next one. Each operation is a short read-modify-write
//! against the injected [`CartStore`]; the only state the service itself
//! holds is the per-cart lock table that serializes those sequences.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use clementine_core::{Cart, CartId, ItemId};

use crate::config::CartCacheConfig;
use crate::error::Result;
use crate::store::{CartStore, MemoryCartStore};

/// Session cart service.
///
/// Cheaply cloneable via `Arc`; clones share the store and the lock table.
#[derive(Clone)]
pub struct CartService {
    inner: Arc<CartServiceInner>,
}

struct CartServiceInner {
    store: Arc<dyn CartStore>,
    locks: DashMap<CartId, Arc<Mutex<()>>>,
}

impl CartService {
    /// Create a cart service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            inner: Arc::new(CartServiceInner {
                store,
                locks: DashMap::new(),
            }),
        }
    }

    /// Create a cart service over a fresh in-memory store.
    #[must_use]
    pub fn with_memory_store(config: &CartCacheConfig) -> Self {
        Self::new(Arc::new(MemoryCartStore::new(config)))
    }

    /// Set the stored quantity for `item_id` in the named cart and return
    /// the resulting full cart.
    ///
    /// The update is set-absolute: the stored quantity becomes
    /// `max(0, quantity)`, whatever was stored before. A cart that does not
    /// exist yet is materialized empty first, so an unknown `cart_id` is
    /// never an error. The updated snapshot is written back under
    /// `cart_id`, replacing the prior one and refreshing its expiry.
    ///
    /// Re-invoking with identical arguments yields the same stored state.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidCartId`] if `cart_id` is empty or
    /// malformed (nothing is written), or [`CartError::Store`] if the
    /// backing store fails (the write happens only after a successful
    /// read, so a failure never leaves a partial update).
    ///
    /// [`CartError::InvalidCartId`]: crate::error::CartError::InvalidCartId
    /// [`CartError::Store`]: crate::error::CartError::Store
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn set_item_quantity(
        &self,
        cart_id: &str,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<Cart> {
        let cart_id = CartId::parse(cart_id)?;

        // Serialize the fetch-compute-store sequence per cart id, otherwise
        // two concurrent updates to the same cart can silently drop one.
        // Distinct carts take distinct locks and never contend.
        let lock = self.lock_for(&cart_id);
        let _guard = lock.lock().await;

        let mut cart = self
            .inner
            .store
            .get(&cart_id)
            .await?
            .unwrap_or_else(|| Cart::new(cart_id));

        let stored = cart.set_quantity(item_id, quantity);
        debug!(item = %item_id, quantity = stored, "cart line updated");

        self.inner.store.put(cart.clone()).await?;

        Ok(cart)
    }

    /// Fetch the current cart for `cart_id`.
    ///
    /// Absent and expired entries are indistinguishable from "never
    /// created": both yield an empty cart with that id. No cache write is
    /// performed.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidCartId`] for a malformed identifier or
    /// [`CartError::Store`] if the backing store fails.
    ///
    /// [`CartError::InvalidCartId`]: crate::error::CartError::InvalidCartId
    /// [`CartError::Store`]: crate::error::CartError::Store
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &str) -> Result<Cart> {
        let cart_id = CartId::parse(cart_id)?;

        let cart = self
            .inner
            .store
            .get(&cart_id)
            .await?
            .unwrap_or_else(|| Cart::new(cart_id));

        Ok(cart)
    }

    /// Lock guarding read-modify-write sequences for one cart id.
    ///
    /// Lock entries are retained for the process lifetime; the table is
    /// bounded by the number of distinct cart ids seen.
    fn lock_for(&self, cart_id: &CartId) -> Arc<Mutex<()>> {
        self.inner
            .locks
            .entry(cart_id.clone())
            .or_default()
            .clone()
    }
}
