//! In-memory cart store backed by `moka`.

use async_trait::async_trait;
use moka::future::Cache;

use clementine_core::{Cart, CartId};

use crate::config::CartCacheConfig;

use super::{CartStore, StoreError};

/// In-process cart store with TTL-based expiry.
///
/// Wraps a `moka` future cache bounded by `max_carts` entries. The TTL
/// counts from the last write, so every `put` refreshes a cart's expiry.
/// Operations are infallible here; the [`StoreError`] channel exists for
/// remote implementations.
#[derive(Clone)]
pub struct MemoryCartStore {
    cache: Cache<CartId, Cart>,
}

impl MemoryCartStore {
    /// Create a new in-memory store from cache configuration.
    #[must_use]
    pub fn new(config: &CartCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_carts)
            .time_to_live(config.time_to_live)
            .build();

        Self { cache }
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn get(&self, id: &CartId) -> Result<Option<Cart>, StoreError> {
        Ok(self.cache.get(id).await)
    }

    async fn put(&self, cart: Cart) -> Result<(), StoreError> {
        self.cache.insert(cart.id.clone(), cart).await;
        Ok(())
    }
}

impl std::fmt::Debug for MemoryCartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCartStore")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
