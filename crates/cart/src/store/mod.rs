//! Cart store capability.
//!
//! The cache exclusively owns serialized cart state; the service owns none.
//! The store is injected rather than reached through a global so tests can
//! substitute an isolated instance per test and production can substitute a
//! distributed cache without code change.

mod memory;

pub use memory::MemoryCartStore;

use async_trait::async_trait;
use thiserror::Error;

use clementine_core::{Cart, CartId};

/// Errors that can occur against the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the operation timed out.
    #[error("cart store unavailable: {0}")]
    Unavailable(String),
}

/// Expiring key-value store for cart snapshots.
///
/// `put` overwrites any prior snapshot under the cart's id and refreshes
/// its expiry. `get` returns `None` for absent entries - expired and
/// never-created are indistinguishable, and callers treat both as an empty
/// cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch the current snapshot for `id`, if one exists.
    async fn get(&self, id: &CartId) -> Result<Option<Cart>, StoreError>;

    /// Store `cart` under its id, replacing any prior snapshot and
    /// refreshing its expiry.
    async fn put(&self, cart: Cart) -> Result<(), StoreError>;
}
