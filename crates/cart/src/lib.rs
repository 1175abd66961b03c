//! Clementine Cart - Session cart service.
//!
//! This crate owns the cart quantity-update and cache-persistence logic.
//! Everything around it (HTTP handlers, catalog lookups, pricing) lives in
//! the surrounding services and talks to this crate through
//! [`CartService`].
//!
//! # Architecture
//!
//! - [`store`] - The [`CartStore`] capability and its moka-backed
//!   in-memory implementation. Cart state lives here and nowhere else;
//!   entries expire on a TTL and the service never relies on one existing.
//! - [`service`] - [`CartService`], a stateless transformer between the
//!   current snapshot and the next one. Read-modify-write sequences for the
//!   same cart are serialized through a per-cart lock.
//! - [`config`] - Cache sizing and TTL loaded from the environment.
//! - [`error`] - Error taxonomy. Store failures propagate unchanged; a
//!   negative or zero quantity is a defined clamp, never an error.
//!
//! # Example
//!
//! ```rust
//! use clementine_cart::{CartCacheConfig, CartService};
//! use clementine_core::ItemId;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), clementine_cart::CartError> {
//! let service = CartService::with_memory_store(&CartCacheConfig::default());
//!
//! let cart = service.set_item_quantity("TEST_CART", ItemId::new(1), 2).await?;
//! assert_eq!(cart.quantity_of(ItemId::new(1)), Some(2));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use config::{CartCacheConfig, ConfigError};
pub use error::{CartError, Result};
pub use service::CartService;
pub use store::{CartStore, MemoryCartStore, StoreError};
