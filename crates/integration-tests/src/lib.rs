//! Integration test support for Clementine.
//!
//! Each test builds an isolated [`CartService`] over its own in-memory
//! store, mirroring production wiring without sharing any state between
//! tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clementine-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;
use std::time::Duration;

use clementine_cart::{CartCacheConfig, CartService};

static TRACING: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary.
///
/// Honors `RUST_LOG`; defaults to `warn` so test output stays quiet unless
/// a failure is being chased.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Cart service over a fresh, isolated in-memory store.
#[must_use]
pub fn test_service() -> CartService {
    init_tracing();
    CartService::with_memory_store(&CartCacheConfig::default())
}

/// Cart service whose entries expire almost immediately.
#[must_use]
pub fn short_ttl_service() -> CartService {
    init_tracing();
    CartService::with_memory_store(&CartCacheConfig {
        max_carts: 64,
        time_to_live: Duration::from_millis(50),
    })
}

/// Unique cart id, so tests sharing a store can never collide.
#[must_use]
pub fn unique_cart_id(prefix: &str) -> String {
    format!("{prefix}:{}", uuid::Uuid::new_v4())
}
