//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `cart` - Session cart service backed by the expiring cache
//! - future storefront and admin surfaces
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no cache access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the cart data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
