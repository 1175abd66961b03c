//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod cart_id;
pub mod id;

pub use cart::{Cart, CartItem};
pub use cart_id::{CartId, CartIdError};
pub use id::*;
