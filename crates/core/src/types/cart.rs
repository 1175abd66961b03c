//! Session cart data model.
//!
//! A [`Cart`] is a named collection of item-quantity lines held in the
//! expiring cart cache. The model is a plain value type: the cart service
//! reads a snapshot, mutates it through [`Cart::set_quantity`], and writes
//! the new snapshot back.

use serde::{Deserialize, Serialize};

use super::cart_id::CartId;
use super::id::ItemId;

/// One item-quantity line within a [`Cart`].
///
/// Stored quantities are never negative - requested quantities are clamped
/// at zero before they land here. A zero-quantity line stays in the cart
/// rather than being removed, so callers see the full history of lines the
/// session touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog item this line refers to. Opaque to the cart - existence
    /// checks belong to the catalog service.
    pub item_id: ItemId,
    /// Units of the item currently in the cart.
    pub quantity: u32,
}

/// A named, cache-resident collection of item-quantity lines.
///
/// Lines are unique by [`ItemId`] and keep insertion order. Carts are
/// created implicitly on first update of an unknown identifier and are
/// destroyed only by cache expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Identifier the cart is stored under.
    pub id: CartId,
    /// Item lines, unique by item id, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart with the given identifier.
    #[must_use]
    pub const fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Set the stored quantity for `item_id` to `max(0, requested)`.
    ///
    /// This is a set-absolute update: the requested value replaces whatever
    /// was stored before, it is never added to it. A negative or zero
    /// request stores exactly `0`, regardless of the prior quantity. If no
    /// line exists for `item_id`, one is appended.
    ///
    /// Returns the quantity that was stored.
    pub fn set_quantity(&mut self, item_id: ItemId, requested: i64) -> u32 {
        let quantity = clamp_quantity(requested);

        if let Some(line) = self.items.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = quantity;
        } else {
            self.items.push(CartItem { item_id, quantity });
        }

        quantity
    }

    /// Stored quantity for `item_id`, or `None` if the cart has no line
    /// for it.
    #[must_use]
    pub fn quantity_of(&self, item_id: ItemId) -> Option<u32> {
        self.items
            .iter()
            .find(|line| line.item_id == item_id)
            .map(|line| line.quantity)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether the cart has no lines at all.
    ///
    /// Note that a cart whose every line is zero-quantity is not empty in
    /// this sense - the lines are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Clamp a requested quantity into the stored range.
///
/// Negative requests clamp to zero; requests above `u32::MAX` saturate.
fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(0)).unwrap_or(u32::MAX)
}
