//! Cart service error taxonomy.
//!
//! Two things can go wrong: the caller hands us a bad cart identifier, or
//! the backing store fails. Store failures propagate unchanged - the
//! service never substitutes a default cart and claims success. A negative
//! or zero requested quantity is NOT an error; it is defined clamp
//! behavior handled in the data model.

use thiserror::Error;

use clementine_core::CartIdError;

use crate::store::StoreError;

/// Errors returned by cart service operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The cart identifier is empty or malformed. No cache write was
    /// performed.
    #[error("invalid cart identifier: {0}")]
    InvalidCartId(#[from] CartIdError),

    /// The backing cart store failed. Transient; the caller may resubmit.
    #[error("cart store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cart_id_display() {
        let err = CartError::from(CartIdError::Empty);
        assert_eq!(
            err.to_string(),
            "invalid cart identifier: cart identifier cannot be empty"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = CartError::from(StoreError::Unavailable("connection reset".to_string()));
        assert_eq!(
            err.to_string(),
            "cart store error: cart store unavailable: connection reset"
        );
    }
}
