//! Cart identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CartId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CartIdError {
    /// The input string is empty or whitespace-only.
    #[error("cart identifier cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("cart identifier must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A cart identifier.
///
/// Cart identifiers name cache entries, so they must be non-empty and
/// reasonably bounded in length. Beyond that they are opaque - the caller
/// (typically a session layer) decides what goes in them.
///
/// ## Examples
///
/// ```
/// use clementine_core::CartId;
///
/// assert!(CartId::parse("TEST_CART").is_ok());
/// assert!(CartId::parse("").is_err());
/// assert!(CartId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CartId(String);

impl CartId {
    /// Maximum length of a cart identifier.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `CartId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, whitespace-only, or longer
    /// than 128 characters.
    pub fn parse(s: &str) -> Result<Self, CartIdError> {
        if s.trim().is_empty() {
            return Err(CartIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(CartIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the cart identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CartId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CartId {
    type Err = CartIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CartId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
