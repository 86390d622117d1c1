//! Token and slot identification.
//!
//! A `Token` is a numbered card the player drags. Tokens carry no identity
//! beyond their value: a round never contains two tokens with the same value,
//! so the value doubles as the token's identity.
//!
//! A `SlotIndex` is a position in the train being built. Slots are numbered
//! `0..slot_count` from the locomotive outwards.
//!
//! ## Usage
//!
//! ```
//! use number_train::core::{SlotIndex, Token};
//!
//! let token = Token::new(7);
//! assert_eq!(token.value(), 7);
//!
//! let slot = SlotIndex::new(2);
//! assert!(slot.is_valid(3));
//! assert!(!slot.is_valid(2));
//! ```

use serde::{Deserialize, Serialize};

/// A numbered token.
///
/// Ordering follows the numeric value, which is what the target sequence is
/// sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub i64);

impl Token {
    /// Create a token with the given value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Position of a slot (wagon) in the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotIndex(pub usize);

impl SlotIndex {
    /// Create a slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Check if this index addresses a slot in a round of `slot_count` slots.
    #[must_use]
    pub const fn is_valid(self, slot_count: usize) -> bool {
        self.0 < slot_count
    }

    /// Iterate over every slot index for a round of `slot_count` slots.
    pub fn all(slot_count: usize) -> impl Iterator<Item = SlotIndex> {
        (0..slot_count).map(SlotIndex)
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}
