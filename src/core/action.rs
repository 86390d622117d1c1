//! Move representation and per-move feedback.
//!
//! A `Move` is the single event a drop gesture produces: which token was
//! dropped, on which slot, and where the drag started. The origin matters:
//! dragging from the pool onto an occupied slot replaces its occupant, while
//! dragging from another slot swaps the two.
//!
//! ```
//! use number_train::core::{Move, SlotIndex, Token};
//!
//! let from_pool = Move::from_pool(SlotIndex::new(0), Token::new(3));
//! assert_eq!(from_pool.source, None);
//!
//! let swap = Move::between(SlotIndex::new(2), SlotIndex::new(0), Token::new(3));
//! assert_eq!(swap.source, Some(SlotIndex::new(2)));
//! ```

use serde::{Deserialize, Serialize};

use super::token::{SlotIndex, Token};

/// A drop of `token` onto `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Slot the token was dropped on.
    pub target: SlotIndex,

    /// The dropped token.
    pub token: Token,

    /// Slot the drag started from. `None` when dragged from the pool.
    pub source: Option<SlotIndex>,
}

impl Move {
    /// A token dragged from the available pool.
    #[must_use]
    pub fn from_pool(target: SlotIndex, token: Token) -> Self {
        Self {
            target,
            token,
            source: None,
        }
    }

    /// A token dragged from one slot to another.
    #[must_use]
    pub fn between(source: SlotIndex, target: SlotIndex, token: Token) -> Self {
        Self {
            target,
            token,
            source: Some(source),
        }
    }

    /// True when the token is dropped back on the slot it came from.
    #[must_use]
    pub fn is_self_move(&self) -> bool {
        self.source == Some(self.target)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Some(source) => write!(f, "{} {} -> {}", self.token, source, self.target),
            None => write!(f, "{} pool -> {}", self.token, self.target),
        }
    }
}

/// How a move changed slot occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Pool token placed into an empty slot.
    Placed,
    /// Pool token replaced an occupant, which went back to the pool.
    Replaced { displaced: Token },
    /// Slot-to-slot move. `returned` is the target's former occupant, now in
    /// the source slot.
    Swapped { returned: Option<Token> },
    /// Token dropped where it already was.
    Unchanged,
}

/// Immediate feedback for one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSignal {
    /// The slot the token landed on.
    pub slot: SlotIndex,

    /// Whether that slot now holds its target value.
    pub is_correct: bool,

    /// What happened to occupancy.
    pub resolution: Resolution,
}

impl MoveSignal {
    /// Whether the move was counted as an attempt.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.resolution != Resolution::Unchanged
    }
}
