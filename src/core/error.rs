//! Error types for round setup and move handling.

use derive_more::{Display, From};

use super::config::LevelId;
use super::token::{SlotIndex, Token};

/// A round could not be configured.
///
/// Raised before any state exists; fatal to starting that round.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// A round needs at least one token.
    #[display("a round needs at least one token")]
    EmptyRound,

    /// The same value was supplied twice.
    #[display("token {_0} appears more than once")]
    DuplicateToken(Token),

    /// Minimum above maximum.
    #[display("range [{minimum}, {maximum}] is inverted")]
    InvertedRange { minimum: i64, maximum: i64 },

    /// More unique tokens requested than the range holds.
    #[display("cannot draw {requested} unique tokens from [{minimum}, {maximum}]")]
    RangeExhausted {
        minimum: i64,
        maximum: i64,
        requested: usize,
    },

    /// Level id not in the catalog.
    #[display("unknown level {_0}")]
    UnknownLevel(LevelId),

    /// Level exists but has not been unlocked yet.
    #[display("level {_0} is locked")]
    LevelLocked(LevelId),

    /// Level catalog could not be parsed or is inconsistent.
    #[display("invalid level catalog: {_0}")]
    Catalog(String),
}

impl std::error::Error for ConfigError {}

/// A move was structurally invalid and has been rejected.
///
/// A well-behaved caller never produces these; state is left untouched and
/// no attempt is counted.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Slot index past the end of the train.
    #[display("{slot} is out of range for {slot_count} slots")]
    SlotOutOfRange { slot: SlotIndex, slot_count: usize },

    /// Token claimed to come from the pool but is not there.
    #[display("token {_0} is not in the available pool")]
    TokenNotInPool(Token),

    /// Token claimed to come from a slot that does not hold it.
    #[display("token {token} is not in {slot}")]
    TokenNotInSlot { token: Token, slot: SlotIndex },

    /// A transition would have broken a state invariant.
    #[display("invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// A drop could not be applied to the current round.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum RoundError {
    /// The engine rejected the move.
    #[from]
    #[display("{_0}")]
    Move(MoveError),

    /// The round already produced its outcome and awaits a reset.
    #[display("round is finished; reset positions to play again")]
    Finished,
}

impl std::error::Error for RoundError {}
