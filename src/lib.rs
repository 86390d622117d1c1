//! # number-train
//!
//! Placement and reconciliation engine for a number-ordering puzzle: the
//! player drags numbered tokens into a train of slots ("wagons") and gets
//! feedback on whether each wagon holds the right number.
//!
//! ## Design Principles
//!
//! 1. **One owned state**: a round is a single `RoundState` value. No
//!    globals; whoever mediates the round owns it.
//!
//! 2. **Every drop is one call**: `place(target, token, source?)` resolves
//!    placing, replacing and swapping. Its return value is the only thing a
//!    renderer needs.
//!
//! 3. **Explicit randomness**: sampling and shuffling take a seedable
//!    `RoundRng`, so every round can be replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: tokens, slots, moves, round state, RNG, configuration, errors
//! - `placement`: the move-resolution state machine
//! - `rules`: solved/failed evaluation
//! - `round`: round initialization and the round controller
//! - `history`: outcome records and history sinks
//! - `levels`: level catalog and unlock progression

pub mod core;
pub mod placement;
pub mod rules;
pub mod round;
pub mod history;
pub mod levels;

// Re-export commonly used types
pub use crate::core::{
    Token, SlotIndex,
    RoundRng, RoundRngState,
    LevelId, LevelConfig, RoundSettings, FailurePolicy,
    ConfigError, MoveError, RoundError,
    Move, MoveSignal, Resolution,
    RoundState,
};

pub use crate::placement::{resolve, reset_positions, PlacementEngine};

pub use crate::rules::{evaluate, RoundResult};

pub use crate::round::{initialize, initialize_level, sample_tokens, RoundController, RoundStatus, Turn};

pub use crate::history::{
    OutcomeRecord, HistorySink, HistoryError, InMemoryHistory, RankingEntry, ResultCounts,
};

pub use crate::levels::LevelCatalog;
