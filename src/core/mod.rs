//! Core types: tokens, slots, moves, round state, RNG, configuration, errors.
//!
//! Everything here is independent of how rounds are set up or evaluated;
//! `round`, `placement` and `rules` build on these types.

pub mod token;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use token::{SlotIndex, Token};
pub use rng::{RoundRng, RoundRngState};
pub use config::{FailurePolicy, LevelConfig, LevelId, RoundSettings};
pub use error::{ConfigError, MoveError, RoundError};
pub use action::{Move, MoveSignal, Resolution};
pub use state::RoundState;
