//! Round lifecycle: initialization and the controller that runs a round.
//!
//! ## Key Types
//!
//! - `initialize`: sample tokens and build a fresh `RoundState`
//! - `RoundController`: drives one round for one player and reports the
//!   outcome to a `HistorySink`

pub mod initializer;
pub mod controller;

pub use initializer::{initialize, initialize_level, sample_tokens};
pub use controller::{RoundController, RoundStatus, Turn};
