//! Placement engine: the state machine behind every drop.
//!
//! ## Key Types
//!
//! - `resolve`: pure transition from one `RoundState` to the next
//! - `reset_positions`: pure "everything back to the pool"
//! - `PlacementEngine`: owns a state and commits transitions

pub mod engine;

pub use engine::{reset_positions, resolve, PlacementEngine};
