//! Level catalog.
//!
//! The host supplies levels (or uses the stock five); the engine only reads
//! a level's range and title when a round starts.

pub mod catalog;

pub use catalog::LevelCatalog;
