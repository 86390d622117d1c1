//! Outcome records and the history sink they are delivered to.
//!
//! ## Key Types
//!
//! - `OutcomeRecord`: one finished round, in the history service's shape
//! - `HistorySink`: where records go
//! - `InMemoryHistory`: a sink with per-player/per-level stats and ranking

pub mod record;
pub mod store;

pub use record::OutcomeRecord;
pub use store::{HistoryError, HistorySink, InMemoryHistory, RankingEntry, ResultCounts};
