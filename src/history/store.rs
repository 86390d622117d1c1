//! History sink abstraction and an in-memory implementation.
//!
//! The engine hands each finished round to a `HistorySink`. Where records
//! end up (local storage, a database, a remote API) is the host's choice.
//! `InMemoryHistory` keeps them in a `Vec` and answers the aggregate queries
//! the dashboard screens need.

use derive_more::Display;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::record::OutcomeRecord;
use crate::core::LevelId;
use crate::rules::RoundResult;

/// A record could not be stored.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("history unavailable: {message}")]
pub struct HistoryError {
    /// What went wrong.
    pub message: String,
}

impl HistoryError {
    /// Create a new history error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Destination for outcome records.
pub trait HistorySink {
    /// Store one record.
    fn record(&mut self, record: OutcomeRecord) -> Result<(), HistoryError>;
}

impl<H: HistorySink + ?Sized> HistorySink for &mut H {
    fn record(&mut self, record: OutcomeRecord) -> Result<(), HistoryError> {
        (**self).record(record)
    }
}

/// Solved/failed tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub solved: u32,
    pub failed: u32,
}

impl ResultCounts {
    fn add(&mut self, result: RoundResult) {
        match result {
            RoundResult::Solved => self.solved += 1,
            RoundResult::Failed => self.failed += 1,
        }
    }

    /// Rounds counted.
    #[must_use]
    pub fn plays(&self) -> u32 {
        self.solved + self.failed
    }
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player: String,
    pub counts: ResultCounts,
}

/// Records kept in memory, in arrival order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryHistory {
    records: Vec<OutcomeRecord>,
}

impl InMemoryHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No records yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one player. Names compare case-insensitively.
    pub fn for_player<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a OutcomeRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.user_id.eq_ignore_ascii_case(player))
    }

    /// Records of one level.
    pub fn for_level(&self, level: LevelId) -> impl Iterator<Item = &OutcomeRecord> + '_ {
        self.records.iter().filter(move |r| r.level_id == level)
    }

    /// Solved/failed totals for a player.
    #[must_use]
    pub fn player_stats(&self, player: &str) -> ResultCounts {
        let mut counts = ResultCounts::default();
        for record in self.for_player(player) {
            counts.add(record.result);
        }
        counts
    }

    /// Solved/failed totals for a level.
    #[must_use]
    pub fn level_stats(&self, level: LevelId) -> ResultCounts {
        let mut counts = ResultCounts::default();
        for record in self.for_level(level) {
            counts.add(record.result);
        }
        counts
    }

    /// Players ordered by solved rounds (most first), then failed rounds
    /// (fewest first), then name.
    ///
    /// Players are grouped case-insensitively under the first spelling seen.
    #[must_use]
    pub fn ranking(&self) -> Vec<RankingEntry> {
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut rows: Vec<RankingEntry> = Vec::new();

        for record in &self.records {
            let key = record.user_id.to_ascii_uppercase();
            let row = *index.entry(key).or_insert_with(|| {
                rows.push(RankingEntry {
                    player: record.user_id.clone(),
                    counts: ResultCounts::default(),
                });
                rows.len() - 1
            });
            rows[row].counts.add(record.result);
        }

        rows.sort_by(|a, b| {
            b.counts
                .solved
                .cmp(&a.counts.solved)
                .then(a.counts.failed.cmp(&b.counts.failed))
                .then_with(|| a.player.cmp(&b.player))
        });
        rows
    }
}

impl HistorySink for InMemoryHistory {
    #[instrument(level = "debug", skip_all, fields(id = %record.id, result = %record.result))]
    fn record(&mut self, record: OutcomeRecord) -> Result<(), HistoryError> {
        self.records.push(record);
        Ok(())
    }
}
