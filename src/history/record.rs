//! Outcome records handed to the history service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{LevelConfig, LevelId};
use crate::rules::RoundResult;

/// One finished round.
///
/// Field names follow the history service's camelCase JSON shape; the
/// timestamp serializes as RFC 3339.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRecord {
    /// Record identifier: player, level, finish instant, and optionally the
    /// round's seed and completion number (see `with_round_tag`).
    pub id: String,

    /// Player the round belongs to.
    pub user_id: String,

    /// Level played.
    pub level_id: LevelId,

    /// Level title at the time of play.
    pub level_title: String,

    /// When the round finished.
    pub timestamp: DateTime<Utc>,

    /// Solved or failed.
    pub result: RoundResult,

    /// Accepted moves in the round.
    pub attempts: u32,

    /// Seconds from round start to `timestamp`.
    pub elapsed_seconds: u64,
}

impl OutcomeRecord {
    /// Build the record for a round that started at `started_at` and
    /// finished at `finished_at`.
    ///
    /// A finish before the start (clock skew) counts as zero seconds.
    pub fn new(
        user_id: impl Into<String>,
        level: &LevelConfig,
        result: RoundResult,
        attempts: u32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let user_id = user_id.into();
        let elapsed_seconds = u64::try_from((finished_at - started_at).num_seconds()).unwrap_or(0);
        Self {
            id: format!(
                "{}-{}-{}",
                user_id,
                level.id.raw(),
                finished_at.timestamp_millis()
            ),
            user_id,
            level_id: level.id,
            level_title: level.title.clone(),
            timestamp: finished_at,
            result,
            attempts,
            elapsed_seconds,
        }
    }

    /// Qualify the id with the round's RNG seed and its completion number.
    ///
    /// Two rounds finishing in the same millisecond then only share an id if
    /// they also share a seed, and repeated completions of one round (after
    /// resets) never do.
    #[must_use]
    pub fn with_round_tag(mut self, seed: u64, completion: u32) -> Self {
        self.id = format!("{}-{:016x}-{}", self.id, seed, completion);
        self
    }
}
