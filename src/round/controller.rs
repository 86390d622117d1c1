//! Round controller: one player, one level, one history sink.
//!
//! The controller sits between the renderer and the engine. Each drop
//! becomes one `drop_token` call; the returned `Turn` carries everything the
//! renderer needs (per-move feedback, plus the outcome once the train is
//! full). Outcomes are handed to the history sink here, and a sink failure
//! never affects the round.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::initializer::initialize_level;
use crate::core::{
    ConfigError, FailurePolicy, LevelConfig, Move, MoveSignal, RoundError, RoundRng,
    RoundSettings, RoundState,
};
use crate::history::{HistorySink, OutcomeRecord};
use crate::placement::PlacementEngine;
use crate::rules::{evaluate, RoundResult};

/// Where the round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Accepting moves.
    InProgress,
    /// Solved; waiting for a reset.
    Solved,
    /// Filled wrongly under `FailurePolicy::RequireReset`; waiting for a reset.
    Failed,
}

/// Result of one drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Feedback for the slot that was dropped on.
    pub signal: MoveSignal,
    /// Present when this move completed the round.
    pub outcome: Option<OutcomeRecord>,
}

/// Mediates a single round between the renderer, the engine and history.
pub struct RoundController<H> {
    player: String,
    level: LevelConfig,
    policy: FailurePolicy,
    engine: PlacementEngine,
    rng: RoundRng,
    started_at: DateTime<Utc>,
    status: RoundStatus,
    completions: u32,
    history: H,
}

impl<H: HistorySink> RoundController<H> {
    /// Start a round of `level` for `player`.
    ///
    /// `started_at` is the caller's clock reading; elapsed time in the
    /// outcome is measured from it. Locked levels are refused.
    #[instrument(skip_all, fields(level = %level.id, token_count = settings.token_count))]
    pub fn start(
        player: impl Into<String>,
        level: &LevelConfig,
        settings: &RoundSettings,
        history: H,
        started_at: DateTime<Utc>,
    ) -> Result<Self, ConfigError> {
        if !level.unlocked {
            warn!("start of a locked level");
            return Err(ConfigError::LevelLocked(level.id));
        }
        let mut rng = match settings.seed {
            Some(seed) => RoundRng::new(seed),
            None => RoundRng::from_entropy(),
        };
        let state = initialize_level(level, settings, &mut rng)?;
        let player = player.into();
        info!(player = %player, seed = rng.seed(), "round started");

        Ok(Self {
            player,
            level: level.clone(),
            policy: settings.failure_policy,
            engine: PlacementEngine::new(state),
            rng,
            started_at,
            status: RoundStatus::InProgress,
            completions: 0,
            history,
        })
    }

    /// Apply one drop at time `now`.
    pub fn drop_token(&mut self, mv: Move, now: DateTime<Utc>) -> Result<Turn, RoundError> {
        if self.status != RoundStatus::InProgress {
            warn!(mv = %mv, status = ?self.status, "drop on a finished round");
            return Err(RoundError::Finished);
        }

        let signal = self.engine.place(mv)?;
        if !signal.accepted() {
            return Ok(Turn {
                signal,
                outcome: None,
            });
        }

        let outcome = evaluate(self.engine.state()).map(|result| self.finish(result, now));
        Ok(Turn { signal, outcome })
    }

    fn finish(&mut self, result: RoundResult, now: DateTime<Utc>) -> OutcomeRecord {
        self.completions += 1;
        let record = OutcomeRecord::new(
            self.player.clone(),
            &self.level,
            result,
            self.engine.state().attempts(),
            self.started_at,
            now,
        )
        .with_round_tag(self.rng.seed(), self.completions);
        info!(
            player = %self.player,
            level = %self.level.id,
            result = %result,
            attempts = record.attempts,
            elapsed_seconds = record.elapsed_seconds,
            "round finished"
        );

        if let Err(err) = self.history.record(record.clone()) {
            warn!(error = %err, id = %record.id, "outcome not recorded");
        }

        match (result, self.policy) {
            (RoundResult::Solved, _) => self.status = RoundStatus::Solved,
            (RoundResult::Failed, FailurePolicy::RequireReset) => self.status = RoundStatus::Failed,
            (RoundResult::Failed, FailurePolicy::AutoReset) => {
                self.engine.reset_positions(&mut self.rng);
            }
        }
        record
    }

    /// Return every token to the pool and resume play.
    ///
    /// Keeps the token set, the attempt count and the start time.
    pub fn reset_positions(&mut self) {
        self.engine.reset_positions(&mut self.rng);
        self.status = RoundStatus::InProgress;
    }

    /// Current round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        self.engine.state()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// The player this round belongs to.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The level being played.
    #[must_use]
    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// When the round started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The history sink.
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Give the history sink back, ending the round.
    #[must_use]
    pub fn into_history(self) -> H {
        self.history
    }
}
