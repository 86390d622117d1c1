//! Level and round configuration types.
//!
//! - `LevelConfig`: one entry of the level catalog (range, title, progress)
//! - `RoundSettings`: how many tokens a round uses, seeding, failure policy
//!
//! Both are plain serde structs so a host can load them from its own config
//! files; `LevelCatalog::from_toml` covers the common case.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Level identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(pub u32);

impl LevelId {
    /// Create a new level ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

/// Configuration for a single level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Unique identifier for this level.
    pub id: LevelId,

    /// Name shown to the player.
    pub title: String,

    /// Smallest value a token may take.
    pub minimum: i64,

    /// Largest value a token may take.
    pub maximum: i64,

    /// Whether the player may start this level.
    #[serde(default)]
    pub unlocked: bool,

    /// Whether the player has solved this level at least once.
    #[serde(default)]
    pub completed: bool,
}

impl LevelConfig {
    /// Create a new, locked level.
    pub fn new(id: LevelId, title: impl Into<String>, minimum: i64, maximum: i64) -> Self {
        Self {
            id,
            title: title.into(),
            minimum,
            maximum,
            unlocked: false,
            completed: false,
        }
    }

    /// Mark the level as unlocked.
    #[must_use]
    pub fn unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }

    /// Number of distinct values in `[minimum, maximum]`.
    ///
    /// Zero for an inverted range.
    #[must_use]
    pub fn range_size(&self) -> u128 {
        range_size(self.minimum, self.maximum)
    }

    /// Check that the range is well formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimum > self.maximum {
            return Err(ConfigError::InvertedRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

/// Number of integers in the closed interval `[minimum, maximum]`.
pub(crate) fn range_size(minimum: i64, maximum: i64) -> u128 {
    if minimum > maximum {
        0
    } else {
        (i128::from(maximum) - i128::from(minimum) + 1) as u128
    }
}

/// What happens after a round fills up in the wrong order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report the failure, then return every token to the pool and continue.
    AutoReset,
    /// Report the failure and wait for an explicit position reset.
    #[default]
    RequireReset,
}

/// Per-round settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundSettings {
    /// Tokens (and slots) per round.
    pub token_count: usize,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Handling of a filled-but-wrong train.
    pub failure_policy: FailurePolicy,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            token_count: 3,
            seed: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl RoundSettings {
    /// Set the token count.
    #[must_use]
    pub fn with_token_count(mut self, count: usize) -> Self {
        self.token_count = count;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
