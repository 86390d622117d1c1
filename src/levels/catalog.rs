//! Level catalog with unlock progression.
//!
//! Levels are played in catalog order. Only the first level starts
//! unlocked; solving a level marks it completed and unlocks the next one.
//!
//! ```
//! use number_train::core::LevelId;
//! use number_train::levels::LevelCatalog;
//!
//! let mut catalog = LevelCatalog::default();
//! assert!(catalog.playable(LevelId::new(2)).is_err());
//!
//! let unlocked = catalog.mark_completed(LevelId::new(1)).unwrap();
//! assert_eq!(unlocked, Some(LevelId::new(2)));
//! assert!(catalog.playable(LevelId::new(2)).is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ConfigError, LevelConfig, LevelId};

/// Ordered set of levels and the player's progress through them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<LevelConfig>,
}

impl Default for LevelCatalog {
    /// The five stock trains, from `[0, 5]` up to `[0, 50]`.
    fn default() -> Self {
        let levels = vec![
            LevelConfig::new(LevelId::new(1), "Small Train", 0, 5).unlocked(),
            LevelConfig::new(LevelId::new(2), "Medium Train", 0, 10),
            LevelConfig::new(LevelId::new(3), "Big Train", 0, 20),
            LevelConfig::new(LevelId::new(4), "Fast Train", 0, 30),
            LevelConfig::new(LevelId::new(5), "Super Train", 0, 50),
        ];
        Self { levels }
    }
}

impl LevelCatalog {
    /// Build a catalog from levels in play order.
    ///
    /// Rejects an empty list, duplicate ids and inverted ranges.
    pub fn from_levels(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::Catalog("no levels defined".to_string()));
        }
        let mut ids = FxHashSet::default();
        for level in &levels {
            if !ids.insert(level.id) {
                return Err(ConfigError::Catalog(format!("duplicate level id {}", level.id)));
            }
            level.validate()?;
        }
        Ok(Self { levels })
    }

    /// Parse a catalog from TOML `[[levels]]` tables.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct CatalogFile {
            levels: Vec<LevelConfig>,
        }

        let file: CatalogFile =
            toml::from_str(source).map_err(|e| ConfigError::Catalog(e.to_string()))?;
        Self::from_levels(file.levels)
    }

    /// All levels in play order.
    #[must_use]
    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Look up a level.
    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&LevelConfig> {
        self.levels.iter().find(|l| l.id == id)
    }

    /// Look up a level the player is allowed to start.
    pub fn playable(&self, id: LevelId) -> Result<&LevelConfig, ConfigError> {
        let level = self.get(id).ok_or(ConfigError::UnknownLevel(id))?;
        if level.unlocked {
            Ok(level)
        } else {
            Err(ConfigError::LevelLocked(id))
        }
    }

    /// The level after `id` in play order.
    #[must_use]
    pub fn next_level(&self, id: LevelId) -> Option<&LevelConfig> {
        let index = self.levels.iter().position(|l| l.id == id)?;
        self.levels.get(index + 1)
    }

    /// Record that a level was solved.
    ///
    /// Returns the id of the level this newly unlocked, if any.
    pub fn mark_completed(&mut self, id: LevelId) -> Result<Option<LevelId>, ConfigError> {
        let index = self
            .levels
            .iter()
            .position(|l| l.id == id)
            .ok_or(ConfigError::UnknownLevel(id))?;
        self.levels[index].completed = true;

        let Some(next) = self.levels.get_mut(index + 1) else {
            info!(level = %id, "final level completed");
            return Ok(None);
        };
        if next.unlocked {
            return Ok(None);
        }
        next.unlocked = true;
        info!(level = %id, unlocked = %next.id, "level unlocked");
        Ok(Some(next.id))
    }

    /// Every level has been solved.
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.levels.iter().all(|l| l.completed)
    }

    /// Forget all progress: only the first level unlocked, none completed.
    pub fn reset_progress(&mut self) {
        for (i, level) in self.levels.iter_mut().enumerate() {
            level.unlocked = i == 0;
            level.completed = false;
        }
    }
}
