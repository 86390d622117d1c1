//! Round evaluation: classify a filled train.

use serde::{Deserialize, Serialize};

use crate::core::RoundState;

/// Classification of a completely filled round.
///
/// Serialized with the wire names the history service stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Every slot holds its target value.
    #[serde(rename = "acerto")]
    Solved,
    /// Every slot is filled, at least one wrongly.
    #[serde(rename = "erro")]
    Failed,
}

impl RoundResult {
    /// Check if the round was solved.
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == RoundResult::Solved
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Solved => write!(f, "solved"),
            RoundResult::Failed => write!(f, "failed"),
        }
    }
}

/// Classify a round.
///
/// Returns `None` while any slot is empty.
#[must_use]
pub fn evaluate(state: &RoundState) -> Option<RoundResult> {
    if !state.is_filled() {
        return None;
    }
    if state.correctness().iter().all(|&c| c) {
        Some(RoundResult::Solved)
    } else {
        Some(RoundResult::Failed)
    }
}
