//! Round state: target sequence, slots, pool and correctness flags.
//!
//! ## Invariants
//!
//! After every accepted transition:
//! - every token of the round is either in exactly one slot or in the pool
//! - `correctness[i]` holds iff slot `i` holds `target[i]`
//! - pool size plus occupied slots equals the round's token count
//! - the attempt counter never decreases
//!
//! Sequences are stored in `im::Vector`, so cloning a state is O(1). The
//! placement engine relies on this: it applies each move to a clone and only
//! commits the clone once `check_invariants` passes.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, MoveError};
use super::rng::RoundRng;
use super::token::{SlotIndex, Token};

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Ascending arrangement of the round's tokens. Never changes.
    target: Vector<Token>,

    /// Slot occupants, index-aligned with `target`.
    slots: Vector<Option<Token>>,

    /// Tokens not in any slot, in display order.
    pool: Vector<Token>,

    /// Per-slot correctness, recomputed after every move.
    correctness: Vector<bool>,

    /// Accepted moves so far.
    attempts: u32,
}

impl RoundState {
    /// Create a round from its tokens.
    ///
    /// The pool keeps the given order (callers shuffle beforehand); the
    /// target is the ascending sort. All slots start empty.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ConfigError> {
        if tokens.is_empty() {
            return Err(ConfigError::EmptyRound);
        }

        let mut seen = FxHashSet::default();
        for &token in &tokens {
            if !seen.insert(token) {
                return Err(ConfigError::DuplicateToken(token));
            }
        }

        let mut target = tokens.clone();
        target.sort_unstable();
        let count = tokens.len();

        Ok(Self {
            target: target.into_iter().collect(),
            slots: std::iter::repeat(None).take(count).collect(),
            pool: tokens.into_iter().collect(),
            correctness: std::iter::repeat(false).take(count).collect(),
            attempts: 0,
        })
    }

    // === Queries ===

    /// Number of slots (and tokens) in the round.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.target.len()
    }

    /// The sorted target sequence.
    #[must_use]
    pub fn target(&self) -> &Vector<Token> {
        &self.target
    }

    /// All slot occupants in order.
    #[must_use]
    pub fn slots(&self) -> &Vector<Option<Token>> {
        &self.slots
    }

    /// Occupant of one slot. `None` when empty or out of range.
    #[must_use]
    pub fn slot(&self, slot: SlotIndex) -> Option<Token> {
        self.slots.get(slot.index()).copied().flatten()
    }

    /// Tokens waiting in the pool, in display order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Token> {
        &self.pool
    }

    /// Check if a token is waiting in the pool.
    #[must_use]
    pub fn in_pool(&self, token: Token) -> bool {
        self.pool.contains(&token)
    }

    /// Per-slot correctness flags.
    #[must_use]
    pub fn correctness(&self) -> &Vector<bool> {
        &self.correctness
    }

    /// Whether a slot currently holds its target value.
    #[must_use]
    pub fn is_correct(&self, slot: SlotIndex) -> bool {
        self.correctness.get(slot.index()).copied().unwrap_or(false)
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Every slot is occupied.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Every slot is occupied by its target value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.correctness.iter().all(|&c| c)
    }

    /// Every slot is occupied but at least one is wrong.
    #[must_use]
    pub fn is_filled_wrong(&self) -> bool {
        self.is_filled() && !self.is_solved()
    }

    /// All tokens of the round: slot occupants in slot order, then the pool.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.slots.iter().flatten().copied().chain(self.pool.iter().copied())
    }

    /// Verify the occupancy and correctness invariants.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        let count = self.target.len();
        if self.slots.len() != count || self.correctness.len() != count {
            return Err(MoveError::InvariantViolation(format!(
                "{} targets, {} slots, {} correctness flags",
                count,
                self.slots.len(),
                self.correctness.len()
            )));
        }

        let mut held: Vec<Token> = self.tokens().collect();
        if held.len() != count {
            return Err(MoveError::InvariantViolation(format!(
                "{} tokens held for {} slots",
                held.len(),
                count
            )));
        }
        held.sort_unstable();
        if !held.iter().eq(self.target.iter()) {
            return Err(MoveError::InvariantViolation(
                "held tokens differ from the round's token set".to_string(),
            ));
        }

        for (i, (slot, &correct)) in self.slots.iter().zip(self.correctness.iter()).enumerate() {
            if correct != (*slot == Some(self.target[i])) {
                return Err(MoveError::InvariantViolation(format!(
                    "stale correctness flag at slot {}",
                    i
                )));
            }
        }

        Ok(())
    }

    // === Transitions (placement engine only) ===

    /// Position of a token in the pool.
    pub(crate) fn pool_position(&self, token: Token) -> Option<usize> {
        self.pool.index_of(&token)
    }

    /// Remove the pool token at `index`.
    pub(crate) fn take_from_pool(&mut self, index: usize) -> Token {
        self.pool.remove(index)
    }

    /// Append a token to the pool.
    pub(crate) fn return_to_pool(&mut self, token: Token) {
        self.pool.push_back(token);
    }

    /// Replace a slot's occupant, returning the previous one.
    pub(crate) fn set_slot(&mut self, slot: SlotIndex, occupant: Option<Token>) -> Option<Token> {
        self.slots.set(slot.index(), occupant)
    }

    /// Recompute every correctness flag from the slots.
    pub(crate) fn recompute_correctness(&mut self) {
        self.correctness = self
            .slots
            .iter()
            .zip(self.target.iter())
            .map(|(slot, &target)| *slot == Some(target))
            .collect();
    }

    /// Count one accepted move.
    pub(crate) fn count_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Empty every slot and reshuffle all tokens into the pool.
    ///
    /// Target and attempts are kept.
    pub(crate) fn clear_positions(&mut self, rng: &mut RoundRng) {
        let mut tokens: Vec<Token> = self.tokens().collect();
        rng.shuffle(&mut tokens);

        let count = self.slot_count();
        self.pool = tokens.into_iter().collect();
        self.slots = std::iter::repeat(None).take(count).collect();
        self.correctness = std::iter::repeat(false).take(count).collect();
    }
}
