//! Move resolution for the placement engine.
//!
//! `resolve` is the pure transition: given a state and a move it returns the
//! next state and the feedback signal, or rejects the move. `PlacementEngine`
//! owns a `RoundState` and commits successful transitions.
//!
//! ## Resolution rules
//!
//! | origin | target slot | result |
//! |--------|-------------|--------|
//! | pool   | empty       | token placed |
//! | pool   | occupied    | occupant returns to pool, token placed |
//! | slot a | slot b      | occupants of a and b swap |
//! | slot a | slot a      | no-op, no attempt |
//!
//! A move is only rejected when the token is not where the move claims it
//! is, or a slot index is out of range.

use tracing::{debug, instrument, warn};

use crate::core::{Move, MoveError, MoveSignal, Resolution, RoundRng, RoundState, SlotIndex};

/// Apply a move to a state, producing the next state.
///
/// The input state is never modified; on error the caller keeps using it.
#[instrument(level = "debug", skip_all, fields(mv = %mv, attempts = state.attempts()))]
pub fn resolve(state: &RoundState, mv: Move) -> Result<(RoundState, MoveSignal), MoveError> {
    let slot_count = state.slot_count();
    check_slot(mv.target, slot_count)?;
    if let Some(source) = mv.source {
        check_slot(source, slot_count)?;
    }

    if mv.is_self_move() {
        if state.slot(mv.target) != Some(mv.token) {
            return Err(MoveError::TokenNotInSlot {
                token: mv.token,
                slot: mv.target,
            });
        }
        let signal = MoveSignal {
            slot: mv.target,
            is_correct: state.is_correct(mv.target),
            resolution: Resolution::Unchanged,
        };
        return Ok((state.clone(), signal));
    }

    let mut next = state.clone();
    let resolution = match mv.source {
        None => {
            let index = next
                .pool_position(mv.token)
                .ok_or(MoveError::TokenNotInPool(mv.token))?;
            let token = next.take_from_pool(index);
            match next.set_slot(mv.target, Some(token)) {
                Some(displaced) => {
                    next.return_to_pool(displaced);
                    Resolution::Replaced { displaced }
                }
                None => Resolution::Placed,
            }
        }
        Some(source) => {
            if next.slot(source) != Some(mv.token) {
                return Err(MoveError::TokenNotInSlot {
                    token: mv.token,
                    slot: source,
                });
            }
            let returned = next.set_slot(mv.target, Some(mv.token));
            next.set_slot(source, returned);
            Resolution::Swapped { returned }
        }
    };

    next.recompute_correctness();
    next.count_attempt();
    next.check_invariants()?;

    let signal = MoveSignal {
        slot: mv.target,
        is_correct: next.is_correct(mv.target),
        resolution,
    };
    Ok((next, signal))
}

fn check_slot(slot: SlotIndex, slot_count: usize) -> Result<(), MoveError> {
    if slot.is_valid(slot_count) {
        Ok(())
    } else {
        Err(MoveError::SlotOutOfRange { slot, slot_count })
    }
}

/// Return every token to a freshly shuffled pool.
///
/// Keeps the target sequence and the attempt count.
#[instrument(level = "debug", skip_all)]
pub fn reset_positions(state: &RoundState, rng: &mut RoundRng) -> RoundState {
    let mut next = state.clone();
    next.clear_positions(rng);
    next
}

/// Owner of a round's state.
///
/// ## Usage
///
/// ```
/// use number_train::core::{Move, RoundState, SlotIndex, Token};
/// use number_train::placement::PlacementEngine;
///
/// let state = RoundState::new(vec![Token::new(2), Token::new(1)]).unwrap();
/// let mut engine = PlacementEngine::new(state);
///
/// let signal = engine.place(Move::from_pool(SlotIndex::new(0), Token::new(1))).unwrap();
/// assert!(signal.is_correct);
/// assert_eq!(engine.state().attempts(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PlacementEngine {
    state: RoundState,
}

impl PlacementEngine {
    /// Take ownership of a round state.
    #[must_use]
    pub fn new(state: RoundState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Give the state back.
    #[must_use]
    pub fn into_state(self) -> RoundState {
        self.state
    }

    /// Apply a move. On error the state is unchanged.
    pub fn place(&mut self, mv: Move) -> Result<MoveSignal, MoveError> {
        match resolve(&self.state, mv) {
            Ok((next, signal)) => {
                if signal.accepted() {
                    debug!(
                        mv = %mv,
                        correct = signal.is_correct,
                        attempts = next.attempts(),
                        "move accepted"
                    );
                }
                self.state = next;
                Ok(signal)
            }
            Err(err) => {
                warn!(mv = %mv, error = %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Return every token to the pool, keeping the attempt count.
    pub fn reset_positions(&mut self, rng: &mut RoundRng) {
        self.state = reset_positions(&self.state, rng);
        debug!(attempts = self.state.attempts(), "positions reset");
    }
}
