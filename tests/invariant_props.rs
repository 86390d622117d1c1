//! Property tests over random move sequences.
//!
//! Moves are drawn from raw indices and mapped onto whatever is currently
//! legal (or deliberately illegal), so every sequence stays meaningful as
//! the state evolves. Legal gestures must always be accepted; only the
//! deliberately broken ones may be rejected.

use proptest::prelude::*;

use number_train::core::{Move, MoveError, MoveSignal, Resolution, RoundRng, RoundState, SlotIndex};
use number_train::placement::{resolve, PlacementEngine};
use number_train::round::initialize;
use number_train::rules::{evaluate, RoundResult};

/// Raw move choice, interpreted against the current state.
#[derive(Clone, Copy, Debug)]
enum Choice {
    FromPool { pick: usize, target: usize },
    BetweenSlots { pick: usize, target: usize },
    SelfMove { pick: usize },
    OutOfRange { pick: usize },
}

impl Choice {
    /// True for gestures a player can actually make.
    fn is_legal(self) -> bool {
        !matches!(self, Choice::OutOfRange { .. })
    }
}

fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![
        4 => (any::<usize>(), any::<usize>()).prop_map(|(pick, target)| Choice::FromPool { pick, target }),
        4 => (any::<usize>(), any::<usize>()).prop_map(|(pick, target)| Choice::BetweenSlots { pick, target }),
        1 => any::<usize>().prop_map(|pick| Choice::SelfMove { pick }),
        1 => any::<usize>().prop_map(|pick| Choice::OutOfRange { pick }),
    ]
}

fn to_move(state: &RoundState, choice: Choice) -> Option<Move> {
    let n = state.slot_count();
    let occupied: Vec<usize> = (0..n).filter(|&i| state.slots()[i].is_some()).collect();
    match choice {
        Choice::FromPool { pick, target } => {
            if state.pool().is_empty() {
                return None;
            }
            let token = state.pool()[pick % state.pool().len()];
            Some(Move::from_pool(SlotIndex::new(target % n), token))
        }
        Choice::BetweenSlots { pick, target } => {
            if occupied.is_empty() {
                return None;
            }
            let source = occupied[pick % occupied.len()];
            let token = state.slots()[source]?;
            Some(Move::between(SlotIndex::new(source), SlotIndex::new(target % n), token))
        }
        Choice::SelfMove { pick } => {
            if occupied.is_empty() {
                return None;
            }
            let slot = occupied[pick % occupied.len()];
            let token = state.slots()[slot]?;
            Some(Move::between(SlotIndex::new(slot), SlotIndex::new(slot), token))
        }
        Choice::OutOfRange { pick } => {
            let token = state.target()[pick % n];
            Some(Move::from_pool(SlotIndex::new(n + pick % 3), token))
        }
    }
}

/// The resolution a legal move of this kind must produce.
fn resolution_matches(choice: Choice, mv: Move, signal: &MoveSignal) -> bool {
    match (choice, signal.resolution) {
        (Choice::FromPool { .. }, Resolution::Placed | Resolution::Replaced { .. }) => true,
        (Choice::BetweenSlots { .. }, Resolution::Swapped { .. }) => !mv.is_self_move(),
        (Choice::BetweenSlots { .. }, Resolution::Unchanged) => mv.is_self_move(),
        (Choice::SelfMove { .. }, Resolution::Unchanged) => true,
        _ => false,
    }
}

proptest! {
    /// Every state reachable through `place` satisfies the occupancy and
    /// correctness invariants, legal gestures are never rejected, and
    /// attempts grow by one per accepted move.
    #[test]
    fn prop_invariants_hold(
        seed in any::<u64>(),
        count in 1usize..8,
        choices in prop::collection::vec(choice(), 0..60),
    ) {
        let state = initialize(-20, 20, count, &mut RoundRng::new(seed)).unwrap();
        let mut engine = PlacementEngine::new(state);

        for c in choices {
            let Some(mv) = to_move(engine.state(), c) else { continue };
            let before = engine.state().clone();
            let outcome = engine.place(mv);

            if !c.is_legal() {
                let is_out_of_range = matches!(outcome, Err(MoveError::SlotOutOfRange { .. }));
                prop_assert!(is_out_of_range, "expected SlotOutOfRange, got {:?}", outcome);
                prop_assert_eq!(engine.state(), &before);
                continue;
            }

            let signal = match outcome {
                Ok(signal) => signal,
                Err(err) => {
                    return Err(TestCaseError::fail(format!("legal move {} rejected: {}", mv, err)));
                }
            };
            prop_assert!(resolution_matches(c, mv, &signal), "{:?} resolved as {:?}", c, signal);

            let after = engine.state();
            prop_assert!(after.check_invariants().is_ok());
            prop_assert_eq!(after.pool().len() + after.occupied_count(), count);
            prop_assert_eq!(signal.is_correct, after.is_correct(mv.target));

            if signal.accepted() {
                prop_assert_eq!(after.attempts(), before.attempts() + 1);
                prop_assert_eq!(after.slot(mv.target), Some(mv.token));
            } else {
                prop_assert_eq!(after, &before);
            }
        }
    }

    /// `resolve` never mutates its input and agrees with the evaluator.
    #[test]
    fn prop_resolve_is_pure(
        seed in any::<u64>(),
        choices in prop::collection::vec(choice(), 1..30),
    ) {
        let mut state = initialize(0, 9, 4, &mut RoundRng::new(seed)).unwrap();

        for c in choices {
            let Some(mv) = to_move(&state, c) else { continue };
            let snapshot = state.clone();
            let outcome = resolve(&state, mv);
            prop_assert_eq!(&state, &snapshot);

            match outcome {
                Ok((next, _)) => {
                    prop_assert!(c.is_legal(), "out-of-range move {} accepted", mv);
                    match evaluate(&next) {
                        None => { prop_assert!(!next.is_filled()); }
                        Some(RoundResult::Solved) => { prop_assert!(next.is_solved()); }
                        Some(RoundResult::Failed) => { prop_assert!(next.is_filled_wrong()); }
                    }
                    state = next;
                }
                Err(err) => {
                    prop_assert!(!c.is_legal(), "legal move {} rejected: {}", mv, err);
                }
            }
        }
    }

    /// Resetting keeps the token set and attempts and empties every slot.
    #[test]
    fn prop_reset_restores_pool(
        seed in any::<u64>(),
        choices in prop::collection::vec(choice(), 0..20),
    ) {
        let mut rng = RoundRng::new(seed);
        let state = initialize(0, 30, 5, &mut rng).unwrap();
        let mut engine = PlacementEngine::new(state);
        for c in choices {
            if let Some(mv) = to_move(engine.state(), c) {
                let outcome = engine.place(mv);
                prop_assert_eq!(outcome.is_ok(), c.is_legal(), "{:?} -> {:?}", mv, outcome);
            }
        }
        let attempts = engine.state().attempts();
        let target = engine.state().target().clone();

        engine.reset_positions(&mut rng);

        let state = engine.state();
        prop_assert_eq!(state.occupied_count(), 0);
        prop_assert_eq!(state.pool().len(), 5);
        prop_assert_eq!(state.attempts(), attempts);
        prop_assert_eq!(state.target(), &target);
        prop_assert!(state.check_invariants().is_ok());
    }
}
