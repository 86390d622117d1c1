//! Placement engine integration tests.
//!
//! These drive rounds built by the initializer through the public API and
//! check the resolution rules and the evaluator end to end.

use number_train::core::{Move, MoveError, Resolution, RoundRng, RoundState, SlotIndex, Token};
use number_train::placement::{resolve, PlacementEngine};
use number_train::round::initialize;
use number_train::rules::{evaluate, RoundResult};

fn t(value: i64) -> Token {
    Token::new(value)
}

fn s(index: usize) -> SlotIndex {
    SlotIndex::new(index)
}

/// A round whose target is exactly [1, 2, 3].
fn one_two_three(seed: u64) -> PlacementEngine {
    let state = initialize(1, 3, 3, &mut RoundRng::new(seed)).unwrap();
    assert_eq!(state.target().iter().copied().collect::<Vec<_>>(), vec![t(1), t(2), t(3)]);
    PlacementEngine::new(state)
}

// =============================================================================
// Resolution rules
// =============================================================================

/// Self-move leaves the state bit-for-bit unchanged.
#[test]
fn test_self_move_idempotent() {
    let mut engine = one_two_three(1);
    engine.place(Move::from_pool(s(0), t(2))).unwrap();
    let before = engine.state().clone();

    let (next, signal) = resolve(engine.state(), Move::between(s(0), s(0), t(2))).unwrap();

    assert_eq!(next, before);
    assert_eq!(signal.resolution, Resolution::Unchanged);
    assert_eq!(next.attempts(), 1);
}

/// Slot-to-slot move swaps occupants and leaves the pool alone.
#[test]
fn test_swap_correctness() {
    let mut engine = one_two_three(2);
    engine.place(Move::from_pool(s(0), t(3))).unwrap(); // a = X
    engine.place(Move::from_pool(s(2), t(1))).unwrap(); // b = Y
    let pool = engine.state().pool().clone();

    engine.place(Move::between(s(0), s(2), t(3))).unwrap();

    assert_eq!(engine.state().slot(s(0)), Some(t(1)));
    assert_eq!(engine.state().slot(s(2)), Some(t(3)));
    assert_eq!(engine.state().pool(), &pool);
}

/// Pool-to-occupied-slot move replaces and returns the occupant.
#[test]
fn test_replacement_correctness() {
    let mut engine = one_two_three(3);
    engine.place(Move::from_pool(s(1), t(3))).unwrap();

    let signal = engine.place(Move::from_pool(s(1), t(2))).unwrap();

    assert_eq!(signal.resolution, Resolution::Replaced { displaced: t(3) });
    assert_eq!(engine.state().slot(s(1)), Some(t(2)));
    assert!(engine.state().in_pool(t(3)));
    assert!(!engine.state().in_pool(t(2)));
}

/// Invalid origins are rejected without touching state.
#[test]
fn test_invalid_moves_leave_state_untouched() {
    let mut engine = one_two_three(4);
    engine.place(Move::from_pool(s(0), t(1))).unwrap();
    let before = engine.state().clone();

    assert_eq!(
        engine.place(Move::from_pool(s(1), t(1))),
        Err(MoveError::TokenNotInPool(t(1)))
    );
    assert_eq!(
        engine.place(Move::between(s(1), s(2), t(2))),
        Err(MoveError::TokenNotInSlot { token: t(2), slot: s(1) })
    );
    assert_eq!(
        engine.place(Move::from_pool(s(3), t(2))),
        Err(MoveError::SlotOutOfRange { slot: s(3), slot_count: 3 })
    );

    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Evaluation
// =============================================================================

/// Correct order in any move order classifies as solved after 3 attempts.
#[test]
fn test_solved_classification_any_order() {
    let orders: [[(usize, i64); 3]; 3] = [
        [(0, 1), (1, 2), (2, 3)],
        [(2, 3), (0, 1), (1, 2)],
        [(1, 2), (2, 3), (0, 1)],
    ];

    for (seed, order) in orders.iter().enumerate() {
        let mut engine = one_two_three(seed as u64);
        for (i, &(slot, value)) in order.iter().enumerate() {
            engine.place(Move::from_pool(s(slot), t(value))).unwrap();
            if i < 2 {
                assert_eq!(evaluate(engine.state()), None);
            }
        }
        assert_eq!(evaluate(engine.state()), Some(RoundResult::Solved));
        assert_eq!(engine.state().attempts(), 3);
    }
}

/// Wrong order with every slot filled classifies as failed.
#[test]
fn test_failed_classification() {
    let mut engine = one_two_three(9);
    engine.place(Move::from_pool(s(0), t(3))).unwrap();
    engine.place(Move::from_pool(s(1), t(1))).unwrap();
    engine.place(Move::from_pool(s(2), t(2))).unwrap();

    assert!(engine.state().is_filled_wrong());
    assert_eq!(evaluate(engine.state()), Some(RoundResult::Failed));
}

/// A failed train can be fixed with swaps alone.
#[test]
fn test_swaps_repair_failed_train() {
    let mut engine = one_two_three(10);
    engine.place(Move::from_pool(s(0), t(3))).unwrap();
    engine.place(Move::from_pool(s(1), t(1))).unwrap();
    engine.place(Move::from_pool(s(2), t(2))).unwrap();

    // [3, 1, 2] -> [1, 3, 2] -> [1, 2, 3]
    engine.place(Move::between(s(1), s(0), t(1))).unwrap();
    let signal = engine.place(Move::between(s(2), s(1), t(2))).unwrap();

    assert!(signal.is_correct);
    assert_eq!(evaluate(engine.state()), Some(RoundResult::Solved));
    assert_eq!(engine.state().attempts(), 5);
    assert!(engine.state().pool().is_empty());
}

/// Reset keeps the tokens and target, clears slots, keeps attempts.
#[test]
fn test_reset_positions_after_failure() {
    let mut engine = one_two_three(11);
    engine.place(Move::from_pool(s(0), t(2))).unwrap();
    engine.place(Move::from_pool(s(1), t(3))).unwrap();
    engine.place(Move::from_pool(s(2), t(1))).unwrap();
    let target = engine.state().target().clone();

    engine.reset_positions(&mut RoundRng::new(11));

    let state: &RoundState = engine.state();
    assert_eq!(state.target(), &target);
    assert_eq!(state.occupied_count(), 0);
    assert_eq!(state.pool().len(), 3);
    assert_eq!(state.attempts(), 3);
    assert_eq!(evaluate(state), None);
}
