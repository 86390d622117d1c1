//! Round evaluation rules.
//!
//! A round is in progress until every slot is occupied. A filled round is
//! `Solved` when every slot holds its target value and `Failed` otherwise.

pub mod evaluator;

pub use evaluator::{evaluate, RoundResult};
