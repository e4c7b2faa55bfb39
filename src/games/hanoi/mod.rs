//! Tower of Hanoi: peg store, iterative traversal, contracts and invariants.

mod action;
mod contracts;
mod invariants;
mod ring_count;
mod traversal;
mod types;

pub use action::{MoveEvent, SolveError};
pub use contracts::{Contract, ExpectedRingOnTop, MoveContract, PlacementAllowed};
pub use invariants::{
    HanoiInvariants, Invariant, InvariantSet, InvariantViolation, PegsDescendingInvariant,
    RingsConservedInvariant,
};
pub use ring_count::{InputError, MAX_RINGS, RingCount, expected_moves};
pub use traversal::{MoveTask, Outcome, Phase, Puzzle, Solution, Step, solve};
pub use types::{Peg, PegContents, PegId, Pegs, Ring};
