//! Contract-based validation for ring moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}. Preconditions are checked on every move; postconditions are
//! checked in debug builds.

use super::action::SolveError;
use super::invariants::{HanoiInvariants, InvariantSet};
use super::traversal::{MoveTask, Puzzle};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SolveError>;

    /// Checks postconditions after applying the action.
    fn post(state: &S, action: &A) -> Result<(), SolveError>;
}

/// Precondition: the source peg's top ring is the one the task moves.
pub struct ExpectedRingOnTop;

impl ExpectedRingOnTop {
    /// Fails with `EmptyPeg` or `SizeMismatch`.
    #[instrument(level = "trace", skip(puzzle))]
    pub fn check(task: &MoveTask, puzzle: &Puzzle) -> Result<(), SolveError> {
        match puzzle.pegs().get(task.source).peek() {
            None => Err(SolveError::EmptyPeg {
                expected: task.ring,
                from: task.source,
                to: task.destination,
            }),
            Some(top) if top.size() != task.ring => {
                warn!(expected = task.ring, actual = top.size(), "Size mismatch");
                Err(SolveError::SizeMismatch {
                    expected: task.ring,
                    actual: top.size(),
                    from: task.source,
                    to: task.destination,
                })
            }
            Some(_) => Ok(()),
        }
    }
}

/// Precondition: the destination is empty or topped by a larger ring.
pub struct PlacementAllowed;

impl PlacementAllowed {
    /// Fails with `IllegalPlacement`.
    #[instrument(level = "trace", skip(puzzle))]
    pub fn check(task: &MoveTask, puzzle: &Puzzle) -> Result<(), SolveError> {
        match puzzle.pegs().get(task.destination).peek() {
            Some(top) if top.size() <= task.ring => Err(SolveError::IllegalPlacement {
                ring: task.ring,
                top: top.size(),
                onto: task.destination,
            }),
            _ => Ok(()),
        }
    }
}

/// Contract for the direct move performed by an executing task.
///
/// Preconditions:
/// - The task's ring is on top of its source
/// - The destination accepts it
///
/// Postconditions:
/// - The task's ring is on top of its destination
/// - Every peg is descending and every ring is accounted for
pub struct MoveContract;

impl Contract<Puzzle, MoveTask> for MoveContract {
    fn pre(puzzle: &Puzzle, task: &MoveTask) -> Result<(), SolveError> {
        ExpectedRingOnTop::check(task, puzzle)?;
        PlacementAllowed::check(task, puzzle)?;
        Ok(())
    }

    fn post(puzzle: &Puzzle, task: &MoveTask) -> Result<(), SolveError> {
        let landed = puzzle.pegs().get(task.destination).peek().map(|r| r.size());
        if landed != Some(task.ring) {
            return Err(SolveError::InvariantViolation(format!(
                "Ring {} did not land on {}",
                task.ring, task.destination
            )));
        }

        HanoiInvariants::check_all(puzzle).map_err(|violations| {
            let rules = violations
                .iter()
                .map(|v| v.rule)
                .collect::<Vec<_>>()
                .join("; ");
            SolveError::InvariantViolation(format!("Postcondition failed: {}", rules))
        })
    }
}
