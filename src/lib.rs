//! Strictly Hanoi library - an iterative Tower of Hanoi solver
//!
//! The solver runs the classic recursive algorithm as a state machine over
//! an explicit work stack, so recursion depth never depends on the ring count.
//!
//! # Architecture
//!
//! - **Games**: peg store, traversal engine, move contracts and invariants
//! - **Narration**: text or JSON rendering of moves and the final report
//! - **Session**: one narrated solve from ring count to report
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Outcome, Puzzle, RingCount};
//!
//! # fn example() -> anyhow::Result<()> {
//! let rings: RingCount = "3".parse()?;
//! let mut moves = Vec::new();
//! let solution = Puzzle::new(rings).solve(|event| moves.push(*event))?;
//!
//! assert_eq!(moves.len(), 7);
//! assert_eq!(*solution.moves(), 7);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod games;
mod narration;
mod narration_config;
mod session;

// Crate-level exports - Errors
pub use error::HanoiError;

// Crate-level exports - Configuration
pub use narration_config::{ConfigError, NarrationConfig};

// Crate-level exports - Narration
pub use narration::{Format, NOTHING_TO_SOLVE, Narrator};

// Crate-level exports - Session
pub use session::{run, run_str};

// Crate-level exports - Game types (hanoi)
pub use games::hanoi::{
    Contract, ExpectedRingOnTop, HanoiInvariants, InputError, Invariant, InvariantSet,
    InvariantViolation, MAX_RINGS, MoveContract, MoveEvent, MoveTask, Outcome, Peg,
    PegContents, PegId, Pegs, PegsDescendingInvariant, Phase, PlacementAllowed, Puzzle, Ring,
    RingCount, RingsConservedInvariant, Solution, SolveError, Step, expected_moves, solve,
};
