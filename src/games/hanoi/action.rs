//! First-class move events and engine errors.
//!
//! A move event is the record of one completed ring relocation. Events are
//! produced by the traversal in chronological order and never mutated.

use super::PegId;
use serde::{Deserialize, Serialize};

/// A completed move of one ring from one peg to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Size of the moved ring.
    pub ring: u8,
    /// Peg the ring was taken from.
    pub from: PegId,
    /// Peg the ring was placed on.
    pub to: PegId,
}

impl MoveEvent {
    /// Creates a new move event.
    pub fn new(ring: u8, from: PegId, to: PegId) -> Self {
        Self { ring, from, to }
    }

    /// Returns the size of the moved ring.
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Returns the source peg.
    pub fn source(&self) -> PegId {
        self.from
    }

    /// Returns the destination peg.
    pub fn destination(&self) -> PegId {
        self.to
    }
}

impl std::fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ring {}: {} -> {}", self.ring, self.from, self.to)
    }
}

/// Corrupted traversal state detected while solving.
///
/// Every variant is a defect: a well-formed traversal never produces one.
/// Once returned, the traversal emits no further events.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SolveError {
    /// The source peg had no ring to move.
    #[display(
        "No ring to move: expected ring {} on {} for a move to {}",
        expected,
        from,
        to
    )]
    EmptyPeg {
        /// Ring the task was responsible for.
        expected: u8,
        /// Peg that was empty.
        from: PegId,
        /// Intended destination.
        to: PegId,
    },

    /// The top ring of the source peg was not the one the task expected.
    #[display(
        "Size mismatch moving {} -> {}: expected ring {}, found ring {}",
        from,
        to,
        expected,
        actual
    )]
    SizeMismatch {
        /// Ring the task was responsible for.
        expected: u8,
        /// Ring actually on top of the source peg.
        actual: u8,
        /// Source peg.
        from: PegId,
        /// Intended destination.
        to: PegId,
    },

    /// The ring would have been placed on a smaller ring.
    #[display("Cannot place ring {} on ring {} on {}", ring, top, onto)]
    IllegalPlacement {
        /// Ring being placed.
        ring: u8,
        /// Ring currently on top of the destination.
        top: u8,
        /// Destination peg.
        onto: PegId,
    },

    /// A post-move invariant failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = MoveEvent::new(0, PegId::Start, PegId::End);
        assert_eq!(event.to_string(), "ring 0: start -> end");
    }

    #[test]
    fn test_error_names_expected_and_actual() {
        let err = SolveError::SizeMismatch {
            expected: 2,
            actual: 0,
            from: PegId::Start,
            to: PegId::Middle,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected ring 2"));
        assert!(msg.contains("found ring 0"));
        assert!(msg.contains("start -> middle"));
    }
}
