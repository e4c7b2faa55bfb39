//! Ring conservation invariant: rings are never lost or duplicated.

use super::super::Puzzle;
use super::Invariant;

/// Invariant: the pegs together hold exactly the puzzle's rings.
pub struct RingsConservedInvariant;

impl Invariant<Puzzle> for RingsConservedInvariant {
    const RULE: &'static str = "Each ring size appears exactly once across the pegs";

    fn holds(puzzle: &Puzzle) -> bool {
        let expected = usize::from(puzzle.rings().get());
        if puzzle.pegs().ring_count() != expected {
            return false;
        }

        let mut seen = vec![false; expected];
        for (_, peg) in puzzle.pegs().iter() {
            for size in peg.sizes_bottom_up() {
                match seen.get_mut(usize::from(size)) {
                    Some(slot) if !*slot => *slot = true,
                    _ => return false,
                }
            }
        }
        true
    }
}
