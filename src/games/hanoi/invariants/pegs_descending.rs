//! Descending pegs invariant: no ring ever rests on a smaller one.

use super::super::Puzzle;
use super::Invariant;

/// Invariant: every peg is strictly size-descending from bottom to top.
pub struct PegsDescendingInvariant;

impl Invariant<Puzzle> for PegsDescendingInvariant {
    const RULE: &'static str = "Every peg is strictly descending from bottom to top";

    fn holds(puzzle: &Puzzle) -> bool {
        puzzle.pegs().iter().all(|(_, peg)| {
            let sizes: Vec<u8> = peg.sizes_bottom_up().collect();
            sizes.windows(2).all(|pair| pair[0] > pair[1])
        })
    }
}
