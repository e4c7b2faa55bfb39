//! Core domain types for the Tower of Hanoi.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the three fixed pegs.
///
/// Pegs are addressed by identity, never by contents. Relabeling the roles of
/// a subproblem permutes `PegId`s and leaves the rings where they are.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum PegId {
    /// The peg holding every ring when the puzzle starts.
    #[display("start")]
    Start,
    /// The spare peg of the whole puzzle.
    #[display("middle")]
    Middle,
    /// The peg every ring must end on.
    #[display("end")]
    End,
}

impl PegId {
    /// Position of this peg in the fixed peg array.
    pub fn index(self) -> usize {
        match self {
            PegId::Start => 0,
            PegId::Middle => 1,
            PegId::End => 2,
        }
    }
}

/// A single ring.
///
/// Neither `Clone` nor `Copy`. A ring is owned by exactly one peg and
/// changes pegs by value.
#[derive(Debug, PartialEq, Eq)]
pub struct Ring {
    size: u8,
}

impl Ring {
    pub(super) fn new(size: u8) -> Self {
        Self { size }
    }

    /// Size of the ring, 0 being the smallest.
    pub fn size(&self) -> u8 {
        self.size
    }
}

/// A named LIFO stack of rings.
#[derive(Debug)]
pub struct Peg {
    name: String,
    rings: Vec<Ring>,
}

impl Peg {
    /// Creates an empty peg.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            rings: Vec::new(),
        }
    }

    /// Display name of the peg.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Places a ring on top. The store itself does not check sizes.
    pub fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Removes the top ring, or `None` if the peg is empty.
    pub fn pop(&mut self) -> Option<Ring> {
        self.rings.pop()
    }

    /// Top ring without removing it.
    pub fn peek(&self) -> Option<&Ring> {
        self.rings.last()
    }

    /// Number of rings on the peg.
    pub fn size(&self) -> usize {
        self.rings.len()
    }

    /// Whether the peg holds no rings.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Ring sizes from top to bottom.
    pub fn sizes_top_down(&self) -> Vec<u8> {
        self.rings.iter().rev().map(Ring::size).collect()
    }

    /// Ring sizes from bottom to top.
    pub fn sizes_bottom_up(&self) -> impl Iterator<Item = u8> + '_ {
        self.rings.iter().map(Ring::size)
    }
}

/// The three pegs of one puzzle.
#[derive(Debug)]
pub struct Pegs {
    pegs: [Peg; 3],
}

impl Pegs {
    /// Creates three empty pegs with the given display names,
    /// in start, middle, end order.
    #[instrument(skip(names))]
    pub fn new(names: &[String; 3]) -> Self {
        Self {
            pegs: [
                Peg::new(&names[0]),
                Peg::new(&names[1]),
                Peg::new(&names[2]),
            ],
        }
    }

    /// Returns the peg with the given identity.
    pub fn get(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    pub(super) fn get_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.index()]
    }

    /// Iterates `(id, peg)` in start, middle, end order.
    pub fn iter(&self) -> impl Iterator<Item = (PegId, &Peg)> {
        PegId::iter().map(move |id| (id, self.get(id)))
    }

    /// Total rings across all pegs.
    pub fn ring_count(&self) -> usize {
        self.pegs.iter().map(Peg::size).sum()
    }

    /// Final contents as owned snapshots.
    pub fn snapshot(&self) -> Vec<PegContents> {
        self.iter()
            .map(|(id, peg)| PegContents {
                peg: id,
                name: peg.name().to_string(),
                top_down: peg.sizes_top_down(),
            })
            .collect()
    }
}

/// Snapshot of one peg, detached from the puzzle that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegContents {
    /// Which peg.
    pub peg: PegId,
    /// Display name of the peg.
    pub name: String,
    /// Ring sizes, top ring first.
    pub top_down: Vec<u8>,
}
