//! Iterative traversal engine.
//!
//! The classic recursion "move k rings source→spare, move ring k
//! source→destination, move k rings spare→destination" is run as a state
//! machine over an explicit stack of [`MoveTask`]s. Each task is visited twice:
//! once to push its first half ([`Phase::Expand`]) and once to move its ring
//! and push its second half ([`Phase::Execute`]). Moves come out in exactly
//! the order the recursive algorithm produces them, and the stack never grows
//! beyond `rings + 1` frames.

use super::action::{MoveEvent, SolveError};
use super::contracts::{Contract, MoveContract};
use super::ring_count::RingCount;
use super::types::{PegContents, PegId, Pegs, Ring};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};

/// Which visit of a task comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// First half not yet pushed.
    Expand,
    /// Ready to move this task's ring and push the second half.
    Execute,
}

/// A pending subproblem: move ring `ring` and every smaller ring above it
/// from `source` to `destination`, using `spare` as temporary storage.
///
/// Roles are relabeled per task; they say nothing about the global start,
/// middle and end pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTask {
    /// Peg the rings leave.
    pub source: PegId,
    /// Temporary peg.
    pub spare: PegId,
    /// Peg the rings arrive on.
    pub destination: PegId,
    /// Size of the ring this task moves directly.
    pub ring: u8,
    /// Next visit.
    pub phase: Phase,
}

impl MoveTask {
    /// The whole-puzzle task for `rings` rings, or `None` if there are none.
    pub fn root(rings: RingCount) -> Option<Self> {
        let top = rings.get().checked_sub(1)?;
        Some(Self::expand(PegId::Start, PegId::Middle, PegId::End, top))
    }

    fn expand(source: PegId, spare: PegId, destination: PegId, ring: u8) -> Self {
        Self {
            source,
            spare,
            destination,
            ring,
            phase: Phase::Expand,
        }
    }

    /// Subproblem moving the smaller rings out of the way, onto the spare.
    pub fn first_half(&self) -> Option<Self> {
        let ring = self.ring.checked_sub(1)?;
        Some(Self::expand(self.source, self.destination, self.spare, ring))
    }

    /// Subproblem moving the smaller rings from the spare onto the ring
    /// this task just placed.
    pub fn second_half(&self) -> Option<Self> {
        let ring = self.ring.checked_sub(1)?;
        Some(Self::expand(self.spare, self.source, self.destination, ring))
    }
}

/// Outcome of one visit to the work stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A task pushed its first half (or had none) and is now waiting to execute.
    Expanded,
    /// A task moved its ring.
    Moved(MoveEvent),
    /// The work stack is empty.
    Done,
}

/// A puzzle session: three pegs, the work stack and the move tally.
///
/// Iterating a `Puzzle` yields every move of the optimal solution. After the
/// first error the iterator is exhausted.
#[derive(Debug)]
pub struct Puzzle {
    rings: RingCount,
    pegs: Pegs,
    tasks: Vec<MoveTask>,
    moves: u64,
    halted: bool,
}

impl Puzzle {
    /// Default peg names, in start, middle, end order.
    pub fn default_names() -> [String; 3] {
        ["A".to_string(), "B".to_string(), "C".to_string()]
    }

    /// Creates a puzzle with the default peg names.
    #[instrument]
    pub fn new(rings: RingCount) -> Self {
        Self::with_names(rings, &Self::default_names())
    }

    /// Creates a puzzle with every ring on the start peg, largest at the
    /// bottom, and the whole-puzzle task on the work stack.
    #[instrument(skip(names))]
    pub fn with_names(rings: RingCount, names: &[String; 3]) -> Self {
        let mut pegs = Pegs::new(names);
        let start = pegs.get_mut(PegId::Start);
        for size in (0..rings.get()).rev() {
            start.push(Ring::new(size));
        }

        let mut tasks = Vec::with_capacity(usize::from(rings.get()) + 1);
        tasks.extend(MoveTask::root(rings));

        debug!(rings = rings.get(), "Puzzle initialized");
        Self {
            rings,
            pegs,
            tasks,
            moves: 0,
            halted: false,
        }
    }

    /// Number of rings in the puzzle.
    pub fn rings(&self) -> RingCount {
        self.rings
    }

    /// The peg store.
    pub fn pegs(&self) -> &Pegs {
        &self.pegs
    }

    pub(super) fn pegs_mut(&mut self) -> &mut Pegs {
        &mut self.pegs
    }

    /// Pending tasks, bottom of the stack first.
    pub fn tasks(&self) -> &[MoveTask] {
        &self.tasks
    }

    /// Moves performed so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Whether the traversal has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.halted || self.tasks.is_empty()
    }

    /// Visits the top of the work stack once.
    ///
    /// Returns [`Step::Done`] once the stack is empty or a previous step failed.
    pub fn step(&mut self) -> Result<Step, SolveError> {
        if self.halted {
            return Ok(Step::Done);
        }
        let Some(task) = self.tasks.last().copied() else {
            return Ok(Step::Done);
        };

        match task.phase {
            Phase::Expand => {
                if let Some(top) = self.tasks.last_mut() {
                    top.phase = Phase::Execute;
                }
                if let Some(child) = task.first_half() {
                    trace!(ring = child.ring, from = %child.source, to = %child.destination, "Expanded");
                    self.tasks.push(child);
                }
                Ok(Step::Expanded)
            }
            Phase::Execute => match self.execute(&task) {
                Ok(event) => {
                    self.tasks.pop();
                    if let Some(child) = task.second_half() {
                        self.tasks.push(child);
                    }
                    Ok(Step::Moved(event))
                }
                Err(err) => {
                    error!(error = %err, moves = self.moves, "Traversal halted");
                    self.halted = true;
                    Err(err)
                }
            },
        }
    }

    /// Moves the task's ring from its source to its destination.
    fn execute(&mut self, task: &MoveTask) -> Result<MoveEvent, SolveError> {
        MoveContract::pre(self, task)?;

        let ring = self
            .pegs
            .get_mut(task.source)
            .pop()
            .ok_or(SolveError::EmptyPeg {
                expected: task.ring,
                from: task.source,
                to: task.destination,
            })?;
        let event = MoveEvent::new(ring.size(), task.source, task.destination);
        self.pegs.get_mut(task.destination).push(ring);
        self.moves += 1;
        trace!(ring = event.ring, from = %event.from, to = %event.to, moves = self.moves, "Moved");

        #[cfg(debug_assertions)]
        MoveContract::post(self, task)?;

        Ok(event)
    }

    /// Runs the traversal to completion, handing every move to `on_move`.
    #[instrument(skip(self, on_move), fields(rings = self.rings.get()))]
    pub fn solve(mut self, mut on_move: impl FnMut(&MoveEvent)) -> Result<Solution, SolveError> {
        for event in self.by_ref() {
            on_move(&event?);
        }
        self.into_solution()
    }

    /// Checks the final position and turns the session into a [`Solution`].
    ///
    /// Fails if the traversal did not run to completion.
    pub fn into_solution(self) -> Result<Solution, SolveError> {
        let expected = self.rings.expected_moves();
        if self.moves != expected {
            return Err(SolveError::InvariantViolation(format!(
                "Expected {} moves, performed {}",
                expected, self.moves
            )));
        }
        let on_end = self.pegs.get(PegId::End).size();
        if on_end != usize::from(self.rings.get()) {
            return Err(SolveError::InvariantViolation(format!(
                "Expected {} rings on {}, found {}",
                self.rings,
                PegId::End,
                on_end
            )));
        }

        info!(moves = self.moves, "Puzzle solved");
        Ok(Solution {
            rings: self.rings,
            moves: self.moves,
            pegs: self.pegs.snapshot(),
        })
    }
}

impl Iterator for Puzzle {
    type Item = Result<MoveEvent, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Ok(Step::Expanded) => continue,
                Ok(Step::Moved(event)) => return Some(Ok(event)),
                Ok(Step::Done) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

impl std::iter::FusedIterator for Puzzle {}

/// A solved puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Solution {
    /// Number of rings.
    rings: RingCount,
    /// Total moves performed.
    moves: u64,
    /// Final contents of each peg, in start, middle, end order.
    pegs: Vec<PegContents>,
}

/// Result of a solve request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Zero rings: the engine was not run.
    NothingToSolve,
    /// The puzzle was solved.
    Solved(Solution),
}

impl Outcome {
    /// Total moves performed; zero when there was nothing to solve.
    pub fn moves(&self) -> u64 {
        match self {
            Outcome::NothingToSolve => 0,
            Outcome::Solved(solution) => *solution.moves(),
        }
    }

    /// The solution, if the engine ran.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::NothingToSolve => None,
            Outcome::Solved(solution) => Some(solution),
        }
    }
}

/// Solves a puzzle of `rings` rings, reporting each move to `on_move`.
///
/// Zero rings short-circuits to [`Outcome::NothingToSolve`] without running
/// the engine.
#[instrument(skip(names, on_move))]
pub fn solve(
    rings: RingCount,
    names: &[String; 3],
    on_move: impl FnMut(&MoveEvent),
) -> Result<Outcome, SolveError> {
    if rings.is_zero() {
        info!("Nothing to solve");
        return Ok(Outcome::NothingToSolve);
    }
    Puzzle::with_names(rings, names)
        .solve(on_move)
        .map(Outcome::Solved)
}
