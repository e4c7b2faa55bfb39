//! Narration of a solution, as plain text or JSON lines.

use crate::games::hanoi::{MoveEvent, Outcome, Solution};
use crate::narration_config::NarrationConfig;
use serde::Serialize;
use std::io::{self, Write};
use tracing::instrument;

/// Message printed when there are no rings.
pub const NOTHING_TO_SOLVE: &str =
    "There's nothing to solve with just a solid plate with 3 fixed sticks.";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// Human-readable sentences.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Move {
        ring: u8,
        from: &'a str,
        to: &'a str,
    },
    Summary {
        rings: u8,
        moves: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pegs: Option<Vec<PegRecord<'a>>>,
    },
    NothingToSolve {
        moves: u64,
    },
}

#[derive(Serialize)]
struct PegRecord<'a> {
    name: &'a str,
    top_down: &'a [u8],
}

/// Writes move events and the final report to an output stream.
pub struct Narrator<W: Write> {
    out: W,
    format: Format,
    config: NarrationConfig,
}

impl<W: Write> Narrator<W> {
    /// Creates a narrator writing to `out`.
    #[instrument(skip(out, config))]
    pub fn new(out: W, format: Format, config: NarrationConfig) -> Self {
        Self { out, format, config }
    }

    /// Narrates one move, unless per-move output is switched off.
    pub fn narrate_move(&mut self, event: &MoveEvent) -> io::Result<()> {
        if !self.config.show_moves() {
            return Ok(());
        }
        let names = self.config.peg_names();
        let from = names[event.from.index()].as_str();
        let to = names[event.to.index()].as_str();
        match self.format {
            Format::Text => {
                writeln!(self.out, "Moving ring {} from {} to {}.", event.ring, from, to)
            }
            Format::Json => {
                let record = Record::Move {
                    ring: event.ring,
                    from,
                    to,
                };
                let line = serde_json::to_string(&record)?;
                writeln!(self.out, "{}", line)
            }
        }
    }

    /// Narrates the final report and flushes the stream.
    #[instrument(skip(self, outcome))]
    pub fn narrate_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match (self.format, outcome) {
            (Format::Text, Outcome::NothingToSolve) => writeln!(self.out, "{}", NOTHING_TO_SOLVE)?,
            (Format::Text, Outcome::Solved(solution)) => self.text_summary(solution)?,
            (Format::Json, Outcome::NothingToSolve) => {
                let line = serde_json::to_string(&Record::NothingToSolve { moves: 0 })?;
                writeln!(self.out, "{}", line)?;
            }
            (Format::Json, Outcome::Solved(solution)) => {
                let pegs = self.config.show_final_pegs().then(|| {
                    solution
                        .pegs()
                        .iter()
                        .map(|peg| PegRecord {
                            name: &peg.name,
                            top_down: &peg.top_down,
                        })
                        .collect()
                });
                let record = Record::Summary {
                    rings: solution.rings().get(),
                    moves: *solution.moves(),
                    pegs,
                };
                let line = serde_json::to_string(&record)?;
                writeln!(self.out, "{}", line)?;
            }
        }
        self.out.flush()
    }

    fn text_summary(&mut self, solution: &Solution) -> io::Result<()> {
        if *self.config.show_final_pegs() {
            writeln!(self.out)?;
            for peg in solution.pegs() {
                let sizes = peg
                    .top_down
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.out, "Rings on pillar {} (top to bottom): {}", peg.name, sizes)?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "Total steps: {}", solution.moves())
    }

    /// Consumes the narrator, returning the stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::{Puzzle, RingCount};

    fn narrate(rings: u64, format: Format, config: NarrationConfig) -> String {
        let mut narrator = Narrator::new(Vec::new(), format, config);
        let puzzle = Puzzle::new(RingCount::new(rings).expect("valid"));
        let solution = puzzle
            .solve(|event| narrator.narrate_move(event).expect("write"))
            .expect("solves");
        narrator
            .narrate_outcome(&Outcome::Solved(solution))
            .expect("write");
        String::from_utf8(narrator.into_inner()).expect("utf8")
    }

    #[test]
    fn test_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert_eq!(Format::Text.to_string(), "text");
    }

    #[test]
    fn test_text_narration() {
        let text = narrate(1, Format::Text, NarrationConfig::default());
        assert_eq!(
            text,
            "Moving ring 0 from A to C.\n\
             \n\
             Rings on pillar A (top to bottom): \n\
             Rings on pillar B (top to bottom): \n\
             Rings on pillar C (top to bottom): 0\n\
             \n\
             Total steps: 1\n"
        );
    }

    #[test]
    fn test_quiet_text_narration() {
        let config = NarrationConfig::default()
            .with_show_moves(false)
            .with_show_final_pegs(false);
        assert_eq!(narrate(4, Format::Text, config), "Total steps: 15\n");
    }

    #[test]
    fn test_json_narration() {
        let json = narrate(2, Format::Json, NarrationConfig::default());
        let lines: Vec<serde_json::Value> = json
            .lines()
            .map(|l| serde_json::from_str(l).expect("valid json"))
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["type"], "move");
        assert_eq!(lines[0]["from"], "A");
        assert_eq!(lines[0]["to"], "B");
        assert_eq!(lines[3]["type"], "summary");
        assert_eq!(lines[3]["moves"], 3);
        assert_eq!(lines[3]["pegs"][2]["top_down"], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_nothing_to_solve_text() {
        let mut narrator = Narrator::new(Vec::new(), Format::Text, NarrationConfig::default());
        narrator
            .narrate_outcome(&Outcome::NothingToSolve)
            .expect("write");
        let text = String::from_utf8(narrator.into_inner()).expect("utf8");
        assert_eq!(text.trim_end(), NOTHING_TO_SOLVE);
    }
}
