//! One narrated solve, from ring count to final report.

use crate::error::HanoiError;
use crate::games::hanoi::{Outcome, Puzzle, RingCount};
use crate::narration::{Format, Narrator};
use crate::narration_config::NarrationConfig;
use std::io::Write;
use tracing::{info, instrument};

/// Solves `rings` and narrates every move and the final report to `out`.
///
/// Move lines are written as the traversal produces them. If the traversal
/// hits corrupted state, nothing further is written and the error is
/// returned.
#[instrument(skip(config, out))]
pub fn run<W: Write>(
    rings: RingCount,
    config: &NarrationConfig,
    format: Format,
    out: W,
) -> Result<Outcome, HanoiError> {
    config.validate()?;
    let mut narrator = Narrator::new(out, format, config.clone());

    if rings.is_zero() {
        info!("Nothing to solve");
        narrator.narrate_outcome(&Outcome::NothingToSolve)?;
        return Ok(Outcome::NothingToSolve);
    }

    let mut puzzle = Puzzle::with_names(rings, config.peg_names());
    for event in puzzle.by_ref() {
        narrator.narrate_move(&event?)?;
    }
    let outcome = Outcome::Solved(puzzle.into_solution()?);
    narrator.narrate_outcome(&outcome)?;

    info!(moves = outcome.moves(), "Run complete");
    Ok(outcome)
}

/// Parses `input` as a ring count and runs it.
#[instrument(skip(config, out))]
pub fn run_str<W: Write>(
    input: &str,
    config: &NarrationConfig,
    format: Format,
    out: W,
) -> Result<Outcome, HanoiError> {
    let rings: RingCount = input.parse()?;
    run(rings, config, format, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_peg_names_used_throughout() {
        let config = NarrationConfig::from_toml(r#"peg_names = ["left", "mid", "right"]"#)
            .expect("valid config");
        let mut out = Vec::new();
        let outcome = run(RingCount::new(1).expect("valid"), &config, Format::Text, &mut out)
            .expect("solves");
        assert_eq!(outcome.moves(), 1);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Moving ring 0 from left to right."));
        assert!(text.contains("Rings on pillar right (top to bottom): 0"));
    }

    #[test]
    fn test_zero_prints_nothing_to_solve() {
        let mut out = Vec::new();
        let outcome = run_str("0", &NarrationConfig::default(), Format::Text, &mut out)
            .expect("ok");
        assert_eq!(outcome, Outcome::NothingToSolve);
        assert!(String::from_utf8(out).expect("utf8").starts_with("There's nothing to solve"));
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let mut out = Vec::new();
        let err = run_str("65", &NarrationConfig::default(), Format::Text, &mut out)
            .expect_err("out of range");
        assert!(matches!(err, HanoiError::Input(_)));
        assert!(!err.is_defect());
        assert!(out.is_empty());
    }
}
