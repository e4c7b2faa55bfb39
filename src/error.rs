//! Crate-level error type.

use crate::games::hanoi::{InputError, SolveError};
use crate::narration_config::ConfigError;
use derive_more::{Display, From};

/// Anything that can stop a run.
#[derive(Debug, Display, From)]
pub enum HanoiError {
    /// Rejected ring count; the engine never ran.
    #[display("{}", _0)]
    Input(InputError),

    /// Corrupted traversal state.
    #[display("Traversal aborted: {}", _0)]
    Solve(SolveError),

    /// Invalid narration configuration.
    #[display("{}", _0)]
    Config(ConfigError),

    /// Writing the narration failed.
    #[display("Failed to write output: {}", _0)]
    Io(std::io::Error),
}

impl HanoiError {
    /// Whether the error is a defect in the engine rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, HanoiError::Solve(_))
    }
}

impl std::error::Error for HanoiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // Input and Config display their inner error verbatim.
        match self {
            HanoiError::Input(e) => std::error::Error::source(e),
            HanoiError::Solve(e) => Some(e),
            HanoiError::Config(e) => std::error::Error::source(e),
            HanoiError::Io(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::PegId;
    use std::error::Error;

    /// Display text of the error followed by each cause, as `anyhow` reports it.
    fn chain(err: &HanoiError) -> Vec<String> {
        let mut messages = vec![err.to_string()];
        let mut cause = err.source();
        while let Some(e) = cause {
            messages.push(e.to_string());
            cause = e.source();
        }
        messages
    }

    #[test]
    fn test_input_error_reported_once() {
        let err: HanoiError = InputError::OutOfRange { value: 70 }.into();
        let messages = chain(&err);
        assert_eq!(messages, vec!["Ring count must be between 0 and 64, got 70"]);
    }

    #[test]
    fn test_config_error_reported_once() {
        let err: HanoiError = ConfigError::new("Peg name 2 is empty".to_string()).into();
        let messages = chain(&err);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Peg name 2 is empty"));
    }

    #[test]
    fn test_solve_error_keeps_cause() {
        let err: HanoiError = SolveError::InvariantViolation("lost ring".to_string()).into();
        let messages = chain(&err);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Traversal aborted"));
        assert_eq!(messages[1], "Invariant violation: lost ring");
    }

    #[test]
    fn test_only_engine_errors_are_defects() {
        let input: HanoiError = InputError::OutOfRange { value: 70 }.into();
        assert!(!input.is_defect());

        let solve: HanoiError = SolveError::EmptyPeg {
            expected: 0,
            from: PegId::Start,
            to: PegId::End,
        }
        .into();
        assert!(solve.is_defect());
        assert!(solve.to_string().starts_with("Traversal aborted"));
    }
}
