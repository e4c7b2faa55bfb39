//! Validated ring count.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Largest supported puzzle.
///
/// The move counter is a `u64` and `2^64 - 1 == u64::MAX`, so no legal
/// ring count can overflow it.
pub const MAX_RINGS: u8 = 64;

/// Number of rings in a puzzle, known to be within `0..=MAX_RINGS`.
///
/// Zero is a legal count that means there is nothing to solve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u64", into = "u8")]
pub struct RingCount(u8);

impl RingCount {
    /// Validates a ring count.
    #[instrument]
    pub fn new(rings: u64) -> Result<Self, InputError> {
        if rings > u64::from(MAX_RINGS) {
            debug!(rings, max = MAX_RINGS, "Ring count out of range");
            return Err(InputError::OutOfRange { value: rings });
        }
        // Bounded by MAX_RINGS above.
        Ok(Self(rings as u8))
    }

    /// Returns the number of rings.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether there is nothing to solve.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Number of moves in the optimal solution, `2^n - 1`.
    pub fn expected_moves(self) -> u64 {
        expected_moves(self.0)
    }
}

impl FromStr for RingCount {
    type Err = InputError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rings = s.trim().parse::<u64>().map_err(|_| InputError::NotANumber {
            input: s.to_string(),
        })?;
        Self::new(rings)
    }
}

impl TryFrom<u64> for RingCount {
    type Error = InputError;

    fn try_from(rings: u64) -> Result<Self, Self::Error> {
        Self::new(rings)
    }
}

impl From<RingCount> for u8 {
    fn from(count: RingCount) -> Self {
        count.0
    }
}

/// Number of moves in the optimal solution for `rings` rings.
///
/// Saturates at `u64::MAX`, which is exact for `MAX_RINGS`.
pub fn expected_moves(rings: u8) -> u64 {
    match rings {
        0 => 0,
        n if n >= 64 => u64::MAX,
        n => (1u64 << n) - 1,
    }
}

/// Ring count rejected before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Input is not a non-negative whole number.
    #[display("Ring count must be a whole number between 0 and {}, got {:?}", MAX_RINGS, input)]
    NotANumber {
        /// The rejected text.
        input: String,
    },

    /// Input is larger than the supported bound.
    #[display("Ring count must be between 0 and {}, got {}", MAX_RINGS, value)]
    OutOfRange {
        /// The rejected value.
        value: u64,
    },
}

impl std::error::Error for InputError {}
